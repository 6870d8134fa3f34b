use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use vitals_core::{
    config::data_dir_from_env_value, CoreConfig, Dashboard, InterpretationResult, RecordId,
    SubmissionForm, VitalsError, VitalsService,
};

#[derive(Parser)]
#[command(name = "vitals")]
#[command(about = "Patient vital-signs tracker CLI")]
struct Cli {
    /// Directory holding the record store
    #[arg(long, global = true, env = "VITALS_DATA_DIR")]
    data_dir: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// The six vitals, as typed.
#[derive(Args)]
struct VitalsArgs {
    /// Systolic blood pressure (mmHg)
    systolic_bp: String,
    /// Diastolic blood pressure (mmHg)
    diastolic_bp: String,
    /// Cardiac rate (bpm)
    cardiac_rate: String,
    /// Pulse rate (bpm)
    pulse_rate: String,
    /// Respiratory rate (breaths per minute)
    respiratory_rate: String,
    /// Temperature (°C)
    temperature: String,
}

impl VitalsArgs {
    fn into_form(self, name: String) -> SubmissionForm {
        SubmissionForm {
            name,
            systolic_bp: self.systolic_bp,
            diastolic_bp: self.diastolic_bp,
            cardiac_rate: self.cardiac_rate,
            pulse_rate: self.pulse_rate,
            respiratory_rate: self.respiratory_rate,
            temperature: self.temperature,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Interpret vitals without storing them
    #[command(allow_negative_numbers = true)]
    Interpret {
        #[command(flatten)]
        vitals: VitalsArgs,
    },
    /// Interpret and store a new record
    #[command(allow_negative_numbers = true)]
    Add {
        /// Patient name
        name: String,
        #[command(flatten)]
        vitals: VitalsArgs,
    },
    /// List all records
    List,
    /// Delete one record
    Delete {
        /// Record id (32 lowercase hex characters)
        id: String,
    },
    /// Delete all records
    Clear {
        /// Confirm deleting every record
        #[arg(long)]
        yes: bool,
    },
    /// Show dashboard statistics
    Dashboard,
    /// Export all records as CSV
    Export {
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn print_findings(result: &InterpretationResult) {
    for finding in result {
        println!(
            "  {:<17} {:<20} [{}] {}",
            finding.parameter.display_name(),
            finding.status,
            finding.severity,
            finding.message
        );
    }
    println!(
        "  Overall: {}",
        result.overall_severity().overall_label()
    );
}

fn print_dashboard(dashboard: &Dashboard) {
    let s = &dashboard.summary;
    println!("Total records: {}", s.total);
    println!("  Critical: {} ({}%)", s.critical, s.critical_percent);
    println!("  Abnormal: {} ({}%)", s.abnormal, s.abnormal_percent);
    println!("  Normal:   {} ({}%)", s.normal, s.normal_percent);

    println!("Vital signs overview:");
    for c in &dashboard.categories {
        println!(
            "  {:<17} normal {:>3}%  abnormal {:>3}%",
            c.label, c.normal_percent, c.abnormal_percent
        );
    }

    let bp = &dashboard.blood_pressure;
    println!(
        "Blood pressure: hypotension {}, normal {}, hypertension {}, crisis {}",
        bp.hypotension, bp.normal, bp.hypertension, bp.hypertensive_crisis
    );
    let cr = &dashboard.cardiac_rate;
    println!(
        "Cardiac rate: bradycardia {}, normal {}, tachycardia {}",
        cr.bradycardia, cr.normal, cr.tachycardia
    );

    let t = &dashboard.temperature;
    println!(
        "Temperature trend (fever {:.1}, normal {:.1}-{:.1}):",
        t.reference_lines.fever, t.reference_lines.normal_low, t.reference_lines.normal_high
    );
    for point in &t.points {
        println!("  {:<20} {:.1}°C", point.name, point.temperature);
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = CoreConfig::new(data_dir_from_env_value(cli.data_dir))?;
    let service = VitalsService::new(Arc::new(cfg));

    match cli.command {
        Some(Commands::Interpret { vitals }) => {
            let result = service.interpret_only(&vitals.into_form(String::new()))?;
            print_findings(&result);
        }
        Some(Commands::Add { name, vitals }) => {
            let record = service.submit(&vitals.into_form(name))?;
            println!("Stored record {} for {}", record.id, record.name);
            print_findings(&record.interpretation);
        }
        Some(Commands::List) => {
            let records = service.list_records()?;
            if records.is_empty() {
                println!("No records found.");
            }
            for record in records {
                let r = &record.reading;
                println!(
                    "ID: {}, Name: {}, BP: {}/{} mmHg, Cardiac: {} bpm, Pulse: {} bpm, Resp: {} bpm, Temp: {:.1}°C, Status: {}, Created: {}",
                    record.id,
                    record.name,
                    r.systolic_bp,
                    r.diastolic_bp,
                    r.cardiac_rate,
                    r.pulse_rate,
                    r.respiratory_rate,
                    r.temperature,
                    record.overall_severity().overall_label(),
                    record.created_at.to_rfc3339()
                );
            }
        }
        Some(Commands::Delete { id }) => {
            let id = RecordId::parse(&id).map_err(VitalsError::from)?;
            service.delete_record(&id)?;
            println!("Deleted record {}", id);
        }
        Some(Commands::Clear { yes }) => {
            if !yes {
                return Err("refusing to delete all records without --yes".into());
            }
            let removed = service.clear_records()?;
            println!("Deleted {} records", removed);
        }
        Some(Commands::Dashboard) => {
            let dashboard = service.dashboard()?;
            if dashboard.is_empty() {
                println!("No records found.");
            } else {
                print_dashboard(&dashboard);
            }
        }
        Some(Commands::Export { output }) => {
            let csv = service.export_csv()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, csv)?;
                    println!("Exported records to {}", path.display());
                }
                None => print!("{}", csv),
            }
        }
        None => {
            println!("Use 'vitals --help' for commands");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn run_in(dir: &TempDir, args: &[&str]) -> Result<(), Box<dyn std::error::Error>> {
        let data_dir = dir.path().to_string_lossy().into_owned();
        let mut argv = vec!["vitals", "--data-dir", data_dir.as_str()];
        argv.extend_from_slice(args);
        run(Cli::try_parse_from(argv)?)
    }

    const NORMAL: [&str; 6] = ["120", "80", "75", "70", "16", "37.0"];

    #[test]
    fn successful_commands_return_ok() {
        let dir = tempfile::tempdir().unwrap();

        let mut add = vec!["add", "Ada"];
        add.extend_from_slice(&NORMAL);
        run_in(&dir, &add).unwrap();

        let mut interpret = vec!["interpret"];
        interpret.extend_from_slice(&NORMAL);
        run_in(&dir, &interpret).unwrap();

        let out = dir.path().join("out.csv");
        run_in(&dir, &["export", "--output", out.to_str().unwrap()]).unwrap();
        assert!(std::fs::read_to_string(out).unwrap().contains("\nAda,120,"));

        run_in(&dir, &["clear", "--yes"]).unwrap();
        run_in(&dir, &["list"]).unwrap();
    }

    #[test]
    fn failed_commands_return_err() {
        let dir = tempfile::tempdir().unwrap();

        assert!(run_in(&dir, &["interpret", "abc", "80", "75", "70", "16", "37.0"]).is_err());
        assert!(run_in(&dir, &["add", "  ", "120", "80", "75", "70", "16", "37.0"]).is_err());
        assert!(run_in(&dir, &["delete", "not-an-id"]).is_err());
        assert!(run_in(&dir, &["delete", "550e8400e29b41d4a716446655440000"]).is_err());
        assert!(run_in(&dir, &["export"]).is_err());
        assert!(run_in(&dir, &["clear"]).is_err());
    }

    #[test]
    fn negative_vitals_reach_validation() {
        let dir = tempfile::tempdir().unwrap();
        run_in(&dir, &["interpret", "-5", "80", "75", "70", "16", "37.0"]).unwrap();
    }
}
