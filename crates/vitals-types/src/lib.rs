//! Validated value types shared by the vitals crates.

use serde::{Deserialize, Serialize};

/// Reasons a patient name is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NameError {
    #[error("name cannot be empty")]
    Empty,
    #[error("name exceeds maximum length of {max} characters")]
    TooLong { max: usize },
    #[error("name cannot contain control characters")]
    ControlCharacter,
}

/// The name a record is filed under.
///
/// Leading and trailing whitespace is dropped and inner runs of whitespace collapse to a
/// single space, so `"  Ada \t Lovelace "` is stored as `"Ada Lovelace"`. Control
/// characters other than whitespace are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PatientName(String);

impl PatientName {
    /// Upper bound on the normalised name, counted in characters.
    pub const MAX_CHARS: usize = 200;

    /// # Errors
    ///
    /// Returns a [`NameError`] if the normalised input is empty, too long, or contains a
    /// control character.
    pub fn new(input: impl AsRef<str>) -> Result<Self, NameError> {
        let input = input.as_ref();
        if input.chars().any(|c| c.is_control() && !c.is_whitespace()) {
            return Err(NameError::ControlCharacter);
        }

        let normalised = input.split_whitespace().collect::<Vec<_>>().join(" ");
        if normalised.is_empty() {
            return Err(NameError::Empty);
        }
        if normalised.chars().count() > Self::MAX_CHARS {
            return Err(NameError::TooLong {
                max: Self::MAX_CHARS,
            });
        }
        Ok(Self(normalised))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PatientName {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PatientName> for String {
    fn from(name: PatientName) -> Self {
        name.0
    }
}

impl std::fmt::Display for PatientName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PatientName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalises_whitespace() {
        let name = PatientName::new("  Ada \t Lovelace \n").unwrap();
        assert_eq!(name.as_str(), "Ada Lovelace");
    }

    #[test]
    fn rejects_blank_input() {
        assert_eq!(PatientName::new(""), Err(NameError::Empty));
        assert_eq!(PatientName::new("   \t"), Err(NameError::Empty));
    }

    #[test]
    fn rejects_control_characters() {
        assert_eq!(
            PatientName::new("Ada\u{7}"),
            Err(NameError::ControlCharacter)
        );
    }

    #[test]
    fn length_is_checked_after_normalising() {
        let padded = format!("  {}  ", "x".repeat(PatientName::MAX_CHARS));
        assert!(PatientName::new(padded).is_ok());

        let long = "x".repeat(PatientName::MAX_CHARS + 1);
        assert_eq!(
            PatientName::new(long),
            Err(NameError::TooLong {
                max: PatientName::MAX_CHARS
            })
        );
    }

    #[test]
    fn deserialize_applies_validation() {
        let ok: PatientName = serde_json::from_str("\" Grace  Hopper \"").unwrap();
        assert_eq!(ok.to_string(), "Grace Hopper");
        assert_eq!(serde_json::to_string(&ok).unwrap(), "\"Grace Hopper\"");

        let err = serde_json::from_str::<PatientName>("\"  \"").unwrap_err();
        assert!(err.to_string().contains("name cannot be empty"));
    }
}
