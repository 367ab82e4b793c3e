//! Validation error types

use std::collections::BTreeMap;
use std::fmt;

/// A single failed field check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is missing, empty, or whitespace only
    Required { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Value could not be interpreted (e.g., non-numeric path id)
    Invalid { field: &'static str, value: String },
}

impl ValidationError {
    /// Key the error is reported under in response bodies.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Required { field } | Self::TooLong { field, .. } | Self::Invalid { field, .. } => {
                *field
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { field } => write!(f, "{} is required", field),
            Self::TooLong { field, max } => {
                write!(f, "{} cannot exceed {} characters", field, max)
            }
            Self::Invalid { value, .. } => write!(f, "The value '{}' is not valid", value),
        }
    }
}

impl std::error::Error for ValidationError {}

/// All field errors collected from one payload.
///
/// Never empty when returned as an `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Wrap collected errors, returning `None` when nothing failed.
    pub fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Group messages by field key, preserving check order within a field.
    pub fn by_field(&self) -> BTreeMap<&'static str, Vec<String>> {
        let mut grouped: BTreeMap<&'static str, Vec<String>> = BTreeMap::new();
        for err in &self.0 {
            grouped.entry(err.field()).or_default().push(err.to_string());
        }
        grouped
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(e: ValidationError) -> Self {
        Self(vec![e])
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "Title",
            max: 100,
        };
        assert_eq!(err.to_string(), "Title cannot exceed 100 characters");
        assert_eq!(
            ValidationError::Required { field: "ISBN" }.to_string(),
            "ISBN is required"
        );
    }

    #[test]
    fn empty_list_is_not_an_error() {
        assert!(ValidationErrors::from_vec(Vec::new()).is_none());
    }

    #[test]
    fn groups_messages_by_field() {
        let errors = ValidationErrors::from_vec(vec![
            ValidationError::Required { field: "Title" },
            ValidationError::Required { field: "Author" },
            ValidationError::TooLong { field: "Title", max: 100 },
        ])
        .unwrap();

        let grouped = errors.by_field();
        assert_eq!(grouped.len(), 2);
        assert_eq!(
            grouped["Title"],
            vec!["Title is required", "Title cannot exceed 100 characters"]
        );
        assert_eq!(grouped["Author"], vec!["Author is required"]);
    }
}
