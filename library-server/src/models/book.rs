//! Book record and payload validation
//!
//! `BookPayload` is what clients send; `NewBook` is a payload that has passed
//! validation; `Book` is a stored row with its assigned id.

use serde::{Deserialize, Serialize};

use super::{ValidationError, ValidationErrors};

/// Identifier assigned by the store
pub type BookId = i32;

/// Maximum length for titles
pub const MAX_TITLE_LEN: usize = 100;

/// Maximum length for author names
pub const MAX_AUTHOR_LEN: usize = 50;

/// Stored book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub is_available: bool,
}

impl Book {
    /// Attach an id to validated fields.
    pub fn from_new(id: BookId, book: NewBook) -> Self {
        Self {
            id,
            title: book.title,
            author: book.author,
            isbn: book.isbn,
            is_available: book.is_available,
        }
    }
}

/// Validated book fields, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}

/// Request body for create and update.
///
/// Text fields are optional at the wire level so that a missing or `null`
/// field is reported as a validation error instead of a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    /// Ignored on create; must match the path id on update
    #[serde(default)]
    pub id: BookId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

impl BookPayload {
    /// Run every field check and return the failures in field order.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        check_text(&mut errors, "Title", self.title.as_deref(), Some(MAX_TITLE_LEN));
        check_text(&mut errors, "Author", self.author.as_deref(), Some(MAX_AUTHOR_LEN));
        check_text(&mut errors, "ISBN", self.isbn.as_deref(), None);
        errors
    }

    /// Validate and convert into writable fields.
    pub fn into_new_book(self) -> Result<NewBook, ValidationErrors> {
        if let Some(errors) = ValidationErrors::from_vec(self.validate()) {
            return Err(errors);
        }

        Ok(NewBook {
            title: self.title.unwrap_or_default(),
            author: self.author.unwrap_or_default(),
            isbn: self.isbn.unwrap_or_default(),
            is_available: self.is_available,
        })
    }
}

fn check_text(
    errors: &mut Vec<ValidationError>,
    field: &'static str,
    value: Option<&str>,
    max: Option<usize>,
) {
    let value = value.unwrap_or_default();
    if value.trim().is_empty() {
        errors.push(ValidationError::Required { field });
        return;
    }

    if let Some(max) = max {
        if value.chars().count() > max {
            errors.push(ValidationError::TooLong { field, max });
        }
    }
}

/// Sample rows inserted outside production
pub fn seed_books() -> Vec<Book> {
    vec![
        Book {
            id: 1,
            title: "Clean Code".to_owned(),
            author: "Robert Martin".to_owned(),
            isbn: "9780132350884".to_owned(),
            is_available: true,
        },
        Book {
            id: 2,
            title: "Design Patterns".to_owned(),
            author: "Erich Gamma".to_owned(),
            isbn: "9780201633610".to_owned(),
            is_available: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(title: &str, author: &str, isbn: &str) -> BookPayload {
        BookPayload {
            id: 0,
            title: Some(title.to_owned()),
            author: Some(author.to_owned()),
            isbn: Some(isbn.to_owned()),
            is_available: true,
        }
    }

    #[test]
    fn valid_payload() {
        let book = payload("Dune", "Herbert", "9780441013593")
            .into_new_book()
            .unwrap();
        assert_eq!(book.title, "Dune");
        assert!(book.is_available);
    }

    #[test]
    fn rejects_missing_fields() {
        let errors = BookPayload::default().validate();
        let fields: Vec<_> = errors.iter().map(ValidationError::field).collect();
        assert_eq!(fields, vec!["Title", "Author", "ISBN"]);
        assert!(errors
            .iter()
            .all(|e| matches!(e, ValidationError::Required { .. })));
    }

    #[test]
    fn rejects_whitespace_only() {
        let errors = payload("   ", "Herbert", "9780441013593").validate();
        assert_eq!(errors, vec![ValidationError::Required { field: "Title" }]);
    }

    #[test]
    fn max_lengths() {
        let title_100 = "t".repeat(100);
        let author_50 = "a".repeat(50);
        assert!(payload(&title_100, &author_50, "1").validate().is_empty());

        let title_101 = "t".repeat(101);
        let author_51 = "a".repeat(51);
        let errors = payload(&title_101, &author_51, "1").validate();
        assert_eq!(
            errors,
            vec![
                ValidationError::TooLong { field: "Title", max: 100 },
                ValidationError::TooLong { field: "Author", max: 50 },
            ]
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 100 two-byte characters
        let title = "é".repeat(100);
        assert!(payload(&title, "Author", "1").validate().is_empty());
    }

    #[test]
    fn payload_defaults_from_json() {
        let parsed: BookPayload =
            serde_json::from_str(r#"{"title":"Dune","author":"Herbert","isbn":"1"}"#).unwrap();
        assert_eq!(parsed.id, 0);
        assert!(parsed.is_available);

        let parsed: BookPayload = serde_json::from_str(r#"{"title":null}"#).unwrap();
        assert!(parsed.title.is_none());
    }

    #[test]
    fn book_serializes_camel_case() {
        let json = serde_json::to_value(&seed_books()[0]).unwrap();
        assert_eq!(json["isAvailable"], true);
        assert_eq!(json["isbn"], "9780132350884");
        assert!(json.get("is_available").is_none());
    }
}
