//! Category records and creation input

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::{limit_text, require_text};
use super::{ValidationError, DESCRIPTION_MAX_LEN, TITLE_MAX_LEN};

/// Category row as stored in `categories`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
}

/// Validated input for inserting a category.
///
/// Titles are not unique; two categories may share one.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub title: String,
    pub description: Option<String>,
}

impl NewCategory {
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: title.into(),
            description,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title, TITLE_MAX_LEN)?;
        if let Some(description) = &self.description {
            limit_text("description", description, DESCRIPTION_MAX_LEN)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_category() {
        assert!(NewCategory::new("devices", None).validate().is_ok());
        assert!(NewCategory::new("devices", Some("phones".into()))
            .validate()
            .is_ok());
    }

    #[test]
    fn rejects_empty_title() {
        let err = NewCategory::new("", None).validate().unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "title" }));
    }

    #[test]
    fn max_title_length() {
        let ok = NewCategory::new("a".repeat(TITLE_MAX_LEN), None);
        assert!(ok.validate().is_ok());

        let too_long = NewCategory::new("a".repeat(TITLE_MAX_LEN + 1), None);
        assert!(matches!(
            too_long.validate(),
            Err(ValidationError::TooLong { max: TITLE_MAX_LEN, .. })
        ));
    }
}
