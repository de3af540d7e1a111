//! User records and creation input

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::{limit_text, require_text};
use super::{ValidationError, USER_FIELD_MAX_LEN};

/// User row as stored in `users`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub surname: Option<String>,
    pub phone_num: Option<String>,
}

/// Validated input for inserting a user
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub surname: Option<String>,
    pub phone_num: Option<String>,
}

impl NewUser {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name, USER_FIELD_MAX_LEN)?;
        if let Some(surname) = &self.surname {
            limit_text("surname", surname, USER_FIELD_MAX_LEN)?;
        }
        if let Some(phone_num) = &self.phone_num {
            limit_text("phone_num", phone_num, USER_FIELD_MAX_LEN)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> NewUser {
        NewUser {
            name: name.into(),
            surname: None,
            phone_num: None,
        }
    }

    #[test]
    fn name_required() {
        assert!(user("ada").validate().is_ok());
        assert!(matches!(
            user("").validate(),
            Err(ValidationError::Empty { field: "name" })
        ));
    }

    #[test]
    fn phone_num_length() {
        let mut u = user("ada");
        u.phone_num = Some("1".repeat(USER_FIELD_MAX_LEN + 1));
        assert!(matches!(
            u.validate(),
            Err(ValidationError::TooLong { field: "phone_num", .. })
        ));
    }
}
