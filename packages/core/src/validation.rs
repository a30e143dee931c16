// ABOUTME: Input validation for naming requests
// ABOUTME: Runs before any prompt is compiled or any network call is made

use thiserror::Error;

use crate::constants::INVALID_BIRTH_YEAR_MESSAGE;
use crate::types::{NameCategory, NamingRequest};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Subject is required for {category} requests")]
    EmptySubject { category: NameCategory },

    #[error("Birth year must be a positive year, got {0}")]
    InvalidBirthYear(u32),
}

impl ValidationError {
    /// Blocking prompt asking the user to correct the form
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::EmptySubject { category } => {
                format!("请输入{}", category.subject_label())
            }
            ValidationError::InvalidBirthYear(_) => INVALID_BIRTH_YEAR_MESSAGE.to_string(),
        }
    }
}

/// Checks a request before compilation
pub fn validate_request(request: &NamingRequest) -> Result<(), ValidationError> {
    if request.subject().trim().is_empty() {
        return Err(ValidationError::EmptySubject {
            category: request.category(),
        });
    }

    if let Some(year) = request.target.birth_year() {
        if year == 0 {
            return Err(ValidationError::InvalidBirthYear(year));
        }
    }

    Ok(())
}
