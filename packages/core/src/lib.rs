// ABOUTME: Core types and validation for Namecraft
// ABOUTME: Foundational package providing the naming data model shared by all packages

pub mod constants;
pub mod types;
pub mod validation;

// Re-export main types
pub use types::{Gender, NameCategory, NameResult, NamingRequest, NamingTarget, Style};

// Re-export constants
pub use constants::{CANDIDATE_COUNT, GENERATION_FAILED_MESSAGE};

// Re-export validation
pub use validation::{validate_request, ValidationError};
