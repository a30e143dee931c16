// ABOUTME: Response decoding and generation orchestration
// ABOUTME: Turns naming requests into validated name batches behind a single state machine

pub mod backend;
pub mod decoder;
pub mod error;
pub mod generator;
pub mod state;

pub use backend::GenerationBackend;
pub use decoder::{decode, DecodeError};
pub use error::{GenerateError, Result, SubmitError};
pub use generator::NameGenerator;
pub use state::{GenerationState, Phase, StateError};

// Re-exported for GenerationBackend implementors
pub use namecraft_prompts::GenerationCall;
