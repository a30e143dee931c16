// ABOUTME: Prompt compilation for naming requests
// ABOUTME: Turns a validated request into prompt text, response schema, and sampling parameters

pub mod call;
pub mod compiler;
pub mod schema;
pub mod templates;

pub use call::{GenerationCall, SamplingParams, BASELINE_TEMPERATURE, CREATIVE_TEMPERATURE, TOP_P};
pub use compiler::compile;
pub use schema::{output_schema, REQUIRED_FIELDS};
