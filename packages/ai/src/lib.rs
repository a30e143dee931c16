// ABOUTME: Generative model service integration
// ABOUTME: Gemini API client for structured-output generation calls

pub mod service;

// Re-export service types
pub use service::{
    AIResponse, AIService, AIServiceConfig, AIServiceError, AIServiceResult, StructuredOptions,
    Usage, DEFAULT_MODEL, GEMINI_API_BASE_URL,
};
