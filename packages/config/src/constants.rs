// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across Namecraft

// Port Configuration
pub const NAMECRAFT_API_PORT: &str = "NAMECRAFT_API_PORT";
pub const PORT: &str = "PORT"; // Legacy

// CORS Configuration
pub const NAMECRAFT_CORS_ORIGIN: &str = "NAMECRAFT_CORS_ORIGIN";

// Generation Service
pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const API_KEY: &str = "API_KEY"; // Legacy
pub const GEMINI_MODEL: &str = "GEMINI_MODEL";
pub const GEMINI_API_BASE_URL: &str = "GEMINI_API_BASE_URL";

// HTTP Client Timeouts
pub const NAMECRAFT_HTTP_REQUEST_TIMEOUT_SECS: &str = "NAMECRAFT_HTTP_REQUEST_TIMEOUT_SECS";
pub const NAMECRAFT_HTTP_CONNECT_TIMEOUT_SECS: &str = "NAMECRAFT_HTTP_CONNECT_TIMEOUT_SECS";

// Logging
pub const RUST_LOG: &str = "RUST_LOG";
