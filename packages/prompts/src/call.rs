// ABOUTME: Generation call parameters derived from a naming request
// ABOUTME: Bundles compiled prompt, response schema, and fixed sampling constants

use serde::Serialize;
use serde_json::Value;

use namecraft_core::{NameCategory, NamingRequest, ValidationError};

use crate::compiler::compile;
use crate::schema::output_schema;

pub const BASELINE_TEMPERATURE: f32 = 0.8;
pub const CREATIVE_TEMPERATURE: f32 = 0.85;
pub const TOP_P: f32 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplingParams {
    pub temperature: f32,
    pub top_p: f32,
}

impl SamplingParams {
    /// Brand and pet naming, and poetic or creative styles, sample slightly hotter.
    /// Not user-configurable.
    pub fn for_request(request: &NamingRequest) -> Self {
        let creative_category = matches!(
            request.category(),
            NameCategory::Brand | NameCategory::Pet
        );

        let temperature = if creative_category || request.style.is_creative() {
            CREATIVE_TEMPERATURE
        } else {
            BASELINE_TEMPERATURE
        };

        Self {
            temperature,
            top_p: TOP_P,
        }
    }
}

/// Everything the generation service needs for one call
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationCall {
    pub prompt: String,
    pub response_schema: Value,
    pub sampling: SamplingParams,
}

impl GenerationCall {
    pub fn build(request: &NamingRequest) -> Result<Self, ValidationError> {
        Ok(Self {
            prompt: compile(request)?,
            response_schema: output_schema(),
            sampling: SamplingParams::for_request(request),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use namecraft_core::{Gender, Style};

    #[test]
    fn test_baseline_temperature_for_conventional_requests() {
        let request = NamingRequest::company("科技", Style::Professional);
        let params = SamplingParams::for_request(&request);
        assert_eq!(params.temperature, BASELINE_TEMPERATURE);
        assert_eq!(params.top_p, TOP_P);

        let request = NamingRequest::person("张", Gender::Male, None, Style::Classic);
        assert_eq!(
            SamplingParams::for_request(&request).temperature,
            BASELINE_TEMPERATURE
        );
    }

    #[test]
    fn test_creative_group_samples_hotter() {
        let poetic = NamingRequest::person("张", Gender::Male, None, Style::Poetic);
        let brand = NamingRequest::brand("茶饮", Style::Modern);
        let pet = NamingRequest::pet("李", Gender::Female, Style::Natural);

        for request in [poetic, brand, pet] {
            assert_eq!(
                SamplingParams::for_request(&request).temperature,
                CREATIVE_TEMPERATURE
            );
        }
    }

    #[test]
    fn test_build_rejects_empty_subject() {
        let request = NamingRequest::brand("", Style::Creative);
        assert!(matches!(
            GenerationCall::build(&request),
            Err(ValidationError::EmptySubject { .. })
        ));
    }

    #[test]
    fn test_sampling_serializes_camel_case() {
        let value = serde_json::to_value(SamplingParams {
            temperature: 0.5,
            top_p: 0.95,
        })
        .unwrap();
        assert!(value.get("topP").is_some());
    }
}
