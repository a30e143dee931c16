// ABOUTME: Output schema sent with every generation call
// ABOUTME: Constrains the model to an array of name-result objects in structured-output mode

use serde_json::{json, Value};

/// Fields every returned object must carry
pub const REQUIRED_FIELDS: [&str; 4] = ["fullName", "meaning", "elements", "analysis"];

/// Response schema in the service's OpenAPI-subset format
pub fn output_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "fullName": {
                    "type": "STRING",
                    "description": "完整名称，人名与宠物名需含姓氏"
                },
                "meaning": {
                    "type": "STRING",
                    "description": "名字的核心含义和寓意"
                },
                "source": {
                    "type": "STRING",
                    "description": "名字的文学出处、典故或设计灵感来源，如《诗经》等，若无则留空"
                },
                "elements": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "名字对应的五行、自然元素或品牌特质，如 金、木、水、火、土"
                },
                "analysis": {
                    "type": "STRING",
                    "description": "深层的文化、音韵或商业解析"
                }
            },
            "required": REQUIRED_FIELDS
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_is_array_of_objects() {
        let schema = output_schema();
        assert_eq!(schema["type"], "ARRAY");
        assert_eq!(schema["items"]["type"], "OBJECT");
        assert_eq!(schema["items"]["properties"]["elements"]["items"]["type"], "STRING");
    }

    #[test]
    fn test_source_is_optional() {
        let schema = output_schema();
        let required: Vec<&str> = schema["items"]["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();

        assert_eq!(required, REQUIRED_FIELDS);
        assert!(!required.contains(&"source"));
        assert!(schema["items"]["properties"].get("source").is_some());
    }
}
