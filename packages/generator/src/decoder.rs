// ABOUTME: Decodes the generation service's raw text into validated name results
// ABOUTME: All-or-nothing schema checks with distinct empty/malformed/schema failures

use serde_json::{Map, Value};
use thiserror::Error;

use namecraft_core::NameResult;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Generation service returned no content")]
    Empty,

    #[error("Response is not a JSON array: {0}")]
    Malformed(String),

    #[error("Result {index} has invalid field `{field}`: {reason}")]
    Schema {
        index: usize,
        field: String,
        reason: String,
    },
}

/// Parse a raw payload into name results. Any invalid element fails the whole batch.
pub fn decode(raw: Option<&str>) -> Result<Vec<NameResult>, DecodeError> {
    let text = raw
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(DecodeError::Empty)?;

    let json_text = strip_code_fence(text);
    if json_text.is_empty() {
        return Err(DecodeError::Empty);
    }

    let value: Value =
        serde_json::from_str(json_text).map_err(|e| DecodeError::Malformed(e.to_string()))?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(DecodeError::Malformed(format!(
                "expected an array at the top level, found {}",
                kind(&other)
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| decode_item(index, item))
        .collect()
}

/// Strip markdown code fences (```json ... ```) if present
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Skip the language tag: the rest of the opening line, or a bare `json` on a one-line fence
    let body = match rest.find('\n') {
        Some(i) => &rest[i + 1..],
        None => rest.strip_prefix("json").unwrap_or(rest),
    };
    let end = body.rfind("```").unwrap_or(body.len());
    body[..end].trim()
}

fn decode_item(index: usize, item: Value) -> Result<NameResult, DecodeError> {
    let obj = match item {
        Value::Object(obj) => obj,
        other => {
            return Err(schema_error(
                index,
                "*",
                format!("expected an object, found {}", kind(&other)),
            ))
        }
    };

    let full_name = required_string(&obj, index, "fullName")?;
    if full_name.trim().is_empty() {
        return Err(schema_error(index, "fullName", "must not be empty"));
    }

    let meaning = required_string(&obj, index, "meaning")?;
    let analysis = required_string(&obj, index, "analysis")?;
    let elements = required_string_list(&obj, index, "elements")?;

    let source = match obj.get("source") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.trim().is_empty() => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            return Err(schema_error(
                index,
                "source",
                format!("expected a string, found {}", kind(other)),
            ))
        }
    };

    Ok(NameResult {
        full_name,
        meaning,
        source,
        elements,
        analysis,
    })
}

fn required_string(
    obj: &Map<String, Value>,
    index: usize,
    field: &str,
) -> Result<String, DecodeError> {
    match obj.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        None | Some(Value::Null) => Err(schema_error(index, field, "missing")),
        Some(other) => Err(schema_error(
            index,
            field,
            format!("expected a string, found {}", kind(other)),
        )),
    }
}

fn required_string_list(
    obj: &Map<String, Value>,
    index: usize,
    field: &str,
) -> Result<Vec<String>, DecodeError> {
    let entries = match obj.get(field) {
        Some(Value::Array(entries)) => entries,
        None | Some(Value::Null) => return Err(schema_error(index, field, "missing")),
        Some(other) => {
            return Err(schema_error(
                index,
                field,
                format!("expected an array, found {}", kind(other)),
            ))
        }
    };

    entries
        .iter()
        .enumerate()
        .map(|(pos, entry)| match entry {
            Value::String(s) => Ok(s.clone()),
            other => Err(schema_error(
                index,
                field,
                format!("entry {} is {}, not a string", pos, kind(other)),
            )),
        })
        .collect()
}

fn schema_error(index: usize, field: &str, reason: impl Into<String>) -> DecodeError {
    DecodeError::Schema {
        index,
        field: field.to_string(),
        reason: reason.into(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ONE_RESULT: &str =
        r#"[{"fullName":"张明轩","meaning":"光明磊落","elements":["木","火"],"analysis":"音律和谐"}]"#;

    #[test]
    fn test_null_and_empty_are_empty_errors() {
        assert_eq!(decode(None), Err(DecodeError::Empty));
        assert_eq!(decode(Some("")), Err(DecodeError::Empty));
        assert_eq!(decode(Some("  \n ")), Err(DecodeError::Empty));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        assert!(matches!(
            decode(Some("{not json")),
            Err(DecodeError::Malformed(_))
        ));
    }

    #[test]
    fn test_non_array_top_level_is_malformed() {
        let err = decode(Some(r#"{"fullName":"张三"}"#)).unwrap_err();
        match err {
            DecodeError::Malformed(msg) => assert!(msg.contains("an object")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_single_result_without_source() {
        let results = decode(Some(ONE_RESULT)).unwrap();

        assert_eq!(
            results,
            vec![NameResult {
                full_name: "张明轩".to_string(),
                meaning: "光明磊落".to_string(),
                source: None,
                elements: vec!["木".to_string(), "火".to_string()],
                analysis: "音律和谐".to_string(),
            }]
        );
    }

    #[test]
    fn test_missing_full_name_is_schema_error() {
        let err = decode(Some(r#"[{"meaning":"x","elements":[],"analysis":"y"}]"#)).unwrap_err();
        assert_eq!(
            err,
            DecodeError::Schema {
                index: 0,
                field: "fullName".to_string(),
                reason: "missing".to_string(),
            }
        );
    }

    #[test]
    fn test_each_required_field_is_enforced() {
        let complete = serde_json::json!({
            "fullName": "林清源",
            "meaning": "清澈源远",
            "elements": ["水"],
            "analysis": "清新"
        });

        for field in ["fullName", "meaning", "elements", "analysis"] {
            let mut item = complete.clone();
            item.as_object_mut().unwrap().remove(field);
            let payload = serde_json::to_string(&vec![item]).unwrap();

            match decode(Some(&payload)) {
                Err(DecodeError::Schema { field: f, .. }) => assert_eq!(f, field),
                other => panic!("expected schema error for {}, got {:?}", field, other),
            }
        }
    }

    #[test]
    fn test_null_required_field_is_schema_error() {
        let payload = r#"[{"fullName":"a","meaning":null,"elements":[],"analysis":"y"}]"#;
        assert!(matches!(
            decode(Some(payload)),
            Err(DecodeError::Schema { ref field, .. }) if field == "meaning"
        ));
    }

    #[test]
    fn test_wrong_types_are_schema_errors() {
        let payload = r#"[{"fullName":"a","meaning":"m","elements":"木","analysis":"y"}]"#;
        assert!(matches!(decode(Some(payload)), Err(DecodeError::Schema { .. })));

        let payload = r#"[{"fullName":"a","meaning":"m","elements":["木",3],"analysis":"y"}]"#;
        assert!(matches!(decode(Some(payload)), Err(DecodeError::Schema { .. })));

        let payload = r#"[{"fullName":"a","meaning":"m","elements":[],"analysis":"y","source":5}]"#;
        assert!(matches!(decode(Some(payload)), Err(DecodeError::Schema { .. })));

        assert!(matches!(decode(Some(r#"["张三"]"#)), Err(DecodeError::Schema { .. })));
    }

    #[test]
    fn test_blank_full_name_is_schema_error() {
        let payload = r#"[{"fullName":"  ","meaning":"m","elements":[],"analysis":"y"}]"#;
        assert!(matches!(decode(Some(payload)), Err(DecodeError::Schema { .. })));
    }

    #[test]
    fn test_one_bad_element_fails_whole_batch() {
        let payload = r#"[
            {"fullName":"张明轩","meaning":"光明磊落","elements":["木"],"analysis":"好"},
            {"fullName":"张子墨","meaning":"文墨","analysis":"雅"}
        ]"#;
        let err = decode(Some(payload)).unwrap_err();
        assert!(matches!(err, DecodeError::Schema { index: 1, .. }));
    }

    #[test]
    fn test_blank_source_normalized_to_none() {
        let payload = r#"[
            {"fullName":"a","meaning":"m","elements":[],"analysis":"y","source":""},
            {"fullName":"b","meaning":"m","elements":[],"analysis":"y","source":"《诗经·郑风》"}
        ]"#;
        let results = decode(Some(payload)).unwrap();
        assert_eq!(results[0].source, None);
        assert_eq!(results[1].source.as_deref(), Some("《诗经·郑风》"));
    }

    #[test]
    fn test_code_fences_are_stripped() {
        let fenced = format!("```json\n{}\n```", ONE_RESULT);
        assert_eq!(decode(Some(&fenced)).unwrap().len(), 1);

        assert_eq!(decode(Some("```json\n```")), Err(DecodeError::Empty));
    }

    #[test]
    fn test_single_line_fences_are_stripped() {
        let bare = format!("```{}```", ONE_RESULT);
        assert_eq!(decode(Some(&bare)).unwrap().len(), 1);

        let tagged = format!("```json{}```", ONE_RESULT);
        assert_eq!(decode(Some(&tagged)).unwrap().len(), 1);
    }

    #[test]
    fn test_empty_array_decodes_to_empty_batch() {
        assert_eq!(decode(Some("[]")).unwrap(), Vec::<NameResult>::new());
    }
}
