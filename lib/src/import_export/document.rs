use crate::error::{BrowserinoError, Result};
use crate::models::PrefValue;
use crate::store::Preferences;
use serde_json::{Map, Value};

/// A settings file's contents: preference keys and their values
///
/// Documents carry no version field; keys are written and read verbatim.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsDocument {
    settings: Preferences,
}

impl SettingsDocument {
    pub fn new(settings: Preferences) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Preferences {
        &self.settings
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// Serialize to pretty-printed JSON
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut object = Map::new();
        for (key, value) in &self.settings {
            let json = Value::try_from(value).map_err(|e| match e {
                BrowserinoError::EncodeFailure(reason) => {
                    BrowserinoError::EncodeFailure(format!("{}: {}", key, reason))
                }
                other => other,
            })?;
            object.insert(key.clone(), json);
        }

        serde_json::to_vec_pretty(&Value::Object(object))
            .map_err(|e| BrowserinoError::EncodeFailure(e.to_string()))
    }

    /// Parse JSON bytes; the top-level value must be an object
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let json: Value = serde_json::from_slice(bytes)
            .map_err(|e| BrowserinoError::CorruptDocument(e.to_string()))?;

        let object = match json {
            Value::Object(object) => object,
            other => {
                return Err(BrowserinoError::CorruptDocument(format!(
                    "expected a JSON object at top level, found {}",
                    json_kind(&other)
                )))
            }
        };

        let mut settings = Preferences::new();
        for (key, value) in object {
            let value = PrefValue::try_from(value).map_err(|e| match e {
                BrowserinoError::CorruptDocument(reason) => {
                    BrowserinoError::CorruptDocument(format!("{}: {}", key, reason))
                }
                other => other,
            })?;
            settings.insert(key, value);
        }

        Ok(Self { settings })
    }
}

fn json_kind(value: &Value) -> &'static str {
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
    use crate::models::MAX_NESTING_DEPTH;
    use rstest::rstest;
    use std::collections::BTreeMap;

    fn sample_settings() -> Preferences {
        let mut window = BTreeMap::new();
        window.insert("width".to_string(), PrefValue::Int(640));
        window.insert("scale".to_string(), PrefValue::Float(1.25));

        let mut settings = Preferences::new();
        settings.insert("copy_closeAfterCopy".to_string(), PrefValue::Bool(true));
        settings.insert("theme".to_string(), PrefValue::from("dark"));
        settings.insert("opacity".to_string(), PrefValue::Float(1.0));
        settings.insert(
            "browsers".to_string(),
            PrefValue::Sequence(vec![
                PrefValue::from("file:///Applications/Safari.app/"),
                PrefValue::from("file:///Applications/Firefox.app/"),
            ]),
        );
        settings.insert("window".to_string(), PrefValue::Mapping(window));
        settings
    }

    #[test]
    fn test_round_trip() {
        let document = SettingsDocument::new(sample_settings());
        let bytes = document.encode().unwrap();
        let decoded = SettingsDocument::decode(&bytes).unwrap();
        assert_eq!(decoded, document);
    }

    #[test]
    fn test_encode_is_pretty_object() {
        let document = SettingsDocument::new(sample_settings());
        let text = String::from_utf8(document.encode().unwrap()).unwrap();
        assert!(text.starts_with("{\n"));
        assert!(text.contains("\n  \"theme\": \"dark\""));
    }

    #[test]
    fn test_encode_empty() {
        let bytes = SettingsDocument::default().encode().unwrap();
        assert_eq!(bytes, b"{}");
        assert!(SettingsDocument::decode(&bytes).unwrap().is_empty());
    }

    #[test]
    fn test_encode_failure_names_key() {
        let mut settings = Preferences::new();
        settings.insert("zoom".to_string(), PrefValue::Float(f64::INFINITY));
        let result = SettingsDocument::new(settings).encode();
        match result {
            Err(BrowserinoError::EncodeFailure(reason)) => assert!(reason.starts_with("zoom")),
            other => panic!("expected EncodeFailure, got {:?}", other),
        }
    }

    fn nested(depth: usize) -> PrefValue {
        let mut value = PrefValue::Int(1);
        for _ in 0..depth {
            value = PrefValue::Sequence(vec![value]);
        }
        value
    }

    #[test]
    fn test_deepest_value_round_trips() {
        let mut settings = Preferences::new();
        settings.insert("deep".to_string(), nested(MAX_NESTING_DEPTH));
        let document = SettingsDocument::new(settings);
        let decoded = SettingsDocument::decode(&document.encode().unwrap()).unwrap();
        assert_eq!(decoded, document);
    }

    #[test]
    fn test_encode_rejects_too_deep_value() {
        let mut settings = Preferences::new();
        settings.insert("deep".to_string(), nested(200));
        match SettingsDocument::new(settings).encode() {
            Err(BrowserinoError::EncodeFailure(reason)) => assert!(reason.starts_with("deep")),
            other => panic!("expected EncodeFailure, got {:?}", other),
        }
    }

    #[rstest]
    #[case(b"{not json".as_slice())]
    #[case(b"".as_slice())]
    #[case(b"[1, 2, 3]".as_slice())]
    #[case(b"\"settings\"".as_slice())]
    #[case(b"42".as_slice())]
    #[case(b"null".as_slice())]
    #[case(b"{\"a\": null}".as_slice())]
    #[case(b"\xff\xfe".as_slice())]
    fn test_decode_corrupt(#[case] bytes: &[u8]) {
        let result = SettingsDocument::decode(bytes);
        assert!(
            matches!(result, Err(BrowserinoError::CorruptDocument(_))),
            "{:?}",
            result
        );
    }

    #[test]
    fn test_decode_keeps_all_keys() {
        let decoded =
            SettingsDocument::decode(br#"{"NSWindowFrame": "x", "Country": "US"}"#).unwrap();
        assert_eq!(decoded.len(), 2);
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let decoded = SettingsDocument::decode(br#"{"a": 1, "a": 2}"#).unwrap();
        assert_eq!(decoded.settings().get("a"), Some(&PrefValue::Int(2)));
    }
}
