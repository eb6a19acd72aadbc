use std::io;

use moneta_engine::{EngineError, SuccessEnvelope, failure_from_error};
use serde::Serialize;

pub fn render_success_json(success: &SuccessEnvelope) -> io::Result<String> {
    serialize_json_pretty(success)
}

pub fn render_error_json(error: &EngineError) -> io::Result<String> {
    serialize_json_pretty(&failure_from_error(error))
}

fn serialize_json_pretty<T>(value: &T) -> io::Result<String>
where
    T: Serialize,
{
    serde_json::to_string_pretty(value).map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use moneta_engine::EngineError;
    use serde_json::Value;

    use super::render_error_json;

    #[test]
    fn error_json_is_the_failure_envelope() {
        let error = EngineError::new("ingestion_failed", "bad file", vec!["fix it".to_string()]);
        let rendered = render_error_json(&error);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            let parsed: Result<Value, _> = serde_json::from_str(&text);
            assert!(parsed.is_ok());
            if let Ok(value) = parsed {
                assert_eq!(value["ok"], Value::Bool(false));
                assert_eq!(
                    value["error"]["code"],
                    Value::String("ingestion_failed".to_string())
                );
                assert_eq!(
                    value["error"]["recovery_steps"][0],
                    Value::String("fix it".to_string())
                );
            }
        }
    }
}
