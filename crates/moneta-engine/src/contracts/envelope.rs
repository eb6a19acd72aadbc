use serde::Serialize;
use serde_json::Value;

use crate::API_VERSION;
use crate::error::{EngineError, EngineResult};

#[derive(Debug, Clone, Serialize)]
pub struct SuccessEnvelope {
    pub ok: bool,
    pub command: String,
    pub version: String,
    pub data: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct FailureEnvelope {
    pub ok: bool,
    pub error: ErrorContract,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorContract {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
}

pub fn success<T>(command: &str, data: T) -> EngineResult<SuccessEnvelope>
where
    T: Serialize,
{
    let json_data = serde_json::to_value(data)
        .map_err(|err| EngineError::internal_serialization(&err.to_string()))?;
    Ok(SuccessEnvelope {
        ok: true,
        command: command.to_string(),
        version: API_VERSION.to_string(),
        data: json_data,
    })
}

pub fn failure_from_error(error: &EngineError) -> FailureEnvelope {
    FailureEnvelope {
        ok: false,
        error: ErrorContract {
            code: error.code.clone(),
            message: error.message.clone(),
            recovery_steps: error.recovery_steps.clone(),
        },
        data: error.data.clone(),
    }
}

#[cfg(test)]
mod tests {
    use crate::error::EngineError;

    use super::failure_from_error;

    #[test]
    fn failure_envelope_carries_code_recovery_and_data() {
        let error = EngineError::candidate_not_found("cand_x");
        let envelope = failure_from_error(&error);
        assert!(!envelope.ok);
        assert_eq!(envelope.error.code, "candidate_not_found");
        assert!(!envelope.error.recovery_steps.is_empty());
        assert!(envelope.data.is_some());
    }

    #[test]
    fn failure_envelope_omits_absent_data_when_serialized() {
        let error = EngineError::invalid_argument("bad input");
        let serialized = serde_json::to_value(failure_from_error(&error));
        assert!(serialized.is_ok());
        if let Ok(value) = serialized {
            assert_eq!(value["ok"], serde_json::Value::Bool(false));
            assert!(value.get("data").is_none());
        }
    }
}
