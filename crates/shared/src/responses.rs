//! Response envelope printed by the CLI.

use serde::{Deserialize, Serialize};

use crate::requests::BuildStep;

// =============================================================================
// Response Result
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResponseResult {
    Success {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        data: Option<serde_json::Value>,
    },
    Error {
        code: ErrorCode,
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<serde_json::Value>,
    },
}

impl ResponseResult {
    pub fn success<T: Serialize>(data: T) -> Self {
        ResponseResult::Success {
            data: Some(serde_json::to_value(data).unwrap_or_default()),
        }
    }

    pub fn success_empty() -> Self {
        ResponseResult::Success { data: None }
    }

    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        ResponseResult::Error {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ResponseResult::Success { .. })
    }
}

// =============================================================================
// Error Codes
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    BadRequest,
    NotFound,
    ValidationError,
    ServiceUnavailable,
    InternalError,
}

// =============================================================================
// Build plan report
// =============================================================================

/// A plan step that the workflow refused, with the reason in words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedStep {
    pub index: usize,
    pub step: BuildStep,
    pub reason: String,
}

/// Result of running a build plan: the derived sheet and any refused steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_id: Option<i64>,
    pub sheet: serde_json::Value,
    #[serde(default)]
    pub rejected: Vec<RejectedStep>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_wraps_data() {
        let value = serde_json::to_value(ResponseResult::success(json!({"hp": 10}))).expect("json");
        assert_eq!(value, json!({"status": "success", "data": {"hp": 10}}));
    }

    #[test]
    fn error_carries_code() {
        let result = ResponseResult::error(ErrorCode::NotFound, "character 9 not found");
        assert!(!result.is_success());
        let value = serde_json::to_value(result).expect("json");
        assert_eq!(value["code"], json!("not_found"));
    }
}
