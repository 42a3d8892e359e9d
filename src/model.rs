use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Item {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub body: String,
}

/// What the function hands back to the Lambda runtime.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl ResponseEnvelope {
    pub fn json<T: Serialize>(status_code: u16, body: &T) -> serde_json::Result<Self> {
        let body = serde_json::to_string(body)?;
        Ok(Self::with_body(status_code, body))
    }

    pub fn error(message: impl Into<String>) -> Self {
        let body = ErrorBody {
            error: message.into(),
        };
        Self::json(500, &body).unwrap_or_else(|_| Self::generate_failed())
    }

    /// Used when a body document could not be serialized.
    pub fn generate_failed() -> Self {
        Self::with_body(500, GENERATE_FAILED.to_string())
    }

    fn with_body(status_code: u16, body: String) -> Self {
        let mut headers = HashMap::new();
        headers.insert(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string());
        ResponseEnvelope {
            status_code,
            headers,
            body,
        }
    }
}

const GENERATE_FAILED: &str = r#"{"error":"Failed to generate response"}"#;

#[derive(Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSummary {
    pub total: usize,
    pub first_item_title: String,
}

#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct EmptySummary {
    pub message: String,
    pub total: usize,
}

impl Default for EmptySummary {
    fn default() -> Self {
        EmptySummary {
            message: "No items found".to_string(),
            total: 0,
        }
    }
}

#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
