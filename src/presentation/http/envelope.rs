use serde::Serialize;

/// Uniform wrapper every endpoint returns. A `success` envelope always
/// carries `data`; an `error` envelope never does (the key is omitted, not
/// null).
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(code: u16, data: T) -> Self {
        Self::success_with_message(code, data, "Successful")
    }

    pub fn success_with_message(code: u16, data: T, message: &str) -> Self {
        Self {
            code,
            status: ResponseStatus::Success,
            data: Some(data),
            message: message.to_string(),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            status: ResponseStatus::Error,
            data: None,
            message: message.into(),
        }
    }
}
