use serde::Serialize;

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";

/// JSON envelope shared by every API response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl<T> ApiResponse<T> {
    pub fn success(code: u16, message: impl Into<String>, data: T) -> Self {
        Self {
            code,
            status: STATUS_SUCCESS,
            message: message.into(),
            data: Some(data),
            errors: None,
        }
    }

    pub fn error(code: u16, message: impl Into<String>, errors: Option<Vec<String>>) -> Self {
        Self {
            code,
            status: STATUS_ERROR,
            message: message.into(),
            data: None,
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_omits_errors() {
        let r = ApiResponse::success(200, "ok", vec![1, 2]);
        assert_eq!(
            serde_json::to_value(&r).unwrap(),
            json!({ "code": 200, "status": "success", "message": "ok", "data": [1, 2] })
        );
    }

    #[test]
    fn error_omits_data() {
        let r: ApiResponse<()> = ApiResponse::error(400, "bad", Some(vec!["x".into()]));
        assert_eq!(
            serde_json::to_value(&r).unwrap(),
            json!({ "code": 400, "status": "error", "message": "bad", "errors": ["x"] })
        );
    }
}
