//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
///
/// ```json
/// { "fullUrl": "https://example.com" }
/// ```
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The original URL, at most 2048 characters. Missing values are
    /// reported as an invalid URL.
    #[validate(required, length(min = 1, max = 2048))]
    pub full_url: Option<String>,
}

/// Response carrying the short URL.
///
/// ```json
/// { "shortUrl": "https://short.ly/ab3D" }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_camel_case() {
        let req: ShortenRequest =
            serde_json::from_str(r#"{"fullUrl":"https://example.com"}"#).unwrap();
        assert_eq!(req.full_url.as_deref(), Some("https://example.com"));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_missing_url_fails_validation() {
        let req: ShortenRequest = serde_json::from_str("{}").unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_overlong_url_fails_validation() {
        let req = ShortenRequest {
            full_url: Some(format!("https://example.com/{}", "a".repeat(2100))),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_response_uses_camel_case() {
        let body = serde_json::to_value(ShortenResponse {
            short_url: "https://short.ly/ab3D".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "shortUrl": "https://short.ly/ab3D" }));
    }
}
