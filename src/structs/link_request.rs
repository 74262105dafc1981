use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationErrors};

use crate::models::link::Link;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    #[serde(default, deserialize_with = "string_or_number")]
    #[validate(
        required(message = "URL is required"),
        length(min = 1, message = "URL is required")
    )]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    #[validate(custom(function = "crate::utils::code_gen::validate_code"))]
    pub code: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

/// Form clients send numeric codes like `123456` as JSON numbers; take them as text.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<StringOrNumber>::deserialize(deserializer)?.map(|value| match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }),
    )
}

impl CreateLinkRequest {
    /// Destination and the caller's code, if one was actually supplied.
    /// Call only after `validate()` has passed.
    pub fn into_parts(self) -> (String, Option<String>) {
        let code = self.code.filter(|c| !c.is_empty());
        (self.url.unwrap_or_default(), code)
    }
}

/// Picks one message out of a failed validation, `url` problems first.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let fields = errors.field_errors();
    ["url", "code"]
        .iter()
        .filter_map(|field| fields.get(*field))
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid request".to_string())
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LinkResponse {
    pub id: String,
    pub code: String,
    pub original_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub last_clicked: Option<DateTime<Utc>>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id.map(|id| id.to_hex()).unwrap_or_default(),
            code: link.code,
            original_url: link.original_url,
            clicks: link.clicks,
            created_at: DateTime::from_timestamp_millis(link.created_at).unwrap_or_default(),
            last_clicked: link.last_clicked.and_then(DateTime::from_timestamp_millis),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: serde_json::Value) -> CreateLinkRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn missing_url_is_rejected() {
        let req = parse(serde_json::json!({ "code": "abc123" }));
        let errors = req.validate().unwrap_err();
        assert_eq!(validation_message(&errors), "URL is required");
    }

    #[test]
    fn empty_url_is_rejected() {
        let req = parse(serde_json::json!({ "url": "" }));
        let errors = req.validate().unwrap_err();
        assert_eq!(validation_message(&errors), "URL is required");
    }

    #[test]
    fn malformed_code_is_rejected() {
        let req = parse(serde_json::json!({ "url": "https://example.com", "code": "bad-code" }));
        let errors = req.validate().unwrap_err();
        assert_eq!(
            validation_message(&errors),
            "Code must be 6-8 alphanumeric characters."
        );
    }

    #[test]
    fn url_error_wins_when_both_fail() {
        let req = parse(serde_json::json!({ "code": "x" }));
        let errors = req.validate().unwrap_err();
        assert_eq!(validation_message(&errors), "URL is required");
    }

    #[test]
    fn empty_code_means_generate() {
        let req = parse(serde_json::json!({ "url": "https://example.com", "code": "" }));
        assert!(req.validate().is_ok());
        assert_eq!(req.into_parts(), ("https://example.com".to_string(), None));
    }

    #[test]
    fn numeric_code_is_taken_as_text() {
        let req = parse(serde_json::json!({ "url": "https://example.com", "code": 123456 }));
        assert!(req.validate().is_ok());
        assert_eq!(
            req.into_parts(),
            ("https://example.com".to_string(), Some("123456".to_string()))
        );
    }

    #[test]
    fn null_code_means_generate() {
        let req = parse(serde_json::json!({ "url": "https://example.com", "code": null }));
        assert!(req.validate().is_ok());
        assert_eq!(req.into_parts().1, None);
    }

    #[test]
    fn non_scalar_code_is_a_parse_error() {
        let body = serde_json::json!({ "url": "https://example.com", "code": [1, 2] });
        assert!(serde_json::from_value::<CreateLinkRequest>(body).is_err());
    }

    #[test]
    fn url_is_not_checked_for_scheme() {
        let req = parse(serde_json::json!({ "url": "not a url at all" }));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn response_renders_timestamps() {
        let mut link = Link::new("abc123".into(), "https://example.com".into());
        link.id = Some(mongodb::bson::oid::ObjectId::new());
        link.created_at = 1_700_000_000_000;
        let res = LinkResponse::from(link);
        assert_eq!(res.id.len(), 24);
        assert_eq!(res.created_at.timestamp_millis(), 1_700_000_000_000);
        assert!(res.last_clicked.is_none());
    }
}
