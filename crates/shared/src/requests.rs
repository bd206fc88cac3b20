//! Request payloads accepted by the submissions API.

use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /api/submissions`.
///
/// Every field is optional on the wire; the engine decides what a missing
/// field means. A field holding anything other than a string reads as
/// missing. `honeypot` is a hidden form field that people leave blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitSubmissionRequest {
    #[serde(default, deserialize_with = "text_or_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "text_or_none")]
    pub interest: Option<String>,
    #[serde(default, deserialize_with = "text_or_none")]
    pub referral: Option<String>,
    #[serde(
        default,
        deserialize_with = "text_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub honeypot: Option<String>,
}

/// Any JSON value; only strings are kept.
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseField {
    Text(String),
    Other(serde::de::IgnoredAny),
}

fn text_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match LooseField::deserialize(deserializer)? {
        LooseField::Text(text) => Some(text),
        LooseField::Other(_) => None,
    })
}

/// Query string of the admin listing and export endpoints (`?q=...`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionSearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_deserialize_as_none() {
        let request: SubmitSubmissionRequest =
            serde_json::from_str(r#"{"email":"a@b.co"}"#).expect("valid json");
        assert_eq!(request.email.as_deref(), Some("a@b.co"));
        assert!(request.interest.is_none());
        assert!(request.referral.is_none());
        assert!(request.honeypot.is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let request: SubmitSubmissionRequest = serde_json::from_str(
            r#"{"email":"a@b.co","interest":"hello there","referral":"friend","extra":1}"#,
        )
        .expect("valid json");
        assert_eq!(request.referral.as_deref(), Some("friend"));
    }

    #[test]
    fn non_string_fields_read_as_missing() {
        let request: SubmitSubmissionRequest = serde_json::from_str(
            r#"{"email":null,"interest":42,"referral":["friend"],"honeypot":false}"#,
        )
        .expect("valid json");
        assert_eq!(request, SubmitSubmissionRequest::default());
    }

    #[test]
    fn nested_honeypot_object_reads_as_missing() {
        let request: SubmitSubmissionRequest = serde_json::from_str(
            r#"{"email":"a@b.co","honeypot":{"filled":"yes"}}"#,
        )
        .expect("valid json");
        assert_eq!(request.email.as_deref(), Some("a@b.co"));
        assert!(request.honeypot.is_none());
    }
}
