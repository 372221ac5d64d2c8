use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A job candidate as submitted through the intake endpoint and as stored.
///
/// `email` is the natural key. Required fields fall back to an empty string
/// when missing or `null` so that the validator, not the JSON layer, reports
/// them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "firstName": "John",
    "lastName": "Doe",
    "phoneNumber": "+255712345678",
    "email": "candidate@example.com",
    "availableStartTime": "08:00",
    "availableEndTime": "17:00",
    "linkedInProfileUrl": "https://www.linkedin.com/in/johndoe",
    "githubProfileUrl": "https://www.github.com/johndoe",
    "comment": "Write your comment here"
}))]
pub struct Candidate {
    #[serde(default, alias = "first_name", deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(default, alias = "last_name", deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(default, alias = "phone_number")]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, alias = "available_start_time")]
    pub available_start_time: Option<String>,
    #[serde(default, alias = "available_end_time")]
    pub available_end_time: Option<String>,
    #[serde(
        default,
        rename = "linkedInProfileUrl",
        alias = "linkedin_profile_url",
        alias = "linkedinProfileUrl"
    )]
    pub linkedin_profile_url: Option<String>,
    #[serde(default, alias = "github_profile_url")]
    pub github_profile_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub comment: String,
}

impl Candidate {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_camel_case_payload() {
        let candidate: Candidate = serde_json::from_value(json!({
            "firstName": "John",
            "lastName": "Doe",
            "email": "jdoe@example.com",
            "linkedInProfileUrl": "https://www.linkedin.com/in/johndoe",
            "comment": "Good guy"
        }))
        .unwrap();

        assert_eq!(candidate.first_name, "John");
        assert_eq!(
            candidate.linkedin_profile_url.as_deref(),
            Some("https://www.linkedin.com/in/johndoe")
        );
        assert_eq!(candidate.phone_number, None);
    }

    #[test]
    fn missing_or_null_required_fields_become_empty() {
        let candidate: Candidate = serde_json::from_value(json!({
            "firstName": null,
            "phone_number": "+255712345678"
        }))
        .unwrap();

        assert!(candidate.first_name.is_empty());
        assert!(candidate.last_name.is_empty());
        assert!(candidate.email.is_empty());
        assert!(candidate.comment.is_empty());
        assert_eq!(candidate.phone_number.as_deref(), Some("+255712345678"));
    }

    #[test]
    fn serializes_with_wire_names() {
        let candidate = Candidate {
            first_name: "John".into(),
            linkedin_profile_url: Some("https://linkedin.com/in/jd".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&candidate).unwrap();

        assert_eq!(value["firstName"], "John");
        assert_eq!(value["linkedInProfileUrl"], "https://linkedin.com/in/jd");
        assert!(value["githubProfileUrl"].is_null());
    }
}
