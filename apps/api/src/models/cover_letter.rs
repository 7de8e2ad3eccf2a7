//! Cover-letter request payload.

use serde::{Deserialize, Serialize};

/// Input for one cover-letter generation. Free text throughout; the four
/// fields the UI requires before enabling its generate button are required
/// here too, so the generation path is never entered without them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterRequest {
    pub job_description: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub company: String,
    pub position: String,
}

impl CoverLetterRequest {
    /// Mirrors the client-side guard: job description, name, company and
    /// position are required; email and phone are optional.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("jobDescription", &self.job_description),
            ("name", &self.name),
            ("company", &self.company),
            ("position", &self.position),
        ] {
            if value.trim().is_empty() {
                return Err(format!("{name} is required"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CoverLetterRequest {
        CoverLetterRequest {
            job_description: "Build and run our payments platform.".to_string(),
            name: "Dana Lee".to_string(),
            email: "dana@example.com".to_string(),
            phone: "(555) 010-7788".to_string(),
            company: "Acme Corp".to_string(),
            position: "Backend Engineer".to_string(),
        }
    }

    #[test]
    fn test_complete_request_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_each_required_field_is_enforced() {
        for field in ["jobDescription", "name", "company", "position"] {
            let mut req = request();
            match field {
                "jobDescription" => req.job_description.clear(),
                "name" => req.name.clear(),
                "company" => req.company.clear(),
                _ => req.position.clear(),
            }
            let err = req.validate().unwrap_err();
            assert!(err.contains(field), "expected {field} in error, got {err}");
        }
    }

    #[test]
    fn test_email_and_phone_are_optional() {
        let mut req = request();
        req.email.clear();
        req.phone.clear();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_deserializes_from_camel_case() {
        let json = r#"{
            "jobDescription": "desc",
            "name": "A",
            "company": "B",
            "position": "C"
        }"#;
        let req: CoverLetterRequest = serde_json::from_str(json).unwrap();
        assert!(req.email.is_empty());
        assert!(req.validate().is_ok());
    }
}
