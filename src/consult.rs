//! Consultation-request submission.
//!
//! The consultation form posts to an external spreadsheet-backed endpoint (a
//! Google Apps Script URL). The exchange is fire-and-forget: the endpoint
//! gives no readable reply, so the response is never inspected and only a
//! transport failure counts as an error.

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Gender choice offered by the consultation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Wire value used in the form and the JSON body.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

/// Raw field values of the consultation form.
///
/// All fields are free text, mirroring the HTML inputs; the gender holds the
/// select's wire value ("male"/"female"/"other", or empty before a choice).
/// Validation stays at the HTML input level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsultForm {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub phone: String,
    pub email: String,
}

impl ConsultForm {
    /// Reset every field to the empty string (after a successful submit).
    pub fn clear(&mut self) {
        *self = ConsultForm::default();
    }

    /// True when no field has been touched.
    pub fn is_empty(&self) -> bool {
        *self == ConsultForm::default()
    }
}

/// JSON body sent to the spreadsheet endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsultRequest {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub phone: String,
    pub email: String,
    /// ISO-8601 submission timestamp, stamped when the request is built
    pub ts: String,
}

impl ConsultRequest {
    /// Build the request body from the form, stamping the current time.
    pub fn from_form(form: &ConsultForm) -> ConsultRequest {
        ConsultRequest {
            name: form.name.clone(),
            age: form.age.clone(),
            gender: form.gender.clone(),
            phone: form.phone.clone(),
            email: form.email.clone(),
            // Milliseconds + "Z", same shape as JS Date.toISOString()
            ts: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Send one consultation request to the spreadsheet endpoint.
///
/// # Arguments
/// * `client` - Shared reqwest client
/// * `url` - The configured Apps Script endpoint
/// * `request` - The JSON body to send
///
/// # Returns
/// `Ok(())` once the exchange completes, regardless of the response status —
/// the endpoint's reply is opaque and deliberately ignored. `Err` only on
/// transport failure (connection refused, DNS, etc.).
pub async fn submit_request(
    client: &reqwest::Client,
    url: &str,
    request: &ConsultRequest,
) -> Result<()> {
    let response = client
        .post(url)
        .json(request)
        .send()
        .await
        .context("Failed to send consultation request")?;

    // Response body/status intentionally not inspected.
    info!(status = %response.status(), "Consultation request forwarded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Gender Tests ====================

    #[test]
    fn test_gender_wire_values() {
        assert_eq!(Gender::Male.as_str(), "male");
        assert_eq!(Gender::Female.as_str(), "female");
        assert_eq!(Gender::Other.as_str(), "other");
    }

    #[test]
    fn test_gender_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"female\"");
        let parsed: Gender = serde_json::from_str("\"other\"").unwrap();
        assert_eq!(parsed, Gender::Other);
    }

    // ==================== Form Tests ====================

    #[test]
    fn test_form_starts_empty() {
        assert!(ConsultForm::default().is_empty());
    }

    #[test]
    fn test_form_clear_resets_all_fields() {
        let mut form = ConsultForm {
            name: "Asha Sharma".to_string(),
            age: "42".to_string(),
            gender: "female".to_string(),
            phone: "+91 98765 43210".to_string(),
            email: "asha@example.com".to_string(),
        };

        form.clear();

        assert!(form.is_empty());
        assert_eq!(form.name, "");
        assert_eq!(form.email, "");
    }

    // ==================== Request Body Tests ====================

    #[test]
    fn test_request_carries_all_fields_and_timestamp() {
        let form = ConsultForm {
            name: "Ravi Kumar".to_string(),
            age: "35".to_string(),
            gender: "male".to_string(),
            phone: "9876543210".to_string(),
            email: "ravi@example.com".to_string(),
        };

        let request = ConsultRequest::from_form(&form);

        assert_eq!(request.name, "Ravi Kumar");
        assert_eq!(request.age, "35");
        assert_eq!(request.gender, "male");
        assert!(!request.ts.is_empty());
        // RFC 3339 UTC with trailing Z, e.g. 2026-08-25T10:15:30.123Z
        assert!(request.ts.ends_with('Z'));
        assert!(request.ts.contains('T'));
    }

    #[test]
    fn test_request_json_shape() {
        let form = ConsultForm {
            name: "Ravi".to_string(),
            age: "35".to_string(),
            gender: "male".to_string(),
            phone: "9876543210".to_string(),
            email: "ravi@example.com".to_string(),
        };

        let json = serde_json::to_value(ConsultRequest::from_form(&form)).unwrap();

        for key in ["name", "age", "gender", "phone", "email", "ts"] {
            assert!(json.get(key).is_some(), "missing key {}", key);
        }
        assert_eq!(json["gender"], "male");
    }
}
