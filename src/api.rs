//! Apps Script API
//!
//! HTTP bindings to the spreadsheet-backed registration service,
//! organized like command wrappers: one async fn per remote action,
//! all returning `Result<T, String>`.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::models::{Department, RegistrationRecord, RegistrationRow};

/// Deployed Apps Script web-app URL
pub const APPS_SCRIPT_WEB_APP_URL: &str =
    "https://script.google.com/macros/s/AKfycbzNB2zFQGJrqDTF7VO8yFIDplVvWGcl2BMqw5iC0enPbAm-mwK1pdXIwGxxvAMd2Am6/exec";

/// Success notice shown when the service reply carries no message
const SUBMIT_OK_MESSAGE: &str = "報名成功！";

/// Application-level error body the service may return instead of data
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Fetch the department → divisions list
pub async fn fetch_departments() -> Result<Vec<Department>, String> {
    fetch_list("getDepartmentsAndDivisions").await
}

/// Fetch every accepted registration (status view)
pub async fn fetch_registrations() -> Result<Vec<RegistrationRow>, String> {
    fetch_list("getRegistrations").await
}

/// Submit one registration; returns the notice text to show on success
pub async fn submit_registration(record: &RegistrationRecord) -> Result<String, String> {
    let response = Request::post(APPS_SCRIPT_WEB_APP_URL)
        .json(record)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP error! status: {}", response.status()));
    }
    let body = response.text().await.map_err(|e| e.to_string())?;
    decode_submit_reply(&body)
}

/// GET `?action=<action>` and decode a JSON array reply
async fn fetch_list<T: DeserializeOwned>(action: &str) -> Result<Vec<T>, String> {
    let url = format!("{}?action={}", APPS_SCRIPT_WEB_APP_URL, action);
    let response = Request::get(&url).send().await.map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP error! status: {}", response.status()));
    }
    let body = response.text().await.map_err(|e| e.to_string())?;
    decode_list(&body)
}

/// A list reply is either the array itself or an `{error}` object
fn decode_list<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, String> {
    if let Ok(ErrorBody { error }) = serde_json::from_str::<ErrorBody>(body) {
        return Err(error);
    }
    serde_json::from_str(body).map_err(|e| e.to_string())
}

/// The submit reply format is service-defined; honor `{error}` and an
/// optional `{message}`, tolerate anything else
fn decode_submit_reply(body: &str) -> Result<String, String> {
    #[derive(Debug, Default, Deserialize)]
    struct Reply {
        #[serde(default)]
        error: Option<String>,
        #[serde(default)]
        message: Option<String>,
    }

    let reply: Reply = serde_json::from_str(body).unwrap_or_default();
    if let Some(error) = reply.error {
        return Err(error);
    }
    Ok(reply.message.unwrap_or_else(|| SUBMIT_OK_MESSAGE.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_list_accepts_department_array() {
        let body = r#"[{"name":"行政科","divisions":[{"name":"文書股"}]},{"name":"工務科","divisions":[]}]"#;
        let departments: Vec<Department> = decode_list(body).unwrap();
        assert_eq!(departments.len(), 2);
        assert_eq!(departments[0].name, "行政科");
        assert_eq!(departments[0].divisions[0].name, "文書股");
        assert!(departments[1].divisions.is_empty());
    }

    #[test]
    fn test_decode_list_surfaces_error_body() {
        let err = decode_list::<Department>(r#"{"error":"x"}"#).unwrap_err();
        assert_eq!(err, "x");
    }

    #[test]
    fn test_decode_list_reports_malformed_body() {
        assert!(decode_list::<Department>("not json").is_err());
    }

    #[test]
    fn test_decode_submit_reply_error_wins() {
        let err = decode_submit_reply(r#"{"error":"duplicate","message":"ok"}"#).unwrap_err();
        assert_eq!(err, "duplicate");
    }

    #[test]
    fn test_decode_submit_reply_uses_service_message() {
        let msg = decode_submit_reply(r#"{"message":"已登記"}"#).unwrap();
        assert_eq!(msg, "已登記");
    }

    #[test]
    fn test_decode_submit_reply_defaults_on_opaque_body() {
        assert_eq!(decode_submit_reply("").unwrap(), SUBMIT_OK_MESSAGE);
        assert_eq!(decode_submit_reply(r#"{"status":"ok"}"#).unwrap(), SUBMIT_OK_MESSAGE);
    }
}
