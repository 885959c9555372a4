//! HTTP API Client
//!
//! Functions for communicating with the e-waste backend REST API. Every
//! response is parsed into an explicit schema at this boundary; callers get
//! a `Result` with a typed error instead of a raw fetch rejection.

use gloo_net::http::Request;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Default backend base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Local storage key overriding the backend base URL
const API_BASE_KEY: &str = "ewaste_api_url";

/// Get the backend base URL.
///
/// Resolution order: local storage override, then the compile-time
/// `EWASTE_BACKEND_URL` value, then the local default.
pub fn get_api_base() -> String {
    let configured = option_env!("EWASTE_BACKEND_URL").unwrap_or(DEFAULT_API_BASE);
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_BASE_KEY) {
                url
            } else {
                configured.to_string()
            }
        } else {
            configured.to_string()
        }
    } else {
        configured.to_string()
    };
    normalize_base(&url)
}

/// Normalize: remove trailing slashes
fn normalize_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

// ============ Errors ============

/// Failure modes of a single backend call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("request build error: {0}")]
    Build(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("parse error: {0}")]
    Parse(String),
}

fn build_err(_: JsValue) -> ApiError {
    ApiError::Build("form assembly failed".to_string())
}

// ============ Response Types ============

#[derive(Debug, Clone, serde::Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// A geographic point as the backend reports it
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A submitted report, as listed by `GET /reports`
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Report {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
}

/// Classifier verdict returned when a report is submitted
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Prediction {
    pub category: String,
    /// Confidence as a fraction in `[0, 1]`
    pub confidence: f64,
    #[serde(default)]
    pub duplicate_of: Option<String>,
}

/// Aggregate counts from `GET /analytics/summary`
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Summary {
    pub total: u64,
    #[serde(default)]
    pub by_status: Vec<GroupCount>,
    #[serde(default)]
    pub by_category: Vec<GroupCount>,
}

/// One aggregation bucket; the label is null for ungrouped rows
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct GroupCount {
    #[serde(rename = "_id")]
    pub label: Option<String>,
    pub count: u64,
}

// ============ API Functions ============

/// Form-encoded body for the credential exchange
fn login_form_body(email: &str, password: &str) -> String {
    format!(
        "username={}&password={}",
        urlencoding::encode(email),
        urlencoding::encode(password)
    )
}

/// Exchange credentials for an access token
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let response = Request::post(&format!("{}/auth/login", get_api_base()))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(login_form_body(email, password))
        .map_err(|e| ApiError::Build(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Submit a report as a multipart payload and return the classifier verdict
pub async fn submit_report(
    image: &web_sys::File,
    description: &str,
    lat: f64,
    lng: f64,
    token: Option<&str>,
) -> Result<Prediction, ApiError> {
    let form = web_sys::FormData::new().map_err(build_err)?;
    form.append_with_blob("image", image).map_err(build_err)?;
    form.append_with_str("description", description)
        .map_err(build_err)?;
    form.append_with_str("lat", &lat.to_string())
        .map_err(build_err)?;
    form.append_with_str("lng", &lng.to_string())
        .map_err(build_err)?;
    if let Some(token) = token {
        form.append_with_str("token", token).map_err(build_err)?;
    }

    let response = Request::post(&format!("{}/reports", get_api_base()))
        .body(form)
        .map_err(|e| ApiError::Build(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Fetch all submitted reports
pub async fn fetch_reports() -> Result<Vec<Report>, ApiError> {
    let response = Request::get(&format!("{}/reports", get_api_base()))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Fetch the aggregate report summary
pub async fn fetch_summary() -> Result<Summary, ApiError> {
    let response = Request::get(&format!("{}/analytics/summary", get_api_base()))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_base_strips_trailing_slashes() {
        assert_eq!(normalize_base("http://localhost:8000/"), "http://localhost:8000");
        assert_eq!(normalize_base("http://localhost:8000"), "http://localhost:8000");
        assert_eq!(normalize_base("https://api.example.com//"), "https://api.example.com");
    }

    #[test]
    fn login_body_percent_encodes_credentials() {
        assert_eq!(login_form_body("a@b.com", "x"), "username=a%40b.com&password=x");
        assert_eq!(
            login_form_body("user name", "p&ss=word"),
            "username=user%20name&password=p%26ss%3Dword"
        );
    }

    #[test]
    fn summary_parses_null_group_labels() {
        let json = r#"{"total":5,"by_status":[{"_id":"open","count":3},{"_id":null,"count":2}],"by_category":[]}"#;
        let summary: Summary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total, 5);
        assert_eq!(summary.by_status.len(), 2);
        assert_eq!(summary.by_status[0].label.as_deref(), Some("open"));
        assert_eq!(summary.by_status[0].count, 3);
        assert_eq!(summary.by_status[1].label, None);
        assert!(summary.by_category.is_empty());
    }

    #[test]
    fn report_parses_without_optional_fields() {
        let report: Report = serde_json::from_str(r#"{"_id":"r1"}"#).unwrap();
        assert_eq!(report.id, "r1");
        assert_eq!(report.category, None);
        assert_eq!(report.description, None);
        assert_eq!(report.location, None);
    }

    #[test]
    fn report_parses_location() {
        let report: Report =
            serde_json::from_str(r#"{"_id":"r2","location":{"lat":12.5,"lng":-7.25}}"#).unwrap();
        let location = report.location.unwrap();
        assert_eq!(location.lat, 12.5);
        assert_eq!(location.lng, -7.25);
    }

    #[test]
    fn prediction_parses_with_and_without_duplicate() {
        let plain: Prediction =
            serde_json::from_str(r#"{"category":"battery","confidence":0.92}"#).unwrap();
        assert_eq!(plain.duplicate_of, None);

        let dup: Prediction = serde_json::from_str(
            r#"{"category":"battery","confidence":0.92,"duplicate_of":"r9"}"#,
        )
        .unwrap();
        assert_eq!(dup.duplicate_of.as_deref(), Some("r9"));
    }
}
