// Shared test helpers: canned API payloads and a dashboard wired to a mock server.

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use attendance_dashboard::{ApiClient, Config, Dashboard};

pub const SPOT_PATH: &str = "/api/v1/spot";
pub const ATTENDANCE_PATH: &str = "/api/v1/attendance/get-all-attendance";

/// One attendance row as the API returns it. `village: None` drops the field.
#[allow(dead_code)] // Used by other test files
pub fn attendance_row(spot_code: &str, village: Option<&str>) -> Value {
    let mut address = json!({
        "union": "Kahaloo",
        "upozila": "Kahaloo",
        "district": "Bogura"
    });
    if let Some(village) = village {
        address["village"] = json!(village);
    }
    json!({
        "date": "2024-01-15",
        "spotId": format!("id-{spot_code}"),
        "spotName": format!("Spot {spot_code}"),
        "spotCode": spot_code,
        "concernMobileNumber": "01711000000",
        "address": address,
        "female": 12,
        "male": 9,
        "child": 4
    })
}

/// Attendance envelope with the rows two levels down.
#[allow(dead_code)] // Used by other test files
pub fn attendance_body(rows: Vec<Value>) -> Value {
    json!({
        "success": true,
        "statusCode": 200,
        "message": "Attendance retrieved successfully",
        "data": { "meta": { "total": rows.len() }, "data": rows }
    })
}

#[allow(dead_code)] // Used by other test files
pub fn spot_body() -> Value {
    json!({
        "success": true,
        "statusCode": 200,
        "message": "Spots retrieved successfully",
        "data": [
            { "_id": "1", "spotName": "Rampur School", "spotCode": "RS-01", "totalEmployees": 2 },
            { "_id": "2", "spotName": "Kahaloo Market", "spotCode": "KM-02" }
        ]
    })
}

/// Mounts a spot list endpoint that answers with [`spot_body`].
#[allow(dead_code)] // Used by other test files
pub async fn mount_spots(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(SPOT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(spot_body()))
        .mount(server)
        .await;
}

/// Dashboard pointed at the mock server.
pub fn dashboard_for(server: &MockServer) -> Dashboard {
    let config = Config {
        base_url: server.uri(),
        timeout_seconds: 5,
        ..Default::default()
    };
    Dashboard::new(ApiClient::new(&config).expect("Failed to build API client"))
}

/// Number of requests the server received for `request_path`.
#[allow(dead_code)] // Used by other test files
pub async fn request_count(server: &MockServer, request_path: &str) -> usize {
    server
        .received_requests()
        .await
        .expect("Request recording is enabled")
        .iter()
        .filter(|r| r.url.path() == request_path)
        .count()
}
