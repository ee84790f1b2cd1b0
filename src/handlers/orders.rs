use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use std::fmt::Write as _;
use std::sync::Arc;

use super::AppError;
use crate::models::order::{parse_order_id, OrderId};
use crate::models::transport::TransportMode;
use crate::services::{AppState, RecordSummary};

/// Body of `POST /api/orders`. Form-driven clients send numbers and the
/// urgency flag as strings, so both spellings are accepted.
#[derive(Debug, Deserialize)]
pub struct ProcessOrderRequest {
    pub id: Option<i64>,
    #[serde(deserialize_with = "number_or_text")]
    pub weight: f64,
    #[serde(deserialize_with = "number_or_text")]
    pub distance: f64,
    #[serde(default, deserialize_with = "flag_or_text")]
    pub urgent: bool,
}

#[derive(Debug, Serialize)]
pub struct ProcessOrderResponse {
    pub id: OrderId,
    #[serde(rename = "type")]
    pub kind: TransportMode,
    pub info: String,
    pub eta: String,
    pub eta_days: u32,
    pub weight: f64,
    pub distance: f64,
    pub urgent: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose<T> {
    Value(T),
    Text(String),
}

fn number_or_text<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Loose::<f64>::deserialize(deserializer)? {
        Loose::Value(value) => Ok(value),
        Loose::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("expected a number, got {:?}", text))),
    }
}

fn flag_or_text<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Loose::<bool>::deserialize(deserializer)? {
        Loose::Value(flag) => Ok(flag),
        Loose::Text(text) => match text.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(D::Error::custom(format!(
                "expected \"true\" or \"false\", got {:?}",
                text
            ))),
        },
    }
}

pub async fn process_order(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ProcessOrderRequest>, JsonRejection>,
) -> Result<Json<ProcessOrderResponse>, AppError> {
    let Json(request) = payload?;

    let id = match request.id {
        Some(raw) => parse_order_id(raw)?,
        None => state.desk.next_order_id(),
    };

    let receipt = state
        .desk
        .submit_raw(id, request.weight, request.distance, request.urgent)?;

    Ok(Json(ProcessOrderResponse {
        id: receipt.record_id,
        kind: receipt.mode,
        info: receipt.transport_label,
        eta: receipt.eta_label,
        eta_days: receipt.eta_days,
        weight: request.weight,
        distance: request.distance,
        urgent: request.urgent,
    }))
}

pub async fn list_orders(State(state): State<Arc<AppState>>) -> Json<Vec<RecordSummary>> {
    Json(state.desk.list_records())
}

/// Plain-text history, one `[Order #id] info -> ETA: eta` line per record.
pub async fn orders_log(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let body = render_log(&state.desk.list_records());
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body)
}

pub async fn reset_orders(State(state): State<Arc<AppState>>) -> StatusCode {
    state.desk.reset();
    StatusCode::NO_CONTENT
}

pub fn render_log(records: &[RecordSummary]) -> String {
    let mut out = String::new();
    for record in records {
        // writing into a String cannot fail
        let _ = writeln!(
            out,
            "[Order #{}] {} -> ETA: {}",
            record.record_id, record.transport_label, record.eta_label
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accepts_strings_from_forms() {
        let request: ProcessOrderRequest = serde_json::from_str(
            r#"{"weight": "15", "distance": "600.5", "urgent": "true"}"#,
        )
        .unwrap();
        assert_eq!(request.weight, 15.0);
        assert_eq!(request.distance, 600.5);
        assert!(request.urgent);
        assert!(request.id.is_none());
    }

    #[test]
    fn test_request_urgent_defaults_to_false() {
        let request: ProcessOrderRequest =
            serde_json::from_str(r#"{"id": 7, "weight": 1, "distance": 2}"#).unwrap();
        assert!(!request.urgent);
        assert_eq!(request.id, Some(7));
    }

    #[test]
    fn test_request_rejects_unknown_flag_text() {
        let result: Result<ProcessOrderRequest, _> =
            serde_json::from_str(r#"{"weight": 1, "distance": 2, "urgent": "yes"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_render_log_lines() {
        let records = vec![RecordSummary {
            record_id: 1234,
            mode: TransportMode::Ship,
            transport_label: "Ship (Reserved: Yes)".to_string(),
            eta_label: "Ship: 12 days".to_string(),
        }];
        assert_eq!(
            render_log(&records),
            "[Order #1234] Ship (Reserved: Yes) -> ETA: Ship: 12 days\n"
        );
    }
}
