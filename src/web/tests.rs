#![allow(clippy::unwrap_used)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;
use std::collections::HashMap;
use std::str::FromStr;
use tower::ServiceExt;

use super::handlers::{load_month, save_form};
use super::*;
use crate::models::{BudgetField, MonthKey};

fn test_app() -> Router {
    app_router(AppState::new(Database::open_in_memory().unwrap()))
}

fn march_15() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

fn amount(v: &Value) -> Decimal {
    Decimal::from_str(v.as_str().unwrap()).unwrap()
}

async fn post_form(app: &Router, body: &str) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/budget")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

// ── Service functions ─────────────────────────────────────────

#[test]
fn test_load_month_falls_back_to_today_and_populates_year() {
    let mut db = Database::open_in_memory().unwrap();
    let view = load_month(&mut db, None, march_15()).unwrap();

    assert_eq!(view.month.to_string(), "2024-03");
    assert_eq!(view.month_label, "March 2024");
    let months = db.get_month_keys().unwrap();
    assert_eq!(months.len(), 12);
    assert!(months.iter().all(|m| m.year() == 2024));
}

#[test]
fn test_load_month_invalid_param_falls_back() {
    let mut db = Database::open_in_memory().unwrap();
    let view = load_month(&mut db, Some("2024-13"), march_15()).unwrap();
    assert_eq!(view.month.to_string(), "2024-03");
}

#[test]
fn test_load_month_other_year_populates_that_year() {
    let mut db = Database::open_in_memory().unwrap();
    let view = load_month(&mut db, Some("2019-07"), march_15()).unwrap();
    assert_eq!(view.month.to_string(), "2019-07");
    let months = db.get_month_keys().unwrap();
    assert_eq!(months.len(), 12);
    assert!(months.iter().all(|m| m.year() == 2019));
}

#[test]
fn test_save_form_defaults_missing_fields_to_zero() {
    let mut db = Database::open_in_memory().unwrap();
    db.save_month(
        MonthKey::parse("2024-03").unwrap(),
        &[("car".to_string(), "350".to_string())].into_iter().collect(),
    )
    .unwrap();

    let form: HashMap<String, String> = [("month", "2024-03"), ("rent", "$2,000")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let month = save_form(&mut db, &form, march_15()).unwrap();
    assert_eq!(month.to_string(), "2024-03");

    let view = db.get_month_view(month).unwrap();
    assert_eq!(view.values.get(BudgetField::Rent), dec!(2000));
    assert_eq!(view.values.get(BudgetField::Car), Decimal::ZERO);
}

#[test]
fn test_save_form_without_month_uses_today() {
    let mut db = Database::open_in_memory().unwrap();
    let form: HashMap<String, String> = [("salary".to_string(), "1200".to_string())]
        .into_iter()
        .collect();
    let month = save_form(&mut db, &form, march_15()).unwrap();
    assert_eq!(month.to_string(), "2024-03");
}

// ── Routes ────────────────────────────────────────────────────

#[tokio::test]
async fn test_health() {
    let app = test_app();
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["app"], "monthly-budget-calculator");
}

#[tokio::test]
async fn test_overview_renders_requested_month() {
    let app = test_app();
    let (status, body) = get(&app, "/?month=2023-11").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("November 2023"));
    assert!(!body.contains("save-banner\">"));
}

#[tokio::test]
async fn test_overview_without_month_renders_page() {
    let app = test_app();
    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<form class=\"budget-form\""));
}

#[tokio::test]
async fn test_save_redirects_with_flag() {
    let app = test_app();
    let response = post_form(&app, "month=2024-03&salary=%24120%2C000&rent=2000").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()[header::LOCATION],
        "/?month=2024-03&saved=1"
    );

    let (status, body) = get(&app, "/?month=2024-03&saved=1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("save-banner\">"));
    assert!(body.contains("value=\"120000.00\""));
}

#[tokio::test]
async fn test_save_then_json_view() {
    let app = test_app();
    post_form(
        &app,
        "month=2024-03&salary=120000&monthly_401k_contribution=500&monthly_federal_taxes=800&monthly_state_taxes=200&monthly_city_taxes=100&bogus=1",
    )
    .await;

    let (status, body) = get(&app, "/api/budget?month=2024-03").await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["month"], "2024-03");
    assert_eq!(json["month_label"], "March 2024");
    assert_eq!(amount(&json["values"]["salary"]), dec!(120000));
    assert_eq!(amount(&json["values"]["rent"]), Decimal::ZERO);
    assert!(json["values"].get("bogus").is_none());
    let summary = &json["summary"];
    assert_eq!(amount(&summary["pre_tax_monthly_income"]), dec!(10000));
    assert_eq!(amount(&summary["monthly_taxable_income"]), dec!(9500));
    assert_eq!(amount(&summary["monthly_tax_total"]), dec!(1100));
    assert_eq!(amount(&summary["post_tax_monthly_take_home"]), dec!(8400));
    assert_eq!(amount(&summary["total_expenses"]), Decimal::ZERO);
    assert_eq!(amount(&summary["monthly_buffer"]), dec!(8400));
}

#[tokio::test]
async fn test_save_with_invalid_month_uses_current_month() {
    let app = test_app();
    let response = post_form(&app, "month=not-a-month&rent=10").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let expected = MonthKey::from_date(chrono::Local::now().date_naive());
    assert_eq!(
        response.headers()[header::LOCATION],
        format!("/?month={expected}&saved=1").as_str()
    );
}

#[tokio::test]
async fn test_repeated_month_param_uses_first() {
    let app = test_app();
    let (status, body) = get(&app, "/?month=2024-03&month=2024-04").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("March 2024"));

    let (status, body) = get(&app, "/api/budget?month=2024-03&month=2024-04").await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["month"], "2024-03");
}

#[tokio::test]
async fn test_repeated_saved_param_uses_first() {
    let app = test_app();
    let (status, body) = get(&app, "/?month=2024-03&saved=1&saved=0").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("save-banner\">"));
}

#[tokio::test]
async fn test_repeated_form_field_uses_first() {
    let app = test_app();
    let response = post_form(&app, "month=2024-03&month=2024-04&rent=100&rent=200").await;
    assert_eq!(
        response.headers()[header::LOCATION],
        "/?month=2024-03&saved=1"
    );

    let (_, body) = get(&app, "/api/budget?month=2024-03").await;
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(amount(&json["values"]["rent"]), dec!(100));
}
