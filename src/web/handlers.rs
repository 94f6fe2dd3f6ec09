use anyhow::Result;
use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Form, Json,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use std::collections::HashMap;

use super::error::ApiResult;
use super::AppState;
use crate::db::Database;
use crate::models::{BudgetField, MonthKey, MonthView};
use crate::ui::render::render_overview;

/// Query and form pairs in request order. A repeated key is not an error;
/// the first occurrence wins.
type Params = Vec<(String, String)>;

fn first_param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Resolve the requested month, make sure its year is populated, and load it.
pub(crate) fn load_month(db: &mut Database, raw: Option<&str>, today: NaiveDate) -> Result<MonthView> {
    let month = MonthKey::resolve(raw, today);
    db.ensure_year_populated(month.year())?;
    db.get_month_view(month)
}

/// Persist a submitted form for the month it names. Every budget field is
/// read; missing ones count as `"0"`.
pub(crate) fn save_form(
    db: &mut Database,
    form: &HashMap<String, String>,
    today: NaiveDate,
) -> Result<MonthKey> {
    let month = MonthKey::resolve(form.get("month").map(String::as_str), today);
    db.ensure_year_populated(month.year())?;

    let ignored = form
        .keys()
        .filter(|k| k.as_str() != "month" && BudgetField::parse(k).is_none())
        .count();
    if ignored > 0 {
        tracing::debug!(%month, ignored, "Ignoring unknown form fields");
    }

    let payload: HashMap<String, String> = BudgetField::all()
        .iter()
        .map(|f| {
            let text = form.get(f.key()).cloned().unwrap_or_else(|| "0".into());
            (f.key().to_string(), text)
        })
        .collect();
    db.save_month(month, &payload)?;
    Ok(month)
}

pub(crate) async fn overview(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> ApiResult<Html<String>> {
    let view = {
        let mut db = state.lock_db()?;
        load_month(&mut db, first_param(&params, "month"), today())?
    };
    let saved = first_param(&params, "saved") == Some("1");
    Ok(Html(render_overview(&view, saved)))
}

pub(crate) async fn save_budget(
    State(state): State<AppState>,
    Form(pairs): Form<Params>,
) -> ApiResult<Redirect> {
    let mut form = HashMap::with_capacity(pairs.len());
    for (key, value) in pairs {
        form.entry(key).or_insert(value);
    }
    let month = {
        let mut db = state.lock_db()?;
        save_form(&mut db, &form, today())?
    };
    Ok(Redirect::to(&format!("/?month={month}&saved=1")))
}

pub(crate) async fn month_json(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> ApiResult<Json<MonthView>> {
    let mut db = state.lock_db()?;
    let view = load_month(&mut db, first_param(&params, "month"), today())?;
    Ok(Json(view))
}

pub(crate) async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "app": "monthly-budget-calculator" }))
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
