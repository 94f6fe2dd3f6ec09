use serde::Serialize;

use super::{BudgetValues, MonthKey};
use crate::budget::BudgetSummary;

#[derive(Debug, Clone)]
pub struct MonthlyBudgetRecord {
    pub month: MonthKey,
    pub values: BudgetValues,
    pub created_at: String,
    pub updated_at: String,
}

impl MonthlyBudgetRecord {
    pub fn new(month: MonthKey) -> Self {
        let now = now_timestamp();
        Self {
            month,
            values: BudgetValues::default(),
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// Everything the month overview needs to render.
#[derive(Debug, Clone, Serialize)]
pub struct MonthView {
    pub month: MonthKey,
    pub month_label: String,
    pub values: BudgetValues,
    pub summary: BudgetSummary,
    pub updated_at: String,
}

/// UTC, second precision, e.g. `2024-03-15T12:00:00Z`.
pub fn now_timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}
