mod normalize;
mod summary;

pub(crate) use normalize::{normalize_stored, parse_amount};
pub(crate) use summary::{calculate_summary, BudgetSummary};
