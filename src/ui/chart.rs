use rust_decimal::Decimal;

use crate::budget::BudgetSummary;

/// Three-way income / expenses / savings split for the overview pie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PieChart {
    pub(crate) income_amount: Decimal,
    pub(crate) expense_amount: Decimal,
    pub(crate) savings_amount: Decimal,
    pub(crate) income_pct: Decimal,
    pub(crate) expense_pct: Decimal,
    pub(crate) savings_pct: Decimal,
    /// Where the expense slice stops, as a percentage of the circle.
    pub(crate) expense_end: Decimal,
    pub(crate) has_data: bool,
}

impl PieChart {
    /// Negative slices are clamped to zero. Percentages sum to 100 whenever
    /// anything is left to draw; otherwise they are all zero.
    pub(crate) fn from_summary(summary: &BudgetSummary) -> Self {
        let income_amount = summary.total_monthly_take_home.max(Decimal::ZERO);
        let expense_amount = summary.total_expenses.max(Decimal::ZERO);
        let savings_amount = summary.total_savings.max(Decimal::ZERO);
        let total = income_amount
            .saturating_add(expense_amount)
            .saturating_add(savings_amount);

        let pct = |amount: Decimal| {
            if total > Decimal::ZERO {
                (amount / total).saturating_mul(Decimal::ONE_HUNDRED)
            } else {
                Decimal::ZERO
            }
        };
        let income_pct = pct(income_amount);
        let expense_pct = pct(expense_amount);
        let savings_pct = pct(savings_amount);

        Self {
            income_amount,
            expense_amount,
            savings_amount,
            income_pct,
            expense_pct,
            savings_pct,
            expense_end: income_pct + expense_pct,
            has_data: total > Decimal::ZERO,
        }
    }
}
