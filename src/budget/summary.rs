use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{BudgetField, BudgetValues, FieldGroup};

/// Derived monthly totals. Recomputed on every read, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetSummary {
    pub annual_pre_tax_income: Decimal,
    pub pre_tax_monthly_income: Decimal,
    pub monthly_taxable_income: Decimal,
    pub monthly_tax_total: Decimal,
    pub post_tax_monthly_take_home: Decimal,
    pub total_annual_take_home: Decimal,
    pub total_monthly_take_home: Decimal,
    pub total_irresponsible: Decimal,
    pub total_responsible: Decimal,
    pub total_savings: Decimal,
    pub total_bonus_spending: Decimal,
    pub total_expenses: Decimal,
    pub total_monthly_spending: Decimal,
    /// Take-home minus all spending. Negative means overspending.
    pub monthly_buffer: Decimal,
}

/// Income fields are annual; every other field is already monthly.
pub(crate) fn calculate_summary(values: &BudgetValues) -> BudgetSummary {
    let months = Decimal::from(12);

    let annual_pre_tax_income = values.group_total(FieldGroup::Income);
    let pre_tax_monthly_income = annual_pre_tax_income / months;
    let monthly_taxable_income =
        pre_tax_monthly_income.saturating_sub(values.get(BudgetField::Monthly401kContribution));

    let monthly_tax_total = values.group_total(FieldGroup::Taxes);
    let post_tax_monthly_take_home = monthly_taxable_income.saturating_sub(monthly_tax_total);
    let total_annual_take_home = post_tax_monthly_take_home.saturating_mul(months);

    let total_irresponsible = values.group_total(FieldGroup::Irresponsible);
    let total_responsible = values.group_total(FieldGroup::Responsible);
    let total_savings = values.group_total(FieldGroup::Savings);
    let total_bonus_spending = values.group_total(FieldGroup::Bonus);

    let total_expenses = total_responsible
        .saturating_add(total_bonus_spending)
        .saturating_add(total_irresponsible);
    let total_monthly_spending = total_expenses.saturating_add(total_savings);

    BudgetSummary {
        annual_pre_tax_income,
        pre_tax_monthly_income,
        monthly_taxable_income,
        monthly_tax_total,
        post_tax_monthly_take_home,
        total_annual_take_home,
        total_monthly_take_home: post_tax_monthly_take_home,
        total_irresponsible,
        total_responsible,
        total_savings,
        total_bonus_spending,
        total_expenses,
        total_monthly_spending,
        monthly_buffer: post_tax_monthly_take_home.saturating_sub(total_monthly_spending),
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
