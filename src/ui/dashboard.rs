use rust_decimal::Decimal;

use super::chart::PieChart;
use super::theme;
use super::util::{escape_html, format_amount, format_input, format_percent};
use crate::models::{FieldGroup, MonthView};

pub(crate) fn render(view: &MonthView, saved: bool) -> String {
    let chart = PieChart::from_summary(&view.summary);
    let mut html = String::new();

    html.push_str(&render_header(view));
    html.push_str("<main>\n");
    if saved {
        html.push_str(&format!(
            "<div class=\"save-banner\">Budget for {} saved.</div>\n",
            escape_html(&view.month_label)
        ));
    }
    html.push_str(&render_summary_cards(view));
    html.push_str("<section class=\"overview\">\n");
    html.push_str(&render_chart(&chart));
    html.push_str(&render_breakdown(view));
    html.push_str("</section>\n");
    html.push_str(&render_form(view));
    html.push_str("</main>\n");
    html.push_str(&format!(
        "<footer>Last updated {}</footer>\n",
        escape_html(&view.updated_at)
    ));
    html
}

fn render_header(view: &MonthView) -> String {
    format!(
        r#"<header>
<h1>{label}</h1>
<form method="get" action="/">
<input type="month" id="month-picker" name="month" value="{month}">
<button type="submit">Go</button>
</form>
</header>
"#,
        label = escape_html(&view.month_label),
        month = view.month,
    )
}

fn render_summary_cards(view: &MonthView) -> String {
    let s = &view.summary;
    let mut html = String::from("<section class=\"stats\">\n");
    html.push_str(&render_card("Monthly Take-Home", s.total_monthly_take_home));
    html.push_str(&render_card("Annual Take-Home", s.total_annual_take_home));
    html.push_str(&render_card("Total Expenses", s.total_expenses));
    html.push_str(&render_card("Total Savings", s.total_savings));
    html.push_str(&render_card("Buffer", s.monthly_buffer));
    html.push_str("</section>\n");
    html
}

fn render_card(title: &str, amount: Decimal) -> String {
    let class = if amount < Decimal::ZERO {
        "value negative"
    } else {
        "value"
    };
    format!(
        "<div class=\"stat-card\"><div class=\"label\">{}</div><div class=\"{class}\">{}</div></div>\n",
        escape_html(title),
        format_amount(amount),
    )
}

fn render_chart(chart: &PieChart) -> String {
    let background = if chart.has_data {
        format!(
            "conic-gradient({income} 0 {income_end}%, {expense} {income_end}% {expense_end}%, {savings} {expense_end}% 100%)",
            income = theme::INCOME,
            expense = theme::EXPENSE,
            savings = theme::SAVINGS,
            income_end = chart.income_pct.round_dp(2),
            expense_end = chart.expense_end.round_dp(2),
        )
    } else {
        theme::EMPTY_CHART.to_string()
    };

    let legend = [
        ("Take-Home", theme::INCOME, chart.income_amount, chart.income_pct),
        ("Expenses", theme::EXPENSE, chart.expense_amount, chart.expense_pct),
        ("Savings", theme::SAVINGS, chart.savings_amount, chart.savings_pct),
    ]
    .iter()
    .map(|(name, color, amount, pct)| {
        format!(
            "<li><span><span class=\"swatch\" style=\"background:{color}\"></span>{name}</span><span>{} · {}</span></li>\n",
            format_amount(*amount),
            format_percent(*pct),
        )
    })
    .collect::<String>();

    format!(
        "<div class=\"chart\">\n<div class=\"pie\" style=\"background:{background}\"></div>\n<ul class=\"legend\">\n{legend}</ul>\n</div>\n"
    )
}

fn render_breakdown(view: &MonthView) -> String {
    let s = &view.summary;
    let rows = [
        ("Annual Pre-Tax Income", s.annual_pre_tax_income),
        ("Pre-Tax Monthly Income", s.pre_tax_monthly_income),
        ("Monthly Taxable Income", s.monthly_taxable_income),
        ("Monthly Taxes", s.monthly_tax_total),
        ("Post-Tax Monthly Take-Home", s.post_tax_monthly_take_home),
        ("Responsible Spending", s.total_responsible),
        ("Bonus Spending", s.total_bonus_spending),
        ("Irresponsible Spending", s.total_irresponsible),
        ("Savings", s.total_savings),
        ("Total Monthly Spending", s.total_monthly_spending),
        ("Buffer", s.monthly_buffer),
    ];

    let mut html = String::from("<div class=\"breakdown\"><table>\n");
    for (label, amount) in rows {
        let class = if amount < Decimal::ZERO { " class=\"negative\"" } else { "" };
        html.push_str(&format!(
            "<tr><td>{}</td><td{class}>{}</td></tr>\n",
            escape_html(label),
            format_amount(amount),
        ));
    }
    html.push_str("</table></div>\n");
    html
}

fn render_form(view: &MonthView) -> String {
    let mut html = format!(
        "<form class=\"budget-form\" method=\"post\" action=\"/budget\">\n<input type=\"hidden\" name=\"month\" value=\"{}\">\n",
        view.month
    );

    for group in FieldGroup::all() {
        html.push_str(&format!(
            "<fieldset class=\"budget-panel\">\n<h2>{}</h2>\n",
            escape_html(group.as_str())
        ));
        for field in group.fields() {
            html.push_str(&format!(
                "<label>{label}<input type=\"text\" inputmode=\"decimal\" data-money=\"true\" name=\"{key}\" value=\"{value}\"></label>\n",
                label = escape_html(field.label()),
                key = field.key(),
                value = format_input(view.values.get(field)),
            ));
        }
        html.push_str("</fieldset>\n");
    }

    html.push_str("<div class=\"actions\"><button type=\"submit\">Save Budget</button></div>\n</form>\n");
    html
}
