use anyhow::Result;

use crate::db::Database;
use crate::models::{FieldGroup, MonthKey, MonthView};
use crate::ui::util::format_amount;

pub(crate) fn as_cli(args: &[String], db: &mut Database) -> Result<()> {
    match args[1].as_str() {
        "summary" | "s" => cli_summary(&args[2..], db),
        "months" => cli_months(db),
        "categories" => cli_categories(db),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("monthly-budget {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("monthly-budget: household budget calculator");
    println!();
    println!("Usage: monthly-budget [command]");
    println!();
    println!("Commands:");
    println!("  (none), serve                 Start the web UI");
    println!("  summary [YYYY-MM]             Print a month's summary (default: current)");
    println!("  months                        List stored months");
    println!("  categories                    List categories");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Environment:");
    println!("  BUDGET_LISTEN_ADDR            Web UI address (default 127.0.0.1:5000)");
    println!("  BUDGET_DB_PATH                SQLite file (default: user data dir)");
    println!("  BUDGET_LOG_FORMAT             text | json");
}

fn cli_summary(args: &[String], db: &mut Database) -> Result<()> {
    let month = match args.first().filter(|a| !a.starts_with('-')) {
        Some(raw) => MonthKey::parse(raw)
            .ok_or_else(|| anyhow::anyhow!("Invalid month '{raw}', expected YYYY-MM"))?,
        None => MonthKey::from_date(chrono::Local::now().date_naive()),
    };

    db.ensure_year_populated(month.year())?;
    let view = db.get_month_view(month)?;
    print!("{}", summary_report(&view));
    Ok(())
}

fn summary_report(view: &MonthView) -> String {
    let s = &view.summary;
    let rows = [
        ("Annual pre-tax income", s.annual_pre_tax_income),
        ("Monthly pre-tax income", s.pre_tax_monthly_income),
        ("Monthly taxable income", s.monthly_taxable_income),
        ("Monthly taxes", s.monthly_tax_total),
        ("Monthly take-home", s.post_tax_monthly_take_home),
        ("Annual take-home", s.total_annual_take_home),
        ("Responsible", s.total_responsible),
        ("Bonus spending", s.total_bonus_spending),
        ("Irresponsible", s.total_irresponsible),
        ("Total expenses", s.total_expenses),
        ("Savings", s.total_savings),
        ("Total spending", s.total_monthly_spending),
        ("Buffer", s.monthly_buffer),
    ];

    let mut out = format!("{} ({})\n", view.month_label, view.month);
    out.push_str(&"─".repeat(44));
    out.push('\n');
    for (label, amount) in rows {
        out.push_str(&format!("  {label:<26} {:>15}\n", format_amount(amount)));
    }

    let empty: Vec<_> = FieldGroup::all()
        .iter()
        .filter(|g| view.values.group_total(**g).is_zero())
        .map(|g| g.as_str())
        .collect();
    if !empty.is_empty() {
        out.push('\n');
        out.push_str(&format!("No entries: {}\n", empty.join(", ")));
    }
    out
}

fn cli_months(db: &mut Database) -> Result<()> {
    let months = db.get_month_keys()?;
    if months.is_empty() {
        println!("No months stored");
        return Ok(());
    }

    let mut current_year = None;
    for month in &months {
        if current_year != Some(month.year()) {
            current_year = Some(month.year());
            println!("{}", month.year());
        }
        println!("  {month}  {}", month.label());
    }
    Ok(())
}

fn cli_categories(db: &mut Database) -> Result<()> {
    let categories = db.get_categories()?;
    if categories.is_empty() {
        println!("No categories");
        return Ok(());
    }

    println!("{:<4} {:<16} {:<9} Icon", "ID", "Name", "Color");
    println!("{}", "─".repeat(44));
    for cat in &categories {
        println!(
            "{:<4} {:<16} {:<9} {}",
            cat.id.unwrap_or(0),
            cat.name,
            cat.color,
            cat.icon,
        );
    }
    Ok(())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
