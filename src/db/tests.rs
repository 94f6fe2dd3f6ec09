#![allow(clippy::unwrap_used)]

use super::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn month(s: &str) -> MonthKey {
    MonthKey::parse(s).unwrap()
}

fn raw(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn count_months(db: &Database) -> i64 {
    db.conn
        .query_row("SELECT COUNT(*) FROM monthly_budgets", [], |row| row.get(0))
        .unwrap()
}

// ── Default data ──────────────────────────────────────────────

#[test]
fn test_default_categories_seeded() {
    let db = Database::open_in_memory().unwrap();
    let cats = db.get_categories().unwrap();
    assert_eq!(cats.len(), 6);
    assert_eq!(cats[0].name, "Housing");
    assert_eq!(cats[0].color, "#6F4E37");
    assert_eq!(cats[0].icon, "home");
    assert!(cats.iter().all(|c| c.id.is_some()));
    assert_eq!(db.get_meta("initialized").unwrap().as_deref(), Some("true"));
}

#[test]
fn test_default_categories_not_reseeded() {
    let mut db = Database::open_in_memory().unwrap();
    db.seed_default_categories().unwrap();
    db.seed_default_categories().unwrap();
    assert_eq!(db.get_categories().unwrap().len(), 6);
}

#[test]
fn test_seed_flag_respected_after_user_edits() {
    let mut db = Database::open_in_memory().unwrap();
    db.conn
        .execute("DELETE FROM categories WHERE name = 'Health'", [])
        .unwrap();
    db.seed_default_categories().unwrap();
    let cats = db.get_categories().unwrap();
    assert_eq!(cats.len(), 5);
    assert!(!cats.iter().any(|c| c.name == "Health"));
}

#[test]
fn test_get_meta_missing() {
    let db = Database::open_in_memory().unwrap();
    assert!(db.get_meta("nope").unwrap().is_none());
}

#[test]
fn test_fresh_store_has_no_months() {
    let db = Database::open_in_memory().unwrap();
    assert_eq!(count_months(&db), 0);
    assert!(db.get_month(month("2024-01")).unwrap().is_none());
}

// ── get_or_create_month ───────────────────────────────────────

#[test]
fn test_get_or_create_creates_zeroed_record() {
    let db = Database::open_in_memory().unwrap();
    let rec = db.get_or_create_month(month("2024-05")).unwrap();
    assert_eq!(rec.month.to_string(), "2024-05");
    assert_eq!(rec.values, BudgetValues::default());
    assert_eq!(rec.created_at, rec.updated_at);
    assert_eq!(count_months(&db), 1);
}

#[test]
fn test_get_or_create_is_idempotent() {
    let db = Database::open_in_memory().unwrap();
    let first = db.get_or_create_month(month("2024-05")).unwrap();
    std::thread::sleep(std::time::Duration::from_millis(1100));
    let second = db.get_or_create_month(month("2024-05")).unwrap();

    assert_eq!(first.month, second.month);
    assert_eq!(first.values, second.values);
    assert_eq!(first.created_at, second.created_at);
    assert_eq!(first.updated_at, second.updated_at);
    assert_eq!(count_months(&db), 1);
}

#[test]
fn test_get_or_create_does_not_reset_saved_values() {
    let db = Database::open_in_memory().unwrap();
    db.save_month(month("2024-05"), &raw(&[("rent", "1800")]))
        .unwrap();
    let rec = db.get_or_create_month(month("2024-05")).unwrap();
    assert_eq!(rec.values.get(BudgetField::Rent), dec!(1800));
}

// ── ensure_year_populated ─────────────────────────────────────

#[test]
fn test_ensure_year_populated() {
    let mut db = Database::open_in_memory().unwrap();
    db.ensure_year_populated(2024).unwrap();
    let months: Vec<String> = db
        .get_month_keys()
        .unwrap()
        .iter()
        .map(|m| m.to_string())
        .collect();
    assert_eq!(months.len(), 12);
    assert_eq!(months.first().unwrap(), "2024-01");
    assert_eq!(months.last().unwrap(), "2024-12");
}

#[test]
fn test_ensure_year_populated_twice_keeps_existing() {
    let mut db = Database::open_in_memory().unwrap();
    db.save_month(month("2024-07"), &raw(&[("salary", "50000")]))
        .unwrap();
    let before = db.get_month(month("2024-07")).unwrap().unwrap();

    db.ensure_year_populated(2024).unwrap();
    db.ensure_year_populated(2024).unwrap();

    let after = db.get_month(month("2024-07")).unwrap().unwrap();
    assert_eq!(count_months(&db), 12);
    assert_eq!(after.values, before.values);
    assert_eq!(after.created_at, before.created_at);
    assert_eq!(after.updated_at, before.updated_at);
}

#[test]
fn test_ensure_multiple_years() {
    let mut db = Database::open_in_memory().unwrap();
    db.ensure_year_populated(2023).unwrap();
    db.ensure_year_populated(2024).unwrap();
    let months = db.get_month_keys().unwrap();
    assert_eq!(months.len(), 24);
    assert!(months.windows(2).all(|w| w[0] < w[1]));
}

// ── save_month ────────────────────────────────────────────────

#[test]
fn test_save_normalizes_and_ignores_unknown() {
    let db = Database::open_in_memory().unwrap();
    let rec = db
        .save_month(
            month("2024-02"),
            &raw(&[
                ("salary", "$120,000"),
                ("groceries", " 412.37 "),
                ("coffee", "abc"),
                ("yacht", "999999"),
            ]),
        )
        .unwrap();
    assert_eq!(rec.values.get(BudgetField::Salary), dec!(120000));
    assert_eq!(rec.values.get(BudgetField::Groceries), dec!(412.37));
    assert_eq!(rec.values.get(BudgetField::Coffee), Decimal::ZERO);
}

#[test]
fn test_save_replaces_in_full() {
    let db = Database::open_in_memory().unwrap();
    db.save_month(month("2024-02"), &raw(&[("rent", "2000"), ("car", "300")]))
        .unwrap();
    let rec = db
        .save_month(month("2024-02"), &raw(&[("rent", "2100")]))
        .unwrap();
    assert_eq!(rec.values.get(BudgetField::Rent), dec!(2100));
    assert_eq!(rec.values.get(BudgetField::Car), Decimal::ZERO);
}

#[test]
fn test_save_creates_missing_month() {
    let db = Database::open_in_memory().unwrap();
    let rec = db
        .save_month(month("2030-01"), &raw(&[("travel", "500")]))
        .unwrap();
    assert_eq!(rec.created_at, rec.updated_at);
    assert_eq!(count_months(&db), 1);
}

#[test]
fn test_save_keeps_created_at_and_bumps_updated_at() {
    let db = Database::open_in_memory().unwrap();
    let created = db.get_or_create_month(month("2024-02")).unwrap();
    std::thread::sleep(std::time::Duration::from_millis(1100));
    let saved = db
        .save_month(month("2024-02"), &raw(&[("rent", "1")]))
        .unwrap();
    assert_eq!(saved.created_at, created.created_at);
    assert!(saved.updated_at > created.updated_at);
}

#[test]
fn test_save_does_not_touch_other_months() {
    let db = Database::open_in_memory().unwrap();
    db.save_month(month("2024-01"), &raw(&[("rent", "1000")]))
        .unwrap();
    db.save_month(month("2024-02"), &raw(&[("rent", "2000")]))
        .unwrap();
    let jan = db.get_month(month("2024-01")).unwrap().unwrap();
    assert_eq!(jan.values.get(BudgetField::Rent), dec!(1000));
}

// ── get_month_view ────────────────────────────────────────────

#[test]
fn test_view_after_save() {
    let db = Database::open_in_memory().unwrap();
    let input = raw(&[
        ("salary", "120000"),
        ("monthly_401k_contribution", "500"),
        ("monthly_federal_taxes", "800"),
        ("monthly_state_taxes", "200"),
        ("monthly_city_taxes", "100"),
    ]);
    let saved = db.save_month(month("2024-03"), &input).unwrap();
    let view = db.get_month_view(month("2024-03")).unwrap();

    assert_eq!(view.month.to_string(), "2024-03");
    assert_eq!(view.month_label, "March 2024");
    assert_eq!(view.values, saved.values);
    assert_eq!(view.values, BudgetValues::from_raw(&input));
    assert_eq!(view.values.get(BudgetField::Rent), Decimal::ZERO);
    assert_eq!(view.summary.pre_tax_monthly_income, dec!(10000));
    assert_eq!(view.summary.post_tax_monthly_take_home, dec!(8400));
    assert_eq!(view.summary.monthly_buffer, dec!(8400));
    assert_eq!(view.updated_at, saved.updated_at);
}

#[test]
fn test_view_creates_unvisited_month() {
    let db = Database::open_in_memory().unwrap();
    let view = db.get_month_view(month("2025-09")).unwrap();
    assert_eq!(view.month_label, "September 2025");
    assert_eq!(view.summary.monthly_buffer, Decimal::ZERO);
    assert_eq!(count_months(&db), 1);
}

#[test]
fn test_view_renormalizes_legacy_values() {
    let db = Database::open_in_memory().unwrap();
    db.conn
        .execute(
            "INSERT INTO monthly_budgets (month, values_json, created_at, updated_at)
             VALUES ('2023-06', ?1, '2023-06-01T00:00:00', '2023-06-01T00:00:00')",
            params![r#"{"salary": 60000, "rent": "$1,250.00", "car": "broken", "legacy_field": 9}"#],
        )
        .unwrap();

    let view = db.get_month_view(month("2023-06")).unwrap();
    assert_eq!(view.values.get(BudgetField::Salary), dec!(60000));
    assert_eq!(view.values.get(BudgetField::Rent), dec!(1250));
    assert_eq!(view.values.get(BudgetField::Car), Decimal::ZERO);
    assert_eq!(view.values.get(BudgetField::Coffee), Decimal::ZERO);
    assert_eq!(view.summary.total_responsible, dec!(1250));
}

#[test]
fn test_corrupt_values_propagate_error() {
    let db = Database::open_in_memory().unwrap();
    db.conn
        .execute(
            "INSERT INTO monthly_budgets (month, values_json, created_at, updated_at)
             VALUES ('2023-06', 'not json', 'x', 'x')",
            [],
        )
        .unwrap();
    assert!(db.get_month_view(month("2023-06")).is_err());
}

// ── File-backed store ─────────────────────────────────────────

#[test]
fn test_open_creates_parent_dir_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("budget.db");

    {
        let db = Database::open(&path).unwrap();
        db.save_month(month("2024-04"), &raw(&[("rent", "1500")]))
            .unwrap();
    }

    let db = Database::open(&path).unwrap();
    let rec = db.get_month(month("2024-04")).unwrap().unwrap();
    assert_eq!(rec.values.get(BudgetField::Rent), dec!(1500));
    assert_eq!(db.get_categories().unwrap().len(), 6);
}

#[test]
fn test_reopen_keeps_schema_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("budget.db");
    drop(Database::open(&path).unwrap());
    let db = Database::open(&path).unwrap();
    let version: i32 = db
        .conn
        .query_row("SELECT version FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, schema::CURRENT_VERSION);
}
