mod schema;

use anyhow::{anyhow, Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;
use std::path::Path;

use crate::budget::calculate_summary;
use crate::models::*;

pub(crate) struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the store at `path`, migrate it, and seed the default
    /// categories the first time.
    pub(crate) fn open(path: &Path) -> Result<Self> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
        }
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .context("Failed to set database pragmas")?;
        let mut db = Self { conn };
        db.migrate().context("Database migration failed")?;
        db.seed_default_categories()?;
        Ok(db)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.migrate()?;
        db.seed_default_categories()?;
        Ok(db)
    }

    fn migrate(&mut self) -> Result<()> {
        let has_version_table: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )?;

        if !has_version_table {
            self.conn.execute_batch(schema::SCHEMA_V1)?;
            self.conn.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![schema::CURRENT_VERSION],
            )?;
            return Ok(());
        }

        let current: i32 = self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })
            .optional()?
            .unwrap_or(0);

        for &(from_version, sql) in schema::MIGRATIONS {
            if current <= from_version {
                self.conn.execute_batch(sql)?;
            }
        }

        if current < schema::CURRENT_VERSION {
            self.conn.execute(
                "UPDATE schema_version SET version = ?1",
                params![schema::CURRENT_VERSION],
            )?;
        }

        Ok(())
    }

    fn seed_default_categories(&mut self) -> Result<()> {
        if self.get_meta(schema::SEEDED_FLAG)?.is_some() {
            return Ok(());
        }

        let defaults = Category::defaults();
        let tx = self.conn.transaction()?;
        for cat in &defaults {
            tx.execute(
                "INSERT OR IGNORE INTO categories (name, color, icon) VALUES (?1, ?2, ?3)",
                params![cat.name, cat.color, cat.icon],
            )?;
        }
        tx.execute(
            "INSERT INTO meta (key, value) VALUES (?1, 'true')",
            params![schema::SEEDED_FLAG],
        )?;
        tx.commit()?;
        tracing::info!(count = defaults.len(), "Seeded default categories");
        Ok(())
    }

    // ── Meta ──────────────────────────────────────────────────

    pub(crate) fn get_meta(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .conn
            .query_row(
                "SELECT value FROM meta WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?)
    }

    // ── Categories ────────────────────────────────────────────

    pub(crate) fn get_categories(&self) -> Result<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, color, icon FROM categories ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Category {
                id: Some(row.get(0)?),
                name: row.get(1)?,
                color: row.get(2)?,
                icon: row.get(3)?,
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    // ── Monthly budgets ───────────────────────────────────────

    pub(crate) fn get_month(&self, month: MonthKey) -> Result<Option<MonthlyBudgetRecord>> {
        let row = self
            .conn
            .query_row(
                "SELECT month, values_json, created_at, updated_at
                 FROM monthly_budgets WHERE month = ?1",
                params![month.to_string()],
                |row| {
                    Ok(StoredRow {
                        month: row.get(0)?,
                        values_json: row.get(1)?,
                        created_at: row.get(2)?,
                        updated_at: row.get(3)?,
                    })
                },
            )
            .optional()?;
        row.map(StoredRow::into_record).transpose()
    }

    /// Returns the record for `month`, creating an all-zero one if absent.
    /// An existing record is never touched.
    pub(crate) fn get_or_create_month(&self, month: MonthKey) -> Result<MonthlyBudgetRecord> {
        if insert_month_if_absent(&self.conn, month)? {
            tracing::debug!(%month, "Created month record");
        }
        self.get_month(month)?
            .ok_or_else(|| anyhow!("Month {month} missing right after insert"))
    }

    /// Make sure every month of `year` has a record.
    pub(crate) fn ensure_year_populated(&mut self, year: i32) -> Result<()> {
        let tx = self.conn.transaction()?;
        let mut created = 0;
        for month in MonthKey::months_of_year(year) {
            if insert_month_if_absent(&tx, month)? {
                created += 1;
            }
        }
        tx.commit()?;
        if created > 0 {
            tracing::info!(year, created, "Populated missing months");
        }
        Ok(())
    }

    /// Replace the month's values with the normalized form input. Fields not
    /// present in `raw` become zero. Creates the month if needed.
    pub(crate) fn save_month(
        &self,
        month: MonthKey,
        raw: &HashMap<String, String>,
    ) -> Result<MonthlyBudgetRecord> {
        let values = BudgetValues::from_raw(raw);
        let now = now_timestamp();
        self.conn.execute(
            "INSERT INTO monthly_budgets (month, values_json, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?3)
             ON CONFLICT(month) DO UPDATE SET
                values_json = excluded.values_json,
                updated_at = excluded.updated_at",
            params![month.to_string(), values.to_stored().to_string(), now],
        )?;
        tracing::info!(%month, "Saved month budget");
        self.get_month(month)?
            .ok_or_else(|| anyhow!("Month {month} missing right after save"))
    }

    pub(crate) fn get_month_view(&self, month: MonthKey) -> Result<MonthView> {
        let record = self.get_or_create_month(month)?;
        let summary = calculate_summary(&record.values);
        Ok(MonthView {
            month: record.month,
            month_label: record.month.label(),
            values: record.values,
            summary,
            updated_at: record.updated_at,
        })
    }

    /// Every stored month, oldest first.
    pub(crate) fn get_month_keys(&self) -> Result<Vec<MonthKey>> {
        let mut stmt = self
            .conn
            .prepare("SELECT month FROM monthly_budgets ORDER BY month")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut months = Vec::new();
        for raw in rows {
            let raw = raw?;
            let month = MonthKey::parse(&raw)
                .ok_or_else(|| anyhow!("Invalid month key in storage: '{raw}'"))?;
            months.push(month);
        }
        Ok(months)
    }
}

/// Returns true when a new row was written.
fn insert_month_if_absent(conn: &Connection, month: MonthKey) -> Result<bool> {
    let record = MonthlyBudgetRecord::new(month);
    let inserted = conn.execute(
        "INSERT OR IGNORE INTO monthly_budgets (month, values_json, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            record.month.to_string(),
            record.values.to_stored().to_string(),
            record.created_at,
            record.updated_at,
        ],
    )?;
    Ok(inserted > 0)
}

struct StoredRow {
    month: String,
    values_json: String,
    created_at: String,
    updated_at: String,
}

impl StoredRow {
    fn into_record(self) -> Result<MonthlyBudgetRecord> {
        let month = MonthKey::parse(&self.month)
            .ok_or_else(|| anyhow!("Invalid month key in storage: '{}'", self.month))?;
        let doc: serde_json::Value = serde_json::from_str(&self.values_json)
            .with_context(|| format!("Corrupt values for month {month}"))?;
        Ok(MonthlyBudgetRecord {
            month,
            values: BudgetValues::from_stored(&doc),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[cfg(test)]
mod tests;
