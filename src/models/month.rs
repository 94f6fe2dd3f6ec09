use chrono::{Datelike, NaiveDate};

/// A calendar month, written `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=9999).contains(&year) && (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Parse `YYYY-MM`. The month may be a single digit (`2024-3`).
    pub fn parse(s: &str) -> Option<Self> {
        let (year, month) = s.trim().split_once('-')?;
        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if month.is_empty() || month.len() > 2 || !month.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Self::new(year.parse().ok()?, month.parse().ok()?)
    }

    /// The requested month, or the month containing `today` when the request
    /// is missing or malformed.
    pub fn resolve(raw: Option<&str>, today: NaiveDate) -> Self {
        raw.and_then(Self::parse)
            .unwrap_or_else(|| Self::from_date(today))
    }

    /// All twelve months of `year`, January first.
    pub fn months_of_year(year: i32) -> impl Iterator<Item = MonthKey> {
        (1..=12).filter_map(move |m| Self::new(year, m))
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// e.g. "March 2024"
    pub fn label(&self) -> String {
        match self.first_day() {
            Some(d) => d.format("%B %Y").to_string(),
            None => self.to_string(),
        }
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl serde::Serialize for MonthKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
