/// A named spending category. Seeded once per store; not used by the
/// calculator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: Option<i64>,
    pub name: String,
    pub color: String,
    pub icon: String,
}

impl Category {
    pub fn new(name: &str, color: &str, icon: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            color: color.to_string(),
            icon: icon.to_string(),
        }
    }

    pub fn defaults() -> Vec<Category> {
        DEFAULT_CATEGORIES
            .iter()
            .map(|(name, color, icon)| Self::new(name, color, icon))
            .collect()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

const DEFAULT_CATEGORIES: &[(&str, &str, &str)] = &[
    ("Housing", "#6F4E37", "home"),
    ("Food", "#C68B59", "utensils"),
    ("Transport", "#355C7D", "car"),
    ("Utilities", "#4E6C50", "bolt"),
    ("Health", "#9A3B3B", "heart"),
    ("Savings", "#2E8B57", "piggy-bank"),
];
