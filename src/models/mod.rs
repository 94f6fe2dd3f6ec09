mod category;
mod field;
mod month;
mod record;
mod values;

pub use category::Category;
pub use field::{BudgetField, FieldGroup, FIELD_COUNT};
pub use month::MonthKey;
pub use record::{now_timestamp, MonthView, MonthlyBudgetRecord};
pub use values::BudgetValues;
