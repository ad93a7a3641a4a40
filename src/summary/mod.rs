mod aggregator;
mod budget;

pub use aggregator::{has_expenses, sum_by_category, sum_by_month};
pub use budget::BudgetTracker;
