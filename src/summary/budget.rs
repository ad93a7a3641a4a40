use crate::types::Amount;
use tracing::debug;

/// Holds the single optional spending ceiling.
///
/// "No budget" and a budget of zero are different states.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct BudgetTracker {
    budget: Option<Amount>
}

impl BudgetTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_budget(&mut self, budget: Amount) {
        debug!("Budget set to [{budget}]");
        self.budget = Some(budget);
    }

    pub fn clear_budget(&mut self) {
        debug!("Budget cleared");
        self.budget = None;
    }

    pub fn budget(&self) -> Option<Amount> {
        self.budget
    }
}
