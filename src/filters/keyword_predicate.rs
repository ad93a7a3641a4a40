use crate::models::Transaction;

/// Matches transactions against per-field keyword lists.
///
/// A transaction passes when, for every field that has at least one keyword,
/// one of that field's keywords matches. Fields without keywords do not
/// constrain anything, so a fresh predicate matches every transaction.
///
/// Every comparison is against the whole field value, never a substring.
/// Name, category, location and type compare case-insensitively; amount and
/// date time compare against their display strings exactly.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct KeywordPredicate {
    names: Vec<String>,
    amounts: Vec<String>,
    categories: Vec<String>,
    locations: Vec<String>,
    date_times: Vec<String>,
    types: Vec<String>
}

impl KeywordPredicate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_name_keyword(&mut self, keyword: &str) -> &mut Self {
        self.names.push(fold_case(keyword));
        self
    }

    /// Expects the two-decimal form, e.g. `12.50`.
    pub fn add_amount_keyword(&mut self, keyword: &str) -> &mut Self {
        self.amounts.push(keyword.trim().to_string());
        self
    }

    pub fn add_category_keyword(&mut self, keyword: &str) -> &mut Self {
        self.categories.push(fold_case(keyword));
        self
    }

    pub fn add_location_keyword(&mut self, keyword: &str) -> &mut Self {
        self.locations.push(fold_case(keyword));
        self
    }

    /// Expects the display form, e.g. `18/12/2023 18:18`.
    pub fn add_date_time_keyword(&mut self, keyword: &str) -> &mut Self {
        self.date_times.push(keyword.trim().to_string());
        self
    }

    pub fn add_type_keyword(&mut self, keyword: &str) -> &mut Self {
        self.types.push(fold_case(keyword));
        self
    }

    /// True when no field has a keyword.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
            && self.amounts.is_empty()
            && self.categories.is_empty()
            && self.locations.is_empty()
            && self.date_times.is_empty()
            && self.types.is_empty()
    }

    pub fn test(&self, transaction: &Transaction) -> bool {
        let name = fold_case(transaction.name().as_str());
        let amount = transaction.amount().to_string();
        let location = fold_case(transaction.location().as_str());
        let date_time = transaction.date_time().to_string();
        let transaction_type = fold_case(transaction.transaction_type().as_str());

        field_matches(&self.names, |keyword| *keyword == name)
            && field_matches(&self.amounts, |keyword| *keyword == amount)
            && field_matches(&self.categories, |keyword| {
                transaction.categories().iter().any(|category| fold_case(category.as_str()) == *keyword)
            })
            && field_matches(&self.locations, |keyword| *keyword == location)
            && field_matches(&self.date_times, |keyword| *keyword == date_time)
            && field_matches(&self.types, |keyword| *keyword == transaction_type)
    }
}

fn field_matches(keywords: &[String], matches: impl Fn(&String) -> bool) -> bool {
    keywords.is_empty() || keywords.iter().any(matches)
}

fn fold_case(value: &str) -> String {
    value.trim().to_lowercase()
}
