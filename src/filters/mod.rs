mod keyword_predicate;
#[cfg(test)]
mod tests;

pub use keyword_predicate::KeywordPredicate;
