use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Validation error: {field} must not be blank")]
    Blank {
        field: &'static str
    },
    #[error("Validation error: {field} must be at most {max} characters")]
    TooLong {
        field: &'static str,
        max: usize
    },
    #[error("Validation error: {field} contains invalid characters: {value}")]
    InvalidCharacters {
        field: &'static str,
        value: String
    },
    #[error("Validation error: Amount has an invalid format: {0}")]
    InvalidAmount(String),
    #[error("Validation error: Amount must not be negative: {0}")]
    NegativeAmount(String),
    #[error("Validation error: Amount has more than two decimal places: {0}")]
    TooManyDecimalPlaces(String),
    #[error("Validation error: Amount is larger than 999999999999.99: {0}")]
    AmountTooLarge(String),
    #[error("Validation error: Category [{0}] is already present")]
    DuplicateCategory(String),
    #[error("Validation error: A transaction can have at most {0} categories")]
    TooManyCategories(usize),
    #[error("Validation error: Date time is not in a recognised format: {0}")]
    InvalidDateTime(String),
    #[error("Validation error: Transaction type must be 'expense' or 'income': {0}")]
    InvalidType(String)
}
