mod amount;
mod category;
mod date_time;
mod errors;
mod text;

pub use amount::Amount;
pub use category::{Categories, Category};
pub use date_time::{DateTime, YearMonth};
pub use errors::ValidationError;
pub use text::{Location, Name};
