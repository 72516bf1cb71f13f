pub mod aggregate;
pub mod outcome;

pub use aggregate::{Company, CompanyField};
pub use outcome::{apply_refresh, SaveOutcome};
