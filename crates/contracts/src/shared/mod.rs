pub mod date_utils;
pub mod error;
pub mod serde_utils;
