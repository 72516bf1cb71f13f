pub mod aggregate;
pub mod table;

pub use aggregate::{CompetitorField, CompetitorRow};
pub use table::{CompetitorTable, RowId};
