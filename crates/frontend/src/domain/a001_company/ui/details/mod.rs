//! New company UI Module
//!
//! Simplified MVVM pattern implementation:
//! - view_model.rs: ViewModel with commands (save, CNPJ lookup)
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::CompanyDetails;
pub use view_model::CompanyDetailsViewModel;
