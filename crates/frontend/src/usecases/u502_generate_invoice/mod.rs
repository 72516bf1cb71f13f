pub mod api;
mod view;
mod view_model;

pub use view::InvoicePage;
pub use view_model::InvoiceViewModel;
