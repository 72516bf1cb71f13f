//! Company directory UI Module
//!
//! - view_model.rs: список компаний и команда обновления
//! - view.rs: список на панели "Empresas" и выпадающий список в форме fatura

mod view;
mod view_model;

pub use view::{CompanyList, CompanySelect};
pub use view_model::CompanyDirectoryViewModel;
