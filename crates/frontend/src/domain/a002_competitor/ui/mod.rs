//! Competitor table UI Module
//!
//! - view_model.rs: таблица строк и команды редактирования
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::CompetitorTableView;
pub use view_model::CompetitorTableViewModel;
