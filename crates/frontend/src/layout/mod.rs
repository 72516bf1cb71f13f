pub mod events;
pub mod global_context;
pub mod navbar;
pub mod panel;
pub mod shell;

pub use events::{use_app_controller, AppController, AppEvent};
pub use global_context::AppGlobalContext;
pub use panel::Panel;
pub use shell::Shell;
