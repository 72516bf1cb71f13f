pub mod form_field;

pub use form_field::form_field;
