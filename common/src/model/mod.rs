pub mod date;
pub mod document;
pub mod form;
pub mod payee;
