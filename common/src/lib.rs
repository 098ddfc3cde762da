//! Types and rules shared by the payment-request frontend and backend.
//!
//! - [`amount`]: Chinese financial-character transcription (大写金额).
//! - [`cascade`]: how editing one form field derives or clears others.
//! - [`model`]: the form, the two-copy document and the payee lookup table.
//! - [`requests`]: JSON payloads exchanged with the backend.

pub mod amount;
pub mod cascade;
pub mod model;
pub mod requests;

pub use amount::{AmountError, transcribe_amount, transcribe_value};
pub use cascade::{apply_field_change, apply_select_payee};
