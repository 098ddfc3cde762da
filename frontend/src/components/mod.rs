pub mod payment_form;
pub mod payment_request;
