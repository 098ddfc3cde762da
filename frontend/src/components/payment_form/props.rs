//! Properties for the `PaymentFormComponent`.

use std::rc::Rc;

use common::model::document::CopyIndex;
use common::model::form::{FormField, FormRecord};
use common::model::payee::{PayeeBook, PayeeRecord};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PaymentFormProps {
    /// Which copy of the document this form shows. Only used for the caption.
    pub copy: CopyIndex,

    /// Current contents of the form.
    pub record: FormRecord,

    /// Lookup table the payee autocomplete searches.
    pub payees: Rc<PayeeBook>,

    /// Raw edit of a single field, before any cascade rule is applied.
    pub on_change: Callback<(FormField, String)>,

    /// An autocomplete entry was picked for the payee field.
    pub on_select_payee: Callback<PayeeRecord>,

    /// The user asked to store this form's payee in the lookup table.
    #[prop_or_default]
    pub on_remember_payee: Callback<()>,
}
