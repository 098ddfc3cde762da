//! Component state of the payment request editor.

use std::rc::Rc;

use common::model::document::PaymentDocument;
use common::model::payee::PayeeBook;
use yew::prelude::*;

use super::helpers::document_md5;

pub struct PaymentRequestComponent {
    /// Both form copies as currently edited.
    pub document: PaymentDocument,

    /// Payee lookup table, shared with both form copies.
    pub payees: Rc<PayeeBook>,

    /// MD5 of the serialized document at the last load or save.
    pub original_md5: Option<String>,

    /// Guard for the one-time load on first render.
    pub loaded: bool,

    /// An export request is in flight.
    pub exporting: bool,

    /// Object URL of the last exported PNG, revoked when the preview closes.
    pub export_url: Option<String>,

    pub export_dialog_ref: NodeRef,

    /// Hidden `<input type="file">` behind the CSV import button.
    pub import_input_ref: NodeRef,
}

impl PaymentRequestComponent {
    pub fn new() -> Self {
        Self {
            document: PaymentDocument::default(),
            payees: Rc::new(PayeeBook::new()),
            original_md5: None,
            loaded: false,
            exporting: false,
            export_url: None,
            export_dialog_ref: Default::default(),
            import_input_ref: Default::default(),
        }
    }

    /// Takes the document read from the backend. Edits made before it arrived
    /// win: they are kept and stay marked as unsaved against the loaded copy.
    /// Returns whether the loaded document replaced the one on screen.
    pub fn accept_loaded(&mut self, loaded: PaymentDocument) -> bool {
        let hash = document_md5(&loaded);
        let edited_first =
            self.original_md5.is_none() && self.document != PaymentDocument::default();
        self.original_md5 = Some(hash);
        if edited_first {
            return false;
        }
        self.document = loaded;
        true
    }

    /// True when the document differs from what was last loaded or saved.
    pub fn is_dirty(&self) -> bool {
        self.original_md5
            .as_ref()
            .is_some_and(|orig| orig != &document_md5(&self.document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn saved() -> PaymentDocument {
        let mut document = PaymentDocument::default();
        document.first.payee = "甲公司".into();
        document
    }

    #[test]
    fn loaded_document_replaces_an_untouched_editor() {
        let mut component = PaymentRequestComponent::new();
        assert!(component.accept_loaded(saved()));
        assert_eq!(component.document, saved());
        assert!(!component.is_dirty());
    }

    #[test]
    fn edits_made_before_the_load_are_kept() {
        let mut component = PaymentRequestComponent::new();
        component.document.second.reason = "差旅费".into();

        assert!(!component.accept_loaded(saved()));
        assert_eq!(component.document.second.reason, "差旅费");
        assert_eq!(component.document.first.payee, "");
        assert!(component.is_dirty());
    }
}
