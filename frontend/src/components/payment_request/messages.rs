use common::model::document::{CopyIndex, PaymentDocument};
use common::model::form::FormField;
use common::model::payee::{PayeeBook, PayeeRecord};

pub enum Msg {
    DocumentLoaded(PaymentDocument),
    PayeesLoaded(PayeeBook),
    ReloadPayees,
    FieldChanged(CopyIndex, FormField, String),
    PayeeSelected(CopyIndex, PayeeRecord),
    RememberPayee(CopyIndex),
    DuplicateFirst,
    Save,
    SaveSucceeded(String),
    OpenImportDialog,
    ImportFileSelected(web_sys::File),
    Export,
    ExportReady(String),
    ExportFailed,
    CloseExport,
}
