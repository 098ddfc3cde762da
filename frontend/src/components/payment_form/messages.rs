use common::model::form::FormField;
use common::model::payee::PayeeRecord;

#[derive(Clone)]
pub enum Msg {
    Edit(FormField, String),
    OpenSuggestions,
    CloseSuggestions,
    MoveHighlight(isize),
    PickHighlighted,
    Pick(PayeeRecord),
    RememberPayee,
}
