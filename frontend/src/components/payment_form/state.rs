/// Local UI state of one form copy.
pub struct PaymentFormComponent {
    /// Whether the payee suggestion list is shown.
    pub suggestions_open: bool,

    /// Suggestion selected with the arrow keys, as an index into the current matches.
    pub highlighted: Option<usize>,
}

impl PaymentFormComponent {
    pub fn new() -> Self {
        Self {
            suggestions_open: false,
            highlighted: None,
        }
    }

    pub fn close_suggestions(&mut self) {
        self.suggestions_open = false;
        self.highlighted = None;
    }
}
