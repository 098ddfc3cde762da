use serde::{Deserialize, Serialize};

/// Response of `POST /api/payees/add`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddPayeeResponse {
    /// `false` when the (name, bank account) pair was already in the table.
    pub inserted: bool,
}

/// Response of `POST /api/payees/import`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    /// Number of entries now in the lookup table.
    pub imported: usize,
}
