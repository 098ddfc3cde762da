use crate::model::form::FormRecord;
use serde::{Deserialize, Serialize};

/// Which of the two forms printed on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyIndex {
    First,
    Second,
}

impl CopyIndex {
    pub const BOTH: [CopyIndex; 2] = [CopyIndex::First, CopyIndex::Second];

    pub fn label(self) -> &'static str {
        match self {
            CopyIndex::First => "第一联",
            CopyIndex::Second => "第二联",
        }
    }
}

/// The printed page: two independently editable copies of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentDocument {
    pub first: FormRecord,
    pub second: FormRecord,
}

impl PaymentDocument {
    pub fn copy(&self, index: CopyIndex) -> &FormRecord {
        match index {
            CopyIndex::First => &self.first,
            CopyIndex::Second => &self.second,
        }
    }

    pub fn copy_mut(&mut self, index: CopyIndex) -> &mut FormRecord {
        match index {
            CopyIndex::First => &mut self.first,
            CopyIndex::Second => &mut self.second,
        }
    }

    /// Overwrites the second copy with every field of the first.
    pub fn duplicate_first(&mut self) {
        self.second = self.first.clone();
    }

    pub fn copies(&self) -> [&FormRecord; 2] {
        [&self.first, &self.second]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::form::FormField;

    #[test]
    fn duplicate_copies_every_field() {
        let mut document = PaymentDocument::default();
        for field in FormField::ALL {
            document.first.set(field, format!("{}-1", field));
        }
        document.second.reason = "stale".into();

        document.duplicate_first();
        assert_eq!(document.second, document.first);
    }

    #[test]
    fn copies_are_independent_after_duplication() {
        let mut document = PaymentDocument::default();
        document.first.payee = "甲".into();
        document.duplicate_first();
        document.copy_mut(CopyIndex::Second).payee = "乙".into();
        assert_eq!(document.copy(CopyIndex::First).payee, "甲");
        assert_eq!(document.copy(CopyIndex::Second).payee, "乙");
    }
}
