use crate::model::form::FormRecord;
use serde::{Deserialize, Serialize};

/// A payee lookup entry used for autofill.
///
/// Two entries are the same payee when both the name and the bank account match;
/// the bank name does not take part in identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayeeRecord {
    pub name: String,
    pub bank_account: String,
    pub bank_name: String,
}

impl PayeeRecord {
    pub fn new(
        name: impl Into<String>,
        bank_account: impl Into<String>,
        bank_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            bank_account: bank_account.into(),
            bank_name: bank_name.into(),
        }
    }

    /// Builds an entry from a form whose payee, account and bank are all filled in.
    pub fn from_form(record: &FormRecord) -> Option<Self> {
        record.has_complete_payee().then(|| {
            Self::new(
                record.payee.clone(),
                record.bank_account.clone(),
                record.bank_name.clone(),
            )
        })
    }

    pub fn same_payee(&self, name: &str, bank_account: &str) -> bool {
        self.name == name && self.bank_account == bank_account
    }
}

/// The payee lookup table.
///
/// Entries keep their insertion order. Nothing here deletes a single entry; the
/// table only grows through [`PayeeBook::remember`] or is replaced wholesale by
/// an import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PayeeBook {
    entries: Vec<PayeeRecord>,
}

impl PayeeBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[PayeeRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str, bank_account: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.same_payee(name, bank_account))
    }

    /// Appends `entry` unless the same (name, bank account) pair is already present.
    /// Returns whether the table changed.
    pub fn remember(&mut self, entry: PayeeRecord) -> bool {
        if self.contains(&entry.name, &entry.bank_account) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Remembers the payee of `record` if its payee, account and bank are all set.
    pub fn capture_from(&mut self, record: &FormRecord) -> bool {
        match PayeeRecord::from_form(record) {
            Some(entry) => self.remember(entry),
            None => false,
        }
    }

    /// Replaces every entry, as a spreadsheet import does.
    pub fn replace_all(&mut self, entries: Vec<PayeeRecord>) {
        self.entries = entries;
    }

    /// Entries whose name contains `query`, in table order, for autocomplete.
    /// An empty query matches nothing.
    pub fn matches<'a>(&'a self, query: &str, limit: usize) -> Vec<&'a PayeeRecord> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.name.to_lowercase().contains(&needle))
            .take(limit)
            .collect()
    }
}

impl From<Vec<PayeeRecord>> for PayeeBook {
    fn from(entries: Vec<PayeeRecord>) -> Self {
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn book() -> PayeeBook {
        PayeeBook::from(vec![
            PayeeRecord::new("上海甲公司", "6222 0001", "工商银行上海分行"),
            PayeeRecord::new("北京乙公司", "6228 0002", "农业银行北京分行"),
            PayeeRecord::new("上海丙公司", "6217 0003", "建设银行浦东支行"),
        ])
    }

    #[test]
    fn remembering_an_existing_pair_is_a_no_op() {
        let mut book = book();
        let before = book.clone();
        let inserted = book.remember(PayeeRecord::new("北京乙公司", "6228 0002", "另一家银行"));
        assert!(!inserted);
        assert_eq!(book, before);
    }

    #[test]
    fn same_name_with_a_new_account_is_a_new_entry() {
        let mut book = book();
        assert!(book.remember(PayeeRecord::new("北京乙公司", "6228 9999", "农业银行北京分行")));
        assert_eq!(book.len(), 4);
    }

    #[test]
    fn capture_requires_a_complete_payee() {
        let mut book = PayeeBook::new();
        let mut record = FormRecord {
            payee: "丁公司".into(),
            bank_account: "1234".into(),
            ..Default::default()
        };
        assert!(!book.capture_from(&record));

        record.bank_name = "招商银行".into();
        assert!(book.capture_from(&record));
        assert!(!book.capture_from(&record));
        assert_eq!(book.entries(), &[PayeeRecord::new("丁公司", "1234", "招商银行")]);
    }

    #[test]
    fn matches_by_substring_in_table_order() {
        let book = book();
        let names: Vec<&str> = book
            .matches("上海", 10)
            .into_iter()
            .map(|entry| entry.name.as_str())
            .collect();
        assert_eq!(names, vec!["上海甲公司", "上海丙公司"]);
        assert_eq!(book.matches("上海", 1).len(), 1);
        assert!(book.matches("  ", 10).is_empty());
    }

    #[test]
    fn replace_all_discards_previous_entries() {
        let mut book = book();
        book.replace_all(vec![PayeeRecord::new("戊", "1", "银行")]);
        assert_eq!(book.len(), 1);
        assert!(book.contains("戊", "1"));
        assert!(!book.contains("上海甲公司", "6222 0001"));
    }
}
