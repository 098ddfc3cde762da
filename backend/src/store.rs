//! SQLite persistence for the working document and the payee lookup table.
//!
//! The document is a single row holding the two form copies as JSON. Payees are
//! stored one per row; `position` keeps the insertion order the autocomplete
//! list relies on.
//!
//! Every call opens its own connection, the same way the request handlers did
//! before a pool was ever needed.

use crate::error::Result;
use common::model::document::PaymentDocument;
use common::model::payee::{PayeeBook, PayeeRecord};
use log::info;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::PathBuf;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS documents (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    body TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS payees (
    position INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    account TEXT NOT NULL,
    bank TEXT NOT NULL
);
";

#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn connect(&self) -> Result<Connection> {
        Ok(Connection::open(&self.path)?)
    }

    /// Creates the tables if they do not exist yet.
    pub fn init(&self) -> Result<()> {
        self.connect()?.execute_batch(SCHEMA)?;
        info!("Database ready at {}", self.path.display());
        Ok(())
    }

    /// The saved document, or an empty one if nothing was saved yet.
    pub fn load_document(&self) -> Result<PaymentDocument> {
        let conn = self.connect()?;
        let body: Option<String> = conn
            .query_row("SELECT body FROM documents WHERE id = 1", [], |row| {
                row.get(0)
            })
            .optional()?;

        match body {
            Some(body) => Ok(serde_json::from_str(&body)?),
            None => Ok(PaymentDocument::default()),
        }
    }

    pub fn save_document(&self, document: &PaymentDocument) -> Result<()> {
        let body = serde_json::to_string(document)?;
        self.connect()?.execute(
            "INSERT OR REPLACE INTO documents (id, body, updated_at)
             VALUES (1, ?1, datetime('now'))",
            params![body],
        )?;
        Ok(())
    }

    pub fn load_payees(&self) -> Result<PayeeBook> {
        read_payees(&self.connect()?)
    }

    /// Appends every candidate whose (name, bank account) pair is not stored yet.
    /// Returns how many entries were added.
    pub fn remember_payees(
        &self,
        candidates: impl IntoIterator<Item = PayeeRecord>,
    ) -> Result<usize> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let mut book = read_payees(&tx)?;

        let mut inserted = 0;
        for entry in candidates {
            if book.remember(entry.clone()) {
                insert_payee(&tx, &entry)?;
                inserted += 1;
            }
        }
        tx.commit()?;

        if inserted > 0 {
            info!("Remembered {} new payee(s)", inserted);
        }
        Ok(inserted)
    }

    /// Replaces the whole payee table. Returns the number of stored entries.
    pub fn replace_payees(&self, entries: &[PayeeRecord]) -> Result<usize> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM payees", [])?;
        for entry in entries {
            insert_payee(&tx, entry)?;
        }
        tx.commit()?;
        Ok(entries.len())
    }
}

fn read_payees(conn: &Connection) -> Result<PayeeBook> {
    let mut stmt = conn.prepare("SELECT name, account, bank FROM payees ORDER BY position")?;
    let entries = stmt
        .query_map([], |row| {
            Ok(PayeeRecord {
                name: row.get(0)?,
                bank_account: row.get(1)?,
                bank_name: row.get(2)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(PayeeBook::from(entries))
}

fn insert_payee(conn: &Connection, entry: &PayeeRecord) -> Result<()> {
    conn.execute(
        "INSERT INTO payees (name, account, bank) VALUES (?1, ?2, ?3)",
        params![entry.name, entry.bank_account, entry.bank_name],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn store() -> (TempDir, Store) {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().join("test.sqlite"));
        store.init().unwrap();
        (dir, store)
    }

    #[test]
    fn missing_document_loads_empty() {
        let (_dir, store) = store();
        assert_eq!(store.load_document().unwrap(), PaymentDocument::default());
    }

    #[test]
    fn document_survives_a_save() {
        let (_dir, store) = store();
        let mut document = PaymentDocument::default();
        document.first.payee = "甲公司".into();
        document.second.amount_digits = "12.5".into();

        store.save_document(&document).unwrap();
        store.save_document(&document).unwrap();
        assert_eq!(store.load_document().unwrap(), document);
    }

    #[test]
    fn remember_skips_known_pairs() {
        let (_dir, store) = store();
        let entry = PayeeRecord::new("甲公司", "6222", "工商银行");
        assert_eq!(store.remember_payees([entry.clone()]).unwrap(), 1);
        let second = PayeeRecord::new("乙公司", "6228", "农业银行");
        assert_eq!(store.remember_payees([entry.clone(), second]).unwrap(), 1);

        let names: Vec<String> = store
            .load_payees()
            .unwrap()
            .entries()
            .iter()
            .map(|entry| entry.name.clone())
            .collect();
        assert_eq!(names, vec!["甲公司", "乙公司"]);
    }

    #[test]
    fn duplicate_candidates_in_one_batch_are_stored_once() {
        let (_dir, store) = store();
        let entry = PayeeRecord::new("甲公司", "6222", "工商银行");
        assert_eq!(store.remember_payees([entry.clone(), entry]).unwrap(), 1);
        assert_eq!(store.load_payees().unwrap().len(), 1);
    }

    #[test]
    fn replace_discards_previous_table() {
        let (_dir, store) = store();
        store
            .remember_payees([PayeeRecord::new("旧", "1", "银行")])
            .unwrap();
        let imported = vec![
            PayeeRecord::new("新一", "2", "银行"),
            PayeeRecord::new("新二", "3", "银行"),
        ];
        assert_eq!(store.replace_payees(&imported).unwrap(), 2);
        assert_eq!(store.load_payees().unwrap().entries(), imported.as_slice());
    }
}
