//! CSV form of the payee lookup table.
//!
//! Import accepts what spreadsheet programs produce when saving as CSV: an
//! optional UTF-8 BOM, a header row, and `,` `;` tab or `|` as delimiter. The
//! payee, account and bank columns are found by header name and fall back to
//! the first three columns when a header is not recognised.

use common::model::payee::PayeeRecord;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::error::Result;

const BOM: &str = "\u{feff}";
const DELIMITERS: [u8; 4] = [b',', b';', b'\t', b'|'];

const NAME_HEADERS: [&str; 6] = ["收款人", "收款单位", "收款人名称", "户名", "payee", "name"];
const ACCOUNT_HEADERS: [&str; 5] = ["账号", "银行账号", "收款账号", "account", "bank_account"];
const BANK_HEADERS: [&str; 5] = ["开户行", "开户银行", "银行", "bank", "bank_name"];

pub const EXPORT_HEADER: [&str; 3] = ["收款人", "账号", "开户行"];

/// Column positions of the three payee fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PayeeColumns {
    name: usize,
    account: usize,
    bank: usize,
}

impl PayeeColumns {
    fn locate(headers: &StringRecord) -> Self {
        let titles: Vec<String> = headers.iter().map(normalize_title).collect();
        let find = |candidates: &[&str], fallback: usize| {
            titles
                .iter()
                .position(|title| candidates.contains(&title.as_str()))
                .unwrap_or(fallback)
        };
        Self {
            name: find(&NAME_HEADERS, 0),
            account: find(&ACCOUNT_HEADERS, 1),
            bank: find(&BANK_HEADERS, 2),
        }
    }
}

fn normalize_cell(cell: &str) -> String {
    cell.trim_start_matches(BOM)
        .replace('\u{00A0}', " ")
        .trim()
        .to_string()
}

fn normalize_title(cell: &str) -> String {
    normalize_cell(cell).to_lowercase()
}

/// Picks the delimiter that occurs most often in the header line, preferring
/// the comma on ties and when none occurs.
fn detect_delimiter(data: &str) -> u8 {
    let header_line = data.lines().next().unwrap_or_default();
    let mut best = (b',', 0);
    for delimiter in DELIMITERS {
        let count = header_line.matches(delimiter as char).count();
        if count > best.1 {
            best = (delimiter, count);
        }
    }
    best.0
}

fn cell(row: &StringRecord, index: usize) -> String {
    row.get(index).map(normalize_cell).unwrap_or_default()
}

/// Parses an uploaded CSV into payee entries. Rows without a payee name are skipped.
pub fn read_payees(data: &[u8]) -> Result<Vec<PayeeRecord>> {
    let text = String::from_utf8_lossy(data);
    let text = text.trim_start_matches(BOM);

    let mut reader = ReaderBuilder::new()
        .delimiter(detect_delimiter(text))
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns = PayeeColumns::locate(reader.headers()?);

    let mut entries = Vec::new();
    for row in reader.records() {
        let row = row?;
        let name = cell(&row, columns.name);
        if name.is_empty() {
            continue;
        }
        entries.push(PayeeRecord::new(
            name,
            cell(&row, columns.account),
            cell(&row, columns.bank),
        ));
    }
    Ok(entries)
}

/// Writes entries as a comma separated file with a BOM, which spreadsheet
/// programs need to detect UTF-8.
pub fn write_payees(entries: &[PayeeRecord]) -> Result<Vec<u8>> {
    let mut out = BOM.as_bytes().to_vec();
    {
        let mut writer = WriterBuilder::new().from_writer(&mut out);
        writer.write_record(EXPORT_HEADER)?;
        for entry in entries {
            writer.write_record([&entry.name, &entry.bank_account, &entry.bank_name])?;
        }
        writer.flush()?;
    }
    Ok(out)
}
