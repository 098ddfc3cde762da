//! The payment-request form (付款申请单) and the names of its fields.
//!
//! A `FormRecord` is one copy of the paper document. Every field is plain text;
//! derived values such as the amount in words are kept consistent by the
//! cascade rules in `crate::cascade`, not by the record itself.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown form field: {0:?}")]
    UnknownField(String),
}

/// One payment-request document instance.
///
/// Fields missing from serialized input deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormRecord {
    pub department: String,
    pub year: String,
    pub month: String,
    pub day: String,
    pub serial_number: String,
    pub payee: String,
    pub bank_account: String,
    pub bank_name: String,
    pub amount_words: String,
    pub amount_digits: String,
    pub reason: String,
    pub attachments: String,

    // Signatures
    pub leader: String,
    pub finance_manager: String,
    pub department_manager: String,
    pub operator: String,
    pub accountant: String,
    pub bookkeeper: String,
    pub reviewer: String,
    pub cashier: String,
    pub maker: String,
    pub receiver: String,
}

/// Names every field of a `FormRecord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Department,
    Year,
    Month,
    Day,
    SerialNumber,
    Payee,
    BankAccount,
    BankName,
    AmountWords,
    AmountDigits,
    Reason,
    Attachments,
    Leader,
    FinanceManager,
    DepartmentManager,
    Operator,
    Accountant,
    Bookkeeper,
    Reviewer,
    Cashier,
    Maker,
    Receiver,
}

impl FormField {
    pub const ALL: [FormField; 22] = [
        FormField::Department,
        FormField::Year,
        FormField::Month,
        FormField::Day,
        FormField::SerialNumber,
        FormField::Payee,
        FormField::BankAccount,
        FormField::BankName,
        FormField::AmountWords,
        FormField::AmountDigits,
        FormField::Reason,
        FormField::Attachments,
        FormField::Leader,
        FormField::FinanceManager,
        FormField::DepartmentManager,
        FormField::Operator,
        FormField::Accountant,
        FormField::Bookkeeper,
        FormField::Reviewer,
        FormField::Cashier,
        FormField::Maker,
        FormField::Receiver,
    ];

    pub const DATE: [FormField; 3] = [FormField::Year, FormField::Month, FormField::Day];

    /// Signature boxes in the order they appear along the bottom of the form.
    pub const SIGNATURES: [FormField; 10] = [
        FormField::Leader,
        FormField::FinanceManager,
        FormField::DepartmentManager,
        FormField::Operator,
        FormField::Accountant,
        FormField::Bookkeeper,
        FormField::Reviewer,
        FormField::Cashier,
        FormField::Maker,
        FormField::Receiver,
    ];

    /// Fields wiped together when the payee is cleared.
    pub const CLEARED_WITH_PAYEE: [FormField; 9] = [
        FormField::BankAccount,
        FormField::BankName,
        FormField::Year,
        FormField::Month,
        FormField::Day,
        FormField::AmountWords,
        FormField::AmountDigits,
        FormField::Reason,
        FormField::Attachments,
    ];

    /// Wire name used in JSON and in element ids.
    pub fn as_str(self) -> &'static str {
        match self {
            FormField::Department => "department",
            FormField::Year => "year",
            FormField::Month => "month",
            FormField::Day => "day",
            FormField::SerialNumber => "serial_number",
            FormField::Payee => "payee",
            FormField::BankAccount => "bank_account",
            FormField::BankName => "bank_name",
            FormField::AmountWords => "amount_words",
            FormField::AmountDigits => "amount_digits",
            FormField::Reason => "reason",
            FormField::Attachments => "attachments",
            FormField::Leader => "leader",
            FormField::FinanceManager => "finance_manager",
            FormField::DepartmentManager => "department_manager",
            FormField::Operator => "operator",
            FormField::Accountant => "accountant",
            FormField::Bookkeeper => "bookkeeper",
            FormField::Reviewer => "reviewer",
            FormField::Cashier => "cashier",
            FormField::Maker => "maker",
            FormField::Receiver => "receiver",
        }
    }

    /// Caption printed next to the field on the paper form.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Department => "申请部门",
            FormField::Year => "年",
            FormField::Month => "月",
            FormField::Day => "日",
            FormField::SerialNumber => "编号",
            FormField::Payee => "收款单位",
            FormField::BankAccount => "账号",
            FormField::BankName => "开户行",
            FormField::AmountWords => "金额（大写）",
            FormField::AmountDigits => "金额（小写）",
            FormField::Reason => "付款事由",
            FormField::Attachments => "附件",
            FormField::Leader => "领导审批",
            FormField::FinanceManager => "财务负责人",
            FormField::DepartmentManager => "部门负责人",
            FormField::Operator => "经办人",
            FormField::Accountant => "会计",
            FormField::Bookkeeper => "记账",
            FormField::Reviewer => "复核",
            FormField::Cashier => "出纳",
            FormField::Maker => "制单",
            FormField::Receiver => "领款人",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

impl FormRecord {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Department => &self.department,
            FormField::Year => &self.year,
            FormField::Month => &self.month,
            FormField::Day => &self.day,
            FormField::SerialNumber => &self.serial_number,
            FormField::Payee => &self.payee,
            FormField::BankAccount => &self.bank_account,
            FormField::BankName => &self.bank_name,
            FormField::AmountWords => &self.amount_words,
            FormField::AmountDigits => &self.amount_digits,
            FormField::Reason => &self.reason,
            FormField::Attachments => &self.attachments,
            FormField::Leader => &self.leader,
            FormField::FinanceManager => &self.finance_manager,
            FormField::DepartmentManager => &self.department_manager,
            FormField::Operator => &self.operator,
            FormField::Accountant => &self.accountant,
            FormField::Bookkeeper => &self.bookkeeper,
            FormField::Reviewer => &self.reviewer,
            FormField::Cashier => &self.cashier,
            FormField::Maker => &self.maker,
            FormField::Receiver => &self.receiver,
        }
    }

    pub fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Department => &mut self.department,
            FormField::Year => &mut self.year,
            FormField::Month => &mut self.month,
            FormField::Day => &mut self.day,
            FormField::SerialNumber => &mut self.serial_number,
            FormField::Payee => &mut self.payee,
            FormField::BankAccount => &mut self.bank_account,
            FormField::BankName => &mut self.bank_name,
            FormField::AmountWords => &mut self.amount_words,
            FormField::AmountDigits => &mut self.amount_digits,
            FormField::Reason => &mut self.reason,
            FormField::Attachments => &mut self.attachments,
            FormField::Leader => &mut self.leader,
            FormField::FinanceManager => &mut self.finance_manager,
            FormField::DepartmentManager => &mut self.department_manager,
            FormField::Operator => &mut self.operator,
            FormField::Accountant => &mut self.accountant,
            FormField::Bookkeeper => &mut self.bookkeeper,
            FormField::Reviewer => &mut self.reviewer,
            FormField::Cashier => &mut self.cashier,
            FormField::Maker => &mut self.maker,
            FormField::Receiver => &mut self.receiver,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    pub fn clear(&mut self, field: FormField) {
        self.get_mut(field).clear();
    }

    /// `true` when year, month and day are all empty.
    pub fn date_is_empty(&self) -> bool {
        FormField::DATE.iter().all(|&field| self.get(field).is_empty())
    }

    /// `true` when payee, bank account and bank name are all filled in,
    /// i.e. the record describes a complete lookup entry.
    pub fn has_complete_payee(&self) -> bool {
        !self.payee.is_empty() && !self.bank_account.is_empty() && !self.bank_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn field_names_round_trip() {
        for field in FormField::ALL {
            assert_eq!(field.as_str().parse::<FormField>(), Ok(field));
        }
    }

    #[test]
    fn unknown_field_name_is_rejected() {
        assert_eq!(
            "payee_name".parse::<FormField>(),
            Err(FormError::UnknownField("payee_name".to_string()))
        );
    }

    #[test]
    fn wire_names_match_serde() {
        let json = serde_json::to_string(&FormField::AmountDigits).unwrap();
        assert_eq!(json, "\"amount_digits\"");
    }

    #[test]
    fn missing_fields_deserialize_as_empty() {
        let record: FormRecord = serde_json::from_str(r#"{"payee":"甲公司"}"#).unwrap();
        assert_eq!(record.payee, "甲公司");
        assert_eq!(record.bank_account, "");
        assert!(record.date_is_empty());
    }

    #[test]
    fn set_and_get_address_the_same_field() {
        let mut record = FormRecord::default();
        for field in FormField::ALL {
            record.set(field, field.as_str());
        }
        for field in FormField::ALL {
            assert_eq!(record.get(field), field.as_str());
        }
    }
}
