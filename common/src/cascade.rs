//! Field cascade rules.
//!
//! Editing one field of a `FormRecord` can derive or clear others. Both entry
//! points are pure: they take the current record and return the updated one, and
//! the current date is an argument rather than a clock read.
//!
//! | Changed field | Additional effect |
//! |---|---|
//! | amount digits | a number recomputes the amount in words, empty or too large clears it |
//! | payee, non-empty, date empty | the date is filled with today |
//! | payee, empty | bank, date, amounts, reason and attachments are cleared |
//! | payee picked from the lookup table | payee, account, bank and date are overwritten |

use crate::amount::{AmountError, transcribe_amount};
use crate::model::date::CalendarDate;
use crate::model::form::{FormField, FormRecord};
use crate::model::payee::PayeeRecord;

/// Writes `value` into `field` and applies the cascade rules for that field.
///
/// An amount that does not parse leaves the amount in words as it was. A number
/// too large to transcribe clears them, so they never describe another amount.
pub fn apply_field_change(
    record: &FormRecord,
    field: FormField,
    value: &str,
    today: CalendarDate,
) -> FormRecord {
    let mut next = record.clone();
    next.set(field, value);

    match field {
        FormField::AmountDigits => {
            if value.trim().is_empty() {
                next.amount_words.clear();
            } else {
                match transcribe_amount(value) {
                    Ok(words) => next.amount_words = words,
                    Err(AmountError::OutOfRange(_)) => next.amount_words.clear(),
                    Err(AmountError::InvalidAmount(_)) => {}
                }
            }
        }
        FormField::Payee if value.is_empty() => {
            for dependent in FormField::CLEARED_WITH_PAYEE {
                next.clear(dependent);
            }
        }
        FormField::Payee if next.date_is_empty() => fill_date(&mut next, today),
        _ => {}
    }

    next
}

/// Applies an autocomplete pick: payee, account and bank come from `entry` and
/// the date is set to `today` whatever it held before.
pub fn apply_select_payee(
    record: &FormRecord,
    entry: &PayeeRecord,
    today: CalendarDate,
) -> FormRecord {
    let mut next = record.clone();
    next.payee = entry.name.clone();
    next.bank_account = entry.bank_account.clone();
    next.bank_name = entry.bank_name.clone();
    fill_date(&mut next, today);
    next
}

fn fill_date(record: &mut FormRecord, today: CalendarDate) {
    for (field, value) in FormField::DATE.into_iter().zip(today.to_field_values()) {
        record.set(field, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TODAY: CalendarDate = CalendarDate {
        year: 2024,
        month: 5,
        day: 20,
    };

    #[test]
    fn invalid_amount_keeps_previous_words() {
        let record = FormRecord {
            amount_digits: "12".into(),
            amount_words: "壹拾贰元整".into(),
            ..Default::default()
        };
        let next = apply_field_change(&record, FormField::AmountDigits, "12x", TODAY);
        assert_eq!(next.amount_digits, "12x");
        assert_eq!(next.amount_words, "壹拾贰元整");
    }

    #[test]
    fn whitespace_amount_clears_words() {
        let record = FormRecord {
            amount_words: "壹元整".into(),
            ..Default::default()
        };
        let next = apply_field_change(&record, FormField::AmountDigits, " ", TODAY);
        assert_eq!(next.amount_words, "");
    }

    #[test]
    fn other_fields_are_plain_writes() {
        let record = FormRecord::default();
        let next = apply_field_change(&record, FormField::Reason, "差旅费", TODAY);
        assert_eq!(
            next,
            FormRecord {
                reason: "差旅费".into(),
                ..Default::default()
            }
        );
    }
}
