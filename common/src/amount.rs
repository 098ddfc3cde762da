//! Chinese financial-character transcription of monetary amounts (大写金额).
//!
//! Amounts are written with the anti-tampering digit set 零壹贰叁肆伍陆柒捌玖,
//! grouped by four digits (万 / 亿 / 万亿) and terminated by 元 followed by the
//! sub-units 角 and 分, or by 整 when there are none.
//!
//! The fourth group is written 万 on top of the 亿 group, as in 壹万贰仟亿, and
//! carries 亿 itself when the 亿 group is empty: 10^12 is 壹万亿, never 兆.
//!
//! The transcription works on the decimal text of the amount rather than on a
//! float, so fractional digits beyond the hundredths place are truncated exactly
//! and never rounded.

use thiserror::Error;

const DIGITS: [char; 10] = ['零', '壹', '贰', '叁', '肆', '伍', '陆', '柒', '捌', '玖'];
const POSITION_UNITS: [&str; 4] = ["", "拾", "佰", "仟"];
const GROUP_UNITS: [&str; 4] = ["", "万", "亿", "万"];
const HUNDRED_MILLION_GROUP: usize = 2;
const SUB_UNITS: [char; 2] = ['角', '分'];

const ZERO_MARKER: char = '零';
const MAIN_UNIT: char = '元';
const EXACT_MARKER: char = '整';

/// Widest integer part that still has a group unit (up to 万亿).
pub const MAX_INTEGER_DIGITS: usize = 4 * GROUP_UNITS.len();

/// Transcription of the zero amount.
pub const ZERO_AMOUNT: &str = "零元整";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// The input is neither empty nor a finite number.
    #[error("invalid amount: {0:?}")]
    InvalidAmount(String),

    /// The integer part has more digits than the largest group unit covers.
    #[error("amount out of range: {0} has more than {MAX_INTEGER_DIGITS} integer digits")]
    OutOfRange(String),
}

/// An amount split into its integer digits and its two truncated sub-unit digits.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SplitAmount {
    /// Decimal digits of the integer part without leading zeros. Empty for zero.
    integer: Vec<u8>,
    tenths: u8,
    hundredths: u8,
}

impl SplitAmount {
    fn zero() -> Self {
        Self {
            integer: Vec::new(),
            tenths: 0,
            hundredths: 0,
        }
    }

    fn has_fraction(&self) -> bool {
        self.tenths != 0 || self.hundredths != 0
    }
}

/// Transcribes an amount given as text, e.g. the content of the amount input.
///
/// Empty or whitespace-only input is the zero amount. The sign is ignored.
///
/// ```
/// use common::amount::transcribe_amount;
///
/// assert_eq!(transcribe_amount("1005").unwrap(), "壹仟零伍元整");
/// assert_eq!(transcribe_amount("1234.56").unwrap(), "壹仟贰佰叁拾肆元伍角陆分");
/// assert!(transcribe_amount("abc").is_err());
/// ```
pub fn transcribe_amount(input: &str) -> Result<String, AmountError> {
    let amount = parse_amount(input)?;
    Ok(render(&amount))
}

/// Transcribes a numeric amount.
///
/// The value is read through its shortest round-trip decimal form, so `0.29`
/// is transcribed as 贰角玖分 rather than suffering binary float error.
pub fn transcribe_value(value: f64) -> Result<String, AmountError> {
    let amount = split_value(value)?;
    Ok(render(&amount))
}

/// Returns `true` when `input` is a non-empty amount the transcription accepts.
pub fn is_amount(input: &str) -> bool {
    !input.trim().is_empty() && parse_amount(input).is_ok()
}

fn parse_amount(input: &str) -> Result<SplitAmount, AmountError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(SplitAmount::zero());
    }

    if is_plain_decimal(trimmed) {
        return split_decimal(trimmed);
    }

    // Exponent notation and the like still count as numbers.
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => split_value(value),
        _ => Err(AmountError::InvalidAmount(input.to_string())),
    }
}

fn split_value(value: f64) -> Result<SplitAmount, AmountError> {
    if !value.is_finite() {
        return Err(AmountError::InvalidAmount(value.to_string()));
    }
    // `Display` for f64 never uses exponent notation.
    split_decimal(&value.abs().to_string())
}

/// `[+-]? digits [. digits]` with at least one digit overall.
fn is_plain_decimal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    all_digits(integer) && all_digits(fraction) && !(integer.is_empty() && fraction.is_empty())
}

fn split_decimal(text: &str) -> Result<SplitAmount, AmountError> {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let integer: Vec<u8> = integer
        .trim_start_matches('0')
        .bytes()
        .map(|b| b - b'0')
        .collect();
    if integer.len() > MAX_INTEGER_DIGITS {
        return Err(AmountError::OutOfRange(text.to_string()));
    }

    let mut fraction = fraction.bytes().map(|b| b - b'0');
    Ok(SplitAmount {
        integer,
        tenths: fraction.next().unwrap_or(0),
        hundredths: fraction.next().unwrap_or(0),
    })
}

fn render(amount: &SplitAmount) -> String {
    let fraction = transcribe_fraction(amount.tenths, amount.hundredths);
    if amount.integer.is_empty() {
        return if amount.has_fraction() {
            fraction
        } else {
            ZERO_AMOUNT.to_string()
        };
    }

    let mut out = transcribe_integer(&amount.integer);
    out.push_str(&fraction);
    out
}

fn transcribe_fraction(tenths: u8, hundredths: u8) -> String {
    let mut out = String::new();
    for (digit, unit) in [tenths, hundredths].into_iter().zip(SUB_UNITS) {
        if digit != 0 {
            out.push(DIGITS[digit as usize]);
            out.push(unit);
        }
    }
    if out.is_empty() {
        out.push(EXACT_MARKER);
    }
    out
}

/// Transcribes a non-empty integer digit sequence, ending with 元.
fn transcribe_integer(digits: &[u8]) -> String {
    let group_count = digits.len().div_ceil(4);
    let mut raw = String::new();

    for group in (0..group_count).rev() {
        let end = digits.len() - group * 4;
        let section = &digits[end.saturating_sub(4)..end];

        let mut part = String::new();
        for (offset, &digit) in section.iter().enumerate() {
            if digit == 0 {
                part.push(ZERO_MARKER);
            } else {
                part.push(DIGITS[digit as usize]);
                part.push_str(POSITION_UNITS[section.len() - 1 - offset]);
            }
        }

        let part = part.trim_end_matches(ZERO_MARKER);
        if part.is_empty() {
            raw.push(ZERO_MARKER);
        } else {
            raw.push_str(part);
            raw.push_str(GROUP_UNITS[group]);
            if group > HUNDRED_MILLION_GROUP && group_is_zero(digits, HUNDRED_MILLION_GROUP) {
                raw.push_str(GROUP_UNITS[HUNDRED_MILLION_GROUP]);
            }
        }
    }

    raw.push(MAIN_UNIT);
    collapse_zero_markers(&raw)
}

/// Whether the 4-digit group `group` (0 = lowest) holds only zeros.
fn group_is_zero(digits: &[u8], group: usize) -> bool {
    let end = digits.len().saturating_sub(group * 4);
    digits[end.saturating_sub(4)..end].iter().all(|&d| d == 0)
}

/// Folds every run of zero-markers into one and drops a zero-marker that
/// directly precedes the main unit.
fn collapse_zero_markers(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == ZERO_MARKER {
            while chars.peek() == Some(&ZERO_MARKER) {
                chars.next();
            }
            if chars.peek() == Some(&MAIN_UNIT) {
                continue;
            }
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn collapses_runs_and_zero_before_main_unit() {
        assert_eq!(collapse_zero_markers("壹亿零零元"), "壹亿元");
        assert_eq!(collapse_zero_markers("壹仟零零伍元"), "壹仟零伍元");
        assert_eq!(collapse_zero_markers("壹万零零零壹元"), "壹万零壹元");
    }

    #[test]
    fn plain_decimal_detection() {
        assert!(is_plain_decimal("12"));
        assert!(is_plain_decimal("-12.50"));
        assert!(is_plain_decimal(".5"));
        assert!(is_plain_decimal("3."));
        assert!(!is_plain_decimal("."));
        assert!(!is_plain_decimal("1e5"));
        assert!(!is_plain_decimal("1,000"));
    }

    #[test]
    fn split_truncates_extra_fraction_digits() {
        let split = split_decimal("1.999").unwrap();
        assert_eq!(split.integer, vec![1]);
        assert_eq!((split.tenths, split.hundredths), (9, 9));
    }

    #[test]
    fn split_strips_leading_zeros() {
        assert_eq!(split_decimal("007").unwrap().integer, vec![7]);
        assert!(split_decimal("000").unwrap().integer.is_empty());
    }

    #[test]
    fn empty_input_is_zero_but_not_an_amount() {
        assert_eq!(transcribe_amount("   ").unwrap(), ZERO_AMOUNT);
        assert!(!is_amount(""));
        assert!(is_amount("0"));
    }
}
