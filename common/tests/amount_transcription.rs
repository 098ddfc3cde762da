use common::amount::{AmountError, ZERO_AMOUNT, transcribe_amount, transcribe_value};
use pretty_assertions::assert_eq;

fn words(input: &str) -> String {
    transcribe_amount(input).unwrap()
}

#[test]
fn zero_amount_is_exact() {
    assert_eq!(transcribe_value(0.0).unwrap(), "零元整");
    assert_eq!(words("0"), ZERO_AMOUNT);
    assert_eq!(words("0.00"), ZERO_AMOUNT);
    assert_eq!(words(""), ZERO_AMOUNT);
}

#[test]
fn internal_zeros_collapse_to_one_marker() {
    assert_eq!(transcribe_value(1005.0).unwrap(), "壹仟零伍元整");
    assert_eq!(words("1010"), "壹仟零壹拾元整");
    assert_eq!(words("10001"), "壹万零壹元整");
    assert_eq!(words("10100"), "壹万零壹佰元整");
    assert_eq!(words("10000100"), "壹仟万零壹佰元整");
}

#[test]
fn trailing_zeros_produce_no_marker() {
    assert_eq!(words("10"), "壹拾元整");
    assert_eq!(words("1200"), "壹仟贰佰元整");
    assert_eq!(words("12000000"), "壹仟贰佰万元整");
}

#[test]
fn group_units_at_each_boundary() {
    assert_eq!(words("10000"), "壹万元整");
    assert_eq!(transcribe_value(100000000.0).unwrap(), "壹亿元整");
    assert_eq!(words("100010000"), "壹亿零壹万元整");
    assert_eq!(words("1000000000000"), "壹万亿元整");
    assert_eq!(
        words("123456789"),
        "壹亿贰仟叁佰肆拾伍万陆仟柒佰捌拾玖元整"
    );
}

#[test]
fn fraction_uses_sub_units() {
    assert_eq!(
        transcribe_value(1234.56).unwrap(),
        "壹仟贰佰叁拾肆元伍角陆分"
    );
    assert_eq!(words("1.50"), "壹元伍角");
    assert_eq!(words("100.00"), "壹佰元整");
}

#[test]
fn zero_sub_unit_is_suppressed() {
    assert_eq!(words("1.05"), "壹元伍分");
    assert_eq!(words("0.05"), "伍分");
}

#[test]
fn fraction_only_amount_has_no_main_unit() {
    assert_eq!(words("0.5"), "伍角");
    assert_eq!(words(".36"), "叁角陆分");
}

#[test]
fn extra_precision_is_truncated_not_rounded() {
    assert_eq!(words("1.999"), "壹元玖角玖分");
    assert_eq!(words("0.001"), ZERO_AMOUNT);
}

#[test]
fn float_input_has_no_binary_artifacts() {
    assert_eq!(transcribe_value(0.29).unwrap(), "贰角玖分");
    assert_eq!(transcribe_value(19.99).unwrap(), "壹拾玖元玖角玖分");
}

#[test]
fn sign_is_ignored() {
    assert_eq!(words("-12.5"), "壹拾贰元伍角");
    assert_eq!(transcribe_value(-3.0).unwrap(), "叁元整");
}

#[test]
fn exponent_notation_is_numeric() {
    assert_eq!(words("1e5"), "壹拾万元整");
    assert_eq!(words(" 2.5E1 "), "贰拾伍元整");
}

#[test]
fn canonical_digit_set() {
    assert_eq!(words("3"), "叁元整");
    let all: String = (1..=9)
        .map(|d| words(&d.to_string()).chars().next().unwrap())
        .collect();
    assert_eq!(all, "壹贰叁肆伍陆柒捌玖");
}

#[test]
fn non_numeric_input_fails() {
    assert_eq!(
        transcribe_amount("abc"),
        Err(AmountError::InvalidAmount("abc".to_string()))
    );
    assert!(matches!(transcribe_amount("12元"), Err(AmountError::InvalidAmount(_))));
    assert!(matches!(transcribe_amount("inf"), Err(AmountError::InvalidAmount(_))));
    assert!(matches!(transcribe_value(f64::NAN), Err(AmountError::InvalidAmount(_))));
}

#[test]
fn widest_supported_amount() {
    assert_eq!(
        words("9999999999999999.99"),
        "玖仟玖佰玖拾玖万玖仟玖佰玖拾玖亿玖仟玖佰玖拾玖万玖仟玖佰玖拾玖元玖角玖分"
    );
    assert!(matches!(
        transcribe_amount("10000000000000000"),
        Err(AmountError::OutOfRange(_))
    ));
}

#[test]
fn ten_thousand_hundred_million_group_reads_wan_yi() {
    assert_eq!(words("1200000000000"), "壹万贰仟亿元整");
    assert_eq!(words("1000100000000"), "壹万零壹亿元整");
    assert_eq!(words("1000000000005"), "壹万亿零伍元整");
    assert_eq!(words("12000000000000.5"), "壹拾贰万亿元伍角");
}
