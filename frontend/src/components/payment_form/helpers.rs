use common::model::payee::PayeeRecord;

use super::props::PaymentFormProps;

/// Most entries the payee suggestion list shows at once.
pub const SUGGESTION_LIMIT: usize = 8;

/// Lookup entries matching what is typed in the payee field.
pub fn suggestions(props: &PaymentFormProps) -> Vec<PayeeRecord> {
    props
        .payees
        .matches(&props.record.payee, SUGGESTION_LIMIT)
        .into_iter()
        .cloned()
        .collect()
}

/// Moves the keyboard highlight by `delta`, wrapping around a list of `len` items.
/// Nothing is highlighted in an empty list.
pub fn next_highlight(current: Option<usize>, delta: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let len = len as isize;
    let next = match current {
        Some(index) => index as isize + delta,
        None if delta < 0 => len - 1,
        None => 0,
    };
    Some(next.rem_euclid(len) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn highlight_starts_at_the_edges() {
        assert_eq!(next_highlight(None, 1, 3), Some(0));
        assert_eq!(next_highlight(None, -1, 3), Some(2));
    }

    #[test]
    fn highlight_wraps_around() {
        assert_eq!(next_highlight(Some(2), 1, 3), Some(0));
        assert_eq!(next_highlight(Some(0), -1, 3), Some(2));
        assert_eq!(next_highlight(Some(1), 1, 3), Some(2));
    }

    #[test]
    fn empty_list_has_no_highlight() {
        assert_eq!(next_highlight(Some(4), 1, 0), None);
    }
}
