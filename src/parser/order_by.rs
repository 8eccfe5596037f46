use crate::parser::{ASCENDING, DESCENDING, Keyword, ParseError};

/// Builds the `$orderby` value: a sort column plus an optional direction.
/// No direction means the service default applies.
pub fn get_order_by(sub_tokens: &[&str]) -> Result<String, ParseError> {
    let mut iter = sub_tokens
        .iter()
        .take_while(|token| Keyword::classify(token).is_none());

    let Some(column) = iter.next() else {
        return ParseError::OrderByColumnRequired.err();
    };

    let mut orderby = (*column).to_string();

    if let Some(direction) = iter.next() {
        if !direction.eq_ignore_ascii_case(ASCENDING) && !direction.eq_ignore_ascii_case(DESCENDING) {
            return ParseError::InvalidSortDirection((*direction).to_string()).err();
        }
        orderby.push(' ');
        orderby.push_str(&direction.to_ascii_lowercase());
    }

    if let Some(extra) = iter.next() {
        return ParseError::InvalidSortDirection((*extra).to_string()).err();
    }

    Ok(orderby)
}
