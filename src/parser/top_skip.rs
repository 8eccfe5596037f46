use crate::parser::{Keyword, ParseError};

/// Parses the single numeric token that follows `top` or `skip`. A missing
/// value (end of input or another keyword) fails the same way a malformed
/// one does.
pub fn get_row_count(clause: &'static str, sub_tokens: &[&str]) -> Result<u64, ParseError> {
    let value = sub_tokens
        .first()
        .filter(|token| Keyword::classify(token).is_none());

    let Some(value) = value else {
        return ParseError::InvalidNumericClause { clause, value: String::new() }.err();
    };

    value.parse::<u64>().map_err(|_| ParseError::InvalidNumericClause {
        clause,
        value: (*value).to_string(),
    })
}
