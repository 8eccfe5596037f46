use crate::parser::{ALL, Keyword, ParseError};

/// Builds the projection list for `$select` from the tokens after `select`.
///
/// `top` and `skip` may sit between `select` and the column list
/// (`select top 10 * from t`), so those two keywords step over their value
/// token instead of ending the clause. A `*` wins immediately; any other
/// keyword ends the scan.
pub fn get_column_names(sub_tokens: &[&str]) -> Result<String, ParseError> {
    let mut column_names = String::new();

    let mut i = 0;
    while i < sub_tokens.len() {
        let token = sub_tokens[i];
        match Keyword::classify(token) {
            Some(Keyword::Top | Keyword::Skip) => {
                i += 1;
                if i < sub_tokens.len() && Keyword::classify(sub_tokens[i]).is_none() {
                    i += 1;
                }
            }
            Some(_) => break,
            None => {
                if token == ALL {
                    return Ok(ALL.to_string());
                }
                if !column_names.is_empty() {
                    column_names.push_str(", ");
                }
                column_names.push_str(token);
                i += 1;
            }
        }
    }

    if column_names.is_empty() {
        return ParseError::ColumnListRequired.err();
    }
    Ok(column_names)
}
