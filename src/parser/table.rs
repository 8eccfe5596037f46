use crate::parser::{Keyword, ParseError};

/// The last data token before the first keyword after `from` names the table.
pub fn get_table_name(sub_tokens: &[&str]) -> Result<String, ParseError> {
    let mut table_name = "";

    for &token in sub_tokens {
        if Keyword::classify(token).is_some() {
            break;
        }
        table_name = token;
    }

    if table_name.is_empty() {
        return ParseError::TableNameRequired.err();
    }
    Ok(table_name.to_string())
}

#[cfg(test)]
mod tests {
    use crate::parser::{ParseError, get_table_name};

    #[test]
    pub fn test_table_name() {
        let tokens = vec!["entity2"];

        let table = get_table_name(&tokens).expect("Failed to parse table name");

        assert_eq!(table, "entity2");
    }

    #[test]
    pub fn test_stops_at_next_clause() {
        let tokens = vec!["entity2", "where", "a", "=", "1"];

        let table = get_table_name(&tokens).expect("Failed to parse table name");

        assert_eq!(table, "entity2");
    }

    #[test]
    pub fn test_case_is_preserved() {
        let tokens = vec!["Entity2", "orderby", "a"];

        let table = get_table_name(&tokens).expect("Failed to parse table name");

        assert_eq!(table, "Entity2");
    }

    #[test]
    pub fn test_missing_table() {
        let tokens = vec!["where", "a", "=", "1"];

        assert_eq!(get_table_name(&tokens), Err(ParseError::TableNameRequired));
    }
}
