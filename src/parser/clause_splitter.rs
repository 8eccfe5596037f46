use crate::parser::{Keyword, ParseError};

/// First index of each clause keyword in the token stream, found in one pass.
/// Translators receive the tokens after their keyword and stop on their own
/// at the next classified keyword, so clauses may appear in any order after
/// `select` and `from`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ClauseIndices {
    pub select: Option<usize>,
    pub top: Option<usize>,
    pub skip: Option<usize>,
    pub from: Option<usize>,
    pub r#where: Option<usize>,
    pub orderby: Option<usize>,
}

impl ClauseIndices {
    pub fn scan(tokens: &[&str]) -> Result<Self, ParseError> {
        let mut indices = Self::default();

        for (i, token) in tokens.iter().enumerate() {
            let Some(keyword) = Keyword::classify(token) else {
                continue;
            };
            let slot = match keyword {
                Keyword::Select => &mut indices.select,
                Keyword::Top => &mut indices.top,
                Keyword::Skip => &mut indices.skip,
                Keyword::From => &mut indices.from,
                Keyword::Where => &mut indices.r#where,
                Keyword::Orderby => &mut indices.orderby,
            };
            if slot.is_some() {
                return ParseError::DuplicateClauseKeyword(keyword.as_str().to_string()).err();
            }
            *slot = Some(i);
        }

        Ok(indices)
    }

    /// Structural legality of the statement as a whole. Returns the `from`
    /// index so the caller never has to re-unwrap it.
    pub fn validate(&self, tokens: &[&str]) -> Result<usize, ParseError> {
        if self.select != Some(0) {
            return ParseError::OnlySelectSupported.err();
        }

        let Some(from_index) = self.from else {
            return ParseError::FromRequired.err();
        };

        if from_index + 1 >= tokens.len() {
            return ParseError::TableNameRequired.err();
        }

        Ok(from_index)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{ClauseIndices, ParseError};

    #[test]
    pub fn test_scan_records_first_indices() {
        let tokens = vec!["select", "*", "from", "entity2", "where", "a", "=", "1"];

        let indices = ClauseIndices::scan(&tokens).expect("Failed to scan clauses");

        assert_eq!(indices.select, Some(0));
        assert_eq!(indices.from, Some(2));
        assert_eq!(indices.r#where, Some(4));
        assert_eq!(indices.top, None);
        assert_eq!(indices.skip, None);
        assert_eq!(indices.orderby, None);
    }

    #[test]
    pub fn test_scan_is_case_insensitive() {
        let tokens = vec!["SELECT", "*", "From", "t"];

        let indices = ClauseIndices::scan(&tokens).expect("Failed to scan clauses");

        assert_eq!(indices.select, Some(0));
        assert_eq!(indices.from, Some(2));
    }

    #[test]
    pub fn test_scan_rejects_duplicate_keywords() {
        let tokens = vec!["select", "*", "from", "t", "where", "a", "=", "1", "where", "b"];

        let result = ClauseIndices::scan(&tokens);

        assert_eq!(
            result,
            Err(ParseError::DuplicateClauseKeyword("where".to_string()))
        );
    }

    #[test]
    pub fn test_validate_requires_leading_select() {
        let tokens = vec!["delete", "from", "t"];
        let indices = ClauseIndices::scan(&tokens).expect("Failed to scan clauses");

        assert_eq!(indices.validate(&tokens), Err(ParseError::OnlySelectSupported));
    }

    #[test]
    pub fn test_validate_requires_from() {
        let tokens = vec!["select", "*"];
        let indices = ClauseIndices::scan(&tokens).expect("Failed to scan clauses");

        assert_eq!(indices.validate(&tokens), Err(ParseError::FromRequired));
    }

    #[test]
    pub fn test_validate_requires_table_after_from() {
        let tokens = vec!["select", "*", "from"];
        let indices = ClauseIndices::scan(&tokens).expect("Failed to scan clauses");

        assert_eq!(indices.validate(&tokens), Err(ParseError::TableNameRequired));
    }

    #[test]
    pub fn test_validate_returns_from_index() {
        let tokens = vec!["select", "*", "from", "entity2"];
        let indices = ClauseIndices::scan(&tokens).expect("Failed to scan clauses");

        let from_index = indices.validate(&tokens).expect("Failed to validate");
        assert_eq!(from_index, 2);
    }
}
