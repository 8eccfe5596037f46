use std::fmt::Display;

/// Every way a query string can be rejected. The translator fails fast: the
/// first violation wins and no partial description is ever produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    EmptyQuery,
    OnlySelectSupported,
    FromRequired,
    TableNameRequired,
    ColumnListRequired,
    DuplicateClauseKeyword(String),
    InvalidNumericClause { clause: &'static str, value: String },
    EmptyWhereClause,
    IncompleteComparison(String),
    UnknownOperator(String),
    UnknownLogicalOperator(String),
    UnboundParameterNotFound(String),
    OrderByColumnRequired,
    InvalidSortDirection(String),
}

impl ParseError {
    pub fn err<T>(self) -> Result<T, ParseError> {
        Err(self)
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::EmptyQuery => {
                write!(f, "invalid query: 'query' is required")
            }
            ParseError::OnlySelectSupported => {
                write!(f, "invalid query: only select statements are supported")
            }
            ParseError::FromRequired => {
                write!(f, "invalid query: a from clause is required")
            }
            ParseError::TableNameRequired => {
                write!(f, "invalid query: table name is required")
            }
            ParseError::ColumnListRequired => {
                write!(f, "invalid query: select requires column list or * for all")
            }
            ParseError::DuplicateClauseKeyword(keyword) => {
                write!(f, "invalid query: duplicate '{keyword}' clause")
            }
            ParseError::InvalidNumericClause { clause, value } => {
                write!(f, "invalid query: '{clause}' requires a non-negative integer, got '{value}'")
            }
            ParseError::EmptyWhereClause => {
                write!(f, "invalid query: empty where clause")
            }
            ParseError::IncompleteComparison(part) => {
                write!(f, "invalid query: invalid where clause '{part}'")
            }
            ParseError::UnknownOperator(part) => {
                write!(f, "invalid query: unknown operator '{part}'")
            }
            ParseError::UnknownLogicalOperator(op) => {
                write!(f, "invalid query: unknown logical operator '{op}'")
            }
            ParseError::UnboundParameterNotFound(name) => {
                write!(f, "invalid query: parameter '{name}' not found in query")
            }
            ParseError::OrderByColumnRequired => {
                write!(f, "invalid query: orderby requires a column name")
            }
            ParseError::InvalidSortDirection(token) => {
                write!(f, "invalid query: invalid sort direction '{token}'")
            }
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use crate::parser::ParseError;

    #[test]
    pub fn test_display_keeps_the_invalid_query_register() {
        assert_eq!(
            ParseError::EmptyWhereClause.to_string(),
            "invalid query: empty where clause"
        );
        assert_eq!(
            ParseError::UnknownLogicalOperator("xor".to_string()).to_string(),
            "invalid query: unknown logical operator 'xor'"
        );
        assert_eq!(
            ParseError::InvalidNumericClause { clause: "top", value: "ten".to_string() }.to_string(),
            "invalid query: 'top' requires a non-negative integer, got 'ten'"
        );
    }
}
