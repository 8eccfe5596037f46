use crate::parser::{
    ClauseIndices, ParseError, get_column_names, get_order_by, get_row_count, get_table_name,
    get_where, normalize, tokenize,
};
use crate::query::{Params, QueryDescription};

/// Translates a `select … from …` query string into a protocol-ready
/// [`QueryDescription`]. Pure and synchronous; nothing is shared between
/// calls, so concurrent use needs no synchronization.
pub fn parse_query(query: &str) -> Result<QueryDescription, ParseError> {
    parse_query_with_params(query, &Params::new())
}

/// Like [`parse_query`], substituting `:Name` placeholders in the `where`
/// clause from `params`.
pub fn parse_query_with_params(
    query: &str,
    params: &Params,
) -> Result<QueryDescription, ParseError> {
    let normalized = normalize(query);
    if normalized.is_empty() {
        return ParseError::EmptyQuery.err();
    }

    let tokens = tokenize(&normalized);

    let indices = ClauseIndices::scan(&tokens)?;
    let from_index = indices.validate(&tokens)?;

    // select is at token 0, so its clause starts right after it
    let select = get_column_names(&tokens[1..])?;
    let table = get_table_name(&tokens[from_index + 1..])?;

    let mut description = QueryDescription::new(select, table);

    if let Some(i) = indices.top {
        description.top = Some(get_row_count("top", &tokens[i + 1..])?);
    }
    if let Some(i) = indices.skip {
        description.skip = Some(get_row_count("skip", &tokens[i + 1..])?);
    }
    if let Some(i) = indices.r#where {
        description.filter = Some(get_where(&tokens[i + 1..], params)?);
    }
    if let Some(i) = indices.orderby {
        description.orderby = Some(get_order_by(&tokens[i + 1..])?);
    }

    Ok(description)
}
