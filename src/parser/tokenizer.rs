/// Commas count as whitespace, so `a, b` and `a b` tokenize identically.
/// Casing is preserved; keyword matching happens case-insensitively later.
pub fn normalize(query: &str) -> String {
    query.replace(',', " ").trim().to_string()
}

pub fn tokenize(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use crate::parser::{normalize, tokenize};

    #[test]
    pub fn test_normalize_commas_and_trim() {
        assert_eq!(normalize("  select a, b from t  "), "select a  b from t");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t "), "");
    }

    #[test]
    pub fn test_normalize_is_idempotent() {
        let once = normalize("select a, b from t");
        assert_eq!(normalize(&once), once);

        let already_normal = "select a b from t";
        assert_eq!(normalize(already_normal), already_normal);
    }

    #[test]
    pub fn test_normalize_preserves_case() {
        assert_eq!(normalize("SELECT Index FROM T"), "SELECT Index FROM T");
    }

    #[test]
    pub fn test_tokenize_collapses_whitespace_runs() {
        let normalized = normalize("select  a,   b \t from   t");
        let tokens = tokenize(&normalized);
        assert_eq!(tokens, vec!["select", "a", "b", "from", "t"]);
    }
}
