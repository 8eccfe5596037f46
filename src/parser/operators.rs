use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

/// Canonical comparison operator as the query service expects it on the wire.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ComparatorOp {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

impl fmt::Display for ComparatorOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparatorOp::Eq => write!(f, "eq"),
            ComparatorOp::Ne => write!(f, "ne"),
            ComparatorOp::Gt => write!(f, "gt"),
            ComparatorOp::Ge => write!(f, "ge"),
            ComparatorOp::Lt => write!(f, "lt"),
            ComparatorOp::Le => write!(f, "le"),
        }
    }
}

impl fmt::Debug for ComparatorOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComparatorOp({})", self)
    }
}

static OP_MAP: Lazy<HashMap<&'static str, ComparatorOp>> = Lazy::new(|| {
    HashMap::from([
        ("=", ComparatorOp::Eq),
        ("==", ComparatorOp::Eq),
        ("!=", ComparatorOp::Ne),
        ("<>", ComparatorOp::Ne),
        (">", ComparatorOp::Gt),
        (">=", ComparatorOp::Ge),
        ("!<", ComparatorOp::Ge),
        ("<", ComparatorOp::Lt),
        ("<=", ComparatorOp::Le),
        ("!>", ComparatorOp::Le),
    ])
});

impl ComparatorOp {
    /// Canonicalizes a raw operator token, e.g. `<` to `lt` and `!>` to `le`.
    pub fn from_symbol(symbol: &str) -> Option<ComparatorOp> {
        OP_MAP.get(symbol).copied()
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ComparatorOp;

    #[test]
    pub fn test_every_symbol_canonicalizes() {
        let expected = [
            ("=", "eq"),
            ("==", "eq"),
            ("!=", "ne"),
            ("<>", "ne"),
            (">", "gt"),
            (">=", "ge"),
            ("!<", "ge"),
            ("<", "lt"),
            ("<=", "le"),
            ("!>", "le"),
        ];

        for (symbol, canonical) in expected {
            let op = ComparatorOp::from_symbol(symbol).expect("Failed to canonicalize operator");
            assert_eq!(op.to_string(), canonical);
        }
    }

    #[test]
    pub fn test_unknown_symbol() {
        assert!(ComparatorOp::from_symbol("===").is_none());
        assert!(ComparatorOp::from_symbol("like").is_none());
        assert!(ComparatorOp::from_symbol("").is_none());
    }
}
