/// The six clause keywords recognized in a query string. Everything that is
/// not one of these is data and keeps whatever casing the caller wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Select,
    Top,
    Skip,
    From,
    Where,
    Orderby,
}

pub const ALL: &str = "*";
pub const ASCENDING: &str = "asc";
pub const DESCENDING: &str = "desc";
pub const AND: &str = "and";
pub const OR: &str = "or";

impl Keyword {
    /// Case-insensitive token classification shared by the splitter and
    /// every clause translator.
    pub fn classify(token: &str) -> Option<Keyword> {
        match token.to_ascii_lowercase().as_str() {
            "select" => Some(Keyword::Select),
            "top" => Some(Keyword::Top),
            "skip" => Some(Keyword::Skip),
            "from" => Some(Keyword::From),
            "where" => Some(Keyword::Where),
            "orderby" => Some(Keyword::Orderby),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Select => "select",
            Keyword::Top => "top",
            Keyword::Skip => "skip",
            Keyword::From => "from",
            Keyword::Where => "where",
            Keyword::Orderby => "orderby",
        }
    }
}

pub fn is_keyword(token: &str) -> bool {
    Keyword::classify(token).is_some()
}
