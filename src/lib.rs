pub mod parser;
pub use parser::{ComparatorOp, Keyword, ParseError, parse_query, parse_query_with_params};

pub mod query;
pub use query::{Params, QueryDescription};

pub mod client;
pub use client::{ClientError, Connection, QueryResponse, Settings, YukonClient};
