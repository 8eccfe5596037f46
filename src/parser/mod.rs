pub mod tokenizer;
pub use tokenizer::*;

pub mod keyword;
pub use keyword::*;

pub mod operators;
pub use operators::*;

pub mod parse_error;
pub use parse_error::*;

pub mod clause_splitter;
pub use clause_splitter::*;

pub mod columns;
pub use columns::*;

pub mod table;
pub use table::*;

pub mod top_skip;
pub use top_skip::*;

pub mod where_parser;
pub use where_parser::*;

pub mod order_by;
pub use order_by::*;

pub mod query_parser;
pub use query_parser::*;
