pub mod parser;

pub use parser::{parse_location, selection_token};
