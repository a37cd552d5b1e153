pub mod error;
pub mod extractor;
pub mod normalize;
pub mod report;
pub mod sample;
pub mod source;

pub use extractor::{find_tables, TableExtractor};
pub use report::{OutputFormat, TableReport};
pub use source::QuerySource;
