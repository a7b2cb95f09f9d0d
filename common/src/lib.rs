//! NM Search Common Library
//!
//! CLIと共有されるカタログ・検索ロジック

pub mod types;
pub mod catalog;
pub mod random;
pub mod matcher;
pub mod error;

pub use types::{CatalogEntry, ScoredEntry};
pub use catalog::{Catalog, looks_like_code};
pub use random::{RandomSource, RngSource, ScriptedRandom};
pub use matcher::{Matcher, SearchMode, KEYWORD_FLOORS, EXACT_SIMILARITY};
pub use error::{Error, Result};
