pub mod catalog;
pub mod error;
pub mod matching;
pub mod record;

pub use catalog::DiseaseCatalog;
pub use error::{ModelError, Result};
pub use matching::MatchResult;
pub use record::DiseaseRecord;
