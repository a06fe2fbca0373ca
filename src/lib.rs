pub mod config;
pub mod corpus;
pub mod error;
pub mod phonetic;
pub mod safety;
pub mod similarity;
pub mod validation;
pub mod variation;

pub use config::ValidatorConfig;
pub use corpus::CorpusIndex;
pub use error::{Result, TitleError};
pub use validation::{Suggestion, TitleValidator, ValidationResult};
