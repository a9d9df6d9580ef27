mod engine;
mod error;
mod patterns;
mod score;
mod sniff;

pub use engine::{
    MANUAL_CONFIDENCE, generate_field_mappings, remap_column, summarize_mappings,
};
pub use error::MappingError;
pub use patterns::synonyms_for;
pub use score::synonym_score;
