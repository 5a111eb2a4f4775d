// structscan - streaming struct extraction over tree-sitter syntax trees
//
// A driver thread walks each parsed file in pre-order and feeds every node to
// a small delegation state machine; completed declarations flow to the caller
// through a channel as soon as their span closes.

pub mod extractors;
pub mod language;
pub mod utils;

pub use extractors::{
    BatchReport, ExtractConfig, ExtractError, ExtractorManager, FieldAccumulator, FileStructs,
    TypeDeclAccumulator,
};
pub use language::{detect_language_from_extension, SUPPORTED_LANGUAGES};
