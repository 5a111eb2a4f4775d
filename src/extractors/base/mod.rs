// Base types shared by every stage of extraction
//
// - types.rs: node snapshot (SyntaxNode, Span, NodeKind) and ExtractConfig
// - errors.rs: per-unit ExtractError

pub mod errors;
pub mod types;

pub use errors::{ExtractError, ExtractResult};
pub use types::{ExtractConfig, NodeKind, Span, SyntaxNode};
