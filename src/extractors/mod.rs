//! Struct extraction from tree-sitter syntax trees
//!
//! # Architecture
//!
//! - `base` - node snapshot, configuration and error types
//! - `structs` - the streaming pipeline and its field/declaration accumulators
//! - `driver` - pre-order traversal feeding the pipeline on its own thread
//! - `collector` - handoff channel and the collector draining it
//! - `manager` - ExtractorManager public API (per file and batch)
//! - `lint` - optional checks over collected results

pub mod base;
pub mod collector;
pub mod driver;
pub mod lint;
pub mod manager;
pub mod structs;

// Re-export the public API
pub use base::{ExtractConfig, ExtractError, ExtractResult, NodeKind, Span, SyntaxNode};
pub use collector::{handoff, Collector, DeclSender};
pub use driver::{run_to_completion, Driver, NodeSource, ParsedUnit};
pub use lint::{lint_structs, LintWarning};
pub use manager::{BatchReport, ExtractorManager, FileStructs, UnitFailure, UnitOutcome};
pub use structs::{
    Consumed, Consumer, DeclStep, ExtractionPipeline, FieldAccumulator, TypeDeclAccumulator,
};
