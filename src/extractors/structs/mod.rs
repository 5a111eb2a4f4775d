//! Streaming struct extraction
//!
//! The pipeline receives a flat pre-order stream of nodes and rebuilds
//! `declaration -> field -> definition tokens` from it. There is no explicit
//! push/pop signal in the stream: every scope is closed by comparing a node's
//! position against the span end of the open declaration or field.
//!
//! Ownership of incoming nodes is a delegation chain of depth two:
//! a node goes to the open field first, and only when the field releases it
//! does the pipeline (acting for the open declaration) look at it.

mod decl;
mod field;
mod render;

pub use decl::{DeclStep, TypeDeclAccumulator};
pub use field::FieldAccumulator;

use crate::extractors::base::{NodeKind, SyntaxNode};
use crate::extractors::collector::DeclSender;
use tracing::{debug, warn};

/// Result of offering a node to a scoped consumer
#[derive(Debug)]
pub enum Consumed {
    /// The consumer kept the node and stays the owner
    Continue,
    /// Not mine: the node is handed back to the parent scope
    Release(SyntaxNode),
}

/// A scope that accepts nodes until it releases one
pub trait Consumer {
    fn consume(&mut self, node: SyntaxNode) -> Consumed;
}

/// Who receives the next node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Owner {
    Pipeline,
    Field,
}

/// Top-level router fed one node at a time by the driver
pub struct ExtractionPipeline {
    current: Option<TypeDeclAccumulator>,
    owner: Owner,
    output: DeclSender,
    emitted: usize,
}

impl ExtractionPipeline {
    pub fn new(output: DeclSender) -> Self {
        Self {
            current: None,
            owner: Owner::Pipeline,
            output,
            emitted: 0,
        }
    }

    pub fn route(&mut self, node: SyntaxNode) {
        let node = match self.owner {
            Owner::Pipeline => node,
            Owner::Field => match self.current.as_mut().and_then(|d| d.active_field()) {
                Some(field) => match field.consume(node) {
                    Consumed::Continue => return,
                    Consumed::Release(node) => node,
                },
                None => node,
            },
        };

        self.owner = Owner::Pipeline;
        self.handle(node);
    }

    /// Emit the declaration still open at end of traversal and close the
    /// output stream. Dropping the sender is what ends the collector.
    pub fn close(mut self) {
        self.emit();
        debug!("Pipeline closed after {} declarations", self.emitted);
    }

    fn handle(&mut self, node: SyntaxNode) {
        if node.is(NodeKind::TypeDecl) {
            self.emit();
            self.current = Some(TypeDeclAccumulator::new(node));
            return;
        }

        // Nothing open: the node precedes any declaration
        let Some(decl) = self.current.as_mut() else {
            return;
        };

        match decl.consume(node) {
            DeclStep::Continue => {}
            DeclStep::Delegate => self.owner = Owner::Field,
            DeclStep::Complete => self.emit(),
        }
    }

    fn emit(&mut self) {
        let Some(decl) = self.current.take() else {
            return;
        };
        self.owner = Owner::Pipeline;

        debug!(
            "Emitting {} '{}' with {} fields",
            decl.label(),
            decl.name().unwrap_or_default(),
            decl.fields().len()
        );
        if self.output.send(decl).is_err() {
            warn!("Collector hung up, declaration dropped");
            return;
        }
        self.emitted += 1;
    }
}
