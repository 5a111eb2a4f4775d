//! Driver - pre-order traversal feeding the extraction pipeline
//!
//! The driver runs on its own thread and is the only writer of pipeline
//! state. Completed declarations cross to the collector through the handoff
//! channel; nothing else is shared.

use crate::extractors::base::{Span, SyntaxNode};
use crate::extractors::collector::{handoff, Collector};
use crate::extractors::structs::{ExtractionPipeline, TypeDeclAccumulator};
use crate::language::classify_node;
use std::thread;
use tracing::debug;
use tree_sitter::{Node, Tree};

/// Anything that can hand out nodes in depth-first pre-order
pub trait NodeSource: Send + 'static {
    fn for_each_node<F: FnMut(SyntaxNode)>(self, visit: F);
}

/// Pre-flattened nodes, visited as given
impl NodeSource for Vec<SyntaxNode> {
    fn for_each_node<F: FnMut(SyntaxNode)>(self, visit: F) {
        self.into_iter().for_each(visit);
    }
}

/// A parsed source file, owned so it can move onto the driver thread
pub struct ParsedUnit {
    language: &'static str,
    source: String,
    tree: Tree,
    named_only: bool,
}

impl ParsedUnit {
    pub fn new(language: &'static str, source: String, tree: Tree, named_only: bool) -> Self {
        Self {
            language,
            source,
            tree,
            named_only,
        }
    }

    fn snapshot(&self, node: Node) -> SyntaxNode {
        let kind = classify_node(self.language, node.kind());
        let snap = SyntaxNode::new(
            kind,
            node.kind(),
            Span::new(node.start_byte(), node.end_byte()),
            node.start_position().row + 1,
        );
        if node.child_count() == 0 {
            let text = node.utf8_text(self.source.as_bytes()).unwrap_or_default();
            snap.with_text(text)
        } else {
            snap
        }
    }
}

impl NodeSource for ParsedUnit {
    fn for_each_node<F: FnMut(SyntaxNode)>(self, mut visit: F) {
        let mut cursor = self.tree.walk();
        loop {
            let node = cursor.node();
            // Anonymous nodes are punctuation and keywords
            if node.is_named() || !self.named_only {
                visit(self.snapshot(node));
            }

            if cursor.goto_first_child() {
                continue;
            }
            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return;
                }
            }
        }
    }
}

pub struct Driver<S> {
    source: S,
    pipeline: ExtractionPipeline,
}

impl<S: NodeSource> Driver<S> {
    pub fn new(source: S, pipeline: ExtractionPipeline) -> Self {
        Self { source, pipeline }
    }

    /// Route every node, then close the pipeline (and with it the channel)
    pub fn run(self) {
        let Driver {
            source,
            mut pipeline,
        } = self;

        let mut visited = 0usize;
        source.for_each_node(|node| {
            visited += 1;
            pipeline.route(node);
        });
        debug!("Driver visited {} nodes", visited);
        pipeline.close();
    }
}

/// Traverse `source` on a driver thread while this thread collects.
///
/// A panic during traversal unwinds the pipeline, which closes the channel,
/// so the collector always finishes; the panic is returned from the join.
pub fn run_to_completion<S: NodeSource>(
    source: S,
    capacity: Option<usize>,
) -> thread::Result<Vec<TypeDeclAccumulator>> {
    let (tx, rx) = handoff(capacity);
    let pipeline = ExtractionPipeline::new(tx);

    let driver = thread::spawn(move || Driver::new(source, pipeline).run());
    let structs = Collector::new(rx).drain();
    driver.join()?;

    Ok(structs)
}
