//! Handoff channel between the driver thread and the collector
//!
//! Single producer (the pipeline), single consumer (the collector). Closing
//! the channel, by dropping the pipeline's sender, is the only completion
//! signal the collector ever sees.

use crate::extractors::structs::TypeDeclAccumulator;
use std::sync::mpsc::{channel, sync_channel, Receiver, SendError, Sender, SyncSender};
use tracing::debug;

/// Sending half owned by the pipeline
pub enum DeclSender {
    /// Blocks the driver while the channel is full
    Bounded(SyncSender<TypeDeclAccumulator>),
    Unbounded(Sender<TypeDeclAccumulator>),
}

impl DeclSender {
    pub fn send(&self, decl: TypeDeclAccumulator) -> Result<(), SendError<TypeDeclAccumulator>> {
        match self {
            DeclSender::Bounded(tx) => tx.send(decl),
            DeclSender::Unbounded(tx) => tx.send(decl),
        }
    }
}

/// Create a handoff channel; `None` is unbounded, `Some(0)` is a rendezvous
pub fn handoff(capacity: Option<usize>) -> (DeclSender, Receiver<TypeDeclAccumulator>) {
    match capacity {
        Some(bound) => {
            let (tx, rx) = sync_channel(bound);
            (DeclSender::Bounded(tx), rx)
        }
        None => {
            let (tx, rx) = channel();
            (DeclSender::Unbounded(tx), rx)
        }
    }
}

/// Drains completed declarations into an ordered list
pub struct Collector {
    rx: Receiver<TypeDeclAccumulator>,
    structs: Vec<TypeDeclAccumulator>,
}

impl Collector {
    pub fn new(rx: Receiver<TypeDeclAccumulator>) -> Self {
        Self {
            rx,
            structs: Vec::new(),
        }
    }

    /// Block until the sender side is closed, then return everything received
    pub fn drain(mut self) -> Vec<TypeDeclAccumulator> {
        for decl in self.rx.iter() {
            self.structs.push(decl);
        }
        debug!("Collector drained {} declarations", self.structs.len());
        self.structs
    }
}
