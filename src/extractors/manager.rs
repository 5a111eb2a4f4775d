//! ExtractorManager - Public API for struct extraction
//!
//! Handles reading and parsing input units and runs one driver/collector pair
//! per unit. Every unit gets a fresh pipeline and a fresh channel, so a failed
//! unit never affects the others in a batch.

use crate::extractors::base::{ExtractConfig, ExtractError, ExtractResult};
use crate::extractors::driver::{run_to_completion, ParsedUnit};
use crate::extractors::structs::TypeDeclAccumulator;
use crate::language::{detect_language_from_extension, get_tree_sitter_language};
use crate::utils::paths::unit_label;
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tree_sitter::{Node, Parser};

/// Declarations extracted from one input unit, in source order
#[derive(Debug, Clone, Serialize)]
pub struct FileStructs {
    pub path: PathBuf,
    pub language: &'static str,
    pub structs: Vec<TypeDeclAccumulator>,
}

#[derive(Debug)]
pub struct UnitFailure {
    pub path: PathBuf,
    pub error: ExtractError,
}

impl UnitFailure {
    /// One-line report for the user, path labelled relative to `root`
    pub fn describe(&self, root: &Path) -> String {
        format!("skipped {}: {}", unit_label(&self.path, root), self.error)
    }
}

#[derive(Debug)]
pub enum UnitOutcome {
    Extracted(FileStructs),
    Failed(UnitFailure),
}

/// Per-unit outcomes of a batch, in input order
#[derive(Debug, Default)]
pub struct BatchReport {
    pub units: Vec<UnitOutcome>,
}

impl BatchReport {
    pub fn extracted(&self) -> impl Iterator<Item = &FileStructs> {
        self.units.iter().filter_map(|unit| match unit {
            UnitOutcome::Extracted(file) => Some(file),
            UnitOutcome::Failed(_) => None,
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = &UnitFailure> {
        self.units.iter().filter_map(|unit| match unit {
            UnitOutcome::Failed(failure) => Some(failure),
            UnitOutcome::Extracted(_) => None,
        })
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }
}

/// Manager for struct extraction across input units
#[derive(Debug, Default)]
pub struct ExtractorManager {
    config: ExtractConfig,
}

impl ExtractorManager {
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    /// Extract every unit; failures are recorded and the batch continues
    pub fn extract_files(&self, paths: &[PathBuf]) -> BatchReport {
        let units: Vec<UnitOutcome> = if self.config.parallel {
            paths.par_iter().map(|path| self.extract_unit(path)).collect()
        } else {
            paths.iter().map(|path| self.extract_unit(path)).collect()
        };
        BatchReport { units }
    }

    /// Read a file, detect its language from the extension and extract it
    pub fn extract_file(&self, path: &Path) -> ExtractResult<FileStructs> {
        let language = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(detect_language_from_extension)
            .ok_or_else(|| ExtractError::UnsupportedLanguage {
                path: path.to_path_buf(),
            })?;

        let source = fs::read_to_string(path).map_err(|source| ExtractError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        self.extract_source(path, language, source)
    }

    /// Extract from in-memory source; `path` only labels the result
    pub fn extract_source(
        &self,
        path: &Path,
        language: &'static str,
        source: String,
    ) -> ExtractResult<FileStructs> {
        let grammar = get_tree_sitter_language(language).map_err(|e| ExtractError::Grammar {
            language,
            message: e.to_string(),
        })?;

        let mut parser = Parser::new();
        parser
            .set_language(&grammar)
            .map_err(|e| ExtractError::Grammar {
                language,
                message: e.to_string(),
            })?;

        let tree = parser
            .parse(&source, None)
            .ok_or_else(|| ExtractError::ParseFailure {
                path: path.to_path_buf(),
                line: 1,
            })?;

        if !self.config.allow_syntax_errors {
            if let Some(line) = first_syntax_error(tree.root_node()) {
                return Err(ExtractError::ParseFailure {
                    path: path.to_path_buf(),
                    line,
                });
            }
        }

        let unit = ParsedUnit::new(language, source, tree, self.config.named_only);
        let structs = run_to_completion(unit, self.config.channel_capacity).map_err(|_| {
            ExtractError::DriverPanicked {
                path: path.to_path_buf(),
            }
        })?;

        debug!(
            "Extracted {} declarations from {} file: {}",
            structs.len(),
            language,
            path.display()
        );

        Ok(FileStructs {
            path: path.to_path_buf(),
            language,
            structs,
        })
    }

    fn extract_unit(&self, path: &Path) -> UnitOutcome {
        match self.extract_file(path) {
            Ok(file) => UnitOutcome::Extracted(file),
            Err(error) => {
                warn!("Skipping {}: {}", path.display(), error);
                UnitOutcome::Failed(UnitFailure {
                    path: path.to_path_buf(),
                    error,
                })
            }
        }
    }
}

/// 1-based line of the first ERROR or MISSING node, if the tree has any
fn first_syntax_error(node: Node) -> Option<usize> {
    if node.is_error() || node.is_missing() {
        return Some(node.start_position().row + 1);
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(line) = first_syntax_error(child) {
            return Some(line);
        }
    }
    Some(node.start_position().row + 1)
}
