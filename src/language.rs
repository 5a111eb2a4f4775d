//! Language Support - tree-sitter grammar table
//!
//! All language-specific knowledge lives here: which grammar parses a file and
//! which grammar node kinds open a type declaration, open a field, or name
//! something. The extraction pipeline itself only sees `NodeKind`.

use crate::extractors::base::NodeKind;
use anyhow::Result;

/// Languages with a grammar wired in
pub const SUPPORTED_LANGUAGES: &[&str] = &["go", "rust"];

/// Get tree-sitter language parser for a given language name
pub fn get_tree_sitter_language(language: &str) -> Result<tree_sitter::Language> {
    match language {
        "go" => Ok(tree_sitter_go::LANGUAGE.into()),
        "rust" => Ok(tree_sitter_rust::LANGUAGE.into()),
        _ => Err(anyhow::anyhow!(
            "Unsupported language: '{}'. Supported languages: {}",
            language,
            SUPPORTED_LANGUAGES.join(", ")
        )),
    }
}

/// Detect language from file extension
///
/// Returns the language name that can be passed to `get_tree_sitter_language()`.
pub fn detect_language_from_extension(extension: &str) -> Option<&'static str> {
    match extension {
        "go" => Some("go"),
        "rs" => Some("rust"),
        _ => None,
    }
}

/// Map a grammar node kind onto what the pipeline routes on
pub fn classify_node(language: &str, grammar_kind: &str) -> NodeKind {
    match language {
        "go" => match grammar_kind {
            "type_spec" | "type_alias" => NodeKind::TypeDecl,
            // Interface methods and embedded interfaces are fields of the interface type
            "field_declaration" | "method_elem" | "type_elem" => NodeKind::FieldDecl,
            "identifier" | "field_identifier" | "type_identifier" | "package_identifier" => {
                NodeKind::Identifier
            }
            _ => NodeKind::Other,
        },
        "rust" => match grammar_kind {
            "struct_item" | "union_item" => NodeKind::TypeDecl,
            "field_declaration" => NodeKind::FieldDecl,
            "identifier" | "field_identifier" | "type_identifier" => NodeKind::Identifier,
            _ => NodeKind::Other,
        },
        _ => NodeKind::Other,
    }
}
