//! Post-hoc checks over collected declarations
//!
//! Extraction never fails on a missing name; it records `None`. This pass
//! reports those holes without changing what was extracted.

use crate::extractors::structs::TypeDeclAccumulator;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintWarning {
    pub line: usize,
    pub message: String,
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

pub fn lint_structs(structs: &[TypeDeclAccumulator]) -> Vec<LintWarning> {
    let mut warnings = Vec::new();

    for decl in structs {
        let Some(decl_name) = decl.name() else {
            warnings.push(LintWarning {
                line: decl.line(),
                message: format!("{} has no name", decl.label()),
            });
            continue;
        };

        for (index, field) in decl.fields().iter().enumerate() {
            if field.name().is_none() {
                warnings.push(LintWarning {
                    line: field.line(),
                    message: format!("field #{} of '{}' has no name", index + 1, decl_name),
                });
            }
        }
    }

    warnings
}
