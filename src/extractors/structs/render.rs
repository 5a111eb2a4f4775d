// Text rendering of extracted declarations
//
//   Point {
//   	field_declaration{ X { type_identifier(int), }, },
//   }

use super::{FieldAccumulator, TypeDeclAccumulator};
use std::fmt;

impl fmt::Display for FieldAccumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{ ", self.name().unwrap_or_default())?;
        for token in self.definition() {
            write!(f, "{}, ", token)?;
        }
        write!(f, "}}")
    }
}

impl fmt::Display for TypeDeclAccumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {{", self.name().unwrap_or_default())?;
        for field in self.fields() {
            writeln!(f, "\t{}{{ {}, }},", field.label(), field)?;
        }
        write!(f, "}}")
    }
}
