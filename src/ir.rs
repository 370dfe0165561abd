// Strongly-typed IR for codegen. No serde_json::Value here.

use std::fmt;

/// One emitted field: `name: type_expr`. The type expression is already
/// rendered Python-side text, e.g. `str`, `List[Pet]`, `Optional[Any]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub type_expr: String,
}

/// One emitted class. `nested_before` holds the child classes this one's
/// fields reference by name; each child is declared as a complete block
/// before this block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDef {
    pub name: String,
    pub fields: Vec<FieldSpec>,      // lexicographic key order for deterministic codegen
    pub nested_before: Vec<RecordDef>,
}

/// Generic typing annotations a schema can pull in. Collected once per run,
/// turned into a single `from typing import …` line by codegen.
///
/// Variant order is alphabetical so a `BTreeSet` iterates in import order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Annotation {
    Any,
    List,
    Optional,
}

impl Annotation {
    pub fn as_str(self) -> &'static str {
        match self {
            Annotation::Any => "Any",
            Annotation::List => "List",
            Annotation::Optional => "Optional",
        }
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
