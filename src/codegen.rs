//! Emit Python attrs-dataclass source from the inferred record tree.

use std::collections::BTreeSet;

use crate::ir::{Annotation, RecordDef};

/// Module imports the generated classes rely on. Trailing blank line keeps
/// one empty line between the imports and the first class.
pub const PREFACE: &str = "import attr\nimport cattr\n\n";

/// Reconstruction helper appended verbatim after the last class body.
pub const POSTFACE: &str = "\n    @classmethod\n    def instantiate(cls, obj):\n        return cattr.structure(obj, cls)\n";

pub const DEFAULT_DECORATOR: &str = "@attr.dataclass";

const INDENT: &str = "    ";

/// Linearizes a `RecordDef` tree into source lines. Nested definitions are
/// flattened depth-first pre-order so every class is declared before the
/// class that references it.
#[derive(Debug)]
pub struct Codegen {
    pub decorator: Option<String>,
    pub preface: String,
    pub postface: String,
    lines: Vec<String>,
}

impl Codegen {
    pub fn new() -> Self {
        Self {
            decorator: Some(DEFAULT_DECORATOR.to_string()),
            preface: PREFACE.to_string(),
            postface: POSTFACE.to_string(),
            lines: Vec::new(),
        }
    }

    /// Render the full output: typing import (when the preface is in play and
    /// any annotation was registered), preface, class blocks, postface.
    pub fn emit(&mut self, root: &RecordDef, annotations: &BTreeSet<Annotation>) {
        self.lines.clear();
        if !self.preface.is_empty() {
            if !annotations.is_empty() {
                let names: Vec<&str> = annotations.iter().map(|a| a.as_str()).collect();
                self.lines.push(format!("from typing import {}", names.join(", ")));
                self.lines.push(String::new());
            }
            let preface: Vec<String> = self.preface.split('\n').map(|s| s.to_string()).collect();
            self.lines.extend(preface);
        }

        self.emit_record(root);

        if !self.postface.is_empty() {
            let postface: Vec<String> = self.postface.split('\n').map(|s| s.to_string()).collect();
            self.lines.extend(postface);
        }
    }

    // One complete block per record: nested blocks first (each followed by a
    // blank separator line), then decorator, header, and fields.
    fn emit_record(&mut self, rec: &RecordDef) {
        for nested in &rec.nested_before {
            self.emit_record(nested);
            self.lines.push(String::new());
        }
        if let Some(decorator) = &self.decorator {
            self.lines.push(decorator.clone());
        }
        self.lines.push(format!("class {}:", rec.name));
        for f in &rec.fields {
            self.lines.push(format!("{INDENT}{}: {}", f.name, f.type_expr));
        }
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn into_string(self) -> String {
        self.lines.join("\n")
    }
}

impl Default for Codegen {
    fn default() -> Self {
        Self::new()
    }
}

// ------------------------------- Tests ------------------------------------ //
