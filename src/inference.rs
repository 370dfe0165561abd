//! Recursive schema inference over a single JSON sample.
//!
//! Walk one `serde_json::Value`, decide a Python-side type expression for
//! every object field, and build a tree of `RecordDef`s whose `nested_before`
//! edges encode declare-before-use ordering for codegen.
//!
//! Design goals:
//! - Deterministic: fields iterate in lexicographic key order, never input
//!   order, so repeated runs are byte-identical and diffs stay stable.
//! - One sample, one pass: arrays of objects are merged with a right-biased
//!   union; arrays of scalars are typed from their first element only.
//! - The typing-annotation registry is owned by the `Inferencer`, created
//!   fresh per invocation. Nothing is process-global.

use std::collections::BTreeSet;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::ir::{Annotation, FieldSpec, RecordDef};
use crate::naming;

// ------------------------------- Errors ----------------------------------- //

#[derive(Debug, Error)]
pub enum SchemaError {
    /// The document root (after array unwrapping) is not a JSON object.
    #[error("no object found at document root (got {found})")]
    NoRootObject { found: &'static str },

    /// An array began with an object but a later element was not one, so the
    /// right-biased union is undefined.
    #[error("array under key `{key}` mixes objects with non-objects")]
    MixedObjectList { key: String },
}

// ----------------------------- Root sampling ------------------------------ //

/// Select the schema sample from an arbitrary document root.
///
/// While the root is an array, descend into its first element; every other
/// element is ignored entirely, even if structurally different. Fails when
/// the descent bottoms out in anything other than an object (a scalar root,
/// or an empty array at any level).
pub fn sample_root(value: &Value) -> Result<&Map<String, Value>, SchemaError> {
    let mut v = value;
    while let Value::Array(xs) = v {
        v = xs.first().ok_or(SchemaError::NoRootObject { found: "empty array" })?;
    }
    match v {
        Value::Object(map) => Ok(map),
        other => Err(SchemaError::NoRootObject { found: json_type_name(other) }),
    }
}

fn json_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ------------------------------ Inference --------------------------------- //

/// Single-invocation inference state: just the annotation registry.
/// Write-only during the descent; read once by codegen afterwards.
#[derive(Debug, Default)]
pub struct Inferencer {
    annotations: BTreeSet<Annotation>,
}

impl Inferencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn annotations(&self) -> &BTreeSet<Annotation> {
        &self.annotations
    }

    /// Infer a `RecordDef` named `name` from one JSON object.
    ///
    /// Per field, in sorted key order:
    /// - non-empty object → nested record, named via `naming`;
    /// - non-empty array of objects → right-biased union of all elements,
    ///   then a nested record, typed `List[Name]`;
    /// - non-empty array of non-objects → `List[<type of first element>]`,
    ///   no homogeneity check across the rest;
    /// - empty array or empty object → `Any`;
    /// - null → `Optional[Any]`;
    /// - scalar → its Python runtime type name (`bool`/`int`/`float`/`str`).
    pub fn infer(&mut self, name: &str, map: &Map<String, Value>) -> Result<RecordDef, SchemaError> {
        let mut fields = Vec::with_capacity(map.len());
        let mut nested_before = Vec::new();

        let mut keys: Vec<&String> = map.keys().collect();
        keys.sort_unstable();

        for key in keys {
            let val = &map[key.as_str()];
            let type_expr = match val {
                Value::Object(obj) if !obj.is_empty() => {
                    let nested_name = naming::type_name_for_key(key);
                    nested_before.push(self.infer(&nested_name, obj)?);
                    nested_name
                }
                Value::Array(xs) if !xs.is_empty() => {
                    self.annotations.insert(Annotation::List);
                    match &xs[0] {
                        Value::Object(_) => {
                            let merged = right_biased_union(key, xs)?;
                            let nested_name = naming::type_name_for_key(key);
                            nested_before.push(self.infer(&nested_name, &merged)?);
                            format!("List[{nested_name}]")
                        }
                        // first element decides; remaining elements are trusted
                        first => format!("List[{}]", python_type_name(first)),
                    }
                }
                // zero samples: nothing to infer an element/field type from
                Value::Array(_) | Value::Object(_) => {
                    self.annotations.insert(Annotation::Any);
                    "Any".to_string()
                }
                Value::Null => {
                    self.annotations.insert(Annotation::Optional);
                    self.annotations.insert(Annotation::Any);
                    "Optional[Any]".to_string()
                }
                scalar => python_type_name(scalar).to_string(),
            };
            fields.push(FieldSpec { name: key.clone(), type_expr });
        }

        Ok(RecordDef { name: name.to_string(), fields, nested_before })
    }
}

/// Merge every element of an object list into one representative object.
/// Later elements overwrite earlier ones on key collision, so the field set
/// is the union and overlapping keys take the last element's value.
fn right_biased_union(key: &str, xs: &[Value]) -> Result<Map<String, Value>, SchemaError> {
    let mut merged = Map::new();
    for el in xs {
        match el {
            Value::Object(obj) => {
                for (k, v) in obj {
                    merged.insert(k.clone(), v.clone());
                }
            }
            _ => return Err(SchemaError::MixedObjectList { key: key.to_string() }),
        }
    }
    Ok(merged)
}

/// Python's `type(value).__name__` for a JSON value.
fn python_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "NoneType",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() { "int" } else { "float" }
        }
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

// ------------------------------- Tests ------------------------------------ //
