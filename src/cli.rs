//! Minimal CLI: JSON sample in → Python dataclass source out
use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use crate::codegen::Codegen;
use crate::inference::{sample_root, Inferencer};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// infer a schema from a JSON document and emit attrs-style Python dataclasses
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    /// class decorator (default: "@attr.dataclass"; pass "" for none)
    #[arg(short, long)]
    decorator: Option<String>,

    /// top-level class name
    #[arg(default_value = "Root")]
    name: String,

    /// infile to read JSON from (default: stdin)
    infile: Option<PathBuf>,

    /// outfile to write Python to (default: stdout)
    outfile: Option<PathBuf>,
}

/// Where the generated lines go. `Text` hands them back to the caller
/// instead of writing anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Stream,
    File(PathBuf),
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> Result<()> {
        let lines = self.generate()?;
        let mode = match &self.outfile {
            Some(path) => OutputMode::File(path.clone()),
            None => OutputMode::Stream,
        };
        write_output(lines, mode)?;
        Ok(())
    }

    /// Full pipeline short of the output sink: read, parse, sample the root,
    /// infer, and render.
    pub fn generate(&self) -> Result<Vec<String>> {
        let value = self.read_input()?;
        let root_map = sample_root(&value)?;

        let mut inf = Inferencer::new();
        let root = inf.infer(&self.name, root_map)?;

        let mut cg = Codegen::new();
        if let Some(decorator) = &self.decorator {
            cg.decorator = normalize_decorator(decorator);
        }
        cg.emit(&root, inf.annotations());
        Ok(cg.into_lines())
    }

    fn read_input(&self) -> Result<serde_json::Value> {
        let source = match &self.infile {
            None => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read JSON from stdin")?;
                buf
            }
            Some(path) => {
                if !path.exists() {
                    bail!("infile {} not found", path.display());
                }
                std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?
            }
        };
        serde_json::from_str(&source).context("failed to parse JSON input")
    }
}

pub fn write_output(lines: Vec<String>, mode: OutputMode) -> Result<Option<Vec<String>>> {
    match mode {
        OutputMode::Text => Ok(Some(lines)),
        OutputMode::Stream => {
            print!("{}", lines.join("\n"));
            Ok(None)
        }
        OutputMode::File(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("failed to create {}", parent.display()))?;
                }
            }
            std::fs::write(&path, lines.join("\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            Ok(None)
        }
    }
}

// Empty string disables the decorator line; a bare name gets the `@` marker.
fn normalize_decorator(decorator: &str) -> Option<String> {
    if decorator.is_empty() {
        None
    } else if decorator.starts_with('@') {
        Some(decorator.to_string())
    } else {
        Some(format!("@{decorator}"))
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decorator_marker_is_prepended_when_missing() {
        assert_eq!(normalize_decorator("attr.s").as_deref(), Some("@attr.s"));
        assert_eq!(
            normalize_decorator("@dataclasses.dataclass").as_deref(),
            Some("@dataclasses.dataclass")
        );
        assert_eq!(normalize_decorator(""), None);
    }

    #[test]
    fn text_mode_returns_the_lines() {
        let lines = vec!["class Root:".to_string(), "    x: int".to_string()];
        let back = write_output(lines.clone(), OutputMode::Text).unwrap();
        assert_eq!(back, Some(lines));
    }

    #[test]
    fn cli_parses_positional_defaults() {
        let cli = CommandLineInterface::parse_from(["dataclassify"]);
        assert_eq!(cli.name, "Root");
        assert!(cli.infile.is_none());
        assert!(cli.outfile.is_none());
        assert!(cli.decorator.is_none());
    }

    #[test]
    fn cli_parses_name_infile_outfile() {
        let cli = CommandLineInterface::parse_from([
            "dataclassify", "-d", "attr.s", "Payload", "in.json", "out.py",
        ]);
        assert_eq!(cli.name, "Payload");
        assert_eq!(cli.infile.as_deref(), Some(std::path::Path::new("in.json")));
        assert_eq!(cli.outfile.as_deref(), Some(std::path::Path::new("out.py")));
        assert_eq!(cli.decorator.as_deref(), Some("attr.s"));
    }
}
