//! A simple and stupid tool for converting JSON into Python dataclasses
//! with annotated attributes.
pub mod ir;
pub mod naming;
pub mod inference;
pub mod codegen;
pub mod cli;

fn main() {
    let command_line_interface = cli::CommandLineInterface::load();
    if let Err(error) = command_line_interface.run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}
