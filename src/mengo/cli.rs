use clap::Parser;
use std::path::PathBuf;

/// A program to process statements over a Red Black Tree
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Name of input file to read and process statements
    #[arg(short, long, value_name = "INPUT_FILE")]
    pub input: Option<PathBuf>,

    /// Name of output file to write
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,

    /// Write a trailing new line at the end of the output
    #[arg(short, long)]
    pub new_line: bool,
}
