use std::{
    fs::File,
    io::{self, Read, Write},
    path::PathBuf,
};

const INFINITE_KEYWORD: &str = "INFINITO";
const EMPTY_KEYWORD: &str = "VAZIO";
const FOUND_KEYWORD: &str = "SIM";
const NOT_FOUND_KEYWORD: &str = "NAO";

use anyhow::Result;
use clap::Parser;
use itertools::Itertools;
use shikoku::mengo::{
    cli::Cli,
    parser::{self, Parser as _, Statement},
    Mengo,
};

fn read_from_stdin(buf: &mut String) -> Result<()> {
    let mut stdin = io::stdin();
    stdin.read_to_string(buf)?;

    Ok(())
}

fn read_from_file(buf: &mut String, path: PathBuf) -> Result<()> {
    let mut f = File::open(path)?;
    f.read_to_string(buf)?;

    Ok(())
}

fn process_statements(stms: Vec<Statement>) -> Result<String> {
    let mut mengo: Mengo<i32> = Mengo::new();
    let mut str_list: Vec<String> = Vec::new();

    for stm in stms {
        match stm {
            Statement::Insert(value) => {
                mengo.insert(value);
            }
            Statement::Search(value) => match mengo.contains(&value) {
                true => str_list.push(FOUND_KEYWORD.to_string()),
                false => str_list.push(NOT_FOUND_KEYWORD.to_string()),
            },
            Statement::Successor(value) => match mengo.successor(&value) {
                Some(succ) => str_list.push(format!("{succ}")),
                None => str_list.push(INFINITE_KEYWORD.to_string()),
            },
            Statement::Predecessor(value) => match mengo.predecessor(&value) {
                Some(pred) => str_list.push(format!("{pred}")),
                None => str_list.push(INFINITE_KEYWORD.to_string()),
            },
            Statement::Min => match mengo.min() {
                Some(min) => str_list.push(format!("{min}")),
                None => str_list.push(EMPTY_KEYWORD.to_string()),
            },
            Statement::Max => match mengo.max() {
                Some(max) => str_list.push(format!("{max}")),
                None => str_list.push(EMPTY_KEYWORD.to_string()),
            },
            Statement::Print => {
                str_list.push(mengo.iter().join(" "));
            }
            Statement::Height => {
                str_list.push(mengo.height().to_string());
            }
        }
    }

    let res = str_list.join("\n");

    Ok(res)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut buf = String::new();

    match cli.input {
        Some(path) => read_from_file(&mut buf, path)?,
        None => read_from_stdin(&mut buf)?,
    }

    let mut writer: Box<dyn Write>;

    writer = match cli.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    let parser = parser::ParserArretado::default();
    let stms = parser.parse_lines(&buf)?;

    let mut output_string = process_statements(stms)?;

    if cli.new_line {
        output_string.push('\n');
    }
    writer.write_all(output_string.as_bytes())?;

    Ok(())
}
