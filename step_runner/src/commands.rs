use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use algovista::catalog::{self, Entry, Family, CATALOG};
use algovista::searching::SearchAlgorithm;
use algovista::sorting::SortAlgorithm;
use algovista::string_algorithms::MatchAlgorithm;

use crate::cli::Command;
use crate::request::{self, parse_array, Request};

pub fn execute_command(cmd: Command) -> Result<()> {
    match cmd {
        Command::Run { input, pretty } => {
            let raw = read_input(input.as_deref())?;
            let request: Request = serde_json::from_str(&raw).context("malformed request")?;
            emit(&request.execute()?, pretty)?;
        }
        Command::Sort { algorithm, array, pretty } => {
            let algorithm: SortAlgorithm = algorithm.parse()?;
            let array = parse_array(&array)?;
            emit(&request::sort(algorithm, &array)?, pretty)?;
        }
        Command::Search { algorithm, array, target, pretty } => {
            let algorithm: SearchAlgorithm = algorithm.parse()?;
            let array = parse_array(&array)?;
            let outcome = algorithm.run(&array, target).with_context(|| format!("{algorithm} failed"))?;
            emit(&outcome, pretty)?;
        }
        Command::Match { algorithm, text, pattern, pretty } => {
            let algorithm: MatchAlgorithm = algorithm.parse()?;
            let outcome = algorithm.run(&text, &pattern).with_context(|| format!("{algorithm} failed"))?;
            emit(&outcome, pretty)?;
        }
        Command::Catalog { json, family } => {
            let entries: Vec<&Entry> = match family {
                Some(f) => catalog::family(f.parse::<Family>()?).collect(),
                None => CATALOG.iter().collect(),
            };
            if json {
                emit(&entries, true)?;
            } else {
                print_catalog(&entries);
            }
        }
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path).with_context(|| format!("failed to read `{}`", path.display())),
        None => {
            let mut raw = String::new();
            io::stdin().read_to_string(&mut raw).context("failed to read request from stdin")?;
            Ok(raw)
        }
    }
}

fn emit<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    let text = if pretty { serde_json::to_string_pretty(value) } else { serde_json::to_string(value) };
    println!("{}", text.context("failed to serialize output")?);
    Ok(())
}

fn print_catalog(entries: &[&Entry]) {
    let stability = |e: &Entry| match e.stable {
        Some(true) => "stable",
        Some(false) => "unstable",
        None => "",
    };
    let mut current = None;
    for &e in entries {
        if current != Some(e.family) {
            println!("{}", e.family);
            current = Some(e.family);
        }
        println!("  {:<22} {:<30} {:<32} {:<10} {}", e.key, e.name, e.time, e.space, stability(e));
    }
}
