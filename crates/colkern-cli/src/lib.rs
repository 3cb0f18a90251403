//! colkern-cli: command line front end for the colkern kernels.
//!
//! Operands are passed as JSON literals, vectors as `[1, 2, 3]` and matrices
//! as an array of columns, `[[1, 0], [0, 1]]`. Results are printed as JSON.
use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command, ValueHint};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::{Path, PathBuf};

use colkern::config::{ColumnCheck, KernelConfig};
use colkern::kernels;
use colkern::math::{IndexedView, Matrix, Vector};

pub fn load_kernel_config<P: AsRef<Path>>(path: P) -> Result<KernelConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: KernelConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

/// Config file (if any) with the `--column-check` flag applied on top.
pub fn resolve_config(matches: &ArgMatches) -> Result<KernelConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => load_kernel_config(path)?,
        None => KernelConfig::default(),
    };
    if let Some(check) = matches.get_one::<String>("column_check") {
        let check: ColumnCheck = check.parse().map_err(anyhow::Error::msg)?;
        config = config.with_column_check(check);
    }
    Ok(config)
}

fn parse_operand<T: DeserializeOwned>(matches: &ArgMatches, name: &str) -> Result<T> {
    let raw = matches
        .get_one::<String>(name)
        .with_context(|| format!("Missing operand: {}", name))?;
    serde_json::from_str(raw).with_context(|| format!("Invalid JSON for {}: {}", name, raw))
}

fn vector_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .help(help)
        .required(true)
        .value_parser(clap::builder::NonEmptyStringValueParser::new())
        .value_hint(ValueHint::Other)
}

fn binary(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(vector_arg("x", "Left vector as a JSON array"))
        .arg(vector_arg("y", "Right vector as a JSON array"))
}

pub fn build_cli() -> Command {
    Command::new("colkern")
        .version(clap::crate_version!())
        .about("Dense column-major vector and matrix kernels")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .help("Path to a JSON kernel configuration file")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("column_check")
                .long("column-check")
                .global(true)
                .help("How strictly matrix columns are validated. Overrides the config file.")
                .value_parser(["strict", "lenient"]),
        )
        .subcommand(
            Command::new("unit")
                .about("Standard basis vector e_k of length n")
                .arg(
                    Arg::new("n")
                        .long("n")
                        .required(true)
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("k")
                        .long("k")
                        .required(true)
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .subcommand(binary("vsum", "Element-wise sum of two vectors"))
        .subcommand(binary("vmul", "Element-wise product of two vectors"))
        .subcommand(binary("inner", "Inner product of two vectors"))
        .subcommand(binary("outer", "Outer product of two vectors (column-major)"))
        .subcommand(
            Command::new("sax")
                .about("Scale a vector by a scalar")
                .arg(
                    Arg::new("a")
                        .help("Scalar factor")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(vector_arg("x", "Vector as a JSON array")),
        )
        .subcommand(
            Command::new("gax")
                .about("Matrix times vector, A·x")
                .arg(vector_arg("a", "Matrix as a JSON array of columns"))
                .arg(vector_arg("x", "Vector as a JSON array")),
        )
        .subcommand(
            Command::new("lgax")
                .about("Vector times matrix, xᵗ·A")
                .arg(vector_arg("x", "Vector as a JSON array"))
                .arg(vector_arg("a", "Matrix as a JSON array of columns")),
        )
        .subcommand(
            Command::new("view")
                .about("Re-index a vector through a list of positions")
                .arg(vector_arg("arr", "Source vector as a JSON array"))
                .arg(vector_arg("idx", "Positions as a JSON array of integers")),
        )
}

/// Runs the selected subcommand and returns its result as JSON.
pub fn run(matches: &ArgMatches, config: &KernelConfig) -> Result<Value> {
    let check = config.column_check;
    let value = match matches.subcommand() {
        Some(("unit", m)) => {
            let n = *m.get_one::<usize>("n").context("Missing --n")?;
            let k = *m.get_one::<usize>("k").context("Missing --k")?;
            serde_json::to_value(kernels::unit::<f64>(n, k)?)?
        }
        Some(("vsum", m)) => {
            let (x, y) = vector_pair(m)?;
            serde_json::to_value(kernels::vsum(&x, &y)?)?
        }
        Some(("vmul", m)) => {
            let (x, y) = vector_pair(m)?;
            serde_json::to_value(kernels::vmul(&x, &y)?)?
        }
        Some(("inner", m)) => {
            let (x, y) = vector_pair(m)?;
            serde_json::to_value(kernels::inner(&x, &y)?)?
        }
        Some(("outer", m)) => {
            let (x, y) = vector_pair(m)?;
            serde_json::to_value(kernels::outer(&x, &y))?
        }
        Some(("sax", m)) => {
            let a = *m.get_one::<f64>("a").context("Missing scalar")?;
            let x: Vector<f64> = parse_operand(m, "x")?;
            serde_json::to_value(kernels::sax(a, &x))?
        }
        Some(("gax", m)) => {
            let a: Matrix<f64> = parse_operand(m, "a")?;
            let x: Vector<f64> = parse_operand(m, "x")?;
            serde_json::to_value(kernels::gax_with(&a, &x, check)?)?
        }
        Some(("lgax", m)) => {
            let x: Vector<f64> = parse_operand(m, "x")?;
            let a: Matrix<f64> = parse_operand(m, "a")?;
            serde_json::to_value(kernels::lgax_with(&x, &a, check)?)?
        }
        Some(("view", m)) => {
            let arr: Vector<f64> = parse_operand(m, "arr")?;
            let idx: Vec<usize> = parse_operand(m, "idx")?;
            serde_json::to_value(IndexedView::new(&arr, &idx)?.to_vector())?
        }
        Some((other, _)) => anyhow::bail!("Unknown subcommand: {}", other),
        None => anyhow::bail!("A subcommand is required"),
    };
    Ok(value)
}

fn vector_pair(matches: &ArgMatches) -> Result<(Vector<f64>, Vector<f64>)> {
    Ok((parse_operand(matches, "x")?, parse_operand(matches, "y")?))
}
