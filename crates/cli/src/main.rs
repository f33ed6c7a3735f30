#![warn(clippy::pedantic)]

mod log;
mod package;

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{ArgAction, Parser};
use fitrack_domain::{Training, read_package};

use crate::package::Package;

/// Print statistics of workouts recorded by a sensor unit.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// File with one package per line ("-" for stdin); built-in samples if omitted
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    log::init(args.verbose).context("failed to initialize logger")?;

    let packages = match &args.input {
        Some(path) => read_packages(path)?,
        None => package::samples(),
    };

    report(&packages, &mut io::stdout().lock())
}

fn read_packages(path: &Path) -> anyhow::Result<Vec<Package>> {
    let input = if path.as_os_str() == "-" {
        io::read_to_string(io::stdin()).context("failed to read stdin")?
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?
    };

    Ok(package::parse_packages(&input)?)
}

fn report(packages: &[Package], out: &mut impl Write) -> anyhow::Result<()> {
    ::log::info!("processing {} packages", packages.len());

    for package in packages {
        let workout = read_package(&package.code, &package.data)
            .with_context(|| format!("line {}: invalid package", package.line))?;
        writeln!(out, "{}", workout.report())?;
    }

    Ok(())
}
