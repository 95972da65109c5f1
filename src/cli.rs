// src/cli.rs
use std::{env, path::PathBuf};

use crate::params::Params;
use crate::runner;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let params = parse_cli()?;
    runner::run(&params)?;
    Ok(())
}

fn parse_cli() -> Result<Params, Box<dyn std::error::Error>> {
    let mut params = Params::new();

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-f" | "--file" => {
                let v = args.next().ok_or("Missing value for --file")?;
                params.out = PathBuf::from(v);
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(params)
}
