/*
 * ==========================================================================
 * JFTT - Teaching Language Front End
 * ==========================================================================
 *
 * File:     main.rs
 * Purpose:  Command-line driver: parse a source file and report.
 *
 * Usage:    jftt <FILE> [--format text|json|tree|source] [--max-errors N]
 *
 * Exit status:
 *   0  the file parsed without diagnostics
 *   1  at least one diagnostic was reported
 *   2  the file could not be read
 *
 * License:
 * This file is part of the JFTT front-end project.
 *
 * JFTT is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use jftt::printer::{dump_program, print_program};
use jftt::{parse_with, DiagnosticPrinter, ParseOptions, ParseOutput};

#[derive(Parser, Debug)]
#[command(name = "jftt")]
#[command(about = "Parse a JFTT program and report syntax errors")]
struct Args {
    /// Path to the source file
    file: PathBuf,

    /// What to print when the file parses cleanly
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Stop after this many errors
    #[arg(long)]
    max_errors: Option<usize>,

    /// Print nothing on success
    #[arg(long, short)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// A one-line verdict
    Text,
    /// Tree and diagnostics as JSON
    Json,
    /// Indented tree dump
    Tree,
    /// Canonical source
    Source,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,jftt=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let args = Args::parse();

    let source = match fs::read_to_string(&args.file) {
        Ok(source) => source,
        Err(err) => {
            error!("Cannot read '{}': {}", args.file.display(), err);
            process::exit(2);
        }
    };

    let options = ParseOptions {
        max_diagnostics: args.max_errors,
        cancel: None,
    };
    let output = parse_with(&source, &options);

    // JSON carries the diagnostics itself, broken or not.
    if args.format == Format::Json {
        emit_json(&output);
    }

    if !output.diagnostics.is_empty() {
        if args.format != Format::Json {
            let printer = DiagnosticPrinter::new(args.file.display().to_string(), source.as_str());
            for diagnostic in &output.diagnostics {
                printer.print(diagnostic);
            }
        }
        eprintln!("Compilation failed due to syntax errors!");
        process::exit(1);
    }

    info!("Parsed {}", args.file.display());

    if args.quiet {
        return;
    }

    let Some(program) = output.program.as_ref() else {
        return;
    };

    match args.format {
        Format::Text => println!("No syntax errors found."),
        Format::Json => {}
        Format::Tree => print!("{}", dump_program(program)),
        Format::Source => print!("{}", print_program(program)),
    }
}

fn emit_json(output: &ParseOutput) {
    match serde_json::to_string_pretty(output) {
        Ok(json) => println!("{}", json),
        Err(err) => error!("Cannot serialize output: {}", err),
    }
}
