//! CLI tool to read a project roster and emit projects or the member report.
//!
//! Usage:
//!   member-pivot [input] [-e projects|members|none] [-o output]
//!
//! Reads stdin when no input (or `-`) is given, writes stdout when no output
//! file is given.

use clap::Parser;
use member_pivot::{LineSink, Output, ReadLines, Summary, WriteLines, convert};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

/// Read a project roster and re-emit it, optionally pivoted by member.
#[derive(Parser)]
#[command(name = "member-pivot", version)]
struct Cli {
    /// Project roster to read (`-` or omitted for stdin)
    input: Option<String>,

    /// Document to emit
    #[arg(short, long, value_enum, default_value_t = Output::Members)]
    emit: Output,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Show paths and counts on stderr, and log at info level
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_with<K: LineSink>(input: Option<&str>, sink: &mut K, emit: Output) -> Result<Summary, String> {
    let result = match input {
        None | Some("-") => convert(&mut ReadLines::new(io::stdin().lock()), sink, emit),
        Some(path) => {
            let file =
                File::open(path).map_err(|e| format!("Error reading input file '{path}': {e}"))?;
            convert(&mut ReadLines::new(BufReader::new(file)), sink, emit)
        }
    };
    result.map_err(|e| format!("Conversion error: {e}"))
}

fn run(cli: &Cli) -> Result<Summary, String> {
    let input = cli.input.as_deref();

    match &cli.output {
        Some(out_path) => {
            if let Some(parent) = Path::new(out_path.as_str()).parent()
                && !parent.as_os_str().is_empty()
                && fs::create_dir_all(parent).is_err()
            {
                return Err(format!("Error creating output directory for '{out_path}'"));
            }
            // Nothing touches the file until the input has been read in full.
            let mut lines: Vec<String> = Vec::new();
            let summary = run_with(input, &mut lines, cli.emit)?;
            let mut text = String::new();
            for line in &lines {
                text.push_str(line);
                text.push('\n');
            }
            fs::write(out_path, text)
                .map_err(|e| format!("Error writing output file '{out_path}': {e}"))?;
            Ok(summary)
        }
        None => {
            let mut sink = WriteLines::new(BufWriter::new(io::stdout().lock()));
            let summary = run_with(input, &mut sink, cli.emit)?;
            sink.flush()
                .map_err(|e| format!("Error writing output: {e}"))?;
            Ok(summary)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.verbose {
        eprintln!("Input:    {}", cli.input.as_deref().unwrap_or("(stdin)"));
        eprintln!("Output:   {}", cli.output.as_deref().unwrap_or("(stdout)"));
        eprintln!("Emit:     {}", cli.emit);
    }

    match run(&cli) {
        Ok(summary) => {
            if cli.verbose {
                eprintln!(
                    "Records:  {} projects, {} member lines -> {} members, {} lines out",
                    summary.projects, summary.project_members, summary.members, summary.lines_out
                );
            }
        }
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}
