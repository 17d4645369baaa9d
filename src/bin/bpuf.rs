//! ClickHouse executable user defined function serving union-find requests.
//!
//! Reads one `JSONEachRow` request per line from stdin and writes one response per line
//! to stdout. Diagnostics go to stderr through `tracing`.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use bpuf::{
    logging::{self, LoggingError},
    udf::{self, Mode},
};

/// Command-line options parsed by [`clap`].
#[derive(Debug, Parser)]
#[command(name = "bpuf", about = "Union-find and bipartite union-find as ClickHouse functions.")]
struct Cli {
    /// Function served on stdin.
    #[arg(long, value_enum, default_value_t = Mode::UnionFind)]
    mode: Mode,

    /// Print the ClickHouse configuration for both functions and exit.
    #[arg(long = "udf-xml")]
    udf_xml: bool,
}

fn try_main(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    if cli.udf_xml {
        writer
            .write_all(udf::UDF_MANIFEST.as_bytes())
            .context("failed to write the function configuration")?;
        writer.flush().context("failed to flush output")?;
        return Ok(());
    }

    let stdin = io::stdin();
    udf::run(cli.mode, stdin.lock(), &mut writer)
        .with_context(|| format!("failed to serve `{}`", cli.mode.function_name()))?;

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main(cli) {
        error!(error = %format!("{err:#}"), "command execution failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
