mod cli;
mod extract_cmd;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    // RUST_LOG wins; --verbose only raises our own crates when it is unset.
    let default = if verbose {
        "warn,pdfharvest=debug,pdfharvest_cli=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match extract_cmd::run(&cli) {
        Ok(report) => {
            tracing::debug!(
                pages = report.page_count(),
                tables = report.tables.len(),
                "done"
            );
            println!(
                "✔ Extraction complete. Output in: {}",
                report.output_dir.display()
            );
        }
        Err(code) => std::process::exit(code),
    }
}
