use std::io::{self, Write};

use clap::Parser;
use env_logger::Env;
use log::{debug, info, warn};

use homogeneous_compose::config::DEFAULT_SYMBOL_NAMES;
use homogeneous_compose::interfaces::OutputFormat;
use homogeneous_compose::symbolic::{bindings_map, Binding};
use homogeneous_compose::transforms::TransformComposer;
use homogeneous_compose::Result;

#[derive(Parser)]
#[command(name = "homogeneous-compose")]
#[command(about = "Print both products of a symbolic 2D rotation and translation")]
#[command(version)]
struct Cli {
    /// Output layout
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Inline)]
    format: OutputFormat,

    /// Also print both products evaluated at NAME=VALUE (repeatable)
    #[arg(short, long = "eval", value_name = "NAME=VALUE")]
    eval: Vec<Binding>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    info!("Starting homogeneous-compose v{}", homogeneous_compose::VERSION);

    let composer = TransformComposer::from_names(DEFAULT_SYMBOL_NAMES)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let bindings = if cli.eval.is_empty() {
        None
    } else {
        let known = [composer.theta(), composer.px(), composer.py()];
        for binding in &cli.eval {
            if !known.contains(&&binding.symbol) {
                warn!("Ignoring value for unknown symbol '{}'", binding.symbol);
            }
        }

        let bindings = bindings_map(&cli.eval);
        debug!("Evaluating with {} bound symbols", bindings.len());
        Some(bindings)
    };

    composer.write_reports(&mut out, cli.format, bindings.as_ref())?;

    out.flush()?;
    Ok(())
}
