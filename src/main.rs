use clap::Parser;
use tracing_subscriber::EnvFilter;
use vault_graph::{build_graph_file, check_graph_file, Args};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args);

    let config = args.to_config()?;
    let graph = build_graph_file(&config)?;
    if args.check {
        check_graph_file(&config, &graph)?;
    }

    Ok(())
}

fn init_logging(args: &Args) {
    let default_level = if args.verbose {
        "debug"
    } else if args.quiet {
        "warn"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
