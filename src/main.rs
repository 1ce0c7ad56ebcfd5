use anyhow::Result;
use clap::Parser;
use predation_lib::app::App;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file path. Defaults are used if it does not exist.
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Number of ticks to run
    #[arg(short, long, default_value_t = 200)]
    steps: u64,

    /// Seed override
    #[arg(long)]
    seed: Option<u64>,

    /// Series output (.json for JSON, CSV otherwise)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Final entity views as JSON
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Lifecycle events as JSON lines
    #[arg(long)]
    events: Option<PathBuf>,

    /// Print the resolved configuration as TOML and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut config = App::load_config(&args.config)?;
    if let Some(seed) = args.seed {
        config.world.seed = Some(seed);
    }
    if args.dump_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    let mut app = App::new(config)?;
    if args.steps > 0 {
        let last = *app.run(args.steps)?;
        println!(
            "tick {}: wolves {}, sheep {}, grass energy {}",
            last.tick, last.wolves, last.sheep, last.grass_energy
        );
    }

    if let Some(path) = &args.output {
        app.write_series(path)?;
    }
    if let Some(path) = &args.snapshot {
        app.write_snapshot(path)?;
    }
    if let Some(path) = &args.events {
        app.write_events(path)?;
    }

    Ok(())
}
