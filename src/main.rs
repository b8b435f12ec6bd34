use clap::Parser;
use pinpoint::config::Config;
use pinpoint::geocode::Resolver;
use pinpoint::server;

/// pinpoint — resolve street addresses to normalized locations.
///
/// One-shot lookups print a JSON record to stdout; `--serve` runs the web
/// form and the /api/geocode proxy endpoint.
///
/// Examples:
///   pinpoint "1600 Amphitheatre Parkway, Mountain View, CA"
///   pinpoint --serve
///   pinpoint --serve --host 0.0.0.0 --port 3000
#[derive(Parser)]
#[command(name = "pinpoint", version, about, long_about = None)]
struct Cli {
    /// Street address to resolve (one-shot mode).
    #[arg(index = 1)]
    address: Option<String>,

    /// Run the HTTP server instead of a one-shot lookup.
    #[arg(long)]
    serve: bool,

    /// Server bind host.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Server bind port.
    #[arg(long, short = 'p', default_value_t = 8080)]
    port: u16,
}

fn main() {
    let cli = Cli::parse();
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    if cli.serve {
        let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("Error: Cannot start async runtime: {}", e);
            std::process::exit(1);
        });
        runtime.block_on(server::start(config, &cli.host, cli.port));
        return;
    }

    let Some(address) = cli.address else {
        eprintln!("Error: No address given.");
        eprintln!();
        eprintln!("Usage:");
        eprintln!("  pinpoint \"1600 Amphitheatre Parkway, Mountain View, CA\"");
        eprintln!("  pinpoint --serve");
        std::process::exit(1);
    };

    let resolver = Resolver::new(config.geocoding_api_key);
    match resolver.resolve(&address) {
        Ok(record) => println!("{}", serde_json::to_string_pretty(&record).unwrap()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
