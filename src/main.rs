use clap::Parser;
use miette::Result;
use payfactory::application::checkout::Checkout;
use payfactory::application::registry::ProviderRegistry;
use payfactory::domain::amount::Amount;
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Payment provider to use. Prompted for when omitted.
    #[arg(long)]
    provider: Option<String>,

    /// Transaction amount. Prompted for when omitted.
    #[arg(long, allow_hyphen_values = true)]
    amount: Option<String>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let registry = ProviderRegistry::global();

    // Values given on the command line are parsed once; bad ones are fatal
    let provider = cli
        .provider
        .as_deref()
        .map(|raw| registry.parse_provider(raw))
        .transpose()?;
    let amount = cli
        .amount
        .as_deref()
        .map(str::parse::<Amount>)
        .transpose()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    Checkout::new(registry).run_with(provider, amount, stdin.lock(), stdout.lock())?;

    Ok(())
}
