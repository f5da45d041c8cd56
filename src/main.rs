use connecto::app::App;
use connecto::channels::CliChannel;
use connecto::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    eprintln!("💬 Connecto v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Entry: {}", config.entry);
    if let Some(seed) = config.seed {
        eprintln!("   Seed: {}", seed);
    }
    eprintln!("   Type ? for commands. quit to exit.");

    let mut app = App::from_config(&config);
    let channel = CliChannel::new();
    connecto::session::run(&mut app, &channel).await?;

    Ok(())
}
