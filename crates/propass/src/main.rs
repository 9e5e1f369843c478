use propass_cli_helpers::messages::fail;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "propass=info".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .init();

    if let Err(e) = propass::cli::propass::run() {
        fail(e.to_string());
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
