use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() {
    init_tracing();
    promptmaster::app::cli::run();
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_env("PROMPTMASTER_LOG")
                .unwrap_or_else(|_| "promptmaster=warn".into()),
        )
        .init();
}
