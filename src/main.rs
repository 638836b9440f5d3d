use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(err) = kzg_pcs::run_kzg() {
        error!(%err, "kzg round failed");
        std::process::exit(1);
    }
}
