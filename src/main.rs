use anyhow::{Context, Result};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use user_store::{cli::Cli, storage::local::LocalStorageBackend, App, Options};

fn main() -> ExitCode {
    if let Err(error) = init_tracing() {
        eprintln!("warning: {error:#}");
    }

    let options = Options::from(Cli::parse_normalized());
    let app = App::new(LocalStorageBackend::new());
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    match app.run(&options, &mut handle) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            debug!(
                severity = error.severity().as_str(),
                fatal = error.is_fatal(),
                "invocation failed"
            );
            eprintln!("{error}");
            ExitCode::from(error.exit_code().clamp(1, 255) as u8)
        }
    }
}

// 標準出力はデータ専用なので、ログは標準エラー出力へ流す
fn init_tracing() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("user_store=warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("failed to initialise logging")
}
