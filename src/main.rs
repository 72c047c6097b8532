use std::process::ExitCode;
use test_case_json::{convert, ConverterConfig};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> ExitCode {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    // ─── 2) convert the fixed file pair in the working directory ─────
    let config = ConverterConfig::default();
    info!(
        source = %config.source.display(),
        destination = %config.destination.display(),
        "startup"
    );

    // ─── 3) report ───────────────────────────────────────────────────
    match convert(&config) {
        Ok(summary) => {
            println!("{}", summary.operator_message());
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "conversion failed");
            eprintln!("{}", err.operator_message());
            ExitCode::FAILURE
        }
    }
}
