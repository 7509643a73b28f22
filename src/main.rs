use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_tracing(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let cli = trials_dashboard::cli::Cli::parse();
    match cli.command {
        trials_dashboard::cli::Commands::Serve { host, port, data } => {
            init_tracing("info,tower_http=debug");
            let result = match trials_dashboard::sources::open(data.as_deref()) {
                Ok(source) => trials_dashboard::server::run_http(&host, port, source).await,
                Err(err) => Err(err.into()),
            };
            match result {
                Ok(()) => std::process::ExitCode::SUCCESS,
                Err(err) => {
                    eprintln!("Error: {err}");
                    std::process::ExitCode::from(1)
                }
            }
        }
        _ => {
            init_tracing("warn");
            match trials_dashboard::cli::run(cli).await {
                Ok(output) => {
                    println!("{output}");
                    std::process::ExitCode::SUCCESS
                }
                Err(err) => {
                    if let Some(trials_err) =
                        err.downcast_ref::<trials_dashboard::error::TrialsError>()
                    {
                        eprintln!("Error: {trials_err}");
                    } else {
                        eprintln!("Error: {err}");
                    }
                    std::process::ExitCode::from(1)
                }
            }
        }
    }
}
