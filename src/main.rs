mod cli;

use cli::{Args, Command};
use nutriscan::config::{discover_config, load_config_from_path, validate_base_url, Settings};
use nutriscan::prelude::*;
use std::process;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Logs go to stderr so stdout only carries scan output
fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "nutriscan=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&std::env::current_dir()?)?,
    };

    if let Some(ref base_url) = args.base_url {
        validate_base_url(base_url)?;
    }

    let discard_stale = matches!(
        args.command,
        Command::Scan {
            discard_stale: true
        }
    );
    let settings = Settings::resolve(args.base_url, discard_stale, config);

    // Create adapters (Dependency Injection)
    let catalog = OpenFoodFactsClient::with_endpoint(&settings.base_url, &settings.user_agent)?;
    let presenter = Arc::new(ConsolePresenter::stdout());

    match args.command {
        Command::Lookup { barcodes } => run_lookup(catalog, presenter, barcodes).await,
        Command::Scan { .. } => run_scan(catalog, presenter, &settings).await,
    }
}

async fn run_lookup<S: PresentationSink>(
    catalog: OpenFoodFactsClient,
    presenter: Arc<S>,
    barcodes: Vec<Barcode>,
) -> Result<ExitCode> {
    let use_case = LookupProductsUseCase::new(catalog);
    let response = use_case.execute(LookupRequest::new(barcodes)).await;

    for (index, outcome) in response.outcomes.iter().enumerate() {
        let event = ScanEvent::new(outcome.barcode.clone(), index as u64 + 1);
        match &outcome.result {
            Ok(result) => presenter.on_result(&event, result),
            Err(error) => presenter.on_error(&event, error),
        }
    }

    if response.is_complete() {
        Ok(ExitCode::Success)
    } else {
        Ok(ExitCode::LookupIncomplete)
    }
}

async fn run_scan<S: PresentationSink + 'static>(
    catalog: OpenFoodFactsClient,
    presenter: Arc<S>,
    settings: &Settings,
) -> Result<ExitCode> {
    let pipeline = ScanPipeline::new(
        TextPayloadDecoder::new(),
        catalog,
        presenter,
        ScanOptions::new(settings.discard_stale_results),
    );

    let source = LineFrameSource::new(BufReader::new(tokio::io::stdin()));
    let summary = pipeline.run(source).await;
    pipeline.shutdown().await;

    info!(
        frames = summary.frames_analyzed,
        lookups = summary.lookups_dispatched,
        "scan finished"
    );
    Ok(ExitCode::Success)
}
