mod cli;
mod terminal;

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use folio_ai::{CompletionGateway, HttpGateway, HttpGatewayConfig};
use folio_chat::{FullPageAssistant, WidgetAssistant};
use folio_common::{ConfigError, FolioError};
use folio_config::FolioConfig;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "folio=info";

fn load_config(args: &cli::Args) -> Result<FolioConfig, ConfigError> {
    match args.config {
        Some(ref path) => folio_config::load_config_from(Path::new(path)),
        None => folio_config::load_config(),
    }
}

fn init_logging(args: &cli::Args, config: Option<&FolioConfig>) {
    let directive = match (&args.log_level, config) {
        (Some(level), _) => format!("folio={level}"),
        (None, Some(config)) => format!("folio={}", config.logging.level.as_directive()),
        (None, None) => DEFAULT_DIRECTIVE.to_string(),
    };

    let directive: Directive = directive
        .parse()
        .or_else(|_| DEFAULT_DIRECTIVE.parse())
        .expect("default log directive is valid");

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

fn build_gateway(args: &cli::Args, config: &FolioConfig) -> Arc<dyn CompletionGateway> {
    let endpoint = args
        .endpoint
        .clone()
        .unwrap_or_else(|| config.gateway.endpoint.clone());

    let gateway_config = HttpGatewayConfig::new(endpoint, config.assistant.system_instruction())
        .with_api_token(config.gateway.api_token.clone())
        .with_token_from_env();
    let gateway = HttpGateway::new(gateway_config);
    tracing::info!(
        endpoint = %gateway.config().endpoint,
        authorized = gateway.config().api_token.is_some(),
        "completion gateway ready"
    );

    Arc::new(gateway)
}

fn run(args: cli::Args, config: FolioConfig) -> Result<(), FolioError> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .map_err(|e| FolioError::Runtime(e.to_string()))?;

    // Build the completion gateway
    let gateway = build_gateway(&args, &config);
    let handle = runtime.handle().clone();

    runtime.block_on(async {
        match args.mode {
            cli::Mode::Page => {
                let page = FullPageAssistant::from_config(&config, gateway, handle);
                terminal::run_page(page, args.html).await
            }
            cli::Mode::Widget => {
                let widget = WidgetAssistant::from_config(&config, gateway, handle);
                terminal::run_widget(widget, args.html).await
            }
        }
    })
}

fn main() -> ExitCode {
    // Parse CLI arguments
    let args = cli::parse();

    // Load config first so its log level can seed the filter
    let loaded = load_config(&args);

    // Initialize logging
    init_logging(&args, loaded.as_ref().ok());

    tracing::info!("Folio v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = match loaded {
        Ok(config) => config,
        Err(e @ ConfigError::FileNotFound(_)) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            FolioConfig::default()
        }
    };

    // Run the selected presentation until /quit or end of input
    match run(args, config) {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
