//! Contract Check Server
//!
//! Accepts employment contract text and returns a plain-language risk
//! assessment produced by the rule-based `contract-engine`. Provides REST API
//! endpoints for:
//!
//! - Contract analysis
//! - Red-flag and clause-type catalog listing
//!
//! ## Architecture
//!
//! The server is the only layer that deals with uploads, validation and
//! transport concerns:
//!
//! - Rate limiting per client IP via tower-governor
//! - Upload size and minimum text length checks
//! - Plain-text decoding (PDF/DOCX extraction is an external service)

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    response::IntoResponse,
    routing::{get, post, MethodRouter},
    Router,
};
use clap::Parser;
use contract_engine::ContractAnalyzer;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod error;
mod extract;

use error::ServerError;

use api::{
    handle_analyze_contract, handle_analyze_info, handle_health, handle_list_clause_types,
    handle_list_red_flags,
};

/// Default upload limit (5 MiB)
const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Command-line arguments for the contract server
#[derive(Parser, Debug)]
#[command(name = "contract-server")]
#[command(about = "Employment contract risk analysis server")]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "CONTRACT_SERVER_PORT", default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, env = "CONTRACT_SERVER_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Maximum accepted contract size in bytes
    #[arg(long, env = "CONTRACT_SERVER_MAX_UPLOAD_BYTES", default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    max_upload_bytes: usize,

    /// Minimum trimmed text length, in characters, worth analyzing
    #[arg(long, env = "CONTRACT_SERVER_MIN_TEXT_CHARS", default_value = "100")]
    min_text_chars: usize,

    /// Rate limit: requests allowed in a burst per IP
    #[arg(long, env = "CONTRACT_SERVER_RATE_LIMIT_BURST", default_value = "10")]
    rate_limit_burst: u32,

    /// Rate limit: seconds until one more request is allowed per IP
    #[arg(long, env = "CONTRACT_SERVER_RATE_LIMIT_REPLENISH_SECS", default_value = "360")]
    rate_limit_replenish_secs: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Shared application state
#[derive(Clone, Copy)]
pub struct AppState {
    pub analyzer: ContractAnalyzer<'static>,
    pub max_upload_bytes: usize,
    pub min_text_chars: usize,
    pub rate_limit_burst: u32,
    pub rate_limit_replenish_secs: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            analyzer: ContractAnalyzer::default(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            min_text_chars: 100,
            rate_limit_burst: 10,
            rate_limit_replenish_secs: 360,
        }
    }
}

impl From<&Args> for AppState {
    fn from(args: &Args) -> Self {
        Self {
            max_upload_bytes: args.max_upload_bytes,
            min_text_chars: args.min_text_chars,
            rate_limit_burst: args.rate_limit_burst,
            rate_limit_replenish_secs: args.rate_limit_replenish_secs,
            ..Self::default()
        }
    }
}

impl AppState {
    /// Request body limit: base64 inflates uploads by 4/3, plus room for JSON
    fn max_request_bytes(&self) -> usize {
        self.max_upload_bytes / 3 * 4 + 64 * 1024
    }
}

/// Build the API router without rate limiting
pub fn app_router(state: AppState) -> Router {
    routes(state, post(handle_analyze_contract))
}

/// Build the API router with per-IP rate limiting on contract analysis.
///
/// Only `POST /api/analyze-contract` draws from the limiter; health checks
/// and catalog listings are never throttled.
pub fn build_app(state: AppState) -> anyhow::Result<Router> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(SmartIpKeyExtractor)
            .per_second(state.rate_limit_replenish_secs)
            .burst_size(state.rate_limit_burst)
            .error_handler(|err| ServerError::from(err).into_response())
            .finish()
            .ok_or_else(|| anyhow::anyhow!("Invalid rate limit configuration"))?,
    );

    let analyze = post(handle_analyze_contract).route_layer(GovernorLayer {
        config: governor_conf,
    });

    Ok(routes(state, analyze))
}

fn routes(state: AppState, analyze: MethodRouter<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handle_health))
        // API endpoints
        .route(
            "/api/analyze-contract",
            get(handle_analyze_info).merge(analyze),
        )
        .route("/api/red-flags", get(handle_list_red_flags))
        .route("/api/clause-types", get(handle_list_clause_types))
        .layer(DefaultBodyLimit::max(state.max_request_bytes()))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting contract server on {}:{}", args.host, args.port);

    let state = AppState::from(&args);

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = build_app(state)?
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!(
        "Rate limit: burst of {} per IP, one more every {}s",
        args.rate_limit_burst, args.rate_limit_replenish_secs
    );
    info!("Max upload: {} bytes", args.max_upload_bytes);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
