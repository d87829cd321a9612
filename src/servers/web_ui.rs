use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json as ResponseJson, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::render::{load_template, render_index};
use crate::sgf::{extract_moves_with, ExtractOptions, MoveRecord, Numbering};
use crate::source::{pick_random, DirectorySource, PickedSource, SourceProvider};
use crate::SgfPreviewError;

#[derive(Serialize, Debug, Clone)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct StonesResponse {
    pub source: String,
    pub stones: Vec<MoveRecord>,
}

// Configuration pour le serveur Web UI
#[derive(Debug, Clone)]
pub struct WebUiConfig {
    pub port: u16,
    pub host: String,
    /// Directory scanned for `*.sgf` records
    pub games_dir: PathBuf,
    /// Page template, the built-in page is used when missing
    pub template_path: PathBuf,
    /// Number of move tokens scanned per record
    pub move_limit: usize,
    pub numbering: Numbering,
}

impl Default for WebUiConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            host: "0.0.0.0".to_string(),
            games_dir: PathBuf::from("games"),
            template_path: PathBuf::from("templates/index.html"),
            move_limit: 5,
            numbering: Numbering::ScanOrder,
        }
    }
}

#[derive(Clone)]
struct AppState {
    provider: Arc<dyn SourceProvider>,
    options: ExtractOptions,
    template_path: PathBuf,
}

// Serveur Web UI principal
pub struct WebUiServer {
    config: WebUiConfig,
    provider: Arc<dyn SourceProvider>,
}

impl WebUiServer {
    pub fn new(config: WebUiConfig) -> Self {
        let provider = Arc::new(DirectorySource::new(&config.games_dir));
        Self { config, provider }
    }

    /// Serves records from `provider` instead of `config.games_dir`
    pub fn with_provider(config: WebUiConfig, provider: Arc<dyn SourceProvider>) -> Self {
        Self { config, provider }
    }

    pub async fn start(&self) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.create_router();
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port).parse()?;
        let listener = TcpListener::bind(addr).await?;

        log::info!(
            "🌐 SGF preview starting on http://localhost:{} (records from {})",
            self.config.port,
            self.provider.describe()
        );

        axum::serve(listener, app).await?;
        Ok(())
    }

    pub fn create_router(&self) -> Router {
        let state = AppState {
            provider: self.provider.clone(),
            options: ExtractOptions {
                limit: self.config.move_limit,
                numbering: self.config.numbering,
            },
            template_path: self.config.template_path.clone(),
        };

        Router::new()
            .route("/", get(serve_index))
            .route("/api/stones", get(api_stones))
            .route("/api/status", get(api_status))
            .nest_service("/static", ServeDir::new("static"))
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .with_state(state)
    }
}

impl IntoResponse for SgfPreviewError {
    fn into_response(self) -> Response {
        let status = match &self {
            SgfPreviewError::InvalidSource(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        log::error!("❌ Request failed: {}", self);
        let body = ApiResponse {
            status: "error".to_string(),
            message: self.to_string(),
        };
        (status, ResponseJson(body)).into_response()
    }
}

/// One random pick and one extraction, on the blocking pool since the
/// provider does synchronous I/O
async fn pick_and_extract(
    state: &AppState,
) -> Result<(String, Vec<MoveRecord>), SgfPreviewError> {
    let provider = state.provider.clone();
    let picked = tokio::task::spawn_blocking(move || {
        let mut rng = rand::rng();
        pick_random(provider.as_ref(), &mut rng)
    })
    .await
    .map_err(|e| SgfPreviewError::Server(format!("source task failed: {}", e)))??;

    let PickedSource { id, text } = picked;
    let stones = extract_moves_with(&text, &state.options);
    log::info!("🎲 {}: {} stones", id, stones.len());
    Ok((id, stones))
}

async fn serve_index(State(state): State<AppState>) -> Result<Html<String>, SgfPreviewError> {
    let (_, stones) = pick_and_extract(&state).await?;
    let template = load_template(&state.template_path).await;
    Ok(Html(render_index(&template, &stones)?))
}

async fn api_stones(
    State(state): State<AppState>,
) -> Result<ResponseJson<StonesResponse>, SgfPreviewError> {
    let (source, stones) = pick_and_extract(&state).await?;
    Ok(ResponseJson(StonesResponse { source, stones }))
}

async fn api_status() -> ResponseJson<ApiResponse> {
    ResponseJson(ApiResponse {
        status: "ready".to_string(),
        message: "SGF preview server is running".to_string(),
    })
}
