use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use crate::session::Session;

pub mod routes;

/// Server state
pub struct AppState {
    pub session: Mutex<Session>,
}

impl AppState {
    pub fn new(session: Session) -> Arc<Self> {
        Arc::new(Self {
            session: Mutex::new(session),
        })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/summary", get(routes::get_summary))
        .route("/tabs", get(routes::list_tabs))
        .route("/tabs/{tab}", get(routes::get_tab))
        .route("/queries/{question}", get(routes::get_question))
        .route("/contacts", get(routes::get_contacts))
        .route("/tables/{table}", get(routes::get_table))
        .route("/load-report", get(routes::get_load_report))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve the dashboard API. The session has already finished loading.
pub async fn start_server(port: u16, session: Session) -> anyhow::Result<()> {
    let app = router(AppState::new(session));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on {}", addr);
    println!("🌍 Dashboard API running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
