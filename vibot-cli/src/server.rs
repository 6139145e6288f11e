//! Webhook HTTP surface: one POST endpoint receiving Viber callback
//! deliveries and feeding them to the gateway's router.

use std::sync::Arc;

use anyhow::Result;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::{error, info};

use vibot_core::ViberUpdate;
use vibot_gateway::ViberService;

/// Serves `POST /viber/webhook` on `bind` until the process is stopped.
pub async fn serve(service: Arc<ViberService>, bind: &str) -> Result<()> {
    let app = router(service);
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!(addr = %bind, "Webhook endpoint listening");
    axum::serve(listener, app).await?;
    Ok(())
}

fn router(service: Arc<ViberService>) -> Router {
    Router::new()
        .route("/viber/webhook", post(receive_update))
        .with_state(service)
}

/// One webhook delivery. Viber expects a prompt 200 and retries otherwise, so
/// routing runs on a spawned task; a failed reaction is logged, never echoed
/// back. Unknown event kinds deserialize to an inert update and pass through
/// the router without effect.
async fn receive_update(
    State(service): State<Arc<ViberService>>,
    Json(update): Json<ViberUpdate>,
) -> StatusCode {
    tokio::spawn(async move {
        if let Err(e) = service.handle_update(update).await {
            error!(error = %e, "Update handling failed");
        }
    });
    StatusCode::OK
}
