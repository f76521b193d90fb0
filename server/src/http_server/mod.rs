use std::net::SocketAddr;

use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};

use crate::AppState;

pub(crate) mod admin;
pub(crate) mod cmd;
pub(crate) mod errors;
pub(crate) mod routes;
pub(crate) mod templates;

#[cfg(test)]
pub(crate) mod test_helpers;

const TAILWIND_STYLES: &str = include_str!("../../static/tailwind.css");

pub(crate) async fn run_axum(app_state: AppState) -> color_eyre::Result<()> {
    let app = routes::make_router().with_state(app_state).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().include_headers(true))
            .on_response(DefaultOnResponse::new().include_headers(true)),
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    tracing::debug!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
