use color_eyre::Result;
use tracing::info;

use crate::AppState;

pub(crate) async fn serve() -> Result<()> {
    let app_state = AppState::from_env()?;

    info!(
        listing = %app_state.app.app_url("/admin/posts"),
        "Starting posts admin server"
    );

    super::run_axum(app_state).await
}
