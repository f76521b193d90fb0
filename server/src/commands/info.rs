use color_eyre::Result;

use crate::posts_api::PostsApiConfig;
use crate::AppConfig;

pub(crate) fn print_info() -> Result<()> {
    let app = AppConfig::from_env()?;
    let posts_api = PostsApiConfig::from_env()?;

    println!("server {}", env!("CARGO_PKG_VERSION"));
    println!("Admin listing: {}", app.app_url("/admin/posts"));
    println!("Posts api: {}", posts_api.base_url);

    Ok(())
}
