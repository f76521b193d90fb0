use clap::Subcommand;
use color_eyre::Result;

pub(crate) mod info;

#[derive(Subcommand)]
pub(crate) enum Command {
    Serve,
    Info,
}

impl Default for Command {
    fn default() -> Self {
        Self::Serve
    }
}

impl Command {
    pub(crate) async fn run(&self) -> Result<()> {
        match &self {
            Command::Serve => crate::http_server::cmd::serve().await,
            Command::Info => info::print_info(),
        }
    }
}
