use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use lektorcli::{cli, config, jellyfin::ServerConfig};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Collect items with a matching audio language into a collection
    Collect(CollectOptions),

    /// List items of the library folder
    Items(ItemsOptions),

    /// Check a single item for an audio language
    Check(CheckOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

/// Server flags shared by every command that talks to the API.
///
/// Each flag falls back to its environment variable when omitted, so the
/// usual workflow keeps the server settings in the `.env` file and the
/// command line free of credentials.
#[derive(Parser, Debug, Clone)]
pub struct ServerOptions {
    /// Jellyfin host name or address (defaults to JELLYFIN_ADDRESS)
    #[clap(long)]
    pub address: Option<String>,

    /// Jellyfin API token (defaults to JELLYFIN_TOKEN)
    #[clap(long)]
    pub token: Option<String>,

    /// Verify the server TLS certificate instead of trusting any certificate
    #[clap(long)]
    pub verify_certificates: bool,
}

impl ServerOptions {
    fn resolve(&self) -> ServerConfig {
        ServerConfig::new(
            self.address.clone().unwrap_or_else(config::jellyfin_address),
            self.token.clone().unwrap_or_else(config::jellyfin_token),
        )
        .with_certificate_verification(self.verify_certificates || config::verify_certificates())
    }
}

#[derive(Parser, Debug, Clone)]
pub struct CollectOptions {
    #[clap(flatten)]
    pub server: ServerOptions,

    /// Name of the collection to create or extend
    #[clap(long, default_value = "Lektor")]
    pub collection_name: String,

    /// ISO 639-2 code the audio track language must match
    #[clap(long, default_value = "pol")]
    pub language: String,

    /// Library folder to scan (defaults to JELLYFIN_LIBRARY_ID)
    #[clap(long)]
    pub library_id: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ItemsOptions {
    #[clap(flatten)]
    pub server: ServerOptions,

    /// Library folder to list (defaults to JELLYFIN_LIBRARY_ID)
    #[clap(long)]
    pub library_id: Option<String>,

    /// Search for items by name
    #[clap(long)]
    pub search: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CheckOptions {
    #[clap(flatten)]
    pub server: ServerOptions,

    /// Id of the item to check
    pub item_id: String,

    /// ISO 639-2 code the audio track language must match
    #[clap(long, default_value = "pol")]
    pub language: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    // A missing .env file is fine; flags or plain environment variables may
    // carry the configuration instead.
    let _ = config::load_env().await;

    let cli = Cli::parse();

    match cli.command {
        Command::Collect(opt) => {
            cli::collect(
                opt.server.resolve(),
                opt.collection_name,
                opt.language,
                opt.library_id.unwrap_or_else(config::library_id),
            )
            .await
        }
        Command::Items(opt) => {
            cli::list_items(
                opt.server.resolve(),
                opt.library_id.unwrap_or_else(config::library_id),
                opt.search,
            )
            .await
        }
        Command::Check(opt) => cli::check(opt.server.resolve(), opt.item_id, opt.language).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
