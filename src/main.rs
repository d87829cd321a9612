use clap::Parser;
use std::path::PathBuf;

use sgf_preview::logging::{setup_file_logging, setup_logging};
use sgf_preview::sgf::Numbering;
use sgf_preview::servers::{WebUiConfig, WebUiServer};

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum NumberingCli {
    /// Position among scanned tokens, skipped tokens leave gaps
    Scan,
    /// Emitted stones numbered 1..N
    Contiguous,
}

impl From<NumberingCli> for Numbering {
    fn from(cli: NumberingCli) -> Self {
        match cli {
            NumberingCli::Scan => Numbering::ScanOrder,
            NumberingCli::Contiguous => Numbering::Contiguous,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sgf_preview", version, about)]
struct Config {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port for the web page
    #[arg(short = 'p', long, default_value_t = 5000)]
    port: u16,

    /// Directory holding the .sgf records
    #[arg(short = 'g', long, default_value = "games")]
    games_dir: PathBuf,

    /// Page template with a {{ stones }} placeholder
    #[arg(long, default_value = "templates/index.html")]
    template: PathBuf,

    /// Number of move tokens scanned per record
    #[arg(short = 'n', long, default_value_t = 5)]
    limit: usize,

    /// How displayed stones are numbered
    #[arg(long, value_enum, default_value = "scan")]
    numbering: NumberingCli,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Write rotating log files to this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();

    let _logger = match &config.log_dir {
        Some(dir) => setup_file_logging(&config.log_level, dir)?,
        None => setup_logging(&config.log_level)?,
    };

    if !config.games_dir.is_dir() {
        log::warn!(
            "⚠️ {} is not a directory, every request will fail until records are added",
            config.games_dir.display()
        );
    }

    let web_config = WebUiConfig {
        port: config.port,
        host: config.host,
        games_dir: config.games_dir,
        template_path: config.template,
        move_limit: config.limit,
        numbering: config.numbering.into(),
    };

    WebUiServer::new(web_config).start().await
}
