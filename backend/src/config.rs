//! Command-line and environment configuration for the server.
//!
//! Every option can be given as a flag or through its `PAYREQ_*` environment
//! variable; flags win over the environment.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "payreq")]
#[command(author, version, about = "Payment request form generator", long_about = None)]
pub struct Config {
    /// Address to bind the HTTP server to
    #[arg(long, env = "PAYREQ_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PAYREQ_PORT", default_value_t = 8080)]
    pub port: u16,

    /// SQLite file holding the saved document and the payee table
    #[arg(long, env = "PAYREQ_DATABASE", default_value = "payreq.sqlite")]
    pub database: PathBuf,

    /// TrueType/OpenType font with CJK coverage used for exported images
    #[arg(long, env = "PAYREQ_FONT", default_value = "./fonts/NotoSansSC-Regular.ttf")]
    pub font: PathBuf,

    /// Export resolution in dots per inch
    #[arg(
        long,
        env = "PAYREQ_DPI",
        default_value_t = 200,
        value_parser = clap::value_parser!(u32).range(36..=600)
    )]
    pub dpi: u32,

    /// Do not open a browser window on startup
    #[arg(long, env = "PAYREQ_NO_BROWSER")]
    pub no_browser: bool,
}

impl Config {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
