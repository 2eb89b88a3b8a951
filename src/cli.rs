use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
pub struct Cli {
    /// Log level:
    /// 0 quiet,
    /// 1 errors,
    /// 2 warnings,
    /// 3 info,
    /// 4 debug,
    /// 5 trace
    #[clap(short, long)]
    #[clap(default_value_t = 3)]
    pub loglevel: u8,

    /// Database to open, created if missing
    #[clap(short, long, env = "FYYUR_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Address to listen on
    #[clap(short, long, env = "FYYUR_BIND")]
    #[clap(default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Also write the log to this file
    #[clap(long)]
    pub log_file: Option<PathBuf>,

    /// Fill an empty database with sample venues, artists and shows
    #[clap(long)]
    pub seed: bool,
}
