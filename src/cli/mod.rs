pub mod commands;
pub mod context;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Trust-on-first-use acquisition of OpenPGP signing keys.
#[derive(Parser, Debug)]
#[command(name = "keytrust", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to alternative config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// System-level trust store directory (read-only)
    #[arg(long, global = true, env = "KEYTRUST_SYSTEM_CONFIG")]
    pub system_config: Option<PathBuf>,

    /// User-level trust store directory (keys are written here)
    #[arg(long, global = true, env = "KEYTRUST_USER_CONFIG")]
    pub user_config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Review and trust signing keys for a prefix or the root scope
    Trust {
        /// Key locations: file paths or http(s) URLs. Discovered via --prefix when omitted.
        keys: Vec<String>,

        /// Prefix to limit trust to (also used for key discovery)
        #[arg(long, conflicts_with = "root")]
        prefix: Option<String>,

        /// Trust the keys for every prefix
        #[arg(long)]
        root: bool,

        /// Allow plaintext HTTP for discovery and key fetches
        #[arg(long)]
        insecure_allow_http: bool,

        /// Accept keys without showing the fingerprint prompt
        #[arg(long)]
        skip_fingerprint_review: bool,

        /// Report failed discovery attempts
        #[arg(long)]
        debug: bool,
    },

    /// List trusted key files
    List {
        /// Only keys trusted for this prefix
        #[arg(long, conflicts_with = "root")]
        prefix: Option<String>,

        /// Only keys trusted for every prefix
        #[arg(long)]
        root: bool,
    },
}
