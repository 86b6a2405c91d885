//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::ClientConfig;
use crate::models::PostId;

/// Terminal client for the murmur social feed.
#[derive(Debug, Parser)]
#[command(name = "murmur", version, about)]
pub struct Cli {
    /// Backend base URL (overrides MURMUR_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,
    /// Session storage directory (overrides MURMUR_HOME)
    #[arg(long, global = true)]
    pub home: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Create an account
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        /// Prompted for when omitted
        #[arg(long)]
        password: Option<String>,
        /// Defaults to --password when that is given
        #[arg(long)]
        confirm_password: Option<String>,
    },
    /// Sign in and remember the session
    Login {
        username: String,
        /// Prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Forget the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Show all posts with likes and comments
    Feed,
    /// Publish a post
    Post { content: String },
    /// Like or unlike a post
    Like { post_id: PostId },
    /// Comment on a post
    Comment { post_id: PostId, content: String },
    /// Show your profile, or someone else's
    Profile { username: Option<String> },
    /// Upload a new profile picture
    UploadPic { file: PathBuf },
}

impl Cli {
    /// Configuration from the environment with flag overrides applied.
    pub fn config(&self) -> ClientConfig {
        let mut config = ClientConfig::from_env();
        if let Some(url) = &self.api_url {
            config = config.with_base_url(url.as_str());
        }
        if let Some(home) = &self.home {
            config = config.with_storage_dir(home.clone());
        }
        config
    }

    /// Log filter for the verbosity flag, used when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "murmur=info,warn",
            2 => "murmur=debug,info",
            _ => "trace",
        }
    }
}
