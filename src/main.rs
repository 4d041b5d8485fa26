// Allow common clippy pedantic lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! firestore-to-appwrite CLI
//!
//! One-shot migration of every Firestore collection into an Appwrite
//! database.

use clap::Parser;
use firestore_to_appwrite::cli::{Cli, Runner};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    Cli::parse();

    if let Err(e) = Runner::new().run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
