//! CLI argument parsing

use clap::Parser;

/// Copy every Firestore collection into an Appwrite database
///
/// Configuration is read from the environment (or a `.env` file):
/// SOURCE_CREDENTIAL_PATH, DEST_ENDPOINT, DEST_PROJECT_ID, DEST_API_KEY,
/// DEST_DATABASE_ID.
#[derive(Parser, Debug)]
#[command(name = "firestore-to-appwrite")]
#[command(author, version, about, long_about = None)]
pub struct Cli {}
