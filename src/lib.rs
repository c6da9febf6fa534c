//! Rust client for the Gamee web-game score-reporting API.
//!
//! The API is a JSON-RPC 2.0 service behind a single HTTP endpoint; the
//! method name in the request body selects the operation. [`Client`] wraps
//! the five calls needed to log in as a Telegram bot user, look up a hosted
//! web game, and submit a score with the MD5 checksum the service verifies
//! it against.
//!
//! ```no_run
//! use gamee_client::{Client, ClientOptions};
//!
//! # async fn run() -> Result<(), gamee_client::GameeError> {
//! let client = Client::new(ClientOptions::default())?;
//! let auth = client.authorize("https://prizes.gamee.com/game-bot/my-game").await?;
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod structs;

pub use errors::GameeError;
pub use structs::client::{Client, ClientOptions};
pub use structs::gameplay::GameplayData;
