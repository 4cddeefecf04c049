//! Async client for the Twitch Kraken REST API.
//!
//! ```no_run
//! # async fn run() -> Result<(), twitch_kraken::Error> {
//! let client = twitch_kraken::KrakenClient::new("my-client-id")?;
//! let live = client.stream_by_channel("26610234").await?;
//! if let Some(stream) = live.stream {
//!     println!("{} viewers", stream.viewers);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;

pub use client::{Error, KrakenClient};
