//! Typed client for the Dota 2 and Steam user Web API.
//!
//! ```no_run
//! # async fn run() -> Result<(), dota2api::Error> {
//! let api = dota2api::Dota2Api::new("STEAM_API_KEY_VALUE")?;
//! let detail = api.get_match_details("4080856812").await?;
//! println!("{} vs {}", detail.radiant_name, detail.dire_name);
//! # Ok(())
//! # }
//! ```

pub mod api_client;
pub mod decode;
pub mod endpoints;
pub mod enums;
pub mod error;
pub mod transport;
pub mod types;

pub use api_client::Dota2Api;
pub use error::Error;
pub use transport::{HttpTransport, Transport};
