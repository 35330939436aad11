//! # Feed
//!
//! The menu provider publishes every residence's menus as one JSON document. It is
//! fetched once per session; a failure here is final for the session.
use menu::MenuDataset;
use thiserror::Error;

pub mod remote;

pub use remote::get_menu_remote;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Malformed menu: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub fn decode_menu(bytes: &[u8]) -> Result<MenuDataset, FeedError> {
    Ok(serde_json::from_slice(bytes)?)
}
