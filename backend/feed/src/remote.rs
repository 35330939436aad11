use menu::MenuDataset;
use reqwest::Client;
use tracing::{debug, info};

use crate::{FeedError, decode_menu};

pub async fn get_menu_remote(url: &str) -> Result<MenuDataset, FeedError> {
    info!("Fetching menu from {url}");

    let response = Client::new().get(url).send().await?.error_for_status()?;
    debug!("Status: {}", response.status());

    let bytes = response.bytes().await?;
    let dataset = decode_menu(&bytes)?;

    info!("Fetched menus for {} residences", dataset.len());
    Ok(dataset)
}
