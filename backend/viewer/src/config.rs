use std::env;

use menu::{Residence, models::ENDPOINT, resolve};
use tracing::{info, warn};

pub struct Config {
    pub menu_url: String,
    pub default_residence: Residence,
}

impl Config {
    pub fn load() -> Self {
        let default_residence = try_load("MENU_DEFAULT_RESIDENCE", "chestnut");

        Self {
            menu_url: try_load("MENU_URL", ENDPOINT),
            default_residence: resolve(Some(default_residence.as_str())),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        Ok(_) => {
            warn!("Environment variable {key} is empty");
            Err(())
        }
        Err(_) => Err(()),
    }
}

fn try_load(key: &str, default: &str) -> String {
    var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_load_default() {
        assert_eq!(try_load("VIEWER_TEST_UNSET_VARIABLE", "chestnut"), "chestnut");
    }
}
