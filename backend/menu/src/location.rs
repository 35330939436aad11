//! # Location
//!
//! The URL side of the selection. A residence can arrive as `?residence=`, `?res=`, or a
//! fragment (`#Oak%20House`), checked in that order. Switching residence writes back
//! `?residence=<slug>`.
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use tracing::warn;
use url::Url;

use crate::residence::{Residence, resolve_with_default};

const BASE: &str = "http://localhost/";

static ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%[0-9A-Fa-f]{2}").expect("escape pattern compiles"));

#[derive(Error, Debug)]
pub enum LocationError {
    #[error("Malformed location: {0}")]
    MalformedUrl(#[from] url::ParseError),

    #[error("Malformed fragment: {0}")]
    MalformedFragment(#[from] std::string::FromUtf8Error),

    #[error("Malformed escape in fragment: {0:?}")]
    MalformedEscape(String),
}

/// Percent-decodes a fragment. Every `%` must start a two-digit hex escape.
fn decode_fragment(fragment: &str) -> Result<String, LocationError> {
    if fragment.matches('%').count() != ESCAPE.find_iter(fragment).count() {
        return Err(LocationError::MalformedEscape(fragment.to_string()));
    }

    Ok(urlencoding::decode(fragment)?.into_owned())
}

/// Raw residence string carried by a location, before resolution.
///
/// Accepts a full URL or anything relative to one, such as `?res=oak` or `#robarts`.
pub fn raw_residence(location: &str) -> Result<Option<String>, LocationError> {
    let url = Url::parse(BASE)?.join(location)?;

    for key in ["residence", "res"] {
        if let Some((_, value)) = url
            .query_pairs()
            .find(|(name, value)| name == key && !value.is_empty())
        {
            return Ok(Some(value.into_owned()));
        }
    }

    match url.fragment().filter(|fragment| !fragment.is_empty()) {
        Some(fragment) => decode_fragment(fragment).map(Some),
        None => Ok(None),
    }
}

/// Residence a location points at. Unreadable locations count as absent.
pub fn residence_from_location(location: &str, default: Residence) -> Residence {
    match raw_residence(location) {
        Ok(raw) => resolve_with_default(raw.as_deref(), default),
        Err(e) => {
            warn!("Failed to read residence from {location:?}: {e}");
            default
        }
    }
}

pub fn residence_href(residence: Residence) -> String {
    format!("?residence={}", urlencoding::encode(residence.slug()))
}
