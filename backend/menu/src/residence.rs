//! # Residences
//!
//! The fixed set of dining locations the feed publishes, and the resolver that turns
//! whatever the user typed (or the URL carried) into one of them.
//!
//! ## Resolution order
//! 1. Empty input falls back to the default residence.
//! 2. Slug lookup on the alphanumeric-only form, e.g. `newcollege`.
//! 3. Exact canonical name, case-insensitive.
//! 4. Partial match in declaration order: input inside the name, or the name inside the input.
//! 5. Anything else falls back to the default, with a warning.
//!
//! ## Notes
//! - Partial matching is loose for short inputs: `"a"` lands on the first residence
//!   containing an `a`. Whitespace-only input normalizes to `""`, which every name contains,
//!   so it lands on the first residence.
use std::fmt;

use tracing::warn;

use crate::utils::{normalize, slugify};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Residence {
    CampusOne,
    #[default]
    Chestnut,
    NewCollege,
    OakHouse,
    Robarts,
}

impl Residence {
    /// Declaration order. Partial matching and the residence links both walk this.
    pub const ALL: [Residence; 5] = [
        Residence::CampusOne,
        Residence::Chestnut,
        Residence::NewCollege,
        Residence::OakHouse,
        Residence::Robarts,
    ];

    /// Display name, exactly as the feed keys it.
    pub fn name(self) -> &'static str {
        match self {
            Residence::CampusOne => "CampusOne Dining Hall",
            Residence::Chestnut => "Chestnut Residence",
            Residence::NewCollege => "New College Dining Hall",
            Residence::OakHouse => "Oak House Dining Hall",
            Residence::Robarts => "Robarts Cafeteria",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Residence::CampusOne => "campusone",
            Residence::Chestnut => "chestnut",
            Residence::NewCollege => "newcollege",
            Residence::OakHouse => "oak",
            Residence::Robarts => "robarts",
        }
    }

    /// The single meal served by residences that don't follow breakfast/lunch/dinner.
    pub fn special_meal(self) -> Option<&'static str> {
        match self {
            Residence::Robarts => Some("Foodie Finds featuring Taste of the Danforth"),
            _ => None,
        }
    }

    pub fn is_special(self) -> bool {
        self.special_meal().is_some()
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|residence| residence.slug() == slug)
    }
}

impl fmt::Display for Residence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn resolve(raw: Option<&str>) -> Residence {
    resolve_with_default(raw, Residence::default())
}

pub fn resolve_with_default(raw: Option<&str>, default: Residence) -> Residence {
    let Some(raw) = raw.filter(|raw| !raw.is_empty()) else {
        return default;
    };

    if let Some(residence) = Residence::from_slug(&slugify(raw)) {
        return residence;
    }

    let norm = normalize(raw);

    if let Some(residence) = Residence::ALL
        .into_iter()
        .find(|residence| residence.name().to_lowercase() == norm)
    {
        return residence;
    }

    if let Some(residence) = Residence::ALL.into_iter().find(|residence| {
        let name = residence.name().to_lowercase();
        name.contains(&norm) || norm.contains(&name)
    }) {
        return residence;
    }

    warn!("Residence {raw:?} not recognized, using default: {default}");
    default
}
