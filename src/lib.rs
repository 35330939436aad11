//! # Dining Documentation
//!
//! Campus dining menu viewer. One JSON feed, five residences, three meals a day (or one
//! themed meal for the cafeteria that doesn't follow that pattern).
//!
//! ## Crates
//! - `menu`: the pure core. Residence resolution, dish icons, default meal by hour,
//!   featured dishes and station ordering, nutrition, URL selection, session state.
//! - `feed`: fetches and decodes the menu feed once.
//! - `viewer`: terminal front. Config, logging, spinner, rendering, interactive commands.
//!
//! ## Notes
//!
//! ### Feed
//! - Shape is residence → meal → station → list of dishes
//! - Dish order inside a station matters, it drives featured picks and display order
//! - Station order in the document matters for stations we don't rank explicitly
//! - Nutrition is a 12-cell positional array, cells may be numbers, `""`, or `null`
//!
//! ### Selection
//! - Residence from `?residence=`, then `?res=`, then the fragment, else Chestnut
//! - Slug, exact name, then loose substring match, in that order
//! - Substring matching is loose for short inputs, e.g. `?res=a` lands on CampusOne
//! - Robarts only serves its themed meal, so its meal choice is never remembered
//!
//!
//!
//! # Setup
//!
//! View current docs.
//! ```sh
//! cargo doc --open
//! ```
//!
//! Run the viewer.
//! ```sh
//! cargo run -p viewer -- --location "?residence=oak"
//! ```
//!
//! Interactive session with logs.
//! ```sh
//! RUST_LOG=viewer=info,menu=debug cargo run -p viewer -- -i
//! ```
//!
//!
//!
//! # Environment
//!
//! | Variable | Default |
//! |----------|---------|
//! | `MENU_URL` | `https://uoft-menu-api.vercel.app/api/menu` |
//! | `MENU_DEFAULT_RESIDENCE` | `chestnut` |
//! | `RUST_LOG` | unset (errors only) |

pub mod frontend;
