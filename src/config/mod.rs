//! Well Input Deck Module
//!
//! The typed input deck for one physical/operational state of the well:
//! geometry, fluid and formation properties, and operational parameters.
//! Replaces the loose name→value dictionary of legacy decks with an explicit
//! struct enumerating every required field and its unit.
//!
//! ## Loading
//!
//! - `WellInput::load_from_file()` — TOML deck file, with unknown-key
//!   warnings and a single aggregated error for missing keys
//! - `WellInput::from_map()` — raw name→value mapping (in-process callers)
//!
//! Every key is required. There are no defaults: a deck that omits a key
//! fails before any derived computation runs.

mod well_input;
pub mod validation;

pub use well_input::*;
