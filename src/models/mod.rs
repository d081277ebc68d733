//! Conference domain models.
//!
//! | Type | Role |
//! |------|------|
//! | `Talk` | A titled talk with a duration in minutes |
//! | `Track` | One room's day: morning and afternoon sessions |
//! | `Conference` | Ordered list of sealed tracks |

mod conference;
mod talk;
mod track;

pub use conference::Conference;
pub use talk::{Talk, LIGHTNING_MARKER, LIGHTNING_MINUTES};
pub use track::Track;
