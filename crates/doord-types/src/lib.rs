//! Foundation types for doord.
//!
//! Every other doord crate depends on `doord-types` for the shape of an
//! access event and for the two textual timestamp forms it moves between.
//!
//! # Key Types
//!
//! - [`AccessEvent`] — One normalized door access attempt
//! - [`timestamp`] — Input (`MM/DD/YYYY HH:MM:SS`) and wire (ISO-8601 local) formats
//! - [`TypeError`] — Errors raised while building events

pub mod error;
pub mod event;
pub mod timestamp;

pub use error::TypeError;
pub use event::{is_granted, AccessEvent, GRANTED_FLAG};
pub use timestamp::{format_wire, parse_row_timestamp, parse_wire};
