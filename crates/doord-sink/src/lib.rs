//! Append-only HTTP listener for doord.
//!
//! Every `POST`, whatever its path, has its body appended verbatim to a single
//! output file followed by a newline. Bodies are read with an explicit size
//! and time bound, and appends are serialized so concurrent requests never
//! interleave within a line.

pub mod appender;
pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use appender::Appender;
pub use config::SinkConfig;
pub use error::{SinkError, SinkResult};
pub use handler::SinkState;
pub use server::DoordSink;
