//! fanlog core
//!
//! Embeddable fan-out logging: register destinations (console streams,
//! size-bounded files), then emit leveled printf-style messages that are
//! rendered once and written independently to every enabled destination.
//!
//! ## Destinations
//!
//! The registry hands out stable index handles; destinations are never
//! removed, only enabled, disabled or mutated in place. Size-bounded file
//! destinations rotate by dropping their oldest lines so the file never
//! grows past its byte budget.
//!
//! ```rust,no_run
//! use fanlog_core::{args, DestinationKind, DestinationProperty, Logger, LogLevel};
//!
//! # fn main() -> fanlog_core::Result<()> {
//! let mut logger = Logger::new();
//! let file = logger.add_destination(DestinationKind::File {
//!     path: "out.log".into(),
//! })?;
//! logger.set_property(file, DestinationProperty::MaxFileSize(64 * 1024))?;
//!
//! let report = logger.emit(LogLevel::Info, "started worker %d\n", &args![7])?;
//! assert!(report.is_complete());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod destination;
pub mod error;
pub mod format;
pub mod global;
pub mod level;
pub mod logger;

// Re-export commonly used types
pub use config::{DestinationConfig, LoggerConfig};
pub use destination::{
    Destination, DestinationId, DestinationKind, DestinationProperty, DestinationRegistry,
};
pub use error::{Error, Result};
pub use format::{FormatArg, RenderFlags};
pub use level::LogLevel;
pub use logger::{EmitReport, Logger};
