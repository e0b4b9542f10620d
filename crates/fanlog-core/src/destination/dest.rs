//! Destination configuration

use std::path::PathBuf;

use crate::level::LogLevel;

/// Where a destination sends its bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestinationKind {
    /// Standard output stream
    Stdout,
    /// Standard error stream
    Stderr,
    /// Append-only text file; parent directories are created on demand
    File { path: PathBuf },
    /// Reserved; dispatching to it always fails
    Udp,
}

impl DestinationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DestinationKind::Stdout => "stdout",
            DestinationKind::Stderr => "stderr",
            DestinationKind::File { .. } => "file",
            DestinationKind::Udp => "udp",
        }
    }
}

/// Mutable per-destination property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationProperty {
    /// Byte budget for a file destination; appends that would exceed it
    /// trigger oldest-line rotation first
    MaxFileSize(u64),
}

/// One configured output sink
///
/// Destinations are created through the registry and live for its whole
/// lifetime; they are only ever mutated in place, never removed.
#[derive(Debug, Clone)]
pub struct Destination {
    pub(crate) kind: DestinationKind,
    pub(crate) enabled: bool,
    pub(crate) min_level: LogLevel,
    pub(crate) max_size: Option<u64>,
    pub(crate) current_size: u64,
}

impl Destination {
    pub(crate) fn new(kind: DestinationKind) -> Self {
        Self {
            kind,
            enabled: true,
            min_level: LogLevel::Debug,
            max_size: None,
            current_size: 0,
        }
    }

    pub fn kind(&self) -> &DestinationKind {
        &self.kind
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Messages below this level are skipped for this destination
    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Active byte budget, if this is a size-bounded file destination
    pub fn max_size(&self) -> Option<u64> {
        self.max_size
    }

    /// Incrementally maintained byte count of the backing file
    pub fn current_size(&self) -> u64 {
        self.current_size
    }
}
