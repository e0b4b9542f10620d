//! Logger: render once, fan out to every enabled destination

use std::fs::OpenOptions;
use std::io::Write;

use chrono::Local;

use crate::destination::{
    rotation, Destination, DestinationId, DestinationKind, DestinationProperty, DestinationRegistry,
};
use crate::error::{Error, Result};
use crate::format::{render, FormatArg, RenderFlags};
use crate::level::LogLevel;

/// Per-destination outcome of one `emit` call
///
/// Destination failures are isolated: one failing sink never prevents the
/// rest from being attempted, so the report carries every failure alongside
/// the count of successful writes.
#[derive(Debug, Default)]
pub struct EmitReport {
    /// Destinations that received the rendered message
    pub written: usize,
    /// Destinations that failed, with the error that stopped each one
    pub failures: Vec<(DestinationId, Error)>,
}

impl EmitReport {
    /// True when no destination failed
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// An embeddable fan-out logger
///
/// Owns an insertion-ordered destination registry and the process-wide
/// render flags. Synchronous: `emit` runs to completion, performing blocking
/// I/O per destination in registry order.
#[derive(Debug, Default)]
pub struct Logger {
    registry: DestinationRegistry,
    flags: RenderFlags,
}

impl Logger {
    /// Create a logger with the timestamp and level-label flags on and an
    /// empty destination registry.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_timestamp(&mut self, on: bool) {
        self.flags.timestamp = on;
    }

    pub fn set_level_label(&mut self, on: bool) {
        self.flags.level_label = on;
    }

    pub fn flags(&self) -> RenderFlags {
        self.flags
    }

    /// Register a destination; see [`DestinationRegistry::add`].
    pub fn add_destination(&mut self, kind: DestinationKind) -> Result<DestinationId> {
        self.registry.add(kind)
    }

    pub fn set_property(&mut self, id: DestinationId, property: DestinationProperty) -> Result<()> {
        self.registry.set_property(id, property)
    }

    pub fn set_min_level(&mut self, id: DestinationId, level: LogLevel) -> Result<()> {
        self.registry.set_min_level(id, level)
    }

    pub fn enable(&mut self, id: DestinationId) -> Result<()> {
        self.registry.enable(id)
    }

    pub fn disable(&mut self, id: DestinationId) -> Result<()> {
        self.registry.disable(id)
    }

    pub fn destination(&self, id: DestinationId) -> Result<&Destination> {
        self.registry.get(id)
    }

    pub fn destination_count(&self) -> usize {
        self.registry.len()
    }

    /// Render `template` with `args` once and write the result to every
    /// enabled destination whose threshold admits `level`.
    ///
    /// The timestamp is captured once so all destinations see an identical
    /// stamp. Only a render failure fails the call; per-destination failures
    /// are collected in the report. No enabled destinations is a silent
    /// no-op.
    pub fn emit(
        &mut self,
        level: LogLevel,
        template: &str,
        args: &[FormatArg],
    ) -> Result<EmitReport> {
        let timestamp = self.flags.timestamp.then(Local::now);
        let rendered = render(level, self.flags, timestamp, template, args)?;

        let mut report = EmitReport::default();
        for (id, dest) in self.registry.entries_mut() {
            if !dest.enabled || level < dest.min_level {
                continue;
            }
            match write_destination(dest, rendered.as_bytes()) {
                Ok(()) => report.written += 1,
                Err(err) => report.failures.push((id, err)),
            }
        }
        Ok(report)
    }
}

/// Write one rendered message to a single destination sink.
///
/// File sinks are opened per write (append, create-if-absent) and closed on
/// return; no handle is held between calls. Size-bounded files run rotation
/// before the append.
fn write_destination(dest: &mut Destination, bytes: &[u8]) -> Result<()> {
    match &dest.kind {
        DestinationKind::Stdout => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(bytes)?;
            lock.flush()?;
            Ok(())
        }
        DestinationKind::Stderr => {
            let stderr = std::io::stderr();
            let mut lock = stderr.lock();
            lock.write_all(bytes)?;
            lock.flush()?;
            Ok(())
        }
        DestinationKind::File { path } => {
            if let Some(max_size) = dest.max_size {
                rotation::make_room(path, &mut dest.current_size, max_size, bytes.len() as u64)?;
            }
            let mut file = OpenOptions::new().append(true).create(true).open(path)?;
            file.write_all(bytes)?;
            dest.current_size += bytes.len() as u64;
            Ok(())
        }
        DestinationKind::Udp => Err(Error::invalid_destination(
            "udp destinations are reserved and cannot be dispatched",
        )),
    }
}
