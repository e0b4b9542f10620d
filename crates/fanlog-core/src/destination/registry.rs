//! Insertion-ordered destination store with stable index handles

use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};
use crate::level::LogLevel;

use super::dest::{Destination, DestinationKind, DestinationProperty};

/// Stable handle to a registered destination
///
/// Handles are indices, not addresses: destinations are never removed, so
/// registry growth never invalidates a previously issued handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DestinationId(pub(crate) usize);

/// Ordered collection of destinations, mutated only through its handles
#[derive(Debug, Default)]
pub struct DestinationRegistry {
    dests: Vec<Destination>,
}

impl DestinationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a destination, enabled and accepting every level.
    ///
    /// File destinations get a probe append-open; a missing parent directory
    /// is created on demand, and the file's existing length seeds the
    /// rotation byte counter.
    pub fn add(&mut self, kind: DestinationKind) -> Result<DestinationId> {
        let mut dest = Destination::new(kind);
        if let DestinationKind::File { path } = &dest.kind {
            dest.current_size = prepare_file(path)?;
        }
        self.dests.push(dest);
        Ok(DestinationId(self.dests.len() - 1))
    }

    /// Apply a property to one destination.
    ///
    /// `MaxFileSize` on anything but a file destination is rejected with
    /// `InvalidDestination` so a misconfigured registry surfaces at setup
    /// time rather than being silently ignored.
    pub fn set_property(&mut self, id: DestinationId, property: DestinationProperty) -> Result<()> {
        let dest = self.get_mut(id)?;
        match property {
            DestinationProperty::MaxFileSize(bytes) => {
                if !matches!(dest.kind, DestinationKind::File { .. }) {
                    return Err(Error::invalid_destination(format!(
                        "MaxFileSize applies to file destinations, not {}",
                        dest.kind.as_str()
                    )));
                }
                dest.max_size = Some(bytes);
            }
        }
        Ok(())
    }

    /// Set the minimum level a destination accepts.
    pub fn set_min_level(&mut self, id: DestinationId, level: LogLevel) -> Result<()> {
        self.get_mut(id)?.min_level = level;
        Ok(())
    }

    /// Idempotently mark a destination writable again.
    pub fn enable(&mut self, id: DestinationId) -> Result<()> {
        self.get_mut(id)?.enabled = true;
        Ok(())
    }

    /// Idempotently exclude a destination from dispatch.
    pub fn disable(&mut self, id: DestinationId) -> Result<()> {
        self.get_mut(id)?.enabled = false;
        Ok(())
    }

    pub fn get(&self, id: DestinationId) -> Result<&Destination> {
        self.dests
            .get(id.0)
            .ok_or_else(|| Error::invalid_destination("unknown destination handle"))
    }

    pub(crate) fn get_mut(&mut self, id: DestinationId) -> Result<&mut Destination> {
        self.dests
            .get_mut(id.0)
            .ok_or_else(|| Error::invalid_destination("unknown destination handle"))
    }

    pub fn len(&self) -> usize {
        self.dests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dests.is_empty()
    }

    pub(crate) fn entries_mut(
        &mut self,
    ) -> impl Iterator<Item = (DestinationId, &mut Destination)> {
        self.dests
            .iter_mut()
            .enumerate()
            .map(|(idx, dest)| (DestinationId(idx), dest))
    }
}

/// Probe an append-open, creating missing parent directories on demand.
/// Returns the file's current length so rotation accounting starts correct
/// across process restarts.
fn prepare_file(path: &Path) -> Result<u64> {
    match OpenOptions::new().append(true).create(true).open(path) {
        Ok(file) => Ok(file.metadata()?.len()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            match path.parent().filter(|p| !p.as_os_str().is_empty()) {
                Some(parent) => {
                    std::fs::create_dir_all(parent)?;
                    let file = OpenOptions::new().append(true).create(true).open(path)?;
                    Ok(file.metadata()?.len())
                }
                None => Err(err.into()),
            }
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_handles_stay_valid_across_growth() {
        let mut registry = DestinationRegistry::new();
        let first = registry.add(DestinationKind::Stdout).unwrap();

        for _ in 0..100 {
            registry.add(DestinationKind::Stderr).unwrap();
        }

        assert_eq!(registry.len(), 101);
        assert_eq!(
            registry.get(first).unwrap().kind(),
            &DestinationKind::Stdout
        );
    }

    #[test]
    fn test_enable_disable_idempotent() {
        let mut registry = DestinationRegistry::new();
        let id = registry.add(DestinationKind::Stdout).unwrap();

        registry.disable(id).unwrap();
        registry.disable(id).unwrap();
        assert!(!registry.get(id).unwrap().is_enabled());

        registry.enable(id).unwrap();
        registry.enable(id).unwrap();
        assert!(registry.get(id).unwrap().is_enabled());
    }

    #[test]
    fn test_max_file_size_rejected_for_console() {
        let mut registry = DestinationRegistry::new();
        let id = registry.add(DestinationKind::Stdout).unwrap();

        let err = registry
            .set_property(id, DestinationProperty::MaxFileSize(100))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidDestination(_)));
    }

    #[test]
    fn test_unknown_handle() {
        let registry = DestinationRegistry::new();
        assert!(registry.get(DestinationId(3)).is_err());
    }

    #[test]
    fn test_file_parent_dirs_created() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("out.log");

        let mut registry = DestinationRegistry::new();
        registry
            .add(DestinationKind::File { path: path.clone() })
            .unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_existing_file_seeds_current_size() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.log");
        std::fs::write(&path, b"old line\n").unwrap();

        let mut registry = DestinationRegistry::new();
        let id = registry
            .add(DestinationKind::File { path: path.clone() })
            .unwrap();

        assert_eq!(registry.get(id).unwrap().current_size(), 9);
    }

    #[test]
    fn test_min_level_setter() {
        let mut registry = DestinationRegistry::new();
        let id = registry.add(DestinationKind::Stderr).unwrap();

        registry.set_min_level(id, LogLevel::Warning).unwrap();
        assert_eq!(registry.get(id).unwrap().min_level(), LogLevel::Warning);
    }
}
