//! Oldest-line rotation for size-bounded file destinations
//!
//! Rotation is a read-modify-write over the whole file: removing a prefix
//! requires re-laying-out the remaining content, so the file is loaded,
//! trimmed from the front one whole line at a time, and rewritten.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Trim whole lines from the front of `path` until appending `incoming_len`
/// bytes keeps the file within `max_size`.
///
/// `current_size` is the caller-maintained byte count for the file; it is
/// updated to the exact post-trim length. A message that can never fit is
/// rejected up front with `RotationImpossible` and the file left untouched.
pub(crate) fn make_room(
    path: &Path,
    current_size: &mut u64,
    max_size: u64,
    incoming_len: u64,
) -> Result<()> {
    if incoming_len > max_size {
        return Err(Error::RotationImpossible {
            message_len: incoming_len,
            max_size,
        });
    }
    if *current_size + incoming_len <= max_size {
        return Ok(());
    }

    let mut content = fs::read(path)?;
    let mut size = content.len() as u64;
    while size + incoming_len > max_size {
        let cut = oldest_line_len(&content);
        if cut == 0 {
            break;
        }
        content.drain(..cut);
        size -= cut as u64;
    }
    fs::write(path, &content)?;
    *current_size = size;
    Ok(())
}

/// Length in bytes of the first newline-terminated record, terminator
/// included. A trailing record with no newline counts whole, so the loop
/// above always terminates once the incoming message fits the budget.
fn oldest_line_len(content: &[u8]) -> usize {
    match content.iter().position(|&b| b == b'\n') {
        Some(pos) => pos + 1,
        None => content.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_no_trim_needed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.log");
        fs::write(&path, b"one\n").unwrap();

        let mut size = 4u64;
        make_room(&path, &mut size, 100, 10).unwrap();

        assert_eq!(size, 4);
        assert_eq!(fs::read(&path).unwrap(), b"one\n");
    }

    #[test]
    fn test_drops_oldest_lines_first() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.log");
        let original = b"a1\nb22\nc333\n";
        fs::write(&path, original).unwrap();

        let mut size = original.len() as u64;
        make_room(&path, &mut size, 10, 4).unwrap();

        let remaining = fs::read(&path).unwrap();
        assert_eq!(remaining, b"c333\n");
        assert_eq!(size, 5);
        // Removed + remaining reconstructs the original content.
        assert!(original.ends_with(&remaining));
        assert_eq!(&original[..original.len() - remaining.len()], b"a1\nb22\n");
    }

    #[test]
    fn test_trailing_record_without_newline_removed_whole() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.log");
        fs::write(&path, b"no terminator here").unwrap();

        let mut size = 18u64;
        make_room(&path, &mut size, 20, 10).unwrap();

        assert_eq!(size, 0);
        assert_eq!(fs::read(&path).unwrap(), b"");
    }

    #[test]
    fn test_oversized_message_rejected_file_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.log");
        fs::write(&path, b"keep me\n").unwrap();

        let mut size = 8u64;
        let err = make_room(&path, &mut size, 10, 11).unwrap_err();

        assert!(matches!(
            err,
            Error::RotationImpossible {
                message_len: 11,
                max_size: 10
            }
        ));
        assert_eq!(size, 8);
        assert_eq!(fs::read(&path).unwrap(), b"keep me\n");
    }

    #[test]
    fn test_message_exactly_at_budget() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.log");
        fs::write(&path, b"old\n").unwrap();

        let mut size = 4u64;
        make_room(&path, &mut size, 10, 10).unwrap();

        // Everything trimmed so the 10-byte message fits a 10-byte budget.
        assert_eq!(size, 0);
        assert_eq!(fs::read(&path).unwrap(), b"");
    }
}
