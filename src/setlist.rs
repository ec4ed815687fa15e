//! Setlist text normalization.
//!
//! Pure transformation of free-form setlist text into an ordered list of
//! (artist, track) pairs. Lines without an `" - "` delimiter are dropped
//! silently; surviving lines are renumbered from 1 regardless of any
//! enumeration already present in the input.

use crate::types::SetlistEntry;

/// Normalizes raw setlist text into ordered entries.
///
/// A line is accepted iff it contains the literal `" - "` delimiter. An
/// optional leading `"N. "` enumeration is stripped by splitting once on
/// `". "` and discarding the prefix half. The remainder must split on
/// `" - "` into exactly two non-empty parts; anything else drops the line
/// without error. Accepted entries are renumbered 1..K in source order.
///
/// Empty input yields an empty vector, not an error.
///
/// # Example
///
/// ```
/// let entries = normalize("1. Radiohead - Karma Police\nno delimiter here");
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].artist, "Radiohead");
/// ```
pub fn normalize(raw_text: &str) -> Vec<SetlistEntry> {
    let mut entries = Vec::new();

    for line in raw_text.lines() {
        let line = line.trim();
        if !line.contains(" - ") {
            continue;
        }

        // Tolerate an enumeration prefix already present in the input.
        let rest = match line.split_once(". ") {
            Some((_, rest)) => rest,
            None => line,
        };

        let parts: Vec<&str> = rest.split(" - ").collect();
        if parts.len() != 2 {
            continue;
        }

        let artist = parts[0].trim();
        let track = parts[1].trim();
        if artist.is_empty() || track.is_empty() {
            continue;
        }

        entries.push(SetlistEntry {
            position: entries.len() as u32 + 1,
            artist: artist.to_string(),
            track: track.to_string(),
        });
    }

    entries
}

/// Renders entries in the canonical `N. artist - track` form, one per line.
///
/// Feeding the result back through [`normalize`] reproduces the same entries.
pub fn format_entries(entries: &[SetlistEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("{}. {} - {}", e.position, e.artist, e.track))
        .collect::<Vec<_>>()
        .join("\n")
}
