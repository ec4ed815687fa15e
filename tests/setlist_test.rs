use setlify::setlist::{format_entries, normalize};
use setlify::types::SetlistEntry;

// Helper to assert one entry's fields in a single call
fn assert_entry(entry: &SetlistEntry, position: u32, artist: &str, track: &str) {
    assert_eq!(entry.position, position);
    assert_eq!(entry.artist, artist);
    assert_eq!(entry.track, track);
}

#[test]
fn test_empty_input_yields_empty_output() {
    assert!(normalize("").is_empty());
    assert!(normalize("\n\n\n").is_empty());
}

#[test]
fn test_lines_without_delimiter_are_dropped() {
    let entries = normalize("A - B\nno-dash-here\nC - D");

    // Malformed middle line dropped, positions renumbered contiguously
    assert_eq!(entries.len(), 2);
    assert_entry(&entries[0], 1, "A", "B");
    assert_entry(&entries[1], 2, "C", "D");
}

#[test]
fn test_enumeration_prefix_is_stripped() {
    let entries = normalize("1. Artist - Track");

    assert_eq!(entries.len(), 1);
    assert_entry(&entries[0], 1, "Artist", "Track");
}

#[test]
fn test_input_numbering_is_ignored() {
    // Positions come from source order, not from the numbers in the input
    let entries = normalize("7. Artist One - Song One\n2. Artist Two - Song Two");

    assert_eq!(entries.len(), 2);
    assert_entry(&entries[0], 1, "Artist One", "Song One");
    assert_entry(&entries[1], 2, "Artist Two", "Song Two");
}

#[test]
fn test_surrounding_whitespace_is_trimmed() {
    let entries = normalize("  Radiohead - Karma Police  ");

    assert_eq!(entries.len(), 1);
    assert_entry(&entries[0], 1, "Radiohead", "Karma Police");
}

#[test]
fn test_lines_with_extra_delimiters_are_dropped() {
    // More than two " - " parts is not a valid (artist, track) pair
    let entries = normalize("A - B - C\nArtist - Track");

    assert_eq!(entries.len(), 1);
    assert_entry(&entries[0], 1, "Artist", "Track");
}

#[test]
fn test_lines_with_empty_halves_are_dropped() {
    assert!(normalize("1.  - Track").is_empty());
}

#[test]
fn test_format_entries_renders_canonical_form() {
    let entries = normalize("Radiohead - Karma Police\nDaft Punk - One More Time");
    let formatted = format_entries(&entries);

    assert_eq!(
        formatted,
        "1. Radiohead - Karma Police\n2. Daft Punk - One More Time"
    );
}

#[test]
fn test_normalize_is_round_trip_stable() {
    let first = normalize("Radiohead - Karma Police\nfoo\nDaft Punk - One More Time");
    let second = normalize(&format_entries(&first));

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.position, b.position);
        assert_eq!(a.artist, b.artist);
        assert_eq!(a.track, b.track);
    }
}

#[test]
fn test_normalize_is_deterministic() {
    let input = "1. A - B\nnoise\n2. C - D";
    let first = format_entries(&normalize(input));
    let second = format_entries(&normalize(input));

    assert_eq!(first, second);
}
