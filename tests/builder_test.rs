mod helpers;

use helpers::MockCatalog;
use setlify::builder;
use setlify::error::ApiError;
use setlify::setlist::normalize;
use setlify::types::PlaylistRequest;

fn request(name: &str, raw_text: &str) -> PlaylistRequest {
    PlaylistRequest {
        name: name.to_string(),
        entries: normalize(raw_text),
    }
}

#[tokio::test]
async fn test_matched_tracks_are_added_in_setlist_order() {
    let catalog = MockCatalog::with_tracks(&[
        ("Radiohead", "Karma Police", "spotify:track:karma"),
        ("Daft Punk", "One More Time", "spotify:track:onemoretime"),
    ]);

    let request = request(
        "Tour Night",
        "Radiohead - Karma Police\nfoo\nDaft Punk - One More Time",
    );
    let playlist_id = builder::build(&request, &catalog).await.unwrap();

    assert_eq!(playlist_id, "pl-1");
    assert_eq!(catalog.created_names(), vec!["Tour Night"]);
    assert_eq!(
        catalog.added_uris(),
        vec!["spotify:track:karma", "spotify:track:onemoretime"]
    );
}

#[tokio::test]
async fn test_search_misses_are_silently_skipped() {
    let catalog = MockCatalog::with_tracks(&[("Radiohead", "Karma Police", "spotify:track:karma")]);

    let request = request("Misses", "Radiohead - Karma Police\nNobody - Unknown Song");
    builder::build(&request, &catalog).await.unwrap();

    // The miss contributes nothing; the hit still goes through
    assert_eq!(catalog.added_uris(), vec!["spotify:track:karma"]);
}

#[tokio::test]
async fn test_empty_setlist_creates_empty_playlist() {
    let catalog = MockCatalog::new();

    let request = request("Empty", "");
    let playlist_id = builder::build(&request, &catalog).await.unwrap();

    assert_eq!(playlist_id, "pl-1");
    assert_eq!(catalog.created_names(), vec!["Empty"]);
    // No matches means the add-tracks call is skipped entirely
    let calls = catalog.calls.lock().unwrap().clone();
    assert!(!calls.iter().any(|c| c.starts_with("add:")));
}

#[tokio::test]
async fn test_all_misses_skip_the_add_call() {
    let catalog = MockCatalog::new();

    let request = request("No Hits", "A - B\nC - D");
    builder::build(&request, &catalog).await.unwrap();

    let calls = catalog.calls.lock().unwrap().clone();
    assert_eq!(
        calls,
        vec!["me", "create:user-1", "search:A", "search:C"]
    );
}

#[tokio::test]
async fn test_rejected_token_aborts_before_any_other_call() {
    let mut catalog = MockCatalog::new();
    catalog.reject_token = true;

    let request = request("Auth", "A - B");
    let err = builder::build(&request, &catalog).await.unwrap_err();

    assert!(matches!(err, ApiError::Auth(_)));
    assert_eq!(catalog.call_count(), 1);
}

#[tokio::test]
async fn test_search_failure_aborts_the_whole_build() {
    let mut catalog = MockCatalog::with_tracks(&[("A", "B", "spotify:track:ab")]);
    catalog.fail_search_for = Some("C".to_string());

    let request = request("Abort", "A - B\nC - D\nE - F");
    let err = builder::build(&request, &catalog).await.unwrap_err();

    assert!(matches!(err, ApiError::Catalog(_)));

    // The failing second search stops everything: no third search, no add
    let calls = catalog.calls.lock().unwrap().clone();
    assert_eq!(
        calls,
        vec!["me", "create:user-1", "search:A", "search:C"]
    );
    assert!(catalog.added_uris().is_empty());
}
