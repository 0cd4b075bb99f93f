use super::*;
use media_shelf_catalog::{AudioDetails, NewMedia, VideoDetails};

fn audio(code: &str, title: &str, author: &str, performer: &str) -> MediaItem {
    MediaItem::create(
        NewMedia {
            code: code.to_string(),
            title: title.to_string(),
            format: "MP3".to_string(),
            year: 2001,
            price: 3.0,
            details: MediaDetails::Audio(AudioDetails {
                author: author.to_string(),
                performer: performer.to_string(),
                duration_seconds: 200,
            }),
        },
        2024,
    )
    .unwrap()
}

fn video(code: &str, title: &str, director: &str, main_actor: &str) -> MediaItem {
    MediaItem::create(
        NewMedia {
            code: code.to_string(),
            title: title.to_string(),
            format: "MP4".to_string(),
            year: 2010,
            price: 5.0,
            details: MediaDetails::Video(VideoDetails {
                director: director.to_string(),
                main_actor: main_actor.to_string(),
            }),
        },
        2024,
    )
    .unwrap()
}

fn catalog() -> Vec<MediaItem> {
    vec![
        audio("A1", "Morning Songs", "Carl Orff", "Anna"),
        video("V1", "Night Train", "Ann Lee", "Bruno"),
        audio("A2", "Evening", "Hanna Berg", "Trio Nord"),
        video("V2", "Harbor", "Marco Polo", "Joanna Cole"),
    ]
}

fn codes(found: &SearchResults<'_>) -> Vec<String> {
    found.items.iter().map(|i| i.code().to_string()).collect()
}

#[test]
fn test_unfiltered_all_matches_both_kinds() {
    let items = catalog();
    let found = search(&items, VariantFilter::All, SearchField::Unfiltered, "ann");
    assert_eq!(codes(&found), ["A1", "V1", "A2", "V2"]);
}

#[test]
fn test_matching_is_case_insensitive_substring() {
    let items = catalog();
    let found = search(&items, VariantFilter::All, SearchField::Title, "TRAIN");
    assert_eq!(codes(&found), ["V1"]);
    let found = search(&items, VariantFilter::All, SearchField::Title, "ning");
    assert_eq!(codes(&found), ["A1", "A2"]);
}

#[test]
fn test_empty_text_returns_filtered_candidates() {
    let items = catalog();
    let found = search(&items, VariantFilter::Video, SearchField::Title, "");
    assert_eq!(codes(&found), ["V1", "V2"]);
    let found = search(&items, VariantFilter::All, SearchField::Performer, "");
    assert_eq!(found.items.len(), 4);
}

#[test]
fn test_whitespace_is_part_of_the_text() {
    let items = catalog();
    let found = search(&items, VariantFilter::All, SearchField::Title, "train ");
    assert!(found.items.is_empty());
    let found = search(&items, VariantFilter::All, SearchField::Title, " train");
    assert_eq!(codes(&found), ["V1"]);
    let found = search(&items, VariantFilter::All, SearchField::Title, " ");
    assert_eq!(codes(&found), ["A1", "V1"]);
}

#[test]
fn test_performer_under_all_drops_video() {
    let items = catalog();
    let found = search(&items, VariantFilter::All, SearchField::Performer, "n");
    assert_eq!(codes(&found), ["A1", "A2"]);
}

#[test]
fn test_director_under_all_drops_audio() {
    let items = catalog();
    let found = search(&items, VariantFilter::All, SearchField::Director, "ann");
    assert_eq!(codes(&found), ["V1"]);
}

#[test]
fn test_unfiltered_video_checks_main_actor() {
    let items = catalog();
    let found = search(&items, VariantFilter::Video, SearchField::Unfiltered, "joanna");
    assert_eq!(codes(&found), ["V2"]);
}

#[test]
fn test_unfiltered_audio_checks_author() {
    let items = catalog();
    let found = search(&items, VariantFilter::Audio, SearchField::Unfiltered, "orff");
    assert_eq!(codes(&found), ["A1"]);
}

#[test]
fn test_field_of_excluded_kind_is_ignored() {
    let items = catalog();
    let found = search(&items, VariantFilter::Video, SearchField::Performer, "anna");
    assert_eq!(found.ignored_field, Some(SearchField::Performer));
    assert_eq!(codes(&found), ["V1", "V2"]);

    let found = search(&items, VariantFilter::Audio, SearchField::Director, "x");
    assert_eq!(found.ignored_field, Some(SearchField::Director));
    assert_eq!(codes(&found), ["A1", "A2"]);
}

#[test]
fn test_applied_field_is_not_flagged() {
    let items = catalog();
    let found = search(&items, VariantFilter::Audio, SearchField::Performer, "anna");
    assert_eq!(found.ignored_field, None);
    assert_eq!(codes(&found), ["A1"]);
}

#[test]
fn test_filter_admits() {
    assert!(VariantFilter::All.admits(MediaKind::Audio));
    assert!(VariantFilter::Audio.admits(MediaKind::Audio));
    assert!(!VariantFilter::Audio.admits(MediaKind::Video));
    assert_eq!(VariantFilter::from(MediaKind::Video), VariantFilter::Video);
}
