use super::*;
use crate::types::{AudioDetails, VideoDetails};

fn new_video() -> NewMedia {
    NewMedia {
        code: "V1".to_string(),
        title: "Stalker".to_string(),
        format: "MP4".to_string(),
        year: 1979,
        price: 7.0,
        details: MediaDetails::Video(VideoDetails {
            director: "Andrei Tarkovsky".to_string(),
            main_actor: "Alexander Kaidanovsky".to_string(),
        }),
    }
}

#[test]
fn test_year_bounds_are_inclusive() {
    assert!(year_in_range(MIN_YEAR, 2024).is_ok());
    assert!(year_in_range(2024, 2024).is_ok());
    assert_eq!(
        year_in_range(1899, 2024).unwrap_err().reason,
        ValidationReason::YearOutOfRange {
            min: 1900,
            max: 2024,
            actual: 1899
        }
    );
    assert!(year_in_range(2025, 2024).is_err());
}

#[test]
fn test_price_rules() {
    assert!(price_valid(0.0).is_ok());
    assert!(price_valid(19.99).is_ok());
    assert_eq!(
        price_valid(-0.01).unwrap_err().reason,
        ValidationReason::Negative(-0.01)
    );
    assert_eq!(
        price_valid(f64::NAN).unwrap_err().reason,
        ValidationReason::NotFinite
    );
    assert!(price_valid(f64::INFINITY).is_err());
}

#[test]
fn test_whitespace_only_counts_as_empty() {
    let err = non_empty(MediaField::Title, "   ").unwrap_err();
    assert_eq!(err.field, MediaField::Title);
    assert_eq!(err.reason, ValidationReason::Empty);
}

#[test]
fn test_check_new_fails_on_first_bad_field() {
    let mut new = new_video();
    new.title = String::new();
    new.price = -1.0;
    let err = check_new(&new, 2024).unwrap_err();
    assert_eq!(err.field, MediaField::Title);
}

#[test]
fn test_check_new_variant_fields() {
    let mut new = new_video();
    new.details = MediaDetails::Video(VideoDetails {
        director: "Andrei Tarkovsky".to_string(),
        main_actor: String::new(),
    });
    assert_eq!(check_new(&new, 2024).unwrap_err().field, MediaField::MainActor);

    new.details = MediaDetails::Audio(AudioDetails {
        author: "A".to_string(),
        performer: "P".to_string(),
        duration_seconds: 0,
    });
    let err = check_new(&new, 2024).unwrap_err();
    assert_eq!(err.field, MediaField::Duration);
    assert_eq!(err.reason, ValidationReason::NotPositive(0));
}

#[test]
fn test_check_patch_rejects_fields_of_other_kind() {
    let patch = MediaPatch::new().performer("Someone");
    let err = check_patch(MediaKind::Video, &patch, 2024).unwrap_err();
    assert_eq!(err.field, MediaField::Performer);
    assert_eq!(err.reason, ValidationReason::NotApplicable(MediaKind::Video));

    let patch = MediaPatch::new().director("Someone");
    assert!(check_patch(MediaKind::Video, &patch, 2024).is_ok());
}

#[test]
fn test_empty_patch_is_valid() {
    assert!(check_patch(MediaKind::Audio, &MediaPatch::new(), 2024).is_ok());
}

#[test]
fn test_error_message_names_field() {
    let err = ValidationError::new(MediaField::MainActor, ValidationReason::Empty);
    assert_eq!(err.to_string(), "invalid main actor: must not be empty");
}
