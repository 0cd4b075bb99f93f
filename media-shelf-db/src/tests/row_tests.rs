use super::*;

fn audio_row() -> MediaRow {
    MediaRow {
        code: "A1".to_string(),
        title: "Giant Steps".to_string(),
        format: "MP3".to_string(),
        year: 1960,
        price: 8.0,
        media_type: "Audio".to_string(),
        author: Some("John Coltrane".to_string()),
        performer: Some("John Coltrane".to_string()),
        duration: Some(2240),
        director: None,
        main_actor: None,
    }
}

#[test]
fn test_audio_row_maps_to_audio_item() {
    let item = audio_row().into_item(2024).unwrap();
    assert_eq!(item.kind(), MediaKind::Audio);
    assert_eq!(item.as_audio().unwrap().duration_seconds, 2240);
    assert_eq!(MediaRow::from_item(&item), audio_row());
}

#[test]
fn test_other_variant_columns_are_ignored() {
    let mut row = audio_row();
    row.director = Some("Stray value".to_string());
    let item = row.into_item(2024).unwrap();
    assert!(item.as_video().is_none());
}

#[test]
fn test_unknown_discriminator_is_rejected() {
    let mut row = audio_row();
    row.media_type = "Podcast".to_string();
    match row.into_item(2024) {
        Err(RowError::UnknownKind { code, source }) => {
            assert_eq!(code, "A1");
            assert_eq!(source, UnknownKind("Podcast".to_string()));
        }
        other => panic!("expected UnknownKind, got {:?}", other),
    }
}

#[test]
fn test_missing_variant_column_is_rejected() {
    let mut row = audio_row();
    row.duration = None;
    match row.into_item(2024) {
        Err(RowError::MissingColumn { column, kind, .. }) => {
            assert_eq!(column, "Duration");
            assert_eq!(kind, MediaKind::Audio);
        }
        other => panic!("expected MissingColumn, got {:?}", other),
    }
}

#[test]
fn test_video_row_needs_video_columns() {
    let mut row = audio_row();
    row.media_type = "Video".to_string();
    assert!(matches!(
        row.into_item(2024),
        Err(RowError::MissingColumn { column: "Director", .. })
    ));
}

#[test]
fn test_invalid_values_are_rejected() {
    let mut row = audio_row();
    row.price = -2.0;
    assert!(matches!(row.into_item(2024), Err(RowError::Invalid { .. })));
}
