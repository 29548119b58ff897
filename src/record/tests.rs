// SPDX-FileCopyrightText: The foliogrid authors
// SPDX-License-Identifier: MPL-2.0

use super::*;

#[test]
fn decode_icon_based_record() {
    let record: ProjectRecord = serde_json::from_str(
        r#"{
            "id": "cricket",
            "title": "Cricket Scores",
            "description": "Live scores.",
            "projectUrl": "https://example.com/cricket",
            "buttonText": "Open App"
        }"#,
    )
    .unwrap();
    assert_eq!(Some("cricket"), record.id.as_deref());
    assert_eq!("Cricket Scores", record.title());
    assert_eq!("Live scores.", record.description());
    assert_eq!(Some("https://example.com/cricket"), record.project_url());
    assert_eq!("Open App", record.button_text());
    assert!(!record.has_image());
    assert!(record.button_classes().is_none());
}

#[test]
fn decode_image_based_record() {
    let record: ProjectRecord = serde_json::from_str(
        r#"{
            "title": "Study Smarter",
            "imageUrl": "images/study.png",
            "altText": "Study Smarter screenshot",
            "buttonClasses": "bg-indigo-600 hover:bg-indigo-700"
        }"#,
    )
    .unwrap();
    assert!(record.has_image());
    assert_eq!(Some("images/study.png"), record.image_url());
    assert_eq!(Some("Study Smarter screenshot"), record.alt_text.as_deref());
    assert_eq!(
        Some("bg-indigo-600 hover:bg-indigo-700"),
        record.button_classes()
    );
}

#[test]
fn missing_fields_are_empty() {
    let record: ProjectRecord = serde_json::from_str("{}").unwrap();
    assert_eq!(ProjectRecord::default(), record);
    assert_eq!("", record.title());
    assert_eq!("", record.description());
    assert_eq!("", record.button_text());
    assert!(record.project_url().is_none());
}

#[test]
fn blank_image_url_is_not_an_image() {
    let record = ProjectRecord {
        image_url: Some(" \t".into()),
        button_classes: Some(" ".into()),
        ..Default::default()
    };
    assert!(!record.has_image());
    assert!(record.button_classes().is_none());
}

#[test]
fn scalar_values_are_converted_to_text() {
    let record: ProjectRecord =
        serde_json::from_str(r#"{"id": 7, "title": true, "description": 1.5}"#).unwrap();
    assert_eq!(Some("7"), record.id.as_deref());
    assert_eq!("true", record.title());
    assert_eq!("1.5", record.description());
}

#[test]
fn structured_and_null_values_are_absent() {
    let record: ProjectRecord =
        serde_json::from_str(r#"{"title": null, "description": ["a"], "buttonText": {}}"#)
            .unwrap();
    assert_eq!(ProjectRecord::default(), record);
}

#[test]
fn non_object_entries_decode_to_empty_records() {
    let records: Vec<ProjectRecord> =
        serde_json::from_str(r#"[null, 42, "text", {"title": "Kept"}]"#).unwrap();
    assert_eq!(4, records.len());
    assert_eq!(ProjectRecord::default(), records[0]);
    assert_eq!(ProjectRecord::default(), records[1]);
    assert_eq!(ProjectRecord::default(), records[2]);
    assert_eq!("Kept", records[3].title());
}
