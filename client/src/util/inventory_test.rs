use serde_json::json;

use super::*;
use crate::net::types::Queue;

fn lodgement() -> Lodgement {
    Lodgement {
        id: 12,
        name: Some("Block A-3".to_owned()),
        size: 2,
        description: "Two rooms".to_owned(),
        location: "North campus".to_owned(),
        is_available: false,
        queue: Queue { id: 4, ..Queue::default() },
        ..Lodgement::default()
    }
}

#[test]
fn empty_draft_is_new_and_available() {
    let draft = LodgementDraft::empty();
    assert!(draft.is_new());
    assert!(draft.is_available);
    assert_eq!(draft.queue_id, None);
}

#[test]
fn from_lodgement_copies_fields() {
    let draft = LodgementDraft::from_lodgement(&lodgement());
    assert_eq!(draft.id, Some(12));
    assert_eq!(draft.name, "Block A-3");
    assert_eq!(draft.size, "2");
    assert_eq!(draft.queue_id, Some(4));
    assert!(!draft.is_available);
}

#[test]
fn payload_carries_typed_fields() {
    let mut draft = LodgementDraft::from_lodgement(&lodgement());
    draft.size = " 3 ".to_owned();
    assert_eq!(
        draft.to_payload(),
        Ok(json!({
            "name": "Block A-3",
            "size": 3,
            "description": "Two rooms",
            "location": "North campus",
            "is_available": false,
            "queue_id": 4,
        }))
    );
}

#[test]
fn payload_rejects_bad_size() {
    let mut draft = LodgementDraft::from_lodgement(&lodgement());
    for bad in ["", "0", "-2", "two", "1.5"] {
        draft.size = bad.to_owned();
        assert_eq!(draft.to_payload(), Err("Size must be a positive whole number.".to_owned()));
    }
}

#[test]
fn payload_requires_queue() {
    let mut draft = LodgementDraft::empty();
    draft.size = "1".to_owned();
    assert_eq!(draft.to_payload(), Err("Select a queue.".to_owned()));
}

#[test]
fn queue_choice_parses_select_value() {
    assert_eq!(parse_queue_choice("7"), Some(7));
    assert_eq!(parse_queue_choice(""), None);
}
