use serde_json::json;

use super::*;

fn item(id: i64, label: &str, field_type: FieldType, answer: Option<Value>) -> FormItem {
    FormItem {
        id,
        label: label.to_owned(),
        field_type,
        answer: answer.map(|v| json!({ "value": v })),
        ..FormItem::default()
    }
}

fn sample() -> Vec<FormItem> {
    vec![
        item(1, "Children", FieldType::Integer, Some(json!(2))),
        item(2, "Married", FieldType::Boolean, Some(json!(1))),
        item(3, "Notes", FieldType::Text, None),
    ]
}

#[test]
fn initial_values_come_from_stored_answers() {
    let draft = ScoringDraft::new(&sample());
    assert_eq!(draft.value(1), Some(&FieldValue::Text("2".to_owned())));
    assert_eq!(draft.value(2), Some(&FieldValue::Flag(true)));
    assert_eq!(draft.value(3), Some(&FieldValue::Text(String::new())));
}

#[test]
fn boolean_answers_accept_json_bools() {
    let draft = ScoringDraft::new(&[item(9, "Disabled", FieldType::Boolean, Some(json!(false)))]);
    assert_eq!(draft.value(9), Some(&FieldValue::Flag(false)));
}

#[test]
fn to_answers_types_each_field() {
    let mut draft = ScoringDraft::new(&sample());
    draft.set(3, FieldValue::Text("ground floor".to_owned()));
    let answers = draft.to_answers().expect("valid draft");
    assert_eq!(
        answers,
        vec![
            AnswerPayload { form_item_id: 1, answer: json!(2) },
            AnswerPayload { form_item_id: 2, answer: json!(1) },
            AnswerPayload { form_item_id: 3, answer: json!("ground floor") },
        ]
    );
}

#[test]
fn unchecked_boolean_sends_zero_and_empty_inputs_are_skipped() {
    let mut draft = ScoringDraft::new(&sample());
    draft.set(1, FieldValue::Text("  ".to_owned()));
    draft.set(2, FieldValue::Flag(false));
    let answers = draft.to_answers().expect("valid draft");
    assert_eq!(answers, vec![AnswerPayload { form_item_id: 2, answer: json!(0) }]);
}

#[test]
fn non_integer_input_names_the_item() {
    let mut draft = ScoringDraft::new(&sample());
    draft.set(1, FieldValue::Text("two".to_owned()));
    assert_eq!(draft.to_answers(), Err("Children must be a whole number.".to_owned()));
}

#[test]
fn set_ignores_unknown_items() {
    let mut draft = ScoringDraft::new(&sample());
    let before = draft.clone();
    draft.set(42, FieldValue::Flag(true));
    assert_eq!(draft, before);
}
