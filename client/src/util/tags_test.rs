use super::*;

fn tagged(id: i64, tags: &[&str]) -> Lodgement {
    Lodgement { id, tags: tags.iter().map(|t| (*t).to_owned()).collect(), ..Lodgement::default() }
}

#[test]
fn collect_tags_dedupes_and_sorts() {
    let all = collect_tags(&[tagged(1, &["wifi", "balcony"]), tagged(2, &["wifi", " "])]);
    assert_eq!(all, vec!["balcony".to_owned(), "wifi".to_owned()]);
}

#[test]
fn toggle_tag_adds_then_removes() {
    let mut selected = Vec::new();
    toggle_tag(&mut selected, "wifi");
    assert_eq!(selected, vec!["wifi".to_owned()]);
    toggle_tag(&mut selected, "wifi");
    assert!(selected.is_empty());
}

#[test]
fn filter_requires_every_selected_tag() {
    let lodgements = [tagged(1, &["wifi", "balcony"]), tagged(2, &["wifi"])];
    let ids = |sel: &[String]| filter_lodgements(&lodgements, sel).iter().map(|l| l.id).collect::<Vec<_>>();
    assert_eq!(ids(&[]), vec![1, 2]);
    assert_eq!(ids(&["wifi".to_owned()]), vec![1, 2]);
    assert_eq!(ids(&["wifi".to_owned(), "balcony".to_owned()]), vec![1]);
}
