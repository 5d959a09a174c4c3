//! Tag filtering for the lodgement browse page.

#[cfg(test)]
#[path = "tags_test.rs"]
mod tags_test;

use std::collections::BTreeSet;

use crate::net::types::Lodgement;

/// Every distinct tag across `lodgements`, sorted.
#[must_use]
pub fn collect_tags(lodgements: &[Lodgement]) -> Vec<String> {
    lodgements
        .iter()
        .flat_map(|l| l.tags.iter())
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Add `tag` to the selection, or remove it when already selected.
pub fn toggle_tag(selected: &mut Vec<String>, tag: &str) {
    if let Some(pos) = selected.iter().position(|t| t == tag) {
        selected.remove(pos);
    } else {
        selected.push(tag.to_owned());
    }
}

/// A lodgement matches when it carries every selected tag.
#[must_use]
pub fn matches_tags(lodgement: &Lodgement, selected: &[String]) -> bool {
    selected.iter().all(|want| lodgement.tags.iter().any(|t| t.trim() == want))
}

#[must_use]
pub fn filter_lodgements(lodgements: &[Lodgement], selected: &[String]) -> Vec<Lodgement> {
    lodgements.iter().filter(|l| matches_tags(l, selected)).cloned().collect()
}
