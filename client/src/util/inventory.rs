//! Create/edit form model for the lodgement inventory dialog.

#[cfg(test)]
#[path = "inventory_test.rs"]
mod inventory_test;

use serde_json::{Value, json};

use crate::net::types::Lodgement;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LodgementDraft {
    /// `None` while creating a new lodgement.
    pub id: Option<i64>,
    pub name: String,
    /// Raw size input; validated on submit.
    pub size: String,
    pub description: String,
    pub location: String,
    pub is_available: bool,
    pub queue_id: Option<i64>,
}

impl LodgementDraft {
    /// Blank form for a new lodgement; new units start available.
    #[must_use]
    pub fn empty() -> Self {
        Self { is_available: true, ..Self::default() }
    }

    #[must_use]
    pub fn from_lodgement(lodgement: &Lodgement) -> Self {
        Self {
            id: Some(lodgement.id),
            name: lodgement.name.clone().unwrap_or_default(),
            size: lodgement.size.to_string(),
            description: lodgement.description.clone(),
            location: lodgement.location.clone(),
            is_available: lodgement.is_available,
            queue_id: Some(lodgement.queue.id).filter(|id| *id > 0),
        }
    }

    #[must_use]
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Validate the form and build the create/update body.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when the size is not a positive integer or
    /// no queue is selected.
    pub fn to_payload(&self) -> Result<Value, String> {
        let size: i64 = self
            .size
            .trim()
            .parse()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| "Size must be a positive whole number.".to_owned())?;
        let queue_id = self.queue_id.ok_or_else(|| "Select a queue.".to_owned())?;
        Ok(json!({
            "name": self.name.trim(),
            "size": size,
            "description": self.description,
            "location": self.location.trim(),
            "is_available": self.is_available,
            "queue_id": queue_id,
        }))
    }
}

/// Parse a `<select>` value into a queue id; blank means none.
#[must_use]
pub fn parse_queue_choice(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}
