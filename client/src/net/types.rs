//! Wire DTOs mirrored from the lodging backend's JSON responses.
//!
//! DESIGN
//! ======
//! These types carry no client-side invariants: they hold whatever the last
//! fetch returned. Optional or late-added backend fields default instead of
//! failing the whole decode, so a partial record still renders.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// =============================================================================
// USERS
// =============================================================================

/// Portal role. The backend encodes it as an integer code (1..=3) on most
/// endpoints and as a label on a few; both decode here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    #[default]
    User,
    Manager,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::User, Role::Manager, Role::Admin];

    #[must_use]
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::User),
            2 => Some(Self::Manager),
            3 => Some(Self::Admin),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "user" => Some(Self::User),
            "manager" => Some(Self::Manager),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    #[must_use]
    pub fn code(self) -> i64 {
        match self {
            Self::User => 1,
            Self::Manager => 2,
            Self::Admin => 3,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Manager => "Manager",
            Self::Admin => "Admin",
        }
    }

    /// Managers and admins may review applications and edit inventory.
    #[must_use]
    pub fn is_staff(self) -> bool {
        matches!(self, Self::Manager | Self::Admin)
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        let role = match &raw {
            serde_json::Value::Number(n) => n.as_i64().and_then(Role::from_code),
            serde_json::Value::String(s) => Role::from_label(s),
            _ => None,
        };
        role.ok_or_else(|| D::Error::custom(format!("unknown role: {raw}")))
    }
}

/// A portal account as returned by `/auth/me/` and `/auth/user/`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub role_name: Option<String>,
    /// Personnel category label (e.g. "Akademik").
    #[serde(rename = "type", default)]
    pub personnel_type: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub date_joined: Option<String>,
}

impl User {
    /// Full name, falling back to the email when both name parts are blank.
    #[must_use]
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() { self.email.clone() } else { full.to_owned() }
    }
}

// =============================================================================
// QUEUES & LODGEMENTS
// =============================================================================

/// A document the backend requires applicants to upload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub pdf_file: Option<String>,
}

/// An application category (lodgement type x personnel type x size).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Queue {
    pub id: i64,
    #[serde(default)]
    pub lodgement_type: String,
    #[serde(rename = "personel_type", default)]
    pub personnel_type: String,
    #[serde(default)]
    pub lodgement_size: String,
    #[serde(default)]
    pub required_documents: Vec<Document>,
}

impl Queue {
    /// Human label shown in selects and tables.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} - {} - {}", self.lodgement_type, self.personnel_type, self.lodgement_size)
    }
}

/// A housing unit record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Lodgement {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub size: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub is_available: bool,
    #[serde(default)]
    pub busy_until: Option<String>,
    #[serde(default)]
    pub required_documents: Vec<String>,
    #[serde(default)]
    pub queue: Queue,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Lodgement {
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name.clone().filter(|n| !n.trim().is_empty()).unwrap_or_else(|| format!("Lodgement #{}", self.id))
    }

    /// Image URL under the portal's `/static` mount, if the record has one.
    #[must_use]
    pub fn image_url(&self) -> Option<String> {
        self.image_path
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| format!("/static/{}", p.trim_start_matches('/')))
    }
}

/// Label for the backend's integer lodgement size code.
#[must_use]
pub fn lodgement_size_label(size: i64) -> String {
    match size {
        1 => "1+1".to_owned(),
        2 => "2+1".to_owned(),
        other => other.to_string(),
    }
}

// =============================================================================
// SCORING FORM
// =============================================================================

/// Input kind of a scoring-form item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    Integer,
    Boolean,
    #[default]
    Text,
}

impl From<String> for FieldType {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Integer" => Self::Integer,
            "Boolean" => Self::Boolean,
            _ => Self::Text,
        }
    }
}

impl From<FieldType> for String {
    fn from(kind: FieldType) -> Self {
        match kind {
            FieldType::Integer => "Integer",
            FieldType::Boolean => "Boolean",
            FieldType::Text => "Text",
        }
        .to_owned()
    }
}

/// One weighted question of the scoring form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FormItem {
    pub id: i64,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub field_type: FieldType,
    #[serde(default)]
    pub point: Option<i64>,
    /// Stored answer, shaped `{"value": ...}` by the backend.
    #[serde(default)]
    pub answer: Option<serde_json::Value>,
}

impl FormItem {
    #[must_use]
    pub fn answer_value(&self) -> Option<&serde_json::Value> {
        self.answer.as_ref().and_then(|a| a.get("value")).filter(|v| !v.is_null())
    }

    /// Answer rendered for read-only review screens.
    #[must_use]
    pub fn answer_display(&self) -> String {
        match (self.field_type, self.answer_value()) {
            (_, None) => "N/A".to_owned(),
            (FieldType::Boolean, Some(v)) => {
                let yes = v.as_bool().unwrap_or_else(|| v.as_i64().is_some_and(|n| n != 0));
                if yes { "Yes" } else { "No" }.to_owned()
            }
            (_, Some(serde_json::Value::String(s))) => s.clone(),
            (_, Some(v)) => v.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringForm {
    pub id: i64,
    #[serde(rename = "type", default)]
    pub form_type: String,
    #[serde(default)]
    pub items: Vec<FormItem>,
}

// =============================================================================
// APPLICATIONS
// =============================================================================

/// Lifecycle status of an application, parsed from the backend's label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplicationStatus {
    InProgress,
    Pending,
    Approved,
    Rejected,
    ReUpload,
    Cancelled,
    Assigned,
}

impl ApplicationStatus {
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "In Progress" => Some(Self::InProgress),
            "Pending" => Some(Self::Pending),
            "Approved" => Some(Self::Approved),
            "Rejected" => Some(Self::Rejected),
            "Re Upload" | "Re-Upload" => Some(Self::ReUpload),
            "Cancelled" => Some(Self::Cancelled),
            "Assigned" => Some(Self::Assigned),
            _ => None,
        }
    }

    /// Integer code the backend expects in review requests.
    #[must_use]
    pub fn code(self) -> i64 {
        match self {
            Self::InProgress => 1,
            Self::Pending => 2,
            Self::Approved => 3,
            Self::Rejected => 4,
            Self::ReUpload => 5,
            Self::Cancelled => 6,
            Self::Assigned => 7,
        }
    }

    /// Whether the applicant may still cancel.
    #[must_use]
    pub fn is_cancellable(self) -> bool {
        !matches!(self, Self::Approved | Self::Rejected | Self::Cancelled | Self::Assigned)
    }

    /// Whether the backend still accepts document uploads.
    #[must_use]
    pub fn accepts_documents(self) -> bool {
        !matches!(self, Self::Rejected | Self::Cancelled)
    }
}

/// A file an applicant uploaded for a required document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationDocument {
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub document: Document,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    #[serde(default)]
    pub user: User,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub queue: Queue,
    #[serde(default)]
    pub scoring_form: Option<ScoringForm>,
    #[serde(default)]
    pub documents: Vec<ApplicationDocument>,
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub total_points: Option<i64>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub estimated_availability: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub rank: Option<i64>,
}

impl Application {
    #[must_use]
    pub fn parsed_status(&self) -> Option<ApplicationStatus> {
        ApplicationStatus::from_label(&self.status)
    }
}

/// Accept integers, integral floats, numeric strings, or null.
fn deserialize_lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::Number(n)) => n.as_i64().or_else(|| {
            #[allow(clippy::cast_possible_truncation)]
            n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)
        }),
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

// =============================================================================
// CONTENT
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub order: i64,
}
