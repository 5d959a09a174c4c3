//! Pure view-model helpers for the admin users table.
//!
//! DESIGN
//! ======
//! Filtering, sorting and paging run on plain slices so the page component only
//! wires signals; every rule here is unit-tested without a browser.

#[cfg(test)]
#[path = "users_table_test.rs"]
mod users_table_test;

use std::cmp::Ordering;

use crate::net::types::User;

pub const USERS_PER_PAGE: usize = 6;

/// Personnel-type tab above the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PersonnelTab {
    #[default]
    All,
    Academic,
    Administrative,
    Staff,
}

impl PersonnelTab {
    pub const ALL: [Self; 4] = [Self::All, Self::Academic, Self::Administrative, Self::Staff];

    /// Label as stored in the backend's `type` field (and shown on the tab).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Academic => "Akademik",
            Self::Administrative => "İdari",
            Self::Staff => "Görevli",
        }
    }

    fn admits(self, user: &User) -> bool {
        match self {
            Self::All => true,
            tab => user.personnel_type.as_deref() == Some(tab.label()),
        }
    }
}

/// Sortable column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Id,
    FirstName,
    LastName,
    Email,
    Role,
    IsActive,
    DateJoined,
}

impl SortKey {
    fn compare(self, a: &User, b: &User) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::FirstName => a.first_name.to_lowercase().cmp(&b.first_name.to_lowercase()),
            Self::LastName => a.last_name.to_lowercase().cmp(&b.last_name.to_lowercase()),
            Self::Email => a.email.to_lowercase().cmp(&b.email.to_lowercase()),
            Self::Role => a.role.cmp(&b.role),
            Self::IsActive => a.is_active.cmp(&b.is_active),
            Self::DateJoined => a.date_joined.cmp(&b.date_joined),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Active sort column plus direction; starts on id ascending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// Header click: same column flips direction, a new column starts ascending.
#[must_use]
pub fn toggle_sort(current: SortState, key: SortKey) -> SortState {
    if current.key == key {
        let direction = match current.direction {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        };
        SortState { key, direction }
    } else {
        SortState { key, direction: SortDirection::Ascending }
    }
}

/// Arrow shown next to a column header.
#[must_use]
pub fn sort_indicator(current: SortState, key: SortKey) -> &'static str {
    match (current.key == key, current.direction) {
        (false, _) => "↕",
        (true, SortDirection::Ascending) => "▲",
        (true, SortDirection::Descending) => "▼",
    }
}

/// Users in `tab` whose first name, last name or email contains `query`
/// (case-insensitive). A blank query matches everyone.
#[must_use]
pub fn filter_users(users: &[User], tab: PersonnelTab, query: &str) -> Vec<User> {
    let needle = query.trim().to_lowercase();
    users
        .iter()
        .filter(|u| tab.admits(u))
        .filter(|u| {
            needle.is_empty()
                || u.first_name.to_lowercase().contains(&needle)
                || u.last_name.to_lowercase().contains(&needle)
                || u.email.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Stable sort by the given column.
pub fn sort_users(users: &mut [User], sort: SortState) {
    users.sort_by(|a, b| {
        let ord = sort.key.compare(a, b);
        match sort.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

/// Number of pages, never less than one.
#[must_use]
pub fn page_count(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 1;
    }
    len.div_ceil(per_page).max(1)
}

/// Rows of 1-based `page`, clamped into range.
#[must_use]
pub fn paginate(users: &[User], page: usize, per_page: usize) -> &[User] {
    let pages = page_count(users.len(), per_page);
    let page = page.clamp(1, pages);
    let start = (page - 1) * per_page;
    let end = (start + per_page).min(users.len());
    users.get(start..end).unwrap_or_default()
}
