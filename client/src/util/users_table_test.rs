use super::*;
use crate::net::types::Role;

fn user(id: i64, first: &str, last: &str, email: &str, kind: &str, role: Role) -> User {
    User {
        id,
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        email: email.to_owned(),
        personnel_type: Some(kind.to_owned()),
        role,
        ..User::default()
    }
}

fn roster() -> Vec<User> {
    vec![
        user(1, "Zeynep", "Kaya", "zkaya@uni.edu", "Akademik", Role::User),
        user(2, "ali", "Demir", "ademir@uni.edu", "İdari", Role::Admin),
        user(3, "Mehmet", "Arslan", "marslan@uni.edu", "Görevli", Role::Manager),
        user(4, "Ayşe", "Demirel", "ayse@uni.edu", "Akademik", Role::User),
    ]
}

fn ids(users: &[User]) -> Vec<i64> {
    users.iter().map(|u| u.id).collect()
}

#[test]
fn tab_filters_by_personnel_type() {
    assert_eq!(ids(&filter_users(&roster(), PersonnelTab::Academic, "")), vec![1, 4]);
    assert_eq!(ids(&filter_users(&roster(), PersonnelTab::Administrative, "")), vec![2]);
    assert_eq!(ids(&filter_users(&roster(), PersonnelTab::All, "")).len(), 4);
}

#[test]
fn search_matches_names_and_email_case_insensitively() {
    assert_eq!(ids(&filter_users(&roster(), PersonnelTab::All, "DEMIR")), vec![2, 4]);
    assert_eq!(ids(&filter_users(&roster(), PersonnelTab::All, "marslan@")), vec![3]);
    assert_eq!(ids(&filter_users(&roster(), PersonnelTab::Academic, "demir")), vec![4]);
}

#[test]
fn toggle_sort_flips_same_column_and_resets_new_column() {
    let first = toggle_sort(SortState::default(), SortKey::Email);
    assert_eq!(first, SortState { key: SortKey::Email, direction: SortDirection::Ascending });
    let second = toggle_sort(first, SortKey::Email);
    assert_eq!(second.direction, SortDirection::Descending);
    assert_eq!(toggle_sort(second, SortKey::Email).direction, SortDirection::Ascending);
    let other = toggle_sort(second, SortKey::Role);
    assert_eq!(other, SortState { key: SortKey::Role, direction: SortDirection::Ascending });
}

#[test]
fn default_sort_is_id_ascending() {
    let first_click = toggle_sort(SortState::default(), SortKey::Id);
    assert_eq!(first_click.direction, SortDirection::Descending);
    assert_eq!(sort_indicator(first_click, SortKey::Id), "▼");
    assert_eq!(sort_indicator(first_click, SortKey::Email), "↕");
}

#[test]
fn sort_users_orders_by_column_and_direction() {
    let mut users = roster();
    sort_users(&mut users, SortState { key: SortKey::FirstName, direction: SortDirection::Ascending });
    assert_eq!(ids(&users), vec![2, 4, 3, 1]);
    sort_users(&mut users, SortState { key: SortKey::Role, direction: SortDirection::Descending });
    assert_eq!(ids(&users)[0], 2);
}

#[test]
fn page_count_is_at_least_one() {
    assert_eq!(page_count(0, USERS_PER_PAGE), 1);
    assert_eq!(page_count(6, USERS_PER_PAGE), 1);
    assert_eq!(page_count(7, USERS_PER_PAGE), 2);
}

#[test]
fn paginate_clamps_page_into_range() {
    let users: Vec<User> = (1..=8).map(|id| User { id, ..User::default() }).collect();
    assert_eq!(ids(paginate(&users, 1, USERS_PER_PAGE)), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(ids(paginate(&users, 2, USERS_PER_PAGE)), vec![7, 8]);
    assert_eq!(ids(paginate(&users, 9, USERS_PER_PAGE)), vec![7, 8]);
    assert_eq!(ids(paginate(&users, 0, USERS_PER_PAGE)), vec![1, 2, 3, 4, 5, 6]);
    assert!(paginate(&[], 1, USERS_PER_PAGE).is_empty());
}
