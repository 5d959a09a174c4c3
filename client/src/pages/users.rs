//! Admin user management: tabs, search, sorting, paging, role edits.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::page_status::{error_view, loading_view};
use crate::components::require_access::RequireAccess;
#[cfg(feature = "hydrate")]
use crate::components::toast::show_toast;
use crate::net::types::{Role, User};
use crate::state::loadable::Loadable;
#[cfg(feature = "hydrate")]
use crate::state::ui::ToastKind;
use crate::state::ui::UiState;
use crate::util::auth::Access;
use crate::util::format::short_date;
use crate::util::users_table::{
    PersonnelTab, SortKey, SortState, USERS_PER_PAGE, filter_users, page_count, paginate, sort_indicator,
    sort_users, toggle_sort,
};

const COLUMNS: &[(&str, SortKey)] = &[
    ("Id", SortKey::Id),
    ("First Name", SortKey::FirstName),
    ("Last Name", SortKey::LastName),
    ("Email", SortKey::Email),
    ("Role", SortKey::Role),
    ("Is Active", SortKey::IsActive),
    ("Join Date", SortKey::DateJoined),
];

#[component]
pub fn UsersPage() -> impl IntoView {
    view! {
        <RequireAccess access=Access::Admin>
            <UsersTable/>
        </RequireAccess>
    }
}

#[component]
fn UsersTable() -> impl IntoView {
    let users = RwSignal::new(Loadable::<Vec<User>>::default());
    let tab = RwSignal::new(PersonnelTab::default());
    let query = RwSignal::new(String::new());
    let sort = RwSignal::new(SortState::default());
    let page = RwSignal::new(1_usize);
    let editing = RwSignal::new(None::<User>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        users.set(Loadable::from_result(crate::net::api::list_users().await));
    });

    let visible = Memo::new(move |_| {
        users.with(|state| {
            let mut rows = state.ready().map(|all| filter_users(all, tab.get(), &query.get())).unwrap_or_default();
            sort_users(&mut rows, sort.get());
            rows
        })
    });
    let pages = move || page_count(visible.with(Vec::len), USERS_PER_PAGE);
    let current_page = move || page.get().clamp(1, pages());

    let on_saved = Callback::new(move |saved: User| {
        users.update(|state| {
            if let Loadable::Ready(items) = state
                && let Some(slot) = items.iter_mut().find(|u| u.id == saved.id)
            {
                *slot = saved;
            }
        });
        editing.set(None);
    });
    let on_cancel = Callback::new(move |()| editing.set(None));

    view! {
        <section class="page users-page">
            <h1 class="page__title">"Users"</h1>
            <div class="users-page__controls">
                <div class="tabs">
                    {PersonnelTab::ALL
                        .into_iter()
                        .map(|t| {
                            view! {
                                <button
                                    class="tabs__tab"
                                    class:tabs__tab--active=move || tab.get() == t
                                    on:click=move |_| {
                                        tab.set(t);
                                        page.set(1);
                                    }
                                >
                                    {t.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <input
                    class="form__input users-page__search"
                    type="search"
                    placeholder="Search by name or email"
                    prop:value=move || query.get()
                    on:input=move |ev| {
                        query.set(event_target_value(&ev));
                        page.set(1);
                    }
                />
            </div>
            {move || match users.get() {
                Loadable::Loading => loading_view(),
                Loadable::Failed(message) => error_view(message),
                Loadable::Ready(_) => {
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    {COLUMNS
                                        .iter()
                                        .map(|(label, key)| {
                                            let key = *key;
                                            view! {
                                                <th
                                                    class="table__sortable"
                                                    on:click=move |_| sort.update(|s| *s = toggle_sort(*s, key))
                                                >
                                                    {*label}
                                                    " "
                                                    {move || sort_indicator(sort.get(), key)}
                                                </th>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                    <th>"Type"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    visible
                                        .with(|rows| paginate(rows, current_page(), USERS_PER_PAGE).to_vec())
                                        .into_iter()
                                        .map(|user| user_row(user, editing))
                                        .collect::<Vec<_>>()
                                }}
                            </tbody>
                        </table>
                        <footer class="pager">
                            <span class="pager__info">
                                {move || format!("Page {} of {}", current_page(), pages())}
                            </span>
                            <button
                                class="btn"
                                disabled=move || current_page() <= 1
                                on:click=move |_| page.set(current_page().saturating_sub(1).max(1))
                            >
                                "Previous"
                            </button>
                            <button
                                class="btn"
                                disabled=move || current_page() >= pages()
                                on:click=move |_| page.set((current_page() + 1).min(pages()))
                            >
                                "Next"
                            </button>
                        </footer>
                    }
                        .into_any()
                }
            }}
            <Show when=move || editing.get().is_some()>
                <RoleDialog editing=editing on_saved=on_saved on_cancel=on_cancel/>
            </Show>
        </section>
    }
}

fn user_row(user: User, editing: RwSignal<Option<User>>) -> impl IntoView {
    let joined = user.date_joined.as_deref().map(short_date).unwrap_or("-").to_owned();
    let kind = user.personnel_type.clone().unwrap_or_else(|| "-".to_owned());
    let role = user.role.label();
    let active = if user.is_active { "Active" } else { "Inactive" };
    let row = user.clone();
    view! {
        <tr>
            <td>{user.id}</td>
            <td>{user.first_name}</td>
            <td>{user.last_name}</td>
            <td>{user.email}</td>
            <td>
                <span class="chip">{role}</span>
            </td>
            <td>{active}</td>
            <td>{joined}</td>
            <td>{kind}</td>
            <td>
                <button class="btn" title="Edit user" on:click=move |_| editing.set(Some(row.clone()))>
                    "Edit"
                </button>
            </td>
        </tr>
    }
}

/// Modal dialog changing the role of the user held in `editing`.
#[component]
fn RoleDialog(editing: RwSignal<Option<User>>, on_saved: Callback<User>, on_cancel: Callback<()>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let busy = RwSignal::new(false);
    let role = RwSignal::new(editing.get_untracked().map(|u| u.role).unwrap_or_default());

    let submit = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        let Some(user) = editing.get() else {
            return;
        };
        let next = role.get();
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_user_role(user.id, next).await {
                Ok(saved) => {
                    show_toast(ui, ToastKind::Success, format!("{} is now {}.", saved.display_name(), next.label()));
                    on_saved.run(saved);
                }
                Err(e) => show_toast(ui, ToastKind::Error, format!("Could not update the role: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (ui, on_saved, user, next);
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Edit User"</h2>
                <p class="dialog__subtitle">
                    {move || editing.get().map(|u| format!("{} ({})", u.display_name(), u.email)).unwrap_or_default()}
                </p>
                <label class="dialog__label">
                    "Role"
                    <select
                        class="dialog__input"
                        on:change=move |ev| {
                            if let Some(next) = Role::from_label(&event_target_value(&ev)) {
                                role.set(next);
                            }
                        }
                    >
                        {Role::ALL
                            .into_iter()
                            .map(|r| {
                                view! {
                                    <option value=r.label() selected=move || role.get() == r>
                                        {r.label()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=move |_| submit.run(())>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
