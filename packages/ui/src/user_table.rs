use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPenToSquare, FaTrashCan, FaUser};
use dioxus_free_icons::Icon;

use store::models::display_birth_date;
use store::UserRecord;

/// Tabular view of the registered users with per-row edit/delete actions.
/// An empty collection renders a placeholder instead of the table.
#[component]
pub fn UserTable(
    users: Vec<UserRecord>,
    on_edit: EventHandler<UserRecord>,
    on_delete: EventHandler<UserRecord>,
) -> Element {
    if users.is_empty() {
        return rsx! {
            div {
                class: "table-empty",
                Icon { icon: FaUser, width: 48, height: 48 }
                h3 { "No users registered" }
                p { "Click \"New user\" to add the first record" }
            }
        };
    }

    rsx! {
        div {
            class: "table-card",
            table {
                class: "user-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "National ID" }
                        th { "Email" }
                        th { "Phone" }
                        th { "Gender" }
                        th { "Postal code" }
                        th { "Birth date" }
                        th { class: "actions-header", "Actions" }
                    }
                }
                tbody {
                    for user in users.iter() {
                        UserRow {
                            key: "{user.id}",
                            user: user.clone(),
                            on_edit,
                            on_delete,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn UserRow(
    user: UserRecord,
    on_edit: EventHandler<UserRecord>,
    on_delete: EventHandler<UserRecord>,
) -> Element {
    let initial = user
        .name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();
    let avatar_class = format!("avatar avatar-{}", user.gender.as_str());
    let chip_class = format!("chip chip-{}", user.gender.as_str());
    let gender_label = user.gender.label();
    let birth_date = display_birth_date(&user.birth_date);
    let edit_user = user.clone();
    let delete_user = user.clone();

    rsx! {
        tr {
            td {
                div {
                    class: "name-cell",
                    span { class: "{avatar_class}", "{initial}" }
                    "{user.name}"
                }
            }
            td { {dash(&user.national_id)} }
            td { "{user.email}" }
            td { "{user.phone}" }
            td {
                span {
                    class: "{chip_class}",
                    "{gender_label}"
                }
            }
            td { {dash(&user.postal_code)} }
            td { "{birth_date}" }
            td {
                class: "row-actions",
                button {
                    class: "icon-button edit",
                    title: "Edit",
                    onclick: move |_| on_edit.call(edit_user.clone()),
                    Icon { icon: FaPenToSquare, width: 14, height: 14 }
                }
                button {
                    class: "icon-button delete",
                    title: "Delete",
                    onclick: move |_| on_delete.call(delete_user.clone()),
                    Icon { icon: FaTrashCan, width: 14, height: 14 }
                }
            }
        }
    }
}

fn dash(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}
