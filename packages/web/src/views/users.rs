use dioxus::prelude::*;

use store::{Field, FormSession, RegistryError, UserRecord};
use ui::icons::{FaPlus, FaUserPlus};
use ui::{make_registry, ConfirmDialog, Icon, Navbar, UserFormModal, UserTable};

/// The registry screen: summary header, user table, and the create/edit and
/// delete-confirmation dialogs.
#[component]
pub fn Users() -> Element {
    let mut users = use_signal(Vec::<UserRecord>::new);
    let mut session = use_signal(FormSession::new);
    let mut missing = use_signal(Vec::<Field>::new);
    let mut pending_delete = use_signal(|| Option::<UserRecord>::None);

    // Hydrate the collection from the slot on mount. A corrupt slot starts
    // empty; the next successful save rewrites it.
    let _loader = use_resource(move || async move {
        let mut registry = make_registry();
        if let Err(err) = registry.hydrate().await {
            tracing::warn!("starting with an empty registry: {err}");
        }
        users.set(registry.list().to_vec());
    });

    let handle_new = move |_| {
        missing.set(Vec::new());
        session.write().open_for_create();
    };

    let handle_edit = move |record: UserRecord| {
        missing.set(Vec::new());
        session.write().open_for_edit(&record);
    };

    let handle_cancel = move |_| {
        missing.set(Vec::new());
        session.write().cancel();
    };

    let handle_save = move |_| {
        spawn(async move {
            let mut registry = make_registry();
            if let Err(err) = registry.hydrate().await {
                tracing::warn!("starting with an empty registry: {err}");
            }
            let mut active = session();
            match active.commit(&mut registry).await {
                Ok(_) => {
                    users.set(registry.list().to_vec());
                    missing.set(Vec::new());
                    session.set(active);
                }
                Err(RegistryError::Validation { missing: fields }) => {
                    missing.set(fields);
                }
                Err(err) => {
                    tracing::error!("failed to save user: {err}");
                }
            }
        });
    };

    let request_delete = move |record: UserRecord| {
        pending_delete.set(Some(record));
    };

    let handle_delete_confirmed = move |_| {
        let Some(record) = pending_delete() else {
            return;
        };
        spawn(async move {
            let mut registry = make_registry();
            if let Err(err) = registry.hydrate().await {
                tracing::warn!("starting with an empty registry: {err}");
            }
            match registry.delete(&record.id).await {
                Ok(()) => users.set(registry.list().to_vec()),
                Err(err) => tracing::error!("failed to delete user: {err}"),
            }
            pending_delete.set(None);
        });
    };

    let total = users().len();
    let confirm_dialog = pending_delete().map(|record| {
        rsx! {
            ConfirmDialog {
                message: format!("Are you sure you want to delete {}?", record.name),
                on_confirm: handle_delete_confirmed,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    });

    rsx! {
        div {
            class: "app-shell",
            Navbar {}

            main {
                class: "content",
                div {
                    class: "panel",
                    div {
                        class: "panel-heading",
                        Icon { icon: FaUserPlus, width: 18, height: 18 }
                        h1 { "User management" }
                    }
                    hr { class: "divider" }

                    div {
                        class: "panel-toolbar",
                        p {
                            "Total registered users: "
                            strong { "{total}" }
                        }
                        button {
                            class: "primary",
                            onclick: handle_new,
                            Icon { icon: FaPlus, width: 14, height: 14 }
                            "New user"
                        }
                    }

                    UserTable {
                        users: users(),
                        on_edit: handle_edit,
                        on_delete: request_delete,
                    }
                }
            }

            footer {
                class: "footer",
                p { "User Registry" }
            }

            if session().is_open() {
                UserFormModal {
                    session,
                    missing: missing(),
                    on_save: handle_save,
                    on_cancel: handle_cancel,
                }
            }
            {confirm_dialog}
        }
    }
}
