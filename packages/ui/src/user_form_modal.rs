use dioxus::prelude::*;

use store::{Field, FormSession, Gender};

/// Modal create/edit form over the active [`FormSession`].
///
/// Every keystroke in a maskable field goes through
/// [`FormSession::change_field`], so the input always shows the canonical
/// punctuated value. `missing` marks the fields a failed commit reported.
#[component]
pub fn UserFormModal(
    session: Signal<FormSession>,
    missing: Vec<Field>,
    on_save: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let current = session();
    let draft = current.draft().clone();
    let title = if current.is_editing() {
        "Edit user"
    } else {
        "New user"
    };
    let gender_options = Gender::ALL.map(|g| (g.as_str(), g.label()));
    let missing_labels = missing
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ");

    rsx! {
        div {
            class: "dialog-overlay",
            div {
                class: "dialog user-form",
                h2 { class: "dialog-title", "{title}" }

                h3 { class: "form-section", "Personal information" }
                div {
                    class: "form-grid",
                    div {
                        class: "form-field",
                        label { r#for: "user-name", "Full name" }
                        input {
                            id: "user-name",
                            r#type: "text",
                            class: if missing.contains(&Field::Name) { "invalid" },
                            value: "{draft.name}",
                            oninput: move |evt: FormEvent| {
                                session.write().change_field(Field::Name, &evt.value());
                            },
                        }
                    }
                    div {
                        class: "form-field",
                        label { r#for: "user-national-id", "National ID" }
                        input {
                            id: "user-national-id",
                            r#type: "text",
                            class: if missing.contains(&Field::NationalId) { "invalid" },
                            placeholder: "000.000.000-00",
                            maxlength: "14",
                            value: "{draft.national_id}",
                            oninput: move |evt: FormEvent| {
                                session.write().change_field(Field::NationalId, &evt.value());
                            },
                        }
                    }
                    div {
                        class: "form-field",
                        label { r#for: "user-email", "Email" }
                        input {
                            id: "user-email",
                            r#type: "email",
                            class: if missing.contains(&Field::Email) { "invalid" },
                            value: "{draft.email}",
                            oninput: move |evt: FormEvent| {
                                session.write().change_field(Field::Email, &evt.value());
                            },
                        }
                    }
                    div {
                        class: "form-field",
                        label { r#for: "user-phone", "Phone" }
                        input {
                            id: "user-phone",
                            r#type: "text",
                            class: if missing.contains(&Field::Phone) { "invalid" },
                            placeholder: "(00) 00000-0000",
                            maxlength: "15",
                            value: "{draft.phone}",
                            oninput: move |evt: FormEvent| {
                                session.write().change_field(Field::Phone, &evt.value());
                            },
                        }
                    }
                }

                h3 { class: "form-section", "Additional details" }
                div {
                    class: "form-grid",
                    div {
                        class: "form-field",
                        label { r#for: "user-gender", "Gender" }
                        select {
                            id: "user-gender",
                            class: if missing.contains(&Field::Gender) { "invalid" },
                            value: "{draft.gender}",
                            onchange: move |evt| {
                                session.write().change_field(Field::Gender, &evt.value());
                            },
                            option { value: "", "Select..." }
                            for (value, label) in gender_options {
                                option {
                                    key: "{value}",
                                    value: value,
                                    "{label}"
                                }
                            }
                        }
                    }
                    div {
                        class: "form-field",
                        label { r#for: "user-postal-code", "Postal code" }
                        input {
                            id: "user-postal-code",
                            r#type: "text",
                            class: if missing.contains(&Field::PostalCode) { "invalid" },
                            placeholder: "00000-000",
                            maxlength: "9",
                            value: "{draft.postal_code}",
                            oninput: move |evt: FormEvent| {
                                session.write().change_field(Field::PostalCode, &evt.value());
                            },
                        }
                    }
                    div {
                        class: "form-field",
                        label { r#for: "user-birth-date", "Birth date" }
                        input {
                            id: "user-birth-date",
                            r#type: "date",
                            class: if missing.contains(&Field::BirthDate) { "invalid" },
                            value: "{draft.birth_date}",
                            oninput: move |evt: FormEvent| {
                                session.write().change_field(Field::BirthDate, &evt.value());
                            },
                        }
                    }
                }

                if !missing.is_empty() {
                    p {
                        class: "form-error",
                        "Fill in the highlighted fields: {missing_labels}"
                    }
                }

                div {
                    class: "form-actions",
                    button {
                        class: "secondary",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "primary",
                        onclick: move |_| on_save.call(()),
                        "Save"
                    }
                }
            }
        }
    }
}
