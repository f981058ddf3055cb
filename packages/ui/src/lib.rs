//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod registry;
pub use registry::make_registry;

mod navbar;
pub use navbar::Navbar;

mod user_table;
pub use user_table::UserTable;

mod user_form_modal;
pub use user_form_modal::UserFormModal;

mod confirm_dialog;
pub use confirm_dialog::ConfirmDialog;
