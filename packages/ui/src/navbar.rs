use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaUsers;
use dioxus_free_icons::Icon;

/// Top application bar.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        header {
            class: "navbar",
            Icon { icon: FaUsers, width: 18, height: 18 }
            span { class: "navbar-title", "User Registry" }
        }
    }
}
