use dioxus::prelude::*;
use ui::{views::SettingsView, Navbar};

#[component]
pub fn Settings() -> Element {
    rsx! {
        Navbar {}
        main {
            SettingsView {}
        }
    }
}
