use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::detail_view::LoadGeneration;
use crate::system::remote::ClientProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());

    // One client for the page lifetime; views read it from context
    provide_context(ClientProvider::new());

    // Shared by every detail view mounted into the work area
    provide_context(LoadGeneration::new());

    view! {
        <AppShell />
    }
}
