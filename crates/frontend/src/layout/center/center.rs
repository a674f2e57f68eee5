use crate::shared::detail_view::http_backend::MOUNT_CONTAINER_ID;
use leptos::prelude::*;

/// Work area; detail views are mounted inside it
#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <main id=MOUNT_CONTAINER_ID data-zone="center" style="flex: 1; overflow: auto;">
            {children()}
        </main>
    }
}
