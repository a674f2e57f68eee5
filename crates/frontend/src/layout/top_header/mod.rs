//! Top bar: sidebar toggle and application title

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Ocultar navegación" } else { "Mostrar navegación" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Panel de Administración"</span>
            </div>
        </div>
    }
}
