//! Sidebar with the dashboard sections

use crate::layout::global_context::{AppGlobalContext, AppView};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    label: &'static str,
    icon: &'static str,
    target: AppView,
}

fn get_menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem { label: "Inicio", icon: "home", target: AppView::Home },
        MenuItem { label: "Compras", icon: "purchases", target: AppView::Purchases },
        MenuItem { label: "Ventas", icon: "sales", target: AppView::Sales },
        MenuItem { label: "Clientes", icon: "customers", target: AppView::Clients },
        MenuItem { label: "Productos", icon: "products", target: AppView::Products },
        MenuItem { label: "Proveedores", icon: "suppliers", target: AppView::Suppliers },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-sidebar__content">
            {get_menu_items().into_iter().map(|item| {
                let target = StoredValue::new(item.target);
                view! {
                    <div
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || {
                            ctx.view.with(|v| v.section() == target.get_value())
                        }
                        style:padding-left="12px"
                        on:click=move |_| ctx.navigate(target.get_value())
                    >
                        <div class="app-sidebar__item-content">
                            {icon(item.icon)}
                            <span>{item.label}</span>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
