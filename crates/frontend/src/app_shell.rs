//! Application shell
//!
//! - `AppShell`: configuration gate (spinner, error panel or `MainLayout`)
//! - `MainLayout`: Shell + Sidebar + work area driven by `AppGlobalContext::view`

use crate::domain::a001_purchase::ui::details::PurchaseDetail;
use crate::domain::a001_purchase::ui::list::PurchaseList;
use crate::domain::a002_sale::ui::details::SaleDetail;
use crate::domain::a002_sale::ui::list::SaleList;
use crate::layout::global_context::{AppGlobalContext, AppView};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::shared::list_placeholder::ListPlaceholder;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_HOME};
use crate::system::remote::ClientProvider;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[derive(Debug, Clone, PartialEq)]
enum Bootstrap {
    Pending,
    Ready,
    Failed(String),
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <PageFrame page_id="home--home" category=PAGE_CAT_HOME>
            <div class="page__header">
                <h1 class="page__title">"Bienvenido"</h1>
            </div>
            <div class="page__content">
                <p>"Seleccione una sección en el menú lateral."</p>
            </div>
        </PageFrame>
    }
}

fn work_area(view: AppView) -> AnyView {
    match view {
        AppView::Home => view! { <HomePage /> }.into_any(),
        AppView::Purchases => view! { <PurchaseList /> }.into_any(),
        AppView::PurchaseDetail(id) => view! { <PurchaseDetail id=id /> }.into_any(),
        AppView::Sales => view! { <SaleList /> }.into_any(),
        AppView::SaleDetail(id) => view! { <SaleDetail id=id /> }.into_any(),
        AppView::Clients => {
            view! { <ListPlaceholder page_id="clients--list" title="Clientes" /> }.into_any()
        }
        AppView::Products => {
            view! { <ListPlaceholder page_id="products--list" title="Productos" /> }.into_any()
        }
        AppView::Suppliers => {
            view! { <ListPlaceholder page_id="suppliers--list" title="Proveedores" /> }.into_any()
        }
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || view! { {move || work_area(ctx.view.get())} }.into_any()
        />
    }
}

/// Renders the layout only once the remote client is configured
#[component]
pub fn AppShell() -> impl IntoView {
    let provider =
        leptos::context::use_context::<ClientProvider>().expect("ClientProvider not found");
    // A remount after the first bootstrap skips the spinner
    let status = RwSignal::new(if provider.is_initialized() {
        Bootstrap::Ready
    } else {
        Bootstrap::Pending
    });

    if status.get_untracked() == Bootstrap::Pending {
        spawn_local(async move {
            match provider.initialize().await {
                Ok(_) => status.set(Bootstrap::Ready),
                Err(e) => status.set(Bootstrap::Failed(e.to_string())),
            }
        });
    }

    move || match status.get() {
        Bootstrap::Pending => view! {
            <Flex gap=FlexGap::Small style="align-items:center;padding:var(--spacing-4xl);justify-content:center;">
                <Spinner />
                <span>"Cargando configuración..."</span>
            </Flex>
        }
        .into_any(),
        Bootstrap::Ready => view! { <MainLayout /> }.into_any(),
        Bootstrap::Failed(message) => view! {
            <div class="alert alert-danger" role="alert" style="margin:var(--spacing-lg);">
                <h4 class="alert-heading">"No se pudo iniciar el panel"</h4>
                <p>{message}</p>
            </div>
        }
        .into_any(),
    }
}
