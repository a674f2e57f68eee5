use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::binding::{attach_actions, bind_view};
use super::entity::{DetailAction, DetailEntity};
use super::fallback::FallbackPanel;
use super::http_backend::{ElementMount, HttpDetailBackend};
use super::loader::{DetailLoader, DetailState, LoadGeneration, LoadOutcome};
use crate::layout::global_context::{AppGlobalContext, AppView};
use crate::system::remote::{session_storage, ClientProvider};

/// Drop the stale session and start over from the login flow
fn reload_after_session_expiry(provider: &ClientProvider) {
    if let Some(client) = provider.client() {
        session_storage::clear_session(client.url());
    }
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().reload() {
            log::error!("reload failed: {:?}", e);
        }
    }
}

fn back_target<E: DetailEntity>(id: &str) -> AppView {
    E::actions(id)
        .into_iter()
        .find_map(|action| match action {
            DetailAction::BackToList { target, .. } => Some(target),
            _ => None,
        })
        .unwrap_or(AppView::Home)
}

/// Load and render the detail view of entity `E` into the work area
pub fn detail_host<E: DetailEntity>(id: String) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let provider = use_context::<ClientProvider>().expect("ClientProvider not found");
    let generation = use_context::<LoadGeneration>().expect("LoadGeneration not found");

    let state = RwSignal::new(DetailState::<E::View>::Idle);
    let fragment_ref = NodeRef::<leptos::html::Div>::new();
    let back = back_target::<E>(&id);

    {
        let provider = provider.clone();
        let generation = generation.clone();
        let id = id.clone();
        spawn_local(async move {
            let loader = DetailLoader::<E, _, _>::new(
                HttpDetailBackend::new(provider),
                ElementMount::work_area(),
                generation,
            );
            match loader.load(&id, move |s| { let _ = state.try_set(s); }).await {
                Ok(LoadOutcome::Failed(kind)) => {
                    log::debug!("{} {} ended with {:?}", E::NAME, id, kind)
                }
                Ok(_) => {}
                Err(e) => log::error!("{}", e),
            }
        });
    }

    on_cleanup(move || generation.invalidate());

    let markup = Memo::new(move |_| {
        state.with(|s| match s {
            DetailState::Installed { markup } | DetailState::Rendered { markup, .. } => {
                Some(markup.clone())
            }
            _ => None,
        })
    });

    // Runs after the fragment's inner_html was applied
    Effect::new(move |_| {
        let DetailState::Rendered { view, actions, .. } = state.get() else {
            return;
        };
        let Some(root) = fragment_ref.get() else {
            return;
        };
        let missing = bind_view(&root, &view);
        if missing > 0 {
            log::warn!("{}: {} ids missing from {}", E::NAME, missing, E::MARKUP_PATH);
        }
        attach_actions(&root, &actions, move |target| ctx.navigate(target));
    });

    {
        let provider = provider.clone();
        Effect::new(move |_| {
            let delay = state.with(|s| match s {
                DetailState::Failed(panel) => panel.reload_after_ms(),
                _ => None,
            });
            if let Some(ms) = delay {
                let provider = provider.clone();
                spawn_local(async move {
                    TimeoutFuture::new(ms).await;
                    reload_after_session_expiry(&provider);
                });
            }
        });
    }

    view! {
        <div class="detail-host">
            {move || match state.get() {
                DetailState::Failed(panel) => fallback_view(panel, back.clone(), ctx).into_any(),
                s if s.is_loading() => view! {
                    <Flex gap=FlexGap::Small style="align-items:center;padding:var(--spacing-4xl);justify-content:center;">
                        <Spinner />
                        <span>"Cargando..."</span>
                    </Flex>
                }.into_any(),
                // Idle also covers a load aborted on a missing mount container
                _ => ().into_any(),
            }}
            <div
                node_ref=fragment_ref
                class="detail-fragment"
                inner_html=move || markup.get().unwrap_or_default()
            ></div>
        </div>
    }
}

fn fallback_view(panel: FallbackPanel, back: AppView, ctx: AppGlobalContext) -> impl IntoView {
    let tone = match panel {
        FallbackPanel::PermissionDenied => "alert alert-warning",
        FallbackPanel::SessionExpired { .. } => "alert alert-info",
        FallbackPanel::Generic { .. } => "alert alert-danger",
    };
    let show_back = panel.has_back_action();

    view! {
        <div class=tone role="alert" style="margin:var(--spacing-lg);">
            <h4 class="alert-heading">{panel.title()}</h4>
            <p>{panel.body()}</p>
            {show_back.then(|| view! {
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| ctx.navigate(back.clone())
                >
                    "Volver"
                </Button>
            })}
        </div>
    }
}
