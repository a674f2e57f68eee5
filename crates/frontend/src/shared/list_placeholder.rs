use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::{AppGlobalContext, AppView};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

/// Section page without a listing yet; optionally opens a record by id
#[component]
pub fn ListPlaceholder(
    page_id: &'static str,
    title: &'static str,
    /// Detail view for a typed id; `None` hides the field
    #[prop(optional)]
    open_detail: Option<fn(String) -> AppView>,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let record_id = RwSignal::new(String::new());

    let open = move || {
        let Some(to_view) = open_detail else {
            return;
        };
        let id = record_id.get_untracked().trim().to_string();
        if !id.is_empty() {
            ctx.navigate(to_view(id));
        }
    };

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                </div>
                {open_detail.is_some().then(|| view! {
                    <div class="page__header-right">
                        <div style="width: 280px;">
                            <Input value=record_id placeholder="Identificador" />
                        </div>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| open()
                        >
                            "Ver detalle"
                        </Button>
                    </div>
                })}
            </div>
            <div class="page__content">
                <p class="text-muted">"Listado no disponible en esta versión."</p>
            </div>
        </PageFrame>
    }
}
