use leptos::prelude::*;

use crate::layout::global_context::AppView;
use crate::shared::list_placeholder::ListPlaceholder;

#[component]
pub fn PurchaseList() -> impl IntoView {
    view! {
        <ListPlaceholder
            page_id="a001_purchase--list"
            title="Compras"
            open_detail=AppView::PurchaseDetail
        />
    }
}
