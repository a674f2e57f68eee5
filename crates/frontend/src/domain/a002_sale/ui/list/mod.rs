use leptos::prelude::*;

use crate::layout::global_context::AppView;
use crate::shared::list_placeholder::ListPlaceholder;

#[component]
pub fn SaleList() -> impl IntoView {
    view! {
        <ListPlaceholder
            page_id="a002_sale--list"
            title="Ventas"
            open_detail=AppView::SaleDetail
        />
    }
}
