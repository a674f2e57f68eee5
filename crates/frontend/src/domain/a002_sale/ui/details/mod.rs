pub mod binding;
pub mod view_model;

use contracts::domain::a002_sale::aggregate::{
    SaleDetail as SaleAggregate, RPC_SALE_DETAIL, RPC_SALE_ID_PARAM,
};
use leptos::prelude::*;

use crate::layout::global_context::AppView;
use crate::shared::detail_view::host::detail_host;
use crate::shared::detail_view::{DetailAction, DetailEntity, EnvelopeShape};
use view_model::SaleDetailVm;

pub struct SaleEntity;

impl DetailEntity for SaleEntity {
    type Aggregate = SaleAggregate;
    type View = SaleDetailVm;

    const NAME: &'static str = "venta";
    const MARKUP_PATH: &'static str = "/views/ventas-detalle.html";
    const RPC_FUNCTION: &'static str = RPC_SALE_DETAIL;
    const ID_PARAM: &'static str = RPC_SALE_ID_PARAM;
    const ENVELOPE: EnvelopeShape = EnvelopeShape::Wrapped;

    fn render(aggregate: SaleAggregate) -> SaleDetailVm {
        SaleDetailVm::from_aggregate(&aggregate)
    }

    fn actions(id: &str) -> Vec<DetailAction> {
        vec![
            DetailAction::BackToList {
                button_id: binding::BACK_BUTTON,
                target: AppView::Sales,
            },
            DetailAction::PrintInvoice {
                button_id: binding::PRINT_BUTTON,
                id: id.to_string(),
            },
        ]
    }
}

#[component]
pub fn SaleDetail(id: String) -> impl IntoView {
    detail_host::<SaleEntity>(id)
}
