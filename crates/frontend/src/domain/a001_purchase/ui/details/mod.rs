pub mod binding;
pub mod view_model;

use contracts::domain::a001_purchase::aggregate::{
    PurchaseDetail as PurchaseAggregate, RPC_PURCHASE_DETAIL, RPC_PURCHASE_ID_PARAM,
};
use leptos::prelude::*;

use crate::layout::global_context::AppView;
use crate::shared::detail_view::host::detail_host;
use crate::shared::detail_view::{DetailAction, DetailEntity, EnvelopeShape};
use view_model::PurchaseDetailVm;

pub struct PurchaseEntity;

impl DetailEntity for PurchaseEntity {
    type Aggregate = PurchaseAggregate;
    type View = PurchaseDetailVm;

    const NAME: &'static str = "compra";
    const MARKUP_PATH: &'static str = "/views/compras-detalle.html";
    const RPC_FUNCTION: &'static str = RPC_PURCHASE_DETAIL;
    const ID_PARAM: &'static str = RPC_PURCHASE_ID_PARAM;
    const ENVELOPE: EnvelopeShape = EnvelopeShape::Plain;

    fn render(aggregate: PurchaseAggregate) -> PurchaseDetailVm {
        PurchaseDetailVm::from_aggregate(&aggregate)
    }

    fn actions(_id: &str) -> Vec<DetailAction> {
        vec![DetailAction::BackToList {
            button_id: binding::BACK_BUTTON,
            target: AppView::Purchases,
        }]
    }
}

#[component]
pub fn PurchaseDetail(id: String) -> impl IntoView {
    detail_host::<PurchaseEntity>(id)
}
