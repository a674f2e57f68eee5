//! PageFrame: standard root wrapper for every page in the work area.
//!
//! Sets `id` (`"{entity}--{category}"`, e.g. `"a001_purchase--list"`) and
//! `data-page-category` on the root element.

use leptos::prelude::*;

/// List of records
pub const PAGE_CAT_LIST: &str = "list";
/// Landing page
pub const PAGE_CAT_HOME: &str = "home";

#[component]
pub fn PageFrame(
    page_id: &'static str,
    /// `PAGE_CAT_LIST` or `PAGE_CAT_HOME`
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_HOME => "page page--home",
        _ => "page",
    };

    view! {
        <div
            id=page_id
            class=class
            data-page-category=category
        >
            {children()}
        </div>
    }
}
