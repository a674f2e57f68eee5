use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Content of the work area
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppView {
    #[default]
    Home,
    Purchases,
    PurchaseDetail(String),
    Sales,
    SaleDetail(String),
    Clients,
    Products,
    Suppliers,
}

/// Query-string form of an [`AppView`]: `?vista=compra&id=...`
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vista: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl AppView {
    pub fn to_query(&self) -> NavQuery {
        let (vista, id) = match self {
            AppView::Home => return NavQuery::default(),
            AppView::Purchases => ("compras", None),
            AppView::PurchaseDetail(id) => ("compra", Some(id.clone())),
            AppView::Sales => ("ventas", None),
            AppView::SaleDetail(id) => ("venta", Some(id.clone())),
            AppView::Clients => ("clientes", None),
            AppView::Products => ("productos", None),
            AppView::Suppliers => ("proveedores", None),
        };
        NavQuery {
            vista: Some(vista.to_string()),
            id,
        }
    }

    /// Unknown views and detail views without an id fall back to `Home`
    pub fn from_query(query: &NavQuery) -> Self {
        let id = query
            .id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string);
        match (query.vista.as_deref(), id) {
            (Some("compras"), _) => AppView::Purchases,
            (Some("compra"), Some(id)) => AppView::PurchaseDetail(id),
            (Some("ventas"), _) => AppView::Sales,
            (Some("venta"), Some(id)) => AppView::SaleDetail(id),
            (Some("clientes"), _) => AppView::Clients,
            (Some("productos"), _) => AppView::Products,
            (Some("proveedores"), _) => AppView::Suppliers,
            _ => AppView::Home,
        }
    }

    /// `?vista=...` suffix, empty for `Home`
    pub fn to_search(&self) -> String {
        let query = serde_qs::to_string(&self.to_query()).unwrap_or_default();
        if query.is_empty() {
            String::new()
        } else {
            format!("?{}", query)
        }
    }

    pub fn from_search(search: &str) -> Self {
        let query: NavQuery =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        Self::from_query(&query)
    }

    /// Sidebar entry highlighted for this view
    pub fn section(&self) -> AppView {
        match self {
            AppView::PurchaseDetail(_) => AppView::Purchases,
            AppView::SaleDetail(_) => AppView::Sales,
            other => other.clone(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub view: RwSignal<AppView>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            view: RwSignal::new(AppView::Home),
            left_open: RwSignal::new(true),
        }
    }

    pub fn navigate(&self, view: AppView) {
        log::debug!("navigate: {:?}", view);
        self.view.set(view);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    /// Restore the view from the address bar and keep the two in sync
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        self.view.set(AppView::from_search(&search));

        let this = *self;
        Effect::new(move |_| {
            let new_search = this.view.get().to_search();

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_search {
                if let Some(w) = window() {
                    let url = if new_search.is_empty() {
                        w.location().pathname().unwrap_or_else(|_| "/".to_string())
                    } else {
                        new_search
                    };
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_views_keep_their_id() {
        let view = AppView::PurchaseDetail("P1".to_string());
        assert_eq!(view.to_search(), "?vista=compra&id=P1");
        assert_eq!(AppView::from_search("?vista=compra&id=P1"), view);
        assert_eq!(
            AppView::from_search("?vista=venta&id=S1"),
            AppView::SaleDetail("S1".to_string())
        );
    }

    #[test]
    fn test_list_views() {
        assert_eq!(AppView::Sales.to_search(), "?vista=ventas");
        assert_eq!(AppView::from_search("vista=proveedores"), AppView::Suppliers);
        assert_eq!(AppView::Home.to_search(), "");
    }

    #[test]
    fn test_unknown_or_incomplete_query_goes_home() {
        assert_eq!(AppView::from_search(""), AppView::Home);
        assert_eq!(AppView::from_search("?vista=informes"), AppView::Home);
        assert_eq!(AppView::from_search("?vista=venta"), AppView::Home);
        assert_eq!(AppView::from_search("?vista=compra&id=%20"), AppView::Home);
    }

    #[test]
    fn test_section() {
        assert_eq!(
            AppView::SaleDetail("S1".to_string()).section(),
            AppView::Sales
        );
        assert_eq!(AppView::Clients.section(), AppView::Clients);
    }
}
