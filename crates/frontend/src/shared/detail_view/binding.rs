//! Writes a view-model into the installed markup fragment

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use super::entity::DetailAction;
use super::view::{DetailView, SlotValue, TableRows};
use crate::layout::global_context::AppView;

const INVOICE_PAGE: &str = "/factura.html";

/// Printable invoice page for a sale
pub fn invoice_url(sale_id: &str) -> String {
    format!("{}?venta={}", INVOICE_PAGE, urlencoding::encode(sale_id))
}

fn find(root: &Element, id: &str) -> Option<Element> {
    root.query_selector(&format!("[id=\"{}\"]", id)).ok().flatten()
}

/// Fill every slot and table body; returns the number of ids not present in the fragment
pub fn bind_view<V: DetailView>(root: &Element, view: &V) -> usize {
    let Some(document) = root.owner_document() else {
        return 0;
    };
    let mut missing = 0;

    for (id, value) in view.slots() {
        let Some(element) = find(root, id) else {
            log::warn!("slot #{} not found in fragment", id);
            missing += 1;
            continue;
        };
        element.set_text_content(Some(value.as_text()));
        if let SlotValue::Badge { tone, .. } = &value {
            element.set_class_name(tone.css_class());
        }
    }

    for (id, table) in view.tables() {
        let Some(body) = find(root, id) else {
            log::warn!("table body #{} not found in fragment", id);
            missing += 1;
            continue;
        };
        match fill_table(&document, &body, table) {
            Ok(()) => log::debug!("#{}: {} rows", id, table.rendered_row_count()),
            Err(e) => log::error!("failed to fill #{}: {:?}", id, e),
        }
    }

    missing
}

fn fill_table(document: &Document, body: &Element, table: &TableRows) -> Result<(), JsValue> {
    body.set_inner_html("");

    if let Some((colspan, text)) = table.placeholder() {
        let tr = document.create_element("tr")?;
        let td = document.create_element("td")?;
        td.set_attribute("colspan", &colspan.to_string())?;
        td.set_class_name("text-center text-muted");
        td.set_text_content(Some(text));
        tr.append_child(&td)?;
        body.append_child(&tr)?;
        return Ok(());
    }

    for row in &table.rows {
        let tr = document.create_element("tr")?;
        for cell in row {
            let td = document.create_element("td")?;
            if cell.numeric {
                td.set_class_name("text-end");
            }
            td.set_text_content(Some(&cell.text));
            tr.append_child(&td)?;
        }
        body.append_child(&tr)?;
    }
    Ok(())
}

/// Wire action buttons; the listeners live as long as the fragment
pub fn attach_actions<N>(root: &Element, actions: &[DetailAction], navigate: N)
where
    N: Fn(AppView) + Clone + 'static,
{
    for action in actions {
        let (button_id, handler): (&str, Box<dyn FnMut(web_sys::Event)>) = match action {
            DetailAction::BackToList { button_id, target } => {
                let target = target.clone();
                let navigate = navigate.clone();
                (
                    button_id,
                    Box::new(move |_| navigate(target.clone())),
                )
            }
            DetailAction::PrintInvoice { button_id, id } => {
                let url = invoice_url(id);
                (
                    button_id,
                    Box::new(move |_| {
                        if let Some(window) = web_sys::window() {
                            if let Err(e) = window.open_with_url_and_target(&url, "_blank") {
                                log::error!("failed to open {}: {:?}", url, e);
                            }
                        }
                    }),
                )
            }
        };

        let Some(button) = find(root, button_id) else {
            log::warn!("action button #{} not found in fragment", button_id);
            continue;
        };
        let closure = Closure::wrap(handler);
        if let Err(e) =
            button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        {
            log::error!("failed to attach #{}: {:?}", button_id, e);
        }
        closure.forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_url_encodes_id() {
        assert_eq!(invoice_url("S1"), "/factura.html?venta=S1");
        assert_eq!(invoice_url("a b&c"), "/factura.html?venta=a%20b%26c");
    }
}
