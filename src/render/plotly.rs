//! Production backend: the Plotly JS global plus a plain DOM table body.

use serde_json::Value;
use wasm_bindgen::prelude::*;

use super::ChartBackend;
use crate::view::TableRow;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot)]
    fn new_plot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);

    #[wasm_bindgen(js_namespace = Plotly)]
    fn purge(div_id: &str);
}

pub struct PlotlyBackend;

impl ChartBackend for PlotlyBackend {
    fn create_chart(&self, target: &str, spec: &Value) {
        let data = to_js(&spec["data"]);
        let layout = to_js(&spec["layout"]);
        let config = to_js(&spec["config"]);
        new_plot(target, data, layout, config);
    }

    fn destroy_chart(&self, target: &str) {
        // Releases the previous plot's binding to the div; without this the
        // re-created chart stacks on top of the old one.
        purge(target);
    }

    fn fill_table(&self, target: &str, rows: &[TableRow]) {
        let Some(tbody) = element_by_id(target) else {
            log::warn!("table target #{} not found, skipping fill", target);
            return;
        };

        let mut html = String::new();
        for row in rows {
            html.push_str(&format!(
                "<tr><td>{}</td><td class=\"text-right\">{}</td><td class=\"text-right\">{}</td></tr>",
                row.date,
                format_cell(row.rf),
                format_cell(row.sx),
            ));
        }
        tbody.set_inner_html(&html);
    }

    fn clear_table(&self, target: &str) {
        if let Some(tbody) = element_by_id(target) {
            tbody.set_inner_html("");
        }
    }
}

fn format_cell(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "-".to_string(),
    }
}

/// Specs are JSON-stringified and re-parsed on the JS side so nested objects
/// arrive as plain objects, which is what Plotly expects.
fn to_js(value: &Value) -> JsValue {
    let raw = value.to_string();
    js_sys::JSON::parse(&raw).unwrap_or(JsValue::NULL)
}

fn element_by_id(id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cell() {
        assert_eq!(format_cell(Some(115.0)), "115.00");
        assert_eq!(format_cell(Some(112.345)), "112.35");
        assert_eq!(format_cell(None), "-");
    }
}
