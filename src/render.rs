//! Chart and table render lifecycle.
//!
//! Three chart slots and one table slot, each holding at most one live
//! handle. A reload destroys the previous handle before creating the new one;
//! skipping the destroy would leave two plots bound to the same target div.
//! `RenderState` owns the handles and the injected backend, so tests run
//! against a recording fake instead of the Plotly global.

pub mod plotly;

use std::rc::Rc;

use serde_json::{json, Value};

use crate::series::{AlignedForecast, BacktestView};
use crate::view::{DashboardView, TableRow};

pub const FORECAST_CHART_ID: &str = "chart-forecast";
pub const BACKTEST_CHART_ID: &str = "chart-backtest";
pub const COMPARISON_CHART_ID: &str = "chart-comparison";
pub const FORECAST_TABLE_ID: &str = "tbl-forecast-body";

/// Create/destroy semantics of the charting and table collaborators.
///
/// A chart `spec` is a JSON object with `data`, `layout` and `config` keys,
/// already in the charting library's wire shape.
pub trait ChartBackend {
    fn create_chart(&self, target: &str, spec: &Value);
    fn destroy_chart(&self, target: &str);
    fn fill_table(&self, target: &str, rows: &[TableRow]);
    fn clear_table(&self, target: &str);
}

/// Opaque binding between one chart slot and its render target. Never
/// updated in place; always destroyed and rebuilt wholesale.
#[derive(Debug)]
struct ChartHandle {
    target: String,
}

#[derive(Debug)]
struct TableHandle {
    target: String,
}

/// Owns the live handles for the three chart slots and the table slot.
///
/// One instance lives for the whole app session; each successful reload
/// replaces every handle. A failed reload never reaches this type, so the
/// slots keep their last rendered state.
pub struct RenderState {
    backend: Rc<dyn ChartBackend>,
    forecast: Option<ChartHandle>,
    backtest: Option<ChartHandle>,
    comparison: Option<ChartHandle>,
    table: Option<TableHandle>,
}

impl RenderState {
    pub fn new(backend: Rc<dyn ChartBackend>) -> Self {
        Self {
            backend,
            forecast: None,
            backtest: None,
            comparison: None,
            table: None,
        }
    }

    /// Renders all three charts and the table from an already-built view.
    ///
    /// Runs strictly after fetch and derivation succeeded; within the pass,
    /// each slot is destroyed immediately before its re-create.
    pub fn render_all(&mut self, view: &DashboardView) {
        log::debug!("Rendering all slots for site: {}", view.site);

        rebuild_chart(
            &self.backend,
            &mut self.forecast,
            FORECAST_CHART_ID,
            forecast_chart_spec(&view.forecast),
        );
        rebuild_chart(
            &self.backend,
            &mut self.backtest,
            BACKTEST_CHART_ID,
            backtest_chart_spec(&view.backtest),
        );
        rebuild_chart(
            &self.backend,
            &mut self.comparison,
            COMPARISON_CHART_ID,
            comparison_chart_spec(view.accuracy_rf, view.accuracy_sx),
        );

        if let Some(prev) = self.table.take() {
            self.backend.clear_table(&prev.target);
        }
        self.backend.fill_table(FORECAST_TABLE_ID, &view.table_rows);
        self.table = Some(TableHandle {
            target: FORECAST_TABLE_ID.to_string(),
        });
    }
}

fn rebuild_chart(
    backend: &Rc<dyn ChartBackend>,
    slot: &mut Option<ChartHandle>,
    target: &str,
    spec: Value,
) {
    if let Some(prev) = slot.take() {
        backend.destroy_chart(&prev.target);
    }
    backend.create_chart(target, &spec);
    *slot = Some(ChartHandle {
        target: target.to_string(),
    });
}

/// History plus both model forecasts on the shared padded axis. The `None`
/// paddings serialize to JSON nulls, which the chart draws as gaps.
pub fn forecast_chart_spec(f: &AlignedForecast) -> Value {
    json!({
        "data": [
            {
                "x": f.labels, "y": f.history,
                "type": "scatter", "mode": "lines",
                "name": "History",
                "line": {"width": 2}
            },
            {
                "x": f.labels, "y": f.rf,
                "type": "scatter", "mode": "lines",
                "name": "RF Forecast",
                "line": {"width": 2, "dash": "dash"}
            },
            {
                "x": f.labels, "y": f.sx,
                "type": "scatter", "mode": "lines",
                "name": "SARIMAX Forecast",
                "line": {"width": 2, "dash": "dot"}
            }
        ],
        "layout": {
            "margin": {"t": 10, "r": 10, "l": 50, "b": 40},
            "hovermode": "x unified",
            "legend": {"orientation": "h", "y": -0.2},
            "xaxis": {"showgrid": false},
            "yaxis": {"showgrid": true, "gridcolor": "#eee"}
        },
        "config": {"responsive": true, "displayModeBar": false}
    })
}

/// Actual vs. one-step predictions over the backtest window; no padding, the
/// three series already share the axis.
pub fn backtest_chart_spec(b: &BacktestView) -> Value {
    json!({
        "data": [
            {
                "x": b.labels, "y": b.actual,
                "type": "scatter", "mode": "lines",
                "name": "Actual",
                "line": {"width": 2}
            },
            {
                "x": b.labels, "y": b.rf,
                "type": "scatter", "mode": "lines",
                "name": "RF (one-step)",
                "line": {"width": 2, "dash": "dash"}
            },
            {
                "x": b.labels, "y": b.sx,
                "type": "scatter", "mode": "lines",
                "name": "SARIMAX (one-step)",
                "line": {"width": 2, "dash": "dot"}
            }
        ],
        "layout": {
            "margin": {"t": 10, "r": 10, "l": 50, "b": 40},
            "hovermode": "x unified",
            "legend": {"orientation": "h", "y": -0.2},
            "xaxis": {"showgrid": false},
            "yaxis": {"showgrid": true, "gridcolor": "#eee"}
        },
        "config": {"responsive": true, "displayModeBar": false}
    })
}

/// Accuracy bars per model. An undefined accuracy stays a JSON null bar with
/// an "N/A" hover, never a zero-height bar pretending to be data.
pub fn comparison_chart_spec(accuracy_rf: Option<f64>, accuracy_sx: Option<f64>) -> Value {
    let hover = |acc: Option<f64>| match acc {
        Some(v) => format!("Accuracy: {v}%"),
        None => "N/A".to_string(),
    };

    json!({
        "data": [
            {
                "x": ["RandomForest", "SARIMAX"],
                "y": [accuracy_rf, accuracy_sx],
                "type": "bar",
                "name": "Accuracy (%)",
                "hovertext": [hover(accuracy_rf), hover(accuracy_sx)],
                "hoverinfo": "text",
                "marker": {"color": ["#2563eb", "#f59e0b"]}
            }
        ],
        "layout": {
            "margin": {"t": 10, "r": 10, "l": 50, "b": 40},
            "showlegend": true,
            "legend": {"orientation": "h", "y": -0.2},
            "yaxis": {
                "rangemode": "tozero",
                "title": {"text": "Accuracy (%)"},
                "gridcolor": "#eee"
            }
        },
        "config": {"responsive": true, "displayModeBar": false}
    })
}
