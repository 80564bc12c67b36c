use yew::prelude::*;

use super::LoadedSummary;
use crate::metrics::format_accuracy;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub summary: Option<LoadedSummary>,
}

/// Three stat cards: both model accuracies and the backtest window. Before
/// the first load they show placeholders.
#[function_component(StatsRow)]
pub fn stats_row(props: &Props) -> Html {
    let (acc_rf, acc_sx, rmse_rf, rmse_sx, window) = match &props.summary {
        Some(s) => (
            format_accuracy(s.accuracy_rf),
            format_accuracy(s.accuracy_sx),
            format_rmse(s.rmse_rf),
            format_rmse(s.rmse_sx),
            format!("{} days", s.backtest_window),
        ),
        None => (
            "--".to_string(),
            "--".to_string(),
            String::new(),
            String::new(),
            "--".to_string(),
        ),
    };

    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4 mb-6">
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"RandomForest Accuracy"}</div>
                    <div class="stat-value text-primary">{acc_rf}</div>
                    <div class="stat-desc">{rmse_rf}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"SARIMAX Accuracy"}</div>
                    <div class="stat-value text-secondary">{acc_sx}</div>
                    <div class="stat-desc">{rmse_sx}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Backtest Window"}</div>
                    <div class="stat-value">{window}</div>
                    <div class="stat-desc">{"one-step-ahead evaluation"}</div>
                </div>
            </div>
        </div>
    }
}

fn format_rmse(rmse: Option<f64>) -> String {
    match rmse {
        Some(v) => format!("RMSE {:.2}", v),
        None => "RMSE N/A".to_string(),
    }
}
