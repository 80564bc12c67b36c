mod site_picker;
mod stats;

use std::rc::Rc;

use chrono::Local;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api_client::forecast;
use crate::common::loading::BusyOverlay;
use crate::common::toast::ToastContext;
use crate::render::plotly::PlotlyBackend;
use crate::render::{
    RenderState, BACKTEST_CHART_ID, COMPARISON_CHART_ID, FORECAST_CHART_ID, FORECAST_TABLE_ID,
};
use crate::view::{self, ReloadError};

use site_picker::SitePicker;
use stats::StatsRow;

/// Summary of the last successful reload, shown in the stats row and the
/// caption. Charts and table live outside Yew's vdom (see `RenderState`).
#[derive(Clone, PartialEq)]
pub struct LoadedSummary {
    pub site: String,
    pub loaded_at: String,
    pub accuracy_rf: Option<f64>,
    pub accuracy_sx: Option<f64>,
    pub rmse_rf: Option<f64>,
    pub rmse_sx: Option<f64>,
    pub backtest_window: u32,
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let toast_ctx = use_context::<ToastContext>().unwrap();
    let selected_site = use_state(String::new);
    let loading = use_state(|| false);
    let training = use_state(|| false);
    let loaded = use_state(|| None::<LoadedSummary>);
    let render_state = use_mut_ref(|| RenderState::new(Rc::new(PlotlyBackend)));

    let on_select = {
        let selected_site = selected_site.clone();
        Callback::from(move |site: String| {
            log::debug!("Site selected: {}", site);
            selected_site.set(site);
        })
    };

    // Reload orchestration: guard, fetch, build the full view, then render.
    // Render runs only after the complete payload and every derived value is
    // in hand, so a failure anywhere leaves the previous charts untouched.
    let on_load = {
        let selected_site = selected_site.clone();
        let loading = loading.clone();
        let loaded = loaded.clone();
        let render_state = render_state.clone();
        let toast_ctx = toast_ctx.clone();

        Callback::from(move |_| {
            let site = (*selected_site).clone();
            if let Err(err) = view::check_reload(&site, *loading) {
                log::debug!("Reload rejected: {}", err);
                match &err {
                    ReloadError::Busy => toast_ctx.show_info(err.to_string()),
                    ReloadError::NoSite => toast_ctx.show_error(err.to_string()),
                }
                return;
            }

            loading.set(true);
            let loading = loading.clone();
            let loaded = loaded.clone();
            let render_state = render_state.clone();
            let toast_ctx = toast_ctx.clone();

            spawn_local(async move {
                match forecast::get_forecast(&site).await {
                    Ok(payload) => {
                        let dash = view::build_view(&payload);
                        render_state.borrow_mut().render_all(&dash);
                        loaded.set(Some(LoadedSummary {
                            site: dash.site.clone(),
                            loaded_at: Local::now().format("%H:%M:%S").to_string(),
                            accuracy_rf: dash.accuracy_rf,
                            accuracy_sx: dash.accuracy_sx,
                            rmse_rf: dash.rmse_rf,
                            rmse_sx: dash.rmse_sx,
                            backtest_window: dash.backtest_window,
                        }));
                        toast_ctx.show_success("Forecast loaded".to_string());
                    }
                    Err(e) => {
                        log::error!("Forecast reload failed: {}", e);
                        toast_ctx.show_error("Failed to load forecast".to_string());
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_train = {
        let training = training.clone();
        let toast_ctx = toast_ctx.clone();

        Callback::from(move |_| {
            if *training {
                return;
            }
            training.set(true);
            let training = training.clone();
            let toast_ctx = toast_ctx.clone();

            spawn_local(async move {
                match forecast::train_all().await {
                    Ok(res) => {
                        toast_ctx.show_success(format!("Trained {} sites", res.trained));
                    }
                    Err(e) => {
                        log::error!("Training failed: {}", e);
                        toast_ctx.show_error("Training failed".to_string());
                    }
                }
                training.set(false);
            });
        })
    };

    // Export is a plain navigation download; the browser handles the rest.
    let on_export = {
        let selected_site = selected_site.clone();
        let toast_ctx = toast_ctx.clone();

        Callback::from(move |_| {
            let site = (*selected_site).clone();
            if site.trim().is_empty() {
                toast_ctx.show_error("Please choose a site".to_string());
                return;
            }
            let url = forecast::export_csv_url(&site);
            log::debug!("Navigating to CSV export: {}", url);
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(&url) {
                    log::error!("Export navigation failed: {:?}", e);
                }
            }
        })
    };

    html! {
        <>
            if *loading {
                <BusyOverlay text={"Loading forecast..."} />
            } else if *training {
                <BusyOverlay text={"Training all sites..."} />
            }

            <div class="card bg-base-100 shadow mb-6">
                <div class="card-body">
                    <div class="flex flex-col md:flex-row md:items-end gap-4">
                        <SitePicker selected={(*selected_site).clone()} on_select={on_select} />
                        <div class="flex gap-2">
                            <button
                                class={classes!("btn", "btn-primary", if *loading { "btn-disabled" } else { "" })}
                                onclick={on_load}
                            >
                                <i class="fas fa-play"></i>
                                {" Load Forecast"}
                            </button>
                            <button
                                class={classes!("btn", if *training { "btn-disabled" } else { "" })}
                                onclick={on_train}
                            >
                                <i class="fas fa-dumbbell"></i>
                                {" Train All Sites"}
                            </button>
                            <button class="btn btn-outline" onclick={on_export}>
                                <i class="fas fa-file-csv"></i>
                                {" Export CSV"}
                            </button>
                        </div>
                    </div>
                    if let Some(summary) = &*loaded {
                        <p class="text-sm text-gray-500 mt-2">
                            {format!("Loaded {} at {}", summary.site, summary.loaded_at)}
                        </p>
                    }
                </div>
            </div>

            <StatsRow summary={(*loaded).clone()} />

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"History + 30-Day Forecast"}</h2>
                        <div id={FORECAST_CHART_ID} class="chart-container" style="height: 360px;"></div>
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Backtest (one-step-ahead)"}</h2>
                        <div id={BACKTEST_CHART_ID} class="chart-container" style="height: 360px;"></div>
                    </div>
                </div>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 mt-6">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Model Accuracy"}</h2>
                        <div id={COMPARISON_CHART_ID} class="chart-container" style="height: 320px;"></div>
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Forecast Values"}</h2>
                        <div class="overflow-x-auto max-h-80 overflow-y-auto">
                            <table class="table table-sm table-zebra">
                                <thead class="sticky top-0 bg-base-100">
                                    <tr>
                                        <th>{"Date"}</th>
                                        <th class="text-right">{"RF Forecast"}</th>
                                        <th class="text-right">{"SARIMAX Forecast"}</th>
                                    </tr>
                                </thead>
                                <tbody id={FORECAST_TABLE_ID}>
                                </tbody>
                            </table>
                        </div>
                    </div>
                </div>
            </div>
        </>
    }
}
