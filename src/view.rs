//! The fully derived dashboard view.
//!
//! A reload builds the complete `DashboardView` from the fetched payload
//! before any render side effect runs. If anything fails earlier, no chart
//! or table is touched and the previous render survives intact.

use thiserror::Error;

use crate::api_client::forecast::ForecastPayload;
use crate::metrics::accuracy_from_mape;
use crate::series::{align_backtest, align_forecast, AlignedForecast, BacktestView};

/// Pre-flight checks for a reload, evaluated before any network call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReloadError {
    #[error("Please choose a site")]
    NoSite,
    #[error("A load is already in progress")]
    Busy,
}

/// Rejects a reload while another is in flight, then requires a site id.
pub fn check_reload(site: &str, busy: bool) -> Result<(), ReloadError> {
    if busy {
        return Err(ReloadError::Busy);
    }
    if site.trim().is_empty() {
        return Err(ReloadError::NoSite);
    }
    Ok(())
}

/// One forecast table row: a horizon date with both model values. A missing
/// value renders as "-".
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub date: String,
    pub rf: Option<f64>,
    pub sx: Option<f64>,
}

/// Everything one render pass needs, aligned and derived up front.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub site: String,
    pub forecast: AlignedForecast,
    pub backtest: BacktestView,
    pub accuracy_rf: Option<f64>,
    pub accuracy_sx: Option<f64>,
    pub rmse_rf: Option<f64>,
    pub rmse_sx: Option<f64>,
    pub backtest_window: u32,
    pub table_rows: Vec<TableRow>,
}

/// Runs the aligner and the metric derivation over a fetched payload.
///
/// Infallible by design: malformed corners degrade (empty backtest view,
/// null-padded short series, N/A metrics) instead of aborting the reload.
pub fn build_view(payload: &ForecastPayload) -> DashboardView {
    let history = &payload.history;
    let rf = &payload.forecast.rf;
    let sx = &payload.forecast.sx;

    // The horizon axis is shared between models; rf carries it.
    let forecast = align_forecast(
        &history.dates,
        &history.values,
        &rf.dates,
        &rf.values,
        &sx.values,
    );

    let bt = &payload.backtest;
    let backtest = align_backtest(&bt.dates, &bt.y_true, &bt.rf_pred, &bt.sx_pred);

    let table_rows = rf
        .dates
        .iter()
        .enumerate()
        .map(|(i, date)| TableRow {
            date: date.clone(),
            rf: rf.values.get(i).copied(),
            sx: sx.values.get(i).copied(),
        })
        .collect();

    DashboardView {
        site: payload.site.clone(),
        forecast,
        backtest,
        accuracy_rf: accuracy_from_mape(bt.metrics.random_forest.mape),
        accuracy_sx: accuracy_from_mape(bt.metrics.sarimax.mape),
        rmse_rf: bt.metrics.random_forest.rmse,
        rmse_sx: bt.metrics.sarimax.rmse,
        backtest_window: bt.k,
        table_rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_client::forecast::{
        BacktestData, BacktestMetrics, ForecastModels, ModelMetrics, SeriesData,
    };

    fn sample_payload() -> ForecastPayload {
        ForecastPayload {
            site: "example.com".to_string(),
            history: SeriesData {
                dates: vec!["2024-01-01".into(), "2024-01-02".into(), "2024-01-03".into()],
                values: vec![100.0, 110.0, 105.0],
            },
            forecast: ForecastModels {
                rf: SeriesData {
                    dates: vec!["2024-01-04".into(), "2024-01-05".into()],
                    values: vec![108.0, 112.0],
                },
                sx: SeriesData {
                    dates: vec!["2024-01-04".into(), "2024-01-05".into()],
                    values: vec![102.0, 104.0],
                },
            },
            backtest: BacktestData {
                k: 2,
                dates: vec!["2024-01-02".into(), "2024-01-03".into()],
                y_true: vec![110.0, 105.0],
                rf_pred: vec![Some(109.0), None],
                sx_pred: vec![Some(111.5), Some(104.0)],
                metrics: BacktestMetrics {
                    random_forest: ModelMetrics {
                        mape: Some(0.1234),
                        rmse: Some(9.8),
                    },
                    sarimax: ModelMetrics {
                        mape: None,
                        rmse: None,
                    },
                },
            },
        }
    }

    #[test]
    fn test_check_reload_guards() {
        assert_eq!(check_reload("", false), Err(ReloadError::NoSite));
        assert_eq!(check_reload("   ", false), Err(ReloadError::NoSite));
        assert_eq!(check_reload("example.com", true), Err(ReloadError::Busy));
        assert_eq!(check_reload("example.com", false), Ok(()));
    }

    #[test]
    fn test_build_view_aligns_and_derives() {
        let view = build_view(&sample_payload());

        assert_eq!(view.forecast.labels.len(), 5);
        assert_eq!(view.forecast.history.len(), 5);
        assert_eq!(view.backtest.actual, vec![110.0, 105.0]);
        assert_eq!(view.accuracy_rf, Some(87.66));
        assert_eq!(view.accuracy_sx, None);
        assert_eq!(view.rmse_rf, Some(9.8));
        assert_eq!(view.backtest_window, 2);
    }

    #[test]
    fn test_build_view_table_rows_follow_the_horizon() {
        let view = build_view(&sample_payload());

        assert_eq!(view.table_rows.len(), 2);
        assert_eq!(view.table_rows[0].date, "2024-01-04");
        assert_eq!(view.table_rows[0].rf, Some(108.0));
        assert_eq!(view.table_rows[0].sx, Some(102.0));
    }

    #[test]
    fn test_build_view_short_sx_series_leaves_gaps() {
        let mut payload = sample_payload();
        payload.forecast.sx.values.truncate(1);

        let view = build_view(&payload);

        assert_eq!(view.forecast.sx, vec![None, None, None, Some(102.0), None]);
        assert_eq!(view.table_rows[1].sx, None);
    }
}
