//! Shared-axis alignment for heterogeneous time series.
//!
//! History and forecast cover disjoint date ranges, so plotting them on one
//! chart needs a concatenated label axis with every series null-padded over
//! the segment it does not cover. Nulls keep "no data" visually distinct from
//! zero. Backtest series already share one axis and pass through unchanged.

/// Forecast overlay: history plus both model forecasts on one label axis.
///
/// Every value vector has length `labels.len()` == history length + horizon
/// length.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlignedForecast {
    pub labels: Vec<String>,
    pub history: Vec<Option<f64>>,
    pub rf: Vec<Option<f64>>,
    pub sx: Vec<Option<f64>>,
}

/// Backtest overlay: actual and per-model one-step predictions on the
/// backtest date axis. Predictions keep their per-step nulls (steps where a
/// model failed to produce a value).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BacktestView {
    pub labels: Vec<String>,
    pub actual: Vec<f64>,
    pub rf: Vec<Option<f64>>,
    pub sx: Vec<Option<f64>>,
}

/// Merges history and the two model forecasts onto one shared label axis.
///
/// The axis is history dates followed by horizon dates, in caller order (the
/// server emits both chronologically; nothing is sorted or de-duplicated).
/// The history series is null-padded over the horizon segment, each model
/// series over the history segment. A short or missing model series is
/// tail-padded so the length invariant holds even for malformed input.
pub fn align_forecast(
    hist_dates: &[String],
    hist_values: &[f64],
    horizon_dates: &[String],
    rf_values: &[f64],
    sx_values: &[f64],
) -> AlignedForecast {
    let h = hist_dates.len();
    let f = horizon_dates.len();

    let mut labels = Vec::with_capacity(h + f);
    labels.extend_from_slice(hist_dates);
    labels.extend_from_slice(horizon_dates);

    let mut history: Vec<Option<f64>> = hist_values.iter().take(h).copied().map(Some).collect();
    history.resize(h + f, None);

    AlignedForecast {
        labels,
        history,
        rf: pad_model_series(h, f, rf_values),
        sx: pad_model_series(h, f, sx_values),
    }
}

/// Null-fills the history segment, then the model's horizon values, then
/// tail nulls if the model came up short.
fn pad_model_series(h: usize, f: usize, values: &[f64]) -> Vec<Option<f64>> {
    let mut out = vec![None; h];
    out.extend(values.iter().take(f).copied().map(Some));
    out.resize(h + f, None);
    out
}

/// Identity pass-through for the backtest view.
///
/// All four inputs must already share one axis. On a length mismatch the
/// view degrades to empty rather than plotting misaligned series.
pub fn align_backtest(
    dates: &[String],
    y_true: &[f64],
    rf_pred: &[Option<f64>],
    sx_pred: &[Option<f64>],
) -> BacktestView {
    let n = dates.len();
    if y_true.len() != n || rf_pred.len() != n || sx_pred.len() != n {
        log::warn!(
            "backtest series lengths disagree (dates={}, y_true={}, rf={}, sx={}), dropping view",
            n,
            y_true.len(),
            rf_pred.len(),
            sx_pred.len()
        );
        return BacktestView::default();
    }

    BacktestView {
        labels: dates.to_vec(),
        actual: y_true.to_vec(),
        rf: rf_pred.to_vec(),
        sx: sx_pred.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dates(prefix: &str, n: usize) -> Vec<String> {
        (0..n).map(|i| format!("{}-{:02}", prefix, i + 1)).collect()
    }

    #[test]
    fn test_forecast_axis_and_series_lengths() {
        for (h, f) in [(0usize, 0usize), (0, 3), (5, 0), (5, 3), (30, 14)] {
            let hist_d = dates("2024-01", h);
            let hist_v: Vec<f64> = (0..h).map(|i| i as f64).collect();
            let hor_d = dates("2024-02", f);
            let rf: Vec<f64> = (0..f).map(|i| 100.0 + i as f64).collect();
            let sx: Vec<f64> = (0..f).map(|i| 200.0 + i as f64).collect();

            let aligned = align_forecast(&hist_d, &hist_v, &hor_d, &rf, &sx);

            assert_eq!(aligned.labels.len(), h + f);
            assert_eq!(aligned.history.len(), h + f);
            assert_eq!(aligned.rf.len(), h + f);
            assert_eq!(aligned.sx.len(), h + f);
        }
    }

    #[test]
    fn test_history_segment_keeps_values_and_horizon_is_null() {
        let hist_d = dates("2024-01", 4);
        let hist_v = vec![10.0, 11.0, 12.0, 13.0];
        let hor_d = dates("2024-02", 2);

        let aligned = align_forecast(&hist_d, &hist_v, &hor_d, &[20.0, 21.0], &[30.0, 31.0]);

        assert_eq!(
            aligned.history,
            vec![Some(10.0), Some(11.0), Some(12.0), Some(13.0), None, None]
        );
    }

    #[test]
    fn test_model_segment_is_null_over_history() {
        let hist_d = dates("2024-01", 3);
        let hist_v = vec![1.0, 2.0, 3.0];
        let hor_d = dates("2024-02", 2);

        let aligned = align_forecast(&hist_d, &hist_v, &hor_d, &[20.0, 21.0], &[30.0, 31.0]);

        assert_eq!(aligned.rf, vec![None, None, None, Some(20.0), Some(21.0)]);
        assert_eq!(aligned.sx, vec![None, None, None, Some(30.0), Some(31.0)]);
    }

    #[test]
    fn test_zero_length_horizon_yields_history_axis() {
        let hist_d = dates("2024-01", 3);
        let hist_v = vec![1.0, 2.0, 3.0];

        let aligned = align_forecast(&hist_d, &hist_v, &[], &[], &[]);

        assert_eq!(aligned.labels, hist_d);
        assert_eq!(aligned.history, vec![Some(1.0), Some(2.0), Some(3.0)]);
        assert_eq!(aligned.rf, vec![None, None, None]);
        assert_eq!(aligned.sx, vec![None, None, None]);
    }

    #[test]
    fn test_missing_model_series_is_tail_padded() {
        let hist_d = dates("2024-01", 2);
        let hor_d = dates("2024-02", 3);

        // sx missing entirely, rf shorter than the horizon
        let aligned = align_forecast(&hist_d, &[1.0, 2.0], &hor_d, &[9.0], &[]);

        assert_eq!(aligned.rf, vec![None, None, Some(9.0), None, None]);
        assert_eq!(aligned.sx, vec![None, None, None, None, None]);
    }

    #[test]
    fn test_backtest_passthrough_is_identity() {
        let d = dates("2024-03", 3);
        let y = vec![5.0, 6.0, 7.0];
        let rf = vec![Some(5.1), None, Some(6.9)];
        let sx = vec![Some(4.8), Some(6.2), Some(7.3)];

        let view = align_backtest(&d, &y, &rf, &sx);

        assert_eq!(view.labels, d);
        assert_eq!(view.actual, y);
        assert_eq!(view.rf, rf);
        assert_eq!(view.sx, sx);
    }

    #[test]
    fn test_backtest_length_mismatch_degrades_to_empty() {
        let d = dates("2024-03", 3);
        let view = align_backtest(&d, &[1.0, 2.0], &[None, None, None], &[None, None, None]);

        assert_eq!(view, BacktestView::default());
    }
}
