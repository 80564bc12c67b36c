//! Accuracy derivation from backtest error metrics.
//!
//! The server reports MAPE as a fraction (0.1234 means 12.34% error). The
//! dashboard shows it as an accuracy percentage. A missing metric stays
//! missing and renders as "N/A", never as zero.

/// Rounds to two decimals, half-up on the hundredths digit.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// `accuracy = 100 - MAPE * 100`, rounded; `None` stays `None`.
pub fn accuracy_from_mape(mape: Option<f64>) -> Option<f64> {
    mape.map(|m| round2(100.0 - m * 100.0))
}

/// Display form of an accuracy value; absent values render as "N/A".
pub fn format_accuracy(accuracy: Option<f64>) -> String {
    match accuracy {
        Some(v) => format!("{v}%"),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_from_mape() {
        assert_eq!(accuracy_from_mape(Some(0.1234)), Some(87.66));
        assert_eq!(accuracy_from_mape(Some(0.0)), Some(100.0));
        assert_eq!(accuracy_from_mape(None), None);
    }

    #[test]
    fn test_accuracy_can_go_negative_for_bad_models() {
        // MAPE above 1.0 happens for genuinely bad forecasts; the derivation
        // does not clamp.
        assert_eq!(accuracy_from_mape(Some(1.5)), Some(-50.0));
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round2(2.718), 2.72);
        assert_eq!(round2(87.66), 87.66);
    }

    #[test]
    fn test_format_accuracy() {
        assert_eq!(format_accuracy(Some(87.66)), "87.66%");
        assert_eq!(format_accuracy(Some(100.0)), "100%");
        assert_eq!(format_accuracy(None), "N/A");
    }
}
