use serde::{Deserialize, Serialize};

use crate::api_client;

/// One raw series as the server sends it: parallel date and value arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesData {
    pub dates: Vec<String>,
    pub values: Vec<f64>,
}

/// Forecasts over the shared horizon, one per competing model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastModels {
    pub rf: SeriesData,
    pub sx: SeriesData,
}

/// Per-model backtest error metrics. Either metric is null when the model
/// produced no usable predictions over the window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    #[serde(rename = "MAPE")]
    pub mape: Option<f64>,
    #[serde(rename = "RMSE")]
    pub rmse: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestMetrics {
    #[serde(rename = "RandomForest")]
    pub random_forest: ModelMetrics,
    #[serde(rename = "SARIMAX")]
    pub sarimax: ModelMetrics,
}

/// One-step-ahead evaluation over the last `k` days of history. Predictions
/// are nullable per step (a model can fail on individual refits).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestData {
    pub k: u32,
    pub dates: Vec<String>,
    pub y_true: Vec<f64>,
    pub rf_pred: Vec<Option<f64>>,
    pub sx_pred: Vec<Option<f64>>,
    pub metrics: BacktestMetrics,
}

/// The complete forecast payload for one site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPayload {
    pub site: String,
    pub history: SeriesData,
    pub forecast: ForecastModels,
    pub backtest: BacktestData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteEntry {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainAllResponse {
    pub status: String,
    pub trained: u32,
}

/// Lists known sites, optionally filtered by a substring query.
pub async fn get_sites(query: &str) -> Result<Vec<SiteEntry>, String> {
    let url = if query.is_empty() {
        "/sites".to_string()
    } else {
        format!("/sites?q={}", encode_component(query))
    };

    log::trace!("Fetching site list (query={:?})", query);
    let result = api_client::get::<Vec<SiteEntry>>(&url).await;

    if let Err(ref e) = result {
        log::error!("Failed to fetch site list: {}", e);
    }

    result
}

/// Fetches history, both model forecasts and the backtest for a site.
pub async fn get_forecast(site: &str) -> Result<ForecastPayload, String> {
    log::trace!("Fetching forecast payload for site: {}", site);

    let url = format!("/forecast?site={}", encode_component(site));
    let result = api_client::get::<ForecastPayload>(&url).await;

    if let Err(ref e) = result {
        log::error!("Failed to fetch forecast for {}: {}", site, e);
    } else {
        log::info!("Successfully fetched forecast for site: {}", site);
    }

    result
}

/// Kicks off training for every site on the server; responds with a count.
pub async fn train_all() -> Result<TrainAllResponse, String> {
    log::trace!("Triggering training for all sites");
    api_client::post::<TrainAllResponse>("/train_all").await
}

/// URL for the CSV download; the caller navigates to it rather than
/// fetching.
pub fn export_csv_url(site: &str) -> String {
    api_client::endpoint_url(&format!("/export_csv?site={}", encode_component(site)))
}

fn encode_component(raw: &str) -> String {
    js_sys::encode_uri_component(raw).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_payload_matches_server_shape() {
        let body = r#"{
            "site": "example.com",
            "history": {"dates": ["2024-01-01", "2024-01-02"], "values": [120, 130]},
            "forecast": {
                "rf": {"dates": ["2024-01-03"], "values": [140.5]},
                "sx": {"dates": ["2024-01-03"], "values": [138.2]}
            },
            "backtest": {
                "k": 2,
                "dates": ["2024-01-01", "2024-01-02"],
                "y_true": [120, 130],
                "rf_pred": [118.4, null],
                "sx_pred": [121.0, 128.8],
                "metrics": {
                    "RandomForest": {"MAPE": 0.1234, "RMSE": 10.5},
                    "SARIMAX": {"MAPE": null, "RMSE": null}
                }
            }
        }"#;

        let payload: ForecastPayload = serde_json::from_str(body).unwrap();

        assert_eq!(payload.site, "example.com");
        assert_eq!(payload.history.values, vec![120.0, 130.0]);
        assert_eq!(payload.forecast.rf.dates, vec!["2024-01-03"]);
        assert_eq!(payload.backtest.rf_pred, vec![Some(118.4), None]);
        assert_eq!(payload.backtest.metrics.random_forest.mape, Some(0.1234));
        assert_eq!(payload.backtest.metrics.sarimax.mape, None);
    }

    #[test]
    fn test_train_all_response_shape() {
        let resp: TrainAllResponse =
            serde_json::from_str(r#"{"status": "ok", "trained": 12}"#).unwrap();
        assert_eq!(resp.trained, 12);
    }
}
