#[cfg(test)]
mod integration_tests {
    use crate::schemas::{ApiResponse, ErrorResponse, HealthResponse};
    use crate::test_utils::test_utils::{setup_test_app, TestArtifacts};
    use axum::http::{header, StatusCode};
    use axum_test::TestServer;
    use common::{
        ArtifactStatus, Availability, DashboardOptions, DashboardView, DetailSection, ForecastModel, SectionView,
        Selection, Ticker, FOOTER_TEXT, READY_BANNER,
    };

    const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nfake-image";

    fn server(artifacts: &TestArtifacts) -> TestServer {
        TestServer::new(setup_test_app(artifacts)).unwrap()
    }

    async fn dashboard(server: &TestServer, ticker: &str, model: &str) -> DashboardView {
        let response = server
            .get("/api/v1/dashboard")
            .add_query_param("ticker", ticker)
            .add_query_param("model", model)
            .await;
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<DashboardView> = response.json();
        assert!(body.success);
        body.data
    }

    #[tokio::test]
    async fn test_health_check() {
        let artifacts = TestArtifacts::new();
        let server = server(&artifacts);

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.artifacts, "available");
    }

    #[tokio::test]
    async fn test_options_lists_tickers_models_and_footer() {
        let artifacts = TestArtifacts::new();
        let server = server(&artifacts);

        let response = server.get("/api/v1/options").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<DashboardOptions> = response.json();
        assert_eq!(body.data.tickers, vec![Ticker::Tcs, Ticker::Infy, Ticker::Itc, Ticker::Aapl]);
        assert_eq!(
            body.data.models,
            vec![ForecastModel::Lstm, ForecastModel::Gru, ForecastModel::Prophet]
        );
        assert_eq!(body.data.default_selection, Selection::new(Ticker::Tcs, ForecastModel::Lstm));
        assert_eq!(body.data.footer, FOOTER_TEXT);
    }

    #[tokio::test]
    async fn test_dashboard_with_no_artifacts_warns_and_completes() {
        let artifacts = TestArtifacts::new();
        let server = server(&artifacts);

        let view = dashboard(&server, "INFY", "Prophet").await;

        assert_eq!(view.selection, Selection::new(Ticker::Infy, ForecastModel::Prophet));
        assert_eq!(view.comparison, SectionView::warning("Plot not found for this stock."));
        match &view.detail {
            DetailSection::Forecast(SectionView::Warning { .. }) => {}
            other => panic!("expected forecast warning, got {:?}", other),
        }
        assert_eq!(view.status_banner, READY_BANNER);
    }

    #[tokio::test]
    async fn test_dashboard_prophet_preview_shows_last_twenty_rows() {
        let artifacts = TestArtifacts::new();
        artifacts.write_plot(Ticker::Tcs, PNG_BYTES);
        artifacts.write_prophet_forecast(Ticker::Tcs, 45);
        let server = server(&artifacts);

        let view = dashboard(&server, "TCS", "Prophet").await;

        let image = view.comparison.content().expect("comparison plot should be ready");
        assert_eq!(image.ticker, Ticker::Tcs);
        assert_eq!(image.size_bytes, PNG_BYTES.len() as u64);

        let preview = match &view.detail {
            DetailSection::Forecast(SectionView::Ready { content }) => content,
            other => panic!("expected forecast preview, got {:?}", other),
        };
        assert_eq!(preview.columns, vec!["ds", "yhat", "yhat_lower", "yhat_upper"]);
        assert_eq!(preview.total_rows, 45);
        assert_eq!(preview.rows.len(), 20);
        // Row 44 is the last one written
        assert_eq!(preview.rows[19], vec!["2025-02-17", "244.5", "234.25", "254.75"]);
        assert_eq!(preview.date_column, "ds");
        assert_eq!(preview.value_column, "yhat");
        assert_eq!(preview.file_name, "prophet_TCS_forecast.csv");
    }

    #[tokio::test]
    async fn test_dashboard_excluded_combination_reports_error() {
        let artifacts = TestArtifacts::new();
        artifacts.write_plot(Ticker::Aapl, PNG_BYTES);
        // Present on disk but still excluded
        artifacts.write_prophet_forecast(Ticker::Aapl, 5);
        let server = server(&artifacts);

        let view = dashboard(&server, "AAPL", "Prophet").await;

        assert!(view.comparison.is_ready());
        assert_eq!(
            view.detail,
            DetailSection::Forecast(SectionView::error(
                "Prophet model not available for AAPL due to file errors."
            ))
        );
        assert_eq!(view.status_banner, READY_BANNER);
    }

    #[tokio::test]
    async fn test_dashboard_malformed_forecast_reports_load_error() {
        let artifacts = TestArtifacts::new();
        artifacts.write_forecast(Ticker::Itc, "ds,yhat\n2025-01-01,not-a-number\n");
        let server = server(&artifacts);

        let view = dashboard(&server, "ITC", "Prophet").await;

        match &view.detail {
            DetailSection::Forecast(SectionView::Error { message }) => {
                assert!(message.starts_with("Prophet CSV Load Error: "), "{}", message);
            }
            other => panic!("expected forecast error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_dashboard_neural_model_charts_last_hundred_points() {
        let artifacts = TestArtifacts::new();
        artifacts.write_model(Ticker::Tcs, ForecastModel::Gru);
        artifacts.write_arrays(Ticker::Tcs, 150);
        let server = server(&artifacts);

        let view = dashboard(&server, "TCS", "GRU").await;

        let chart = match &view.detail {
            DetailSection::Prediction(SectionView::Ready { content }) => content,
            other => panic!("expected prediction chart, got {:?}", other),
        };
        assert_eq!(chart.model, ForecastModel::Gru);
        assert_eq!(chart.total_points, 150);
        assert_eq!(chart.points.len(), 100);
        assert_eq!(chart.points[0].index, 50);
        assert_eq!(chart.points[0].actual, 52.0);
        assert!(chart.points.iter().all(|p| p.actual == p.predicted));
        assert_eq!(chart.points[99].index, 149);
    }

    #[tokio::test]
    async fn test_dashboard_neural_model_without_model_file_warns() {
        let artifacts = TestArtifacts::new();
        artifacts.write_arrays(Ticker::Infy, 10);
        let server = server(&artifacts);

        let view = dashboard(&server, "INFY", "LSTM").await;

        match &view.detail {
            DetailSection::Prediction(SectionView::Warning { message }) => {
                assert!(message.contains("INFY_lstm.onnx"), "{}", message);
            }
            other => panic!("expected prediction warning, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_dashboard_switching_selection_does_not_leak_sections() {
        let artifacts = TestArtifacts::new();
        artifacts.write_plot(Ticker::Tcs, PNG_BYTES);
        artifacts.write_prophet_forecast(Ticker::Tcs, 3);
        let server = server(&artifacts);

        let first = dashboard(&server, "TCS", "Prophet").await;
        assert!(first.comparison.is_ready());

        let second = dashboard(&server, "ITC", "LSTM").await;
        assert_eq!(second.selection, Selection::new(Ticker::Itc, ForecastModel::Lstm));
        assert!(!second.comparison.is_ready());
        assert!(matches!(second.detail, DetailSection::Prediction(_)));
    }

    #[tokio::test]
    async fn test_dashboard_rejects_unknown_ticker() {
        let artifacts = TestArtifacts::new();
        let server = server(&artifacts);

        let response = server
            .get("/api/v1/dashboard")
            .add_query_param("ticker", "MSFT")
            .add_query_param("model", "LSTM")
            .expect_failure()
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_dashboard_rejects_unknown_model() {
        let artifacts = TestArtifacts::new();
        let server = server(&artifacts);

        let response = server
            .get("/api/v1/dashboard")
            .add_query_param("ticker", "TCS")
            .add_query_param("model", "ARIMA")
            .expect_failure()
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_availability_matrix() {
        let artifacts = TestArtifacts::new();
        artifacts.write_plot(Ticker::Itc, PNG_BYTES);
        artifacts.write_prophet_forecast(Ticker::Itc, 2);
        let server = server(&artifacts);

        let response = server.get("/api/v1/availability").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<Availability>> = response.json();
        assert_eq!(body.data.len(), 12);

        let find = |ticker, model| {
            body.data
                .iter()
                .find(|row| row.selection == Selection::new(ticker, model))
                .unwrap()
        };
        let itc_prophet = find(Ticker::Itc, ForecastModel::Prophet);
        assert_eq!(itc_prophet.comparison_image, ArtifactStatus::Present);
        assert_eq!(itc_prophet.detail, ArtifactStatus::Present);
        assert_eq!(find(Ticker::Aapl, ForecastModel::Prophet).detail, ArtifactStatus::Excluded);
        assert_eq!(find(Ticker::Tcs, ForecastModel::Lstm).detail, ArtifactStatus::Missing);
    }

    #[tokio::test]
    async fn test_comparison_plot_is_served_as_png() {
        let artifacts = TestArtifacts::new();
        artifacts.write_plot(Ticker::Infy, PNG_BYTES);
        let server = server(&artifacts);

        let response = server.get("/api/v1/plots/INFY").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.header(header::CONTENT_TYPE), "image/png");
        assert_eq!(response.as_bytes().as_ref(), PNG_BYTES);
    }

    #[tokio::test]
    async fn test_missing_comparison_plot_is_not_found() {
        let artifacts = TestArtifacts::new();
        let server = server(&artifacts);

        let response = server.get("/api/v1/plots/TCS").expect_failure().await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: ErrorResponse = response.json();
        assert_eq!(body.error, "Plot not found for this stock.");
        assert!(!body.success);
    }

    #[tokio::test]
    async fn test_forecast_download_matches_stored_table() {
        let artifacts = TestArtifacts::new();
        let stored = artifacts.write_prophet_forecast(Ticker::Infy, 30);
        let server = server(&artifacts);

        let response = server.get("/api/v1/forecasts/INFY/download").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(
            response.header(header::CONTENT_DISPOSITION),
            "attachment; filename=\"prophet_INFY_forecast.csv\""
        );
        assert_eq!(response.text(), stored);

        // Preview rows are exactly the tail of the download
        let view = dashboard(&server, "INFY", "Prophet").await;
        let preview = match &view.detail {
            DetailSection::Forecast(SectionView::Ready { content }) => content.clone(),
            other => panic!("expected forecast preview, got {:?}", other),
        };
        let downloaded: Vec<Vec<String>> = response
            .text()
            .lines()
            .skip(1)
            .map(|line| line.split(',').map(str::to_string).collect())
            .collect();
        assert_eq!(preview.rows, downloaded[downloaded.len() - 20..].to_vec());
    }

    #[tokio::test]
    async fn test_forecast_download_keeps_index_column_bytes() {
        let artifacts = TestArtifacts::new();
        let stored = ",ds,yhat,yhat_lower,yhat_upper\n0,2025-01-01,10.50,9.00,12.00\n1,2025-01-02,11.00,9.50,12.50\n";
        artifacts.write_forecast(Ticker::Itc, stored);
        let server = server(&artifacts);

        let response = server.get("/api/v1/forecasts/ITC/download").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.as_bytes().as_ref(), stored.as_bytes());
    }

    #[tokio::test]
    async fn test_forecast_download_refused_for_excluded_combination() {
        let artifacts = TestArtifacts::new();
        artifacts.write_prophet_forecast(Ticker::Aapl, 5);
        let server = server(&artifacts);

        let response = server.get("/api/v1/forecasts/AAPL/download").expect_failure().await;

        response.assert_status(StatusCode::CONFLICT);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "FORECAST_UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_forecast_download_missing_table_is_not_found() {
        let artifacts = TestArtifacts::new();
        let server = server(&artifacts);

        let response = server.get("/api/v1/forecasts/TCS/download").expect_failure().await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "FORECAST_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_forecast_download_malformed_table_is_unprocessable() {
        let artifacts = TestArtifacts::new();
        artifacts.write_forecast(Ticker::Tcs, "when,what\n2025-01-01,up\n");
        let server = server(&artifacts);

        let response = server.get("/api/v1/forecasts/TCS/download").expect_failure().await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: ErrorResponse = response.json();
        assert!(body.error.starts_with("Prophet CSV Load Error: "));
    }
}
