use pizza_service::config::PizzaConfig;
use pizza_service::services::metrics::init_metrics;
use pizza_service::services::providers::openai::read_api_key;
use pizza_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = PizzaConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    init_tracing(
        "pizza-service",
        &config.common.log_level,
        config.observability.otlp_endpoint.as_deref(),
    );
    init_metrics();

    if read_api_key(&config.openai.api_key_var).is_err() {
        tracing::warn!(
            var = %config.openai.api_key_var,
            "API key not set; classification requests will fail until it is"
        );
    }

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await
}
