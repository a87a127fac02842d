use crate::cli::ServeArgs;
use crate::infra::{load_seed, sample_coaches, sample_requests, AppState, InMemoryProfileStore};
use crate::routes::with_match_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use skillbridge::config::AppConfig;
use skillbridge::error::AppError;
use skillbridge::matching::{CoachMatchingService, GeminiClient, MatchingConfig};
use skillbridge::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(config.environment, &config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store = Arc::new(InMemoryProfileStore::default());
    match args.seed.take() {
        Some(path) => {
            let seed = load_seed(&path)?;
            info!(
                coaches = seed.coaches.len(),
                requests = seed.requests.len(),
                seed_file = %path.display(),
                "loaded profile seed"
            );
            store.insert_coaches(seed.coaches);
            for (id, profile) in seed.requests {
                store.insert_request(id, profile);
            }
        }
        None => {
            store.insert_coaches(sample_coaches());
            for (id, profile) in sample_requests() {
                store.insert_request(id, profile);
            }
        }
    }

    if config.gemini.api_key.is_none() {
        warn!("GEMINI_API_KEY is not set; match responses will carry fallback reasoning");
    }

    let matching_config = MatchingConfig {
        explanation_timeout: config.gemini.timeout(),
        ..MatchingConfig::default()
    };
    let explainer = Arc::new(GeminiClient::new(&config.gemini));
    let matching_service = Arc::new(CoachMatchingService::new(store, explainer, matching_config));

    let app = with_match_routes(matching_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "coach matching service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
