use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use resume_match::config::{LogFormat, Settings};
use resume_match::core::{keywords::DEFAULT_KEYWORD_LIMIT, AtsChecker, Matcher, SalaryModel, StopWords};
use resume_match::models::SalaryWeights;
use resume_match::routes::{self, AppState};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging, RUST_LOG takes precedence over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match settings.logging.log_format() {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
        LogFormat::Text => subscriber.init(),
    }

    info!("Starting Resume Match service...");

    // Stop-words are loaded once and shared read-only by every worker
    let stop_words = match &settings.stop_words.extra_path {
        Some(path) => match StopWords::load_extra(path) {
            Ok(stop_words) => stop_words,
            Err(e) => {
                error!("Failed to load stop-words: {}", e);
                std::process::exit(1);
            }
        },
        None => StopWords::english(),
    };

    info!("Stop-word set initialized ({} words)", stop_words.len());

    let keyword_limit = settings.matching.keyword_limit.unwrap_or(DEFAULT_KEYWORD_LIMIT);
    let salary_weights = SalaryWeights::from(&settings.salary);

    let app_state = AppState {
        matcher: Matcher::new(Arc::new(stop_words), keyword_limit),
        salary: SalaryModel::new(salary_weights),
        ats: AtsChecker::default(),
    };

    info!(
        "Matcher initialized (keyword limit: {}, salary weights: {:?})",
        keyword_limit, salary_weights
    );

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
