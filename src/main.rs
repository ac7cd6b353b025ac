use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpRequest, HttpResponse, HttpServer, Responder};
use rust_embed::RustEmbed;
use sketchlab::api::{configure_routes, AppState};
use sketchlab::storage::SqlitePromptStore;
use sketchlab::{banner, config};
use std::borrow::Cow;
use std::sync::Arc;

#[derive(RustEmbed)]
#[folder = "static/"]
struct StaticAssets;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    banner::print_banner();

    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Warning: could not load .env file: {}", e);
    }

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let app_config = match config::AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    // The prompt store is optional: without it the frontend simply keeps
    // prompts in localStorage.
    let prompt_store = match SqlitePromptStore::init().await {
        Ok(store) => Some(Arc::new(store) as Arc<dyn sketchlab::storage::PromptStore>),
        Err(e) => {
            log::warn!("Prompt store unavailable, continuing without it: {}", e);
            None
        }
    };

    let port = app_config.port;
    let state = AppState::new(app_config, prompt_store);

    log::info!("Starting server on http://127.0.0.1:{}", port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
            .route("/{_:.*}", web::get().to(static_file_handler))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}

async fn static_file_handler(req: HttpRequest) -> impl Responder {
    let path = if req.path() == "/" {
        "index.html"
    } else {
        // trim leading '/'
        &req.path()[1..]
    };

    match StaticAssets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(Cow::into_owned(content.data))
        }
        None => HttpResponse::NotFound().body("404 Not Found"),
    }
}
