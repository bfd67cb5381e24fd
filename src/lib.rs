use actix_web::{dev::Server, web, App, HttpServer};
use anyhow::{Context, Result};
use tracing::info;
use utils::logger;

use crate::{
    infrastructure::{repo_activity::ActivityStore, seed},
    presentation::activity,
    settings::{load_settings, Settings},
};

pub mod application;
pub mod domain;
pub mod infrastructure;
mod presentation;

pub mod http;
pub mod settings;

pub fn build_http_server(settings: &settings::HttpServer, store: ActivityStore) -> Result<Server> {
    info!(?settings, "building http server. Powered by actix-web!");

    let store = web::Data::new(store);
    let static_dir = settings.static_dir.clone();
    let server: Server = HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .configure(presentation::config)
            .configure(activity::config)
            .configure(presentation::static_files(static_dir.clone()))
            .route("/ping", web::get().to(http_ping))
    })
    .bind((&*settings.bind, settings.port))
    .with_context(|| format!("bind {}:{}", settings.bind, settings.port))?
    .run();

    Ok(server)
}

pub async fn http_ping() -> &'static str {
    "pong"
}

pub async fn init_global() -> Result<(&'static Settings, ActivityStore)> {
    let settings = load_settings().context("load settings")?;
    logger::init(&settings.log)?;

    let store = seed::load(settings.registry.seed_file.as_deref())
        .await
        .context("seed activities")?;

    info!(activities = store.len(), "global environment loaded");
    Ok((settings, store))
}

#[cfg(test)]
mod test {
    use actix_web::test::{self, TestRequest};

    use super::*;

    #[actix_web::test]
    async fn ping() {
        let app = test::init_service(App::new().route("/ping", web::get().to(http_ping))).await;
        let body = test::call_and_read_body(&app, TestRequest::get().uri("/ping").to_request()).await;
        assert_eq!(body, "pong");
    }
}
