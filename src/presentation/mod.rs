use std::{collections::HashSet, path::PathBuf};

use actix_files::Files;
use actix_web::web::{self, Json};

use crate::http::CodeDoc;

pub mod activity;

pub const INDEX_PAGE: &str = "/static/index.html";

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/doc").route(web::get().to(doc)))
        .service(web::redirect("/", INDEX_PAGE));
}

/// Serves the front end from `dir` under `/static`.
pub fn static_files(dir: PathBuf) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.service(Files::new("/static", dir).index_file("index.html"));
    }
}

pub async fn doc() -> Json<Vec<CodeDoc>> {
    let mut doc = activity::err_list();

    let mut uniques = HashSet::new();
    doc.retain(|d| uniques.insert(d.code));

    Json(doc)
}
