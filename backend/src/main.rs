mod config;
mod services;
mod storage;

use crate::config::ServerConfig;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use common::catalog::{Catalog, CatalogError};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{error, info};
use mime_guess::from_path;
use std::io;
use std::path::Path;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the bundled builder UI. Unknown asset paths fall back to
/// `index.html`; unknown `/api` paths are a plain 404 so API clients never
/// receive HTML.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    embedded_response(&STATIC_DIR, req.path())
}

fn embedded_response(dir: &Dir<'_>, request_path: &str) -> HttpResponse {
    if request_path == "/api" || request_path.starts_with("/api/") {
        return HttpResponse::NotFound().body(format!("No API route for {}", request_path));
    }

    let path = request_path.trim_start_matches('/');
    let (file_path, file) = match dir.get_file(path).filter(|_| !path.is_empty()) {
        Some(file) => (path, file),
        None => match dir.get_file("index.html") {
            Some(index) => ("index.html", index),
            None => return HttpResponse::NotFound().body("The builder UI was not bundled into this build"),
        },
    };
    let mime = from_path(file_path).first_or_octet_stream();
    HttpResponse::Ok()
        .content_type(mime.as_ref())
        .body(file.contents().to_vec())
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    match path {
        Some(path) => {
            info!("Loading catalog from {}", path.display());
            let json = std::fs::read_to_string(path)?;
            Catalog::from_json(&json)
        }
        None => Catalog::builtin(),
    }
}

fn startup_error(e: impl std::fmt::Display) -> io::Error {
    error!("{}", e);
    io::Error::other(e.to_string())
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = ServerConfig::from_env().map_err(startup_error)?;
    let catalog = load_catalog(config.catalog_path.as_deref()).map_err(startup_error)?;
    info!("Catalog ready with {} ingredients", catalog.len());
    let repositories = storage::open(&config.storage).map_err(startup_error)?;

    let url = config.url();
    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url);
        });
    }

    info!("Server running at {}", url);

    let catalog = web::Data::new(catalog);
    let formulas = web::Data::from(repositories.formulas);
    let profiles = web::Data::from(repositories.profiles);
    let json_limit = config.json_limit;

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(json_limit))
            .app_data(catalog.clone())
            .app_data(formulas.clone())
            .app_data(profiles.clone())
            .service(services::catalog::configure_routes())
            .service(services::recommendations::configure_routes())
            .service(services::formulas::configure_routes())
            .service(services::profile::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use common::model::catalog::CatalogIngredient;
    use include_dir::{DirEntry, File};

    static BUNDLE: Dir = Dir::new(
        "",
        &[
            DirEntry::File(File::new("index.html", b"<html>builder</html>")),
            DirEntry::File(File::new("app.js", b"run()")),
        ],
    );

    #[actix_web::test]
    async fn embedded_assets_with_index_fallback() {
        let js = embedded_response(&BUNDLE, "/app.js");
        assert_eq!(js.status(), StatusCode::OK);
        assert_eq!(to_bytes(js.into_body()).await.unwrap(), "run()".as_bytes());

        for path in ["/", "/formulas/new"] {
            let page = embedded_response(&BUNDLE, path);
            assert_eq!(page.status(), StatusCode::OK);
            assert_eq!(to_bytes(page.into_body()).await.unwrap(), "<html>builder</html>".as_bytes());
        }

        assert_eq!(embedded_response(&BUNDLE, "/api/unknown").status(), StatusCode::NOT_FOUND);
        assert_eq!(embedded_response(&Dir::new("", &[]), "/").status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn catalog_from_file_or_builtin() {
        assert_eq!(load_catalog(None).unwrap().len(), 32);

        let builtin = Catalog::builtin().unwrap();
        let subset: Vec<&CatalogIngredient> = builtin.iter().take(3).map(|i| i.as_ref()).collect();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, serde_json::to_string(&subset).unwrap()).unwrap();

        assert_eq!(load_catalog(Some(&path)).unwrap().len(), 3);
        assert!(matches!(
            load_catalog(Some(&dir.path().join("missing.json"))),
            Err(CatalogError::Io(_))
        ));
    }
}
