mod config;

use std::thread;
use std::time::Duration;

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use clap::Parser;
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;

use crate::config::LauncherConfig;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    embedded_response(&STATIC_DIR, req.path())
}

/// Looks `path` up in `dir`. Unknown paths fall back to the single page; a
/// bundle without `index.html` answers 404.
fn embedded_response(dir: &Dir<'_>, path: &str) -> HttpResponse {
    let path = path.trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match dir.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match dir.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Frontend bundle not embedded"),
        },
    }
}

fn open_browser(url: String) {
    thread::spawn(move || {
        thread::sleep(Duration::from_millis(500));
        if let Err(err) = webbrowser::open(&url) {
            warn!("could not open a browser for {url}: {err}");
        }
    });
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = LauncherConfig::parse();
    let url = config.url();

    if STATIC_DIR.get_file("index.html").is_none() {
        warn!("no frontend bundle embedded; build the frontend with trunk and rebuild the launcher");
    }
    if !config.no_browser {
        open_browser(url.clone());
    }

    info!("Serving ID card generator at {url}");

    HttpServer::new(|| App::new().default_service(web::route().to(serve_embedded)))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
