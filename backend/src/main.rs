mod config;
mod services;

use crate::config::ServerConfig;
use actix_web::{App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = ServerConfig::from_env();
    let url = config.url();

    if !config.dist_dir.join("index.html").is_file() {
        warn!(
            "No front-end bundle in {}; run `trunk build` in frontend/ first",
            config.dist_dir.display()
        );
    }

    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url_clone) {
                warn!("Could not open a browser: {}", e);
            }
        });
    }

    info!("Serving {} at {}", config.dist_dir.display(), url);

    let dist_dir = config.dist_dir;

    HttpServer::new(move || App::new().service(services::spa::bundle_service(&dist_dir)))
        .bind((config.host, config.port))?
        .run()
        .await
}
