use std::sync::Arc;

use actix_web::{App, HttpServer, middleware, web};

use simphiwe::config::AppConfig;
use simphiwe::handlers::email_handlers;
use simphiwe::mail::{LogMailer, Mailer, SmtpMailer};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env();

    // Real SMTP only when credentials are configured; otherwise log emails
    // so the rest of the pipeline stays exercisable.
    let mailer: Arc<dyn Mailer> = if config.has_mail_credentials() {
        match SmtpMailer::new(&config) {
            Ok(mailer) => Arc::new(mailer),
            Err(e) => {
                log::warn!("SMTP transport unavailable ({e}) — emails will be logged, not sent");
                Arc::new(LogMailer)
            }
        }
    } else {
        log::warn!("No EMAIL_USER/EMAIL_PASS set — emails will be logged, not sent");
        Arc::new(LogMailer)
    };
    let mailer: web::Data<dyn Mailer> = web::Data::from(mailer);

    let (host, port) = config.bind_addr();
    log::info!("Starting server at http://{host}:{port}");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(config.clone()))
            .app_data(mailer.clone())
            // Static marketing pages and assets
            .service(actix_files::Files::new("/static", "./static"))
            .route("/", web::get().to(email_handlers::health))
            .route("/api/send-email", web::post().to(email_handlers::send_email))
    })
    .bind((host, port))?
    .run()
    .await
}
