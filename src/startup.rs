use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::web;
use actix_web::App;
use actix_web::HttpServer;
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::email_client::EmailClient;
use crate::routes::health_check;
use crate::routes::home;
use crate::routes::submit_contact_form;

/// Wrapper for actix's `Server` with access to the bound port. Tests bind
/// port 0 and need to discover the port the OS actually assigned.
pub struct Application {
    /// Left private; use `get_port` to access
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(cfg: Settings) -> Result<Self, anyhow::Error> {
        let addr = format!("{}:{}", cfg.application.host, cfg.application.port);
        let listener = TcpListener::bind(addr)?;
        let port = listener.local_addr()?.port();

        let email_client = cfg.email_client.client().map_err(anyhow::Error::msg)?;

        let server = run(listener, email_client)?;
        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 { self.port }

    /// Because this consumes `self`, it should be the final call in `main`,
    /// or be handed to `tokio::spawn`.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> { self.server.await }
}

/// The server is not responsible for binding to an address, it only listens
/// to an already bound one.
///
/// Declares all routes. The submission endpoint is registered as a
/// catch-all so its handler owns the whole method table, 405s included.
pub fn run(
    listener: TcpListener,
    email_client: EmailClient,
) -> Result<Server, std::io::Error> {
    // `HttpServer` spins up a worker per core, each running its own copy of
    // the `App` built by the closure; shared state must therefore be
    // cloneable, hence `web::Data` (externally an `Arc`)
    let email_client = web::Data::new(email_client);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default()) // wrap the whole app in tracing middleware
            .route("/", web::get().to(home))
            .route("/health_check", web::get().to(health_check))
            .route("/api/contact", web::route().to(submit_contact_form))
            .app_data(email_client.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
