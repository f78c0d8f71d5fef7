use std::{io, net};

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::dispatcher::Dispatcher;
use crate::routes::{contact, healthcheck, json_error_handler};

/// Application
pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    /// Build an application based on settings
    pub fn build(config: Settings) -> anyhow::Result<Self> {
        // Build the email client once and hand it to the dispatcher
        let email_client = config.email_client.client()?;
        let dispatcher = config.contact.dispatcher(email_client)?;

        // Run the HTTP server and return its data
        let listener = net::TcpListener::bind(format!(
            "{}:{}",
            config.application.app_host, config.application.app_port
        ))?;
        let port = listener.local_addr()?.port();
        let server = run_server(listener, dispatcher)?;
        Ok(Self { server, port })
    }

    /// Get application port
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Run application until it is stopped
    pub async fn run_until_stopped(self) -> io::Result<()> {
        self.server.await
    }
}

/// Run the HTTP server
pub fn run_server(listener: net::TcpListener, dispatcher: Dispatcher) -> io::Result<Server> {
    // Prepare data to be added the application context
    let dispatcher = web::Data::new(dispatcher);

    // Start the HTTP server
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/healthcheck", web::get().to(healthcheck))
            .service(
                web::resource("/api/contact")
                    .app_data(
                        // Parse the body as JSON whatever its Content-Type
                        web::JsonConfig::default()
                            .content_type_required(false)
                            .error_handler(json_error_handler),
                    )
                    .route(web::post().to(contact)),
            )
            .app_data(dispatcher.clone())
    })
    .listen(listener)?
    .run())
}
