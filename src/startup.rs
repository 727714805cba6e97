use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::notification::{LogNotificationSink, NotificationSink};
use crate::routes::{health_check, json_config, submit_contact};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Bind the configured address and log every accepted submission.
    pub async fn build(config: Settings) -> Result<Self, anyhow::Error> {
        Self::build_with_sink(config, LogNotificationSink).await
    }

    pub async fn build_with_sink<S: NotificationSink>(
        config: Settings,
        sink: S,
    ) -> Result<Self, anyhow::Error> {
        let address = config.application.address();
        let listener = TcpListener::bind(&address)
            .with_context(|| format!("Failed to bind {address}."))?;
        let port = listener
            .local_addr()
            .context("Failed to read the bound address.")?
            .port();
        let server = run(listener, config, sink)?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run<S: NotificationSink>(
    listener: TcpListener,
    config: Settings,
    sink: S,
) -> Result<Server, anyhow::Error> {
    let sink = web::Data::new(sink);
    let contact_settings = web::Data::new(config.contact);
    let max_body_bytes = config.application.max_body_bytes;

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(json_config(max_body_bytes))
            .route("/health_check", web::get().to(health_check))
            .route("/api/contact", web::post().to(submit_contact::<S>))
            .app_data(sink.clone())
            .app_data(contact_settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
