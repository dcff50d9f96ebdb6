use std::{net::IpAddr, sync::Arc};

use anyhow::Context;
use axum::Router;
use embassy_core_contact_contracts::ContactFeatureService;
use embassy_core_news_contracts::NewsFeatureService;
use tokio::net::TcpListener;
use tracing::info;

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Contact, News> {
    contact: Contact,
    news: News,
}

impl<Contact, News> RestServer<Contact, News>
where
    Contact: ContactFeatureService,
    News: NewsFeatureService,
{
    pub fn new(contact: Contact, news: News) -> Self {
        Self { contact, news }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let listener = TcpListener::bind((host, port))
            .await
            .with_context(|| format!("Failed to bind to {host}:{port}"))?;
        self.serve_with_listener(listener).await
    }

    /// Serve on an already bound listener, e.g. one bound to an ephemeral
    /// port.
    pub async fn serve_with_listener(self, listener: TcpListener) -> anyhow::Result<()> {
        info!("Starting HTTP server on {}", listener.local_addr()?);
        axum::serve(listener, self.router())
            .await
            .context("Failed to start HTTP server")
    }

    pub fn router(self) -> Router<()> {
        let contact = Arc::new(self.contact);

        let router = Router::new()
            .merge(routes::health::router(Arc::clone(&contact)))
            .merge(routes::contact::router(contact))
            .merge(routes::news::router(self.news.into()));

        // the last layer added runs first
        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        let router = middlewares::client_key::add(router);
        middlewares::request_id::add(router)
    }
}
