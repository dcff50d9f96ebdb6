use std::{any::Any, panic::AssertUnwindSafe};

use anyhow::anyhow;
use axum::{
    extract::Request,
    middleware::{from_fn, Next},
    response::Response,
    Router,
};
use futures::FutureExt;

use crate::routes::internal_server_error;

pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    router.layer(from_fn(catch_panic))
}

/// Turns a panicking handler into a 500 response for this request only.
async fn catch_panic(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    AssertUnwindSafe(next.run(request))
        .catch_unwind()
        .await
        .unwrap_or_else(|payload| {
            internal_server_error(anyhow!(
                "handler for {path} panicked: {}",
                panic_message(&*payload)
            ))
        })
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, routing};
    use tokio::net::TcpListener;

    use super::*;

    #[test]
    fn message_from_payload() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(&*payload), "boom");

        let payload: Box<dyn Any + Send> = Box::new(format!("boom {}", 42));
        assert_eq!(panic_message(&*payload), "boom 42");

        let payload: Box<dyn Any + Send> = Box::new(42);
        assert_eq!(panic_message(&*payload), "non-string panic payload");
    }

    #[tokio::test]
    async fn panic_becomes_internal_server_error() {
        // Arrange
        let router = Router::new()
            .route("/panic", routing::get(panicking))
            .route("/ok", routing::get(|| async { "ok" }));
        let router = add(router);
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await });

        // Act
        let panicked = reqwest::get(format!("http://{addr}/panic")).await.unwrap();
        let ok = reqwest::get(format!("http://{addr}/ok")).await.unwrap();

        // Assert
        assert_eq!(panicked.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            panicked.text().await.unwrap(),
            r#"{"message":"Internal server error"}"#
        );
        assert_eq!(ok.status(), StatusCode::OK);
    }

    async fn panicking() -> &'static str {
        panic!("boom")
    }
}
