use serde::Serialize;

pub mod news;

#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub message: String,
}
