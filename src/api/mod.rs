pub mod handlers;
pub mod query;
pub mod routes;


use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
