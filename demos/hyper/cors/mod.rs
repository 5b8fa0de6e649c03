use std::sync::Arc;

use simple_cors_rs::{Cors, CorsBuilder, Origin, ValidationError};

pub type SharedAppState = Arc<AppState>;

#[derive(Clone)]
pub struct AppState {
    pub cors: Cors,
    pub greeting: &'static str,
}

pub fn build_state() -> Result<SharedAppState, ValidationError> {
    let cors = CorsBuilder::new(Origin::exact("http://localhost:5173"))
        .allow_credentials()
        .allow_methods(["*"])
        .allow_headers(["Content-Type", "X-Requested-With", "X-Example-Trace"])
        .expose_headers(["X-Example-Trace"])
        .max_age(600)
        .build()?;

    Ok(Arc::new(AppState {
        cors,
        greeting: "Hello from the simple_cors_rs hyper demo",
    }))
}

pub mod middleware;
