use serde::Deserialize;
use std::sync::Mutex;

use crate::config::settings::AppConfig;
use crate::store::ReviewStore;

pub mod reviews;

pub struct AppState {
    pub store: Mutex<ReviewStore>,
    pub config: AppConfig,
}

#[derive(Deserialize)]
pub struct PublicParams {
    pub listing: Option<String>,
}
