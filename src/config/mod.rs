use std::time::Duration;

use serde::Deserialize;

use crate::services::uploads::UploadTiming;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Server bind address (e.g., "0.0.0.0:3000").
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Interval between simulated upload progress ticks, in milliseconds.
    #[serde(default = "default_upload_tick_ms")]
    pub upload_tick_ms: u64,

    /// Delay between the Processing and Completed phases, in milliseconds.
    #[serde(default = "default_processing_delay_ms")]
    pub upload_processing_delay_ms: u64,

    /// Interval between assessment generation ticks, in milliseconds.
    #[serde(default = "default_generation_tick_ms")]
    pub generation_tick_ms: u64,
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_upload_tick_ms() -> u64 {
    500
}

fn default_processing_delay_ms() -> u64 {
    2000
}

fn default_generation_tick_ms() -> u64 {
    500
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    pub fn upload_timing(&self) -> UploadTiming {
        UploadTiming {
            tick_interval: Duration::from_millis(self.upload_tick_ms),
            processing_delay: Duration::from_millis(self.upload_processing_delay_ms),
        }
    }

    pub fn generation_tick(&self) -> Duration {
        Duration::from_millis(self.generation_tick_ms)
    }
}
