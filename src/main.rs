use baro_acquisition::bus::i2c::I2CBus;
use baro_acquisition::config::load_config;
use baro_acquisition::driver::Bmp390;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize tracing with RUST_LOG environment variable support
    // RUST_LOG=debug for verbose, RUST_LOG=info for normal, RUST_LOG=warn for production
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    info!("[BaroAcquisition] starting up...");

    // Load configuration from CONFIG_PATH or default
    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config".to_string());
    let sensor_config_path = format!("{}/sensor.toml", config_path);
    let config = match load_config(&sensor_config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("[config] {}", e);
            std::process::exit(1);
        }
    };
    info!(
        "[config] bus={} address={:#04x}",
        config.sensor.bus, config.sensor.address
    );

    let bus = match I2CBus::open(&config.sensor.bus, config.sensor.address) {
        Ok(bus) => bus,
        Err(e) => {
            error!("[bus] failed to open {}: {}", config.sensor.bus, e);
            std::process::exit(1);
        }
    };

    let mut driver = Bmp390::new(bus);
    if let Err(e) = driver.initialize().await {
        error!("[init] {}", e);
        std::process::exit(1);
    }
    info!("[init] sensor initialized successfully");

    let frequency = config.sensor.frequency.unwrap_or(1);
    let interval = Duration::from_millis((1000.0 / frequency as f32) as u64);

    loop {
        match driver.read_raw().await {
            Ok(reading) => {
                info!(
                    "[sample] pressure_raw={} temperature_raw={}",
                    reading.pressure_raw, reading.temperature_raw
                );
            }
            Err(e) if e.is_transient() => {
                debug!("[sample] {}", e);
            }
            Err(e) => {
                error!("[sample] read failed: {}", e);
            }
        }
        sleep(interval).await;
    }
}
