// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `orangeair serve`: wires the adapters into the workflow and runs the gateway.

use std::sync::Arc;

use orangeair_calendar::GoogleCalendar;
use orangeair_config::model::OrangeairConfig;
use orangeair_core::{Adapter, CalendarAdapter, HealthStatus, MailAdapter, OrangeairError};
use orangeair_email::SmtpMailer;
use orangeair_gateway::{AppState, ServerConfig, start_server};
use orangeair_workflow::BookingWorkflow;
use tracing::{info, warn};

use crate::shutdown;

/// Runs the HTTP service until SIGINT or SIGTERM.
pub async fn run_serve(config: OrangeairConfig) -> Result<(), OrangeairError> {
    init_tracing(&config.server.log_level);
    info!(
        version = env!("CARGO_PKG_VERSION"),
        business = %config.business.name,
        "orangeair serve starting"
    );

    let calendar = Arc::new(GoogleCalendar::from_config(&config.calendar).await?);
    let mailer = Arc::new(SmtpMailer::from_config(&config.smtp)?);
    log_health(calendar.as_ref()).await;
    log_health(mailer.as_ref()).await;

    let calendar: Arc<dyn CalendarAdapter> = calendar;
    let mailer: Arc<dyn MailAdapter> = mailer;
    let workflow = Arc::new(BookingWorkflow::new(&config, calendar, mailer)?);

    let server = ServerConfig {
        host: config.server.bind_address.clone(),
        port: config.server.port,
    };
    let cancel = shutdown::install_signal_handler();
    start_server(&server, AppState::new(workflow), cancel).await?;

    info!("orangeair serve shutdown complete");
    Ok(())
}

async fn log_health(adapter: &dyn Adapter) {
    match adapter.health_check().await {
        Ok(HealthStatus::Healthy) => info!(adapter = adapter.name(), "adapter ready"),
        Ok(HealthStatus::Degraded(reason)) => {
            info!(adapter = adapter.name(), %reason, "adapter degraded")
        }
        Ok(HealthStatus::Unhealthy(reason)) => {
            warn!(adapter = adapter.name(), %reason, "adapter unhealthy")
        }
        Err(e) => warn!(adapter = adapter.name(), error = %e, "adapter health check failed"),
    }
}

/// Initializes the tracing subscriber with the given log level.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("orangeair={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
