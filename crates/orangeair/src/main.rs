// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Orange Air - air-conditioner cleaning booking service.
//!
//! This is the binary entry point for the Orange Air service.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod serve;
mod shutdown;
mod slots;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use orangeair_config::model::OrangeairConfig;

/// Orange Air - air-conditioner cleaning booking service.
#[derive(Parser, Debug)]
#[command(name = "orangeair", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the XDG hierarchy.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the booking HTTP service (default).
    Serve,
    /// Validate configuration and print a summary.
    CheckConfig,
    /// Print the referral link for a phone number.
    ReferralLink {
        /// Phone number of the referring customer.
        phone: String,
    },
    /// Print the appointment slots currently booked in the calendar.
    ReservedSlots,
}

fn load_config(path: Option<&PathBuf>) -> OrangeairConfig {
    let loaded = match path {
        Some(path) => orangeair_config::load_and_validate_path(path),
        None => orangeair_config::load_and_validate(),
    };
    match loaded {
        Ok(config) => config,
        Err(errors) => {
            orangeair_config::render_errors(&errors);
            std::process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref());

    let result = match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve::run_serve(config).await,
        Commands::CheckConfig => {
            print_summary(&config);
            Ok(())
        }
        Commands::ReferralLink { phone } => {
            match orangeair_workflow::referral_link(&config.business.service_domain, &phone) {
                Some(link) => {
                    println!("{link}");
                    Ok(())
                }
                None => Err(orangeair_core::OrangeairError::Validation(
                    "phone number must not be blank".to_string(),
                )),
            }
        }
        Commands::ReservedSlots => slots::run_reserved_slots(&config).await,
    };

    if let Err(e) = result {
        eprintln!("orangeair: {e}");
        std::process::exit(1);
    }
}

fn print_summary(config: &OrangeairConfig) {
    println!("orangeair: config OK");
    println!(
        "  listen:       {}:{}",
        config.server.bind_address, config.server.port
    );
    println!("  domain:       {}", config.business.service_domain);
    println!("  notify:       {}", config.business.notification_recipient);
    println!(
        "  smtp:         {}:{} (credentials {})",
        config.smtp.host,
        config.smtp.port,
        if config.smtp.username.is_some() && config.smtp.password.is_some() {
            "set"
        } else {
            "missing"
        }
    );
    println!(
        "  calendar:     {} ({} days, {} events max)",
        config.calendar.calendar_id, config.calendar.window_days, config.calendar.max_results
    );
    println!(
        "  uploads:      {} photos, {}x{} JPEG q{}",
        config.uploads.max_photos,
        config.uploads.max_width,
        config.uploads.max_height,
        config.uploads.jpeg_quality
    );
}
