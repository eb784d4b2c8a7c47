// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for booking sessions.
//!
//! Each session lives in a shared map behind its own async mutex, so actions
//! on one session run strictly in order while sessions stay independent.

pub mod error;
pub mod handlers;
pub mod server;

pub use error::ApiError;
pub use server::{AppState, HealthState, ServerConfig, router, start_server};
