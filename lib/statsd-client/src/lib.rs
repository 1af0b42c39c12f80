/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod clock;
mod sampling;
mod sink;

mod error;
pub use error::StatsdError;

mod value;
pub use value::MetricValue;

mod config;
pub use config::{ClientOptions, DEFAULT_HOST, DEFAULT_PORT};

mod registry;
pub use registry::ClientRegistry;

mod client;
pub use client::{MetricNames, StatsdClient};
