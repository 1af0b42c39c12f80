/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;

use thiserror::Error;

/// Failure raised by a client instance.
///
/// Datagram loss is never reported here: once the socket for a batch is set
/// up, individual write errors are tolerated and only logged.
#[derive(Debug, Error)]
pub enum StatsdError {
    #[error("client {instance}: {reason}")]
    Configuration { instance: String, reason: String },
    #[error("client {instance}: socket setup failed: {source}")]
    Connection {
        instance: String,
        #[source]
        source: io::Error,
    },
}

impl StatsdError {
    pub(crate) fn configuration(instance: &str, reason: String) -> Self {
        StatsdError::Configuration {
            instance: instance.to_string(),
            reason,
        }
    }

    pub(crate) fn connection(instance: &str, source: io::Error) -> Self {
        StatsdError::Connection {
            instance: instance.to_string(),
            source,
        }
    }

    /// Key of the instance the error originated from.
    pub fn instance(&self) -> &str {
        match self {
            StatsdError::Configuration { instance, .. } => instance,
            StatsdError::Connection { instance, .. } => instance,
        }
    }
}
