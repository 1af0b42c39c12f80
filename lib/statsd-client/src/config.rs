/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8125;

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("port {0} is out of range")]
    PortOutOfRange(u32),
}

/// Partial configuration update for a client instance.
///
/// Only the fields that are set get applied. `port` is wider than `u16` on
/// purpose: out-of-range values are accepted here and rejected with a
/// configuration error when applied.
#[derive(Clone, Debug, Default)]
pub struct ClientOptions {
    pub host: Option<String>,
    pub port: Option<u32>,
    pub namespace: Option<String>,
}

impl ClientOptions {
    pub fn host<T: Into<String>>(mut self, host: T) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn port(mut self, port: u32) -> Self {
        self.port = Some(port);
        self
    }

    pub fn namespace<T: Into<String>>(mut self, namespace: T) -> Self {
        self.namespace = Some(namespace.into());
        self
    }
}

#[derive(Clone, Debug)]
pub(crate) struct ClientConfig {
    host: String,
    port: u16,
    namespace: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            namespace: String::new(),
        }
    }
}

impl ClientConfig {
    #[inline]
    pub(crate) fn host(&self) -> &str {
        &self.host
    }

    #[inline]
    pub(crate) fn port(&self) -> u16 {
        self.port
    }

    #[inline]
    pub(crate) fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Apply a partial update. The whole update is validated before any
    /// field is touched, so a rejected update leaves the config unchanged.
    pub(crate) fn apply(&mut self, options: &ClientOptions) -> Result<(), ConfigError> {
        let port = options.port.map(check_port).transpose()?;
        if let Some(host) = &options.host {
            self.host.clone_from(host);
        }
        if let Some(port) = port {
            self.port = port;
        }
        if let Some(namespace) = &options.namespace {
            self.namespace.clone_from(namespace);
        }
        Ok(())
    }
}

fn check_port(port: u32) -> Result<u16, ConfigError> {
    match u16::try_from(port) {
        Ok(p) if p != 0 => Ok(p),
        _ => Err(ConfigError::PortOutOfRange(port)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = ClientConfig::default();
        assert_eq!(config.host(), "127.0.0.1");
        assert_eq!(config.port(), 8125);
        assert_eq!(config.namespace(), "");
    }

    #[test]
    fn apply_partial() {
        let mut config = ClientConfig::default();
        config
            .apply(&ClientOptions::default().host("statsd.local").port(9125))
            .unwrap();
        assert_eq!(config.host(), "statsd.local");
        assert_eq!(config.port(), 9125);
        assert_eq!(config.namespace(), "");

        config
            .apply(&ClientOptions::default().namespace("app"))
            .unwrap();
        assert_eq!(config.host(), "statsd.local");
        assert_eq!(config.port(), 9125);
        assert_eq!(config.namespace(), "app");
    }

    #[test]
    fn apply_port_boundaries() {
        let mut config = ClientConfig::default();
        config.apply(&ClientOptions::default().port(1)).unwrap();
        assert_eq!(config.port(), 1);
        config.apply(&ClientOptions::default().port(65535)).unwrap();
        assert_eq!(config.port(), 65535);
    }

    #[test]
    fn reject_port_out_of_range() {
        let mut config = ClientConfig::default();
        assert!(config.apply(&ClientOptions::default().port(0)).is_err());
        assert!(config.apply(&ClientOptions::default().port(65536)).is_err());
        assert!(config.apply(&ClientOptions::default().port(70000)).is_err());
        assert_eq!(config.port(), DEFAULT_PORT);
    }

    #[test]
    fn reject_whole_update() {
        let mut config = ClientConfig::default();
        let r = config.apply(&ClientOptions::default().host("statsd.local").port(70000));
        assert!(r.is_err());
        // nothing from the rejected update may stick, the host included
        assert_eq!(config.host(), DEFAULT_HOST);
        assert_eq!(config.port(), DEFAULT_PORT);
    }
}
