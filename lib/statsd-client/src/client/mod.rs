/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use indexmap::IndexMap;
use log::warn;
use smallvec::SmallVec;

use crate::clock::Clock;
use crate::config::{ClientConfig, ClientOptions};
use crate::error::StatsdError;
use crate::registry::process_registry;
use crate::sampling::RandomSource;
use crate::sink::StatsdMetricsSink;

mod formatter;
pub use formatter::MetricNames;

pub struct StatsdClient {
    key: String,
    config: Mutex<ClientConfig>,
    last_message: Mutex<String>,
    sink: StatsdMetricsSink,
    clock: Clock,
    random: RandomSource,

    create_instant: Instant,
    last_error_report: AtomicU64,
}

impl StatsdClient {
    pub(crate) fn with_key(key: &str) -> Self {
        StatsdClient {
            key: key.to_string(),
            config: Mutex::new(ClientConfig::default()),
            last_message: Mutex::new(String::new()),
            sink: StatsdMetricsSink::Udp,
            clock: Clock::System,
            random: RandomSource::Thread,
            create_instant: Instant::now(),
            last_error_report: AtomicU64::new(0),
        }
    }

    /// Get the shared client registered under `key` in the process-wide
    /// registry, creating it with default config on first use.
    pub fn instance(key: &str) -> Arc<StatsdClient> {
        process_registry().get_or_insert_default(key)
    }

    /// Get the shared client registered under the key "default".
    pub fn default_instance() -> Arc<StatsdClient> {
        StatsdClient::instance("default")
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Apply a partial config update. The update is checked as a whole
    /// before anything is applied, so a rejected update changes nothing.
    pub fn configure(&self, options: ClientOptions) -> Result<(), StatsdError> {
        let mut config = self.config.lock().unwrap();
        config
            .apply(&options)
            .map_err(|e| StatsdError::configuration(&self.key, e.to_string()))
    }

    pub fn host(&self) -> String {
        self.config.lock().unwrap().host().to_string()
    }

    pub fn port(&self) -> u16 {
        self.config.lock().unwrap().port()
    }

    pub fn namespace(&self) -> String {
        self.config.lock().unwrap().namespace().to_string()
    }

    /// The last metric line handed to the sink. Empty if nothing has been
    /// emitted yet.
    pub fn last_message(&self) -> String {
        self.last_message.lock().unwrap().clone()
    }

    fn send(&self, events: IndexMap<&str, SmallVec<[u8; 16]>>) -> Result<(), StatsdError> {
        let (host, port, namespace) = {
            let config = self.config.lock().unwrap();
            (
                config.host().to_string(),
                config.port(),
                config.namespace().to_string(),
            )
        };
        let conn = self
            .sink
            .open(&host, port)
            .map_err(|e| StatsdError::connection(&self.key, e))?;

        let mut line: Vec<u8> = Vec::with_capacity(64);
        for (name, value) in &events {
            line.clear();
            if !namespace.is_empty() {
                line.extend_from_slice(namespace.as_bytes());
                line.push(b'.');
            }
            line.extend_from_slice(name.as_bytes());
            line.push(b':');
            line.extend_from_slice(value.as_slice());

            // record before the write
            let mut last_message = self.last_message.lock().unwrap();
            last_message.clear();
            last_message.push_str(&String::from_utf8_lossy(&line));
            drop(last_message);

            if let Err(e) = conn.send_msg(&line) {
                self.handle_emit_error(e);
            }
        }
        Ok(())
    }

    fn handle_emit_error(&self, e: io::Error) {
        let time_slice = self.create_instant.elapsed().as_secs().rotate_right(6); // every 64s
        if self.last_error_report.swap(time_slice, Ordering::Relaxed) != time_slice {
            warn!("sending metrics error: {e:?}");
        }
    }
}

#[cfg(test)]
impl StatsdClient {
    pub(crate) fn with_buf_sink(mut self, buf: Arc<Mutex<Vec<String>>>) -> Self {
        self.sink = StatsdMetricsSink::buf(buf);
        self
    }

    pub(crate) fn with_fail_sink(mut self) -> Self {
        self.sink = StatsdMetricsSink::Fail;
        self
    }

    pub(crate) fn with_scripted_random<I: IntoIterator<Item = f64>>(mut self, values: I) -> Self {
        self.random = RandomSource::scripted(values);
        self
    }

    pub(crate) fn with_manual_clock(mut self) -> Self {
        self.clock = Clock::manual();
        self
    }

    pub(crate) fn advance_clock(&self, d: std::time::Duration) {
        self.clock.advance(d);
    }
}
