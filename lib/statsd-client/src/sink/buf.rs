/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;
use std::sync::{Arc, Mutex};

/// Capture sink for tests. Each sent message lands as its own entry, so
/// tests can assert datagram boundaries as well as contents.
#[derive(Clone)]
pub(crate) struct BufMetricsSink {
    buf: Arc<Mutex<Vec<String>>>,
}

impl BufMetricsSink {
    pub(super) fn new(buf: Arc<Mutex<Vec<String>>>) -> Self {
        BufMetricsSink { buf }
    }

    pub(super) fn send_msg(&self, msg: &[u8]) -> io::Result<usize> {
        let mut buf = self.buf.lock().unwrap();
        buf.push(String::from_utf8_lossy(msg).into_owned());
        Ok(msg.len())
    }
}
