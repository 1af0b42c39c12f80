/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;

#[cfg(test)]
use std::sync::{Arc, Mutex};

#[cfg(test)]
mod buf;
#[cfg(test)]
use buf::BufMetricsSink;

mod udp;
use udp::UdpMetricsSink;

/// Where a client sends its metric lines. A sink is kept for the lifetime
/// of the client, while the actual io is opened once per emitted batch.
pub(crate) enum StatsdMetricsSink {
    Udp,
    #[cfg(test)]
    Buf(BufMetricsSink),
    #[cfg(test)]
    Fail,
}

impl StatsdMetricsSink {
    #[cfg(test)]
    pub(crate) fn buf(buf: Arc<Mutex<Vec<String>>>) -> Self {
        StatsdMetricsSink::Buf(BufMetricsSink::new(buf))
    }

    pub(crate) fn open(&self, host: &str, port: u16) -> io::Result<MetricsSinkIo> {
        match self {
            StatsdMetricsSink::Udp => UdpMetricsSink::open(host, port).map(MetricsSinkIo::Udp),
            #[cfg(test)]
            StatsdMetricsSink::Buf(b) => Ok(MetricsSinkIo::Buf(b.clone())),
            #[cfg(test)]
            StatsdMetricsSink::Fail => Ok(MetricsSinkIo::Fail),
        }
    }
}

pub(crate) enum MetricsSinkIo {
    Udp(UdpMetricsSink),
    #[cfg(test)]
    Buf(BufMetricsSink),
    #[cfg(test)]
    Fail,
}

impl MetricsSinkIo {
    pub(crate) fn send_msg(&self, msg: &[u8]) -> io::Result<usize> {
        match self {
            MetricsSinkIo::Udp(s) => s.send_msg(msg),
            #[cfg(test)]
            MetricsSinkIo::Buf(b) => b.send_msg(msg),
            #[cfg(test)]
            MetricsSinkIo::Fail => Err(io::Error::other("sink set to fail")),
        }
    }
}
