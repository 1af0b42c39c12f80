/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::time::Duration;

use indexmap::IndexMap;
use smallvec::SmallVec;

use super::StatsdClient;
use crate::error::StatsdError;
use crate::value::MetricValue;

enum MetricType {
    Count,
    Timing,
    Gauge,
}

impl MetricType {
    fn as_str(&self) -> &'static str {
        match self {
            MetricType::Count => "c",
            MetricType::Timing => "ms",
            MetricType::Gauge => "g",
        }
    }
}

/// One or many metric names for a counter update.
///
/// Implemented for single names (`&str`, `&String`) and for the usual
/// collections of names, so `increment("req", ..)` and
/// `increment(["req", "conn"], ..)` both work.
pub trait MetricNames<'a> {
    type Iter: Iterator<Item = &'a str>;

    fn into_names(self) -> Self::Iter;
}

impl<'a> MetricNames<'a> for &'a str {
    type Iter = std::iter::Once<&'a str>;

    fn into_names(self) -> Self::Iter {
        std::iter::once(self)
    }
}

impl<'a> MetricNames<'a> for &'a String {
    type Iter = std::iter::Once<&'a str>;

    fn into_names(self) -> Self::Iter {
        std::iter::once(self.as_str())
    }
}

impl<'a> MetricNames<'a> for &'a [&'a str] {
    type Iter = std::iter::Copied<std::slice::Iter<'a, &'a str>>;

    fn into_names(self) -> Self::Iter {
        self.iter().copied()
    }
}

impl<'a, const N: usize> MetricNames<'a> for [&'a str; N] {
    type Iter = std::array::IntoIter<&'a str, N>;

    fn into_names(self) -> Self::Iter {
        self.into_iter()
    }
}

impl<'a> MetricNames<'a> for Vec<&'a str> {
    type Iter = std::vec::IntoIter<&'a str>;

    fn into_names(self) -> Self::Iter {
        self.into_iter()
    }
}

impl<'a> MetricNames<'a> for &'a [String] {
    type Iter = std::iter::Map<std::slice::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_names(self) -> Self::Iter {
        self.iter().map(String::as_str as fn(&'a String) -> &'a str)
    }
}

impl<'a> MetricNames<'a> for &'a Vec<String> {
    type Iter = std::iter::Map<std::slice::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_names(self) -> Self::Iter {
        self.iter().map(String::as_str as fn(&'a String) -> &'a str)
    }
}

impl StatsdClient {
    /// Increment the given counter(s) by `delta`.
    ///
    /// With `sample_rate` below 1.0 each counter is emitted only when a
    /// random draw falls within the rate, and the emitted value carries the
    /// rate as `|@<rate>` so the server can scale it back up.
    pub fn increment<'a, M>(
        &self,
        metrics: M,
        delta: i64,
        sample_rate: f64,
    ) -> Result<(), StatsdError>
    where
        M: MetricNames<'a>,
    {
        let mut events: IndexMap<&str, SmallVec<[u8; 16]>> = IndexMap::new();
        if sample_rate < 1.0 {
            for name in metrics.into_names() {
                if self.random.draw() <= sample_rate {
                    events.insert(name, counter_expr(delta, Some(sample_rate)));
                }
            }
        } else {
            for name in metrics.into_names() {
                events.insert(name, counter_expr(delta, None));
            }
        }
        self.send(events)
    }

    /// Decrement the given counter(s) by `delta`.
    pub fn decrement<'a, M>(
        &self,
        metrics: M,
        delta: i64,
        sample_rate: f64,
    ) -> Result<(), StatsdError>
    where
        M: MetricNames<'a>,
    {
        self.increment(metrics, delta.wrapping_neg(), sample_rate)
    }

    /// Report a timing in milliseconds. Float values are rounded to at most
    /// four decimal places.
    pub fn timing<V: Into<MetricValue>>(&self, metric: &str, ms: V) -> Result<(), StatsdError> {
        let value = ms.into().round4();
        self.send_single(metric, value_expr(value, MetricType::Timing))
    }

    /// Report an elapsed [`Duration`] as a timing in milliseconds.
    pub fn timing_duration(&self, metric: &str, elapsed: Duration) -> Result<(), StatsdError> {
        self.timing(metric, elapsed.as_secs_f64() * 1000.0)
    }

    /// Run `op` and report its wall clock run time as a timing. The value
    /// returned by `op` is passed through. If `op` panics the panic
    /// propagates and no timing is emitted.
    pub fn time<T, F>(&self, metric: &str, op: F) -> Result<T, StatsdError>
    where
        F: FnOnce() -> T,
    {
        let start = self.clock.now();
        let ret = op();
        let elapsed = self.clock.now().duration_since(start);
        self.timing_duration(metric, elapsed)?;
        Ok(ret)
    }

    /// Report the current value of a gauge.
    pub fn gauge<V: Into<MetricValue>>(&self, metric: &str, value: V) -> Result<(), StatsdError> {
        self.send_single(metric, value_expr(value.into(), MetricType::Gauge))
    }

    fn send_single(&self, metric: &str, expr: SmallVec<[u8; 16]>) -> Result<(), StatsdError> {
        let mut events = IndexMap::with_capacity(1);
        events.insert(metric, expr);
        self.send(events)
    }
}

fn counter_expr(delta: i64, sample_rate: Option<f64>) -> SmallVec<[u8; 16]> {
    let mut expr = value_expr(MetricValue::Signed(delta), MetricType::Count);
    if let Some(rate) = sample_rate {
        expr.extend_from_slice(b"|@");
        let mut buffer = ryu::Buffer::new();
        expr.extend_from_slice(buffer.format(rate).as_bytes());
    }
    expr
}

fn value_expr(value: MetricValue, metric_type: MetricType) -> SmallVec<[u8; 16]> {
    let mut expr = SmallVec::new();
    value.push_to(&mut expr);
    expr.push(b'|');
    expr.extend_from_slice(metric_type.as_str().as_bytes());
    expr
}
