/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;

use smallvec::SmallVec;

/// A numeric metric value as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Signed(i64),
    Unsigned(u64),
    Double(f64),
}

impl MetricValue {
    /// Round to 4 decimal places. An integral result collapses to
    /// `Signed` so it renders without a fraction.
    pub(crate) fn round4(self) -> Self {
        match self {
            MetricValue::Double(f) => {
                let r = (f * 10_000.0).round() / 10_000.0;
                if r.fract() == 0.0 && r >= i64::MIN as f64 && r <= i64::MAX as f64 {
                    MetricValue::Signed(r as i64)
                } else {
                    MetricValue::Double(r)
                }
            }
            v => v,
        }
    }

    pub(crate) fn push_to(&self, buf: &mut SmallVec<[u8; 16]>) {
        match self {
            MetricValue::Signed(i) => {
                let mut fmt_buf = itoa::Buffer::new();
                buf.extend_from_slice(fmt_buf.format(*i).as_bytes());
            }
            MetricValue::Unsigned(u) => {
                let mut fmt_buf = itoa::Buffer::new();
                buf.extend_from_slice(fmt_buf.format(*u).as_bytes());
            }
            MetricValue::Double(v) => {
                let mut fmt_buf = ryu::Buffer::new();
                buf.extend_from_slice(fmt_buf.format(*v).as_bytes());
            }
        }
    }
}

impl From<i32> for MetricValue {
    fn from(v: i32) -> Self {
        MetricValue::Signed(i64::from(v))
    }
}

impl From<i64> for MetricValue {
    fn from(v: i64) -> Self {
        MetricValue::Signed(v)
    }
}

impl From<u32> for MetricValue {
    fn from(v: u32) -> Self {
        MetricValue::Unsigned(u64::from(v))
    }
}

impl From<u64> for MetricValue {
    fn from(v: u64) -> Self {
        MetricValue::Unsigned(v)
    }
}

impl From<f32> for MetricValue {
    fn from(v: f32) -> Self {
        MetricValue::Double(f64::from(v))
    }
}

impl From<f64> for MetricValue {
    fn from(v: f64) -> Self {
        MetricValue::Double(v)
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Signed(i) => itoa::Buffer::new().format(*i).fmt(f),
            MetricValue::Unsigned(u) => itoa::Buffer::new().format(*u).fmt(f),
            MetricValue::Double(v) => ryu::Buffer::new().format(*v).fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(MetricValue::Unsigned(10).to_string(), "10");
        assert_eq!(MetricValue::Signed(-3).to_string(), "-3");
        assert_eq!(MetricValue::Double(1.0).to_string(), "1.0");
        assert_eq!(MetricValue::Double(12.3457).to_string(), "12.3457");
    }

    #[test]
    fn round4() {
        assert_eq!(
            MetricValue::Double(12.3456789).round4(),
            MetricValue::Double(12.3457)
        );
        assert_eq!(MetricValue::Double(100.0).round4(), MetricValue::Signed(100));
        assert_eq!(MetricValue::Double(0.00004).round4(), MetricValue::Signed(0));
        assert_eq!(MetricValue::Signed(-5).round4(), MetricValue::Signed(-5));
        assert_eq!(MetricValue::Unsigned(7).round4(), MetricValue::Unsigned(7));
    }
}
