/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

#[cfg(test)]
use std::collections::VecDeque;
#[cfg(test)]
use std::sync::Mutex;

pub(crate) enum RandomSource {
    Thread,
    #[cfg(test)]
    Scripted(Mutex<VecDeque<f64>>),
}

impl RandomSource {
    /// Draw a value in [0.0, 1.0) to compare against a sample rate.
    pub(crate) fn draw(&self) -> f64 {
        match self {
            RandomSource::Thread => fastrand::f64(),
            #[cfg(test)]
            RandomSource::Scripted(values) => values
                .lock()
                .unwrap()
                .pop_front()
                .expect("scripted random values exhausted"),
        }
    }

    #[cfg(test)]
    pub(crate) fn scripted<I: IntoIterator<Item = f64>>(values: I) -> Self {
        RandomSource::Scripted(Mutex::new(values.into_iter().collect()))
    }
}
