/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::time::Instant;

#[cfg(test)]
use std::sync::Mutex;
#[cfg(test)]
use std::time::Duration;

pub(crate) enum Clock {
    System,
    #[cfg(test)]
    Manual(Mutex<Instant>),
}

impl Clock {
    pub(crate) fn now(&self) -> Instant {
        match self {
            Clock::System => Instant::now(),
            #[cfg(test)]
            Clock::Manual(instant) => *instant.lock().unwrap(),
        }
    }

    #[cfg(test)]
    pub(crate) fn manual() -> Self {
        Clock::Manual(Mutex::new(Instant::now()))
    }

    #[cfg(test)]
    pub(crate) fn advance(&self, d: Duration) {
        match self {
            Clock::System => {}
            Clock::Manual(instant) => {
                let mut instant = instant.lock().unwrap();
                *instant += d;
            }
        }
    }
}
