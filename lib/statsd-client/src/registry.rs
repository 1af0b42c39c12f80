/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use foldhash::fast::FixedState;

use crate::client::StatsdClient;

/// A set of named client instances. Lookups create the instance with
/// default config when the key is not registered yet.
pub struct ClientRegistry {
    clients: Mutex<HashMap<String, Arc<StatsdClient>, FixedState>>,
}

impl ClientRegistry {
    pub const fn new() -> Self {
        ClientRegistry {
            clients: Mutex::new(HashMap::with_hasher(FixedState::with_seed(0))),
        }
    }

    pub fn get_or_insert_default(&self, key: &str) -> Arc<StatsdClient> {
        let mut ht = self.clients.lock().unwrap();
        ht.entry(key.to_string())
            .or_insert_with(|| Arc::new(StatsdClient::with_key(key)))
            .clone()
    }
}

impl Default for ClientRegistry {
    fn default() -> Self {
        ClientRegistry::new()
    }
}

static PROCESS_REGISTRY: ClientRegistry = ClientRegistry::new();

pub(crate) fn process_registry() -> &'static ClientRegistry {
    &PROCESS_REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn same_key_same_instance() {
        let registry = ClientRegistry::new();
        let c1 = registry.get_or_insert_default("app");
        let c2 = registry.get_or_insert_default("app");
        assert!(Arc::ptr_eq(&c1, &c2));
        assert_eq!(c1.key(), "app");
    }

    #[test]
    fn distinct_keys_distinct_instances() {
        let registry = ClientRegistry::new();
        let c1 = registry.get_or_insert_default("app1");
        let c2 = registry.get_or_insert_default("app2");
        assert!(!Arc::ptr_eq(&c1, &c2));
    }

    #[test]
    fn isolated_registries() {
        let r1 = ClientRegistry::new();
        let r2 = ClientRegistry::new();
        let c1 = r1.get_or_insert_default("app");
        let c2 = r2.get_or_insert_default("app");
        assert!(!Arc::ptr_eq(&c1, &c2));
    }

    #[test]
    fn concurrent_get_same_instance() {
        let registry = Arc::new(ClientRegistry::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = registry.clone();
                thread::spawn(move || registry.get_or_insert_default("racer"))
            })
            .collect();
        let first = registry.get_or_insert_default("racer");
        for h in handles {
            let c = h.join().unwrap();
            assert!(Arc::ptr_eq(&first, &c));
        }
    }
}
