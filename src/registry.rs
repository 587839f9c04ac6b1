//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi.
//! The Zi project belongs to the Dunimd project team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Metric Set Module
//!
//! This module provides the metric set of a plugin, mapping metric keys to
//! their parameter schemas.
//!
//! ## Registry Operations
//!
//! - Register metric schemas under unique keys
//! - List keys and descriptions for plugin registration
//! - Evaluate request parameters for a key

use std::collections::{BTreeMap, HashMap};

use crate::errors::{Result, ZiError};
use crate::metric::ZiMetric;
use crate::session::ZiSessionSource;

/// Registry mapping metric keys to their schemas. Keys are kept sorted so
/// that listings are reproducible.
#[derive(Clone, Debug, Default)]
pub struct ZiMetricSet {
    inner: BTreeMap<String, ZiMetric>,
}

impl ZiMetricSet {
    pub fn new() -> Self {
        ZiMetricSet {
            inner: BTreeMap::new(),
        }
    }

    /// Registers a schema under `key`. Each key can be registered once.
    pub fn register(&mut self, key: &str, metric: ZiMetric) -> Result<()> {
        if self.inner.contains_key(key) {
            return Err(ZiError::schema(format!(
                "metric \"{}\" is already registered",
                key
            )));
        }

        log::debug!(
            "metric.set.register: metric registered - key={}, params={}",
            key,
            metric.params().len()
        );
        self.inner.insert(key.to_string(), metric);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<&ZiMetric> {
        self.inner
            .get(key)
            .ok_or_else(|| ZiError::UnknownMetric(key.to_string()))
    }

    pub fn keys(&self) -> Vec<&str> {
        self.inner.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Flattens the set into `[key1, description1, key2, description2, ...]`
    /// in ascending key order, the shape expected by plugin registration.
    pub fn list(&self) -> Vec<String> {
        let mut list = Vec::with_capacity(self.inner.len() * 2);
        for (key, metric) in &self.inner {
            list.push(key.clone());
            list.push(metric.description().to_string());
        }
        list
    }

    /// Builds a set from `(key, metric)` pairs, rejecting duplicate keys the
    /// same way [`ZiMetricSet::register`] does.
    pub fn from_pairs<I, K>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, ZiMetric)>,
        K: AsRef<str>,
    {
        let mut set = ZiMetricSet::new();
        for (key, metric) in pairs {
            set.register(key.as_ref(), metric)?;
        }
        Ok(set)
    }

    /// Evaluates raw parameters for the metric registered under `key`.
    pub fn eval_params<S, Src>(
        &self,
        key: &str,
        raw: &[S],
        sessions: &Src,
    ) -> Result<HashMap<String, String>>
    where
        S: AsRef<str>,
        Src: ZiSessionSource + ?Sized,
    {
        self.get(key)?.eval_params(raw, sessions)
    }
}
