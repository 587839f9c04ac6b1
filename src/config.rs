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

//! Declarative metric schemas.
//!
//! Plugins that keep their metric table in a JSON document describe each
//! metric with a [`ZiMetricConfig`]:
//!
//! ```json
//! {
//!   "description": "Returns MySQL status.",
//!   "params": [
//!     {"name": "URI", "kind": "session", "default": "tcp://localhost:3306"},
//!     {"name": "User", "kind": "connection"},
//!     {"name": "Key", "required": true}
//!   ]
//! }
//! ```
//!
//! Validators are code, so they are attached by name when the schema is built.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{Result, ZiError};
use crate::metric::ZiMetric;
use crate::param::{ZiParam, ZiParamBuilder, ZiParamKind};
use crate::registry::ZiMetricSet;
use crate::validator::ZiValidatorRef;

fn default_kind() -> ZiParamKind {
    ZiParamKind::General
}

/// Declaration of one parameter. Omitted fields take the defaults of a plain
/// optional general parameter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZiParamConfig {
    pub name: String,
    #[serde(default = "default_kind")]
    pub kind: ZiParamKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub default: Option<String>,
}

impl ZiParamConfig {
    /// Replays the declaration through the parameter builder so the same
    /// authoring rules apply.
    pub fn to_builder(&self) -> ZiParamBuilder {
        let mut builder = match self.kind {
            ZiParamKind::General => ZiParam::general(self.name.clone()),
            ZiParamKind::Connection => ZiParam::connection(self.name.clone()),
            ZiParamKind::Session => ZiParam::connection(self.name.clone()).as_session(),
        };
        if let Some(default) = &self.default {
            builder = builder.with_default(default.clone());
        }
        if self.required {
            builder = builder.required();
        }
        builder
    }
}

/// Declaration of one metric.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZiMetricConfig {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub params: Vec<ZiParamConfig>,
    #[serde(default)]
    pub variadic: bool,
}

impl ZiMetricConfig {
    pub fn from_json(value: &Value) -> Result<Self> {
        Ok(serde_json::from_value(value.clone())?)
    }

    /// Builds the schema without validators.
    pub fn build(&self) -> Result<ZiMetric> {
        self.build_with(|_| None)
    }

    /// Builds the schema, asking `validators` for each parameter's validator
    /// by parameter name.
    pub fn build_with<F>(&self, validators: F) -> Result<ZiMetric>
    where
        F: Fn(&str) -> Option<ZiValidatorRef>,
    {
        let params = self.params.iter().map(|p| {
            let builder = p.to_builder();
            match validators(p.name.as_str()) {
                Some(validator) => builder.with_shared_validator(validator),
                None => builder,
            }
        });
        ZiMetric::new(self.description.clone(), params, self.variadic)
    }
}

/// Declaration of a whole metric set, keyed by metric key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZiMetricSetConfig {
    pub metrics: BTreeMap<String, ZiMetricConfig>,
}

impl ZiMetricSetConfig {
    pub fn from_json(value: &Value) -> Result<Self> {
        Ok(serde_json::from_value(value.clone())?)
    }

    pub fn build(&self) -> Result<ZiMetricSet> {
        self.build_with(|_, _| None)
    }

    /// Builds every metric; `validators` receives the metric key and the
    /// parameter name.
    pub fn build_with<F>(&self, validators: F) -> Result<ZiMetricSet>
    where
        F: Fn(&str, &str) -> Option<ZiValidatorRef>,
    {
        let mut set = ZiMetricSet::new();
        for (key, metric) in &self.metrics {
            let built = metric
                .build_with(|param| validators(key.as_str(), param))
                .map_err(|err| match err {
                    ZiError::Schema { message } => {
                        ZiError::schema(format!("metric \"{}\": {}", key, message))
                    }
                    other => other,
                })?;
            set.register(key, built)?;
        }
        Ok(set)
    }
}
