//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi.
//! The Zi project belongs to the Dunimd Team.
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

//! # Zi Metric Module
//!
//! A [`ZiMetric`] is the parameter schema of one metric key: a description,
//! the ordered list of parameters and whether extra parameters are tolerated.
//!
//! ## Schema Rules
//!
//! [`ZiMetric::new`] rejects a schema that breaks any of the following:
//!
//! 1. Parameter names are non-empty and unique.
//! 2. A session parameter can only be placed first.
//! 3. Connection parameters are placed in a row, starting at the first
//!    position.
//! 4. A default value passes the parameter's own validator.
//!
//! Evaluation relies on these rules, so they are checked once here and never
//! again.

use std::collections::HashSet;

use serde_json::{json, Value};

use crate::errors::{Result, ZiError};
use crate::ordinal::ordinalize;
use crate::param::{ZiParam, ZiParamBuilder, ZiParamKind};

/// Immutable parameter schema of a metric.
#[derive(Clone, Debug)]
pub struct ZiMetric {
    description: String,
    params: Vec<ZiParam>,
    variadic: bool,
}

impl ZiMetric {
    /// Builds every parameter and checks the schema rules.
    pub fn new<I>(description: impl Into<String>, params: I, variadic: bool) -> Result<Self>
    where
        I: IntoIterator<Item = ZiParamBuilder>,
    {
        let description = description.into();
        let params = params
            .into_iter()
            .map(ZiParamBuilder::build)
            .collect::<Result<Vec<_>>>()
            .map_err(|err| {
                log::error!(
                    "metric.schema.invalid: parameter declaration rejected - description={:?}, error={}",
                    description,
                    err
                );
                err
            })?;

        if let Err(err) = check_schema(&params) {
            log::error!(
                "metric.schema.invalid: schema rules violated - description={:?}, error={}",
                description,
                err
            );
            return Err(err);
        }

        log::debug!(
            "metric.schema.build: schema accepted - description={:?}, params={}, variadic={}",
            description,
            params.len(),
            variadic
        );

        Ok(ZiMetric {
            description,
            params,
            variadic,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn params(&self) -> &[ZiParam] {
        &self.params
    }

    /// Looks a parameter up by name.
    pub fn param(&self, name: &str) -> Option<&ZiParam> {
        self.params.iter().find(|p| p.name() == name)
    }

    pub fn is_variadic(&self) -> bool {
        self.variadic
    }

    /// True when the first parameter accepts a session name.
    pub fn has_session(&self) -> bool {
        self.params
            .first()
            .map_or(false, |p| p.kind() == ZiParamKind::Session)
    }

    /// Describes the schema as JSON for diagnostics. Validators are reported
    /// only by presence.
    pub fn as_json(&self) -> Value {
        let params: Vec<Value> = self
            .params
            .iter()
            .map(|p| {
                json!({
                    "name": p.name(),
                    "kind": p.kind(),
                    "required": p.is_required(),
                    "default": p.default_value(),
                    "validated": p.has_validator(),
                })
            })
            .collect();

        json!({
            "description": self.description,
            "params": params,
            "variadic": self.variadic,
        })
    }
}

fn check_schema(params: &[ZiParam]) -> Result<()> {
    // Index of the last parameter of the connection run; -1 while none.
    let mut conn_idx: isize = match params.first() {
        Some(first) if first.kind().is_connection() => 0,
        _ => -1,
    };
    let mut names = HashSet::new();

    for (i, p) in params.iter().enumerate() {
        if !names.insert(p.name()) {
            return Err(ZiError::schema(format!(
                "name of parameter \"{}\" must be unique",
                p.name()
            )));
        }

        if i > 0 && p.kind() == ZiParamKind::Session {
            return Err(ZiError::schema(format!(
                "session must be placed first, found {} parameter \"{}\"",
                ordinalize(i + 1),
                p.name()
            )));
        }

        if p.kind() == ZiParamKind::Connection {
            let i = i as isize;
            if i - conn_idx > 1 {
                return Err(ZiError::schema(format!(
                    "parameters describing a connection must be placed in a row, {} parameter \"{}\" breaks it",
                    ordinalize(i as usize + 1),
                    p.name()
                )));
            }
            conn_idx = i;
        }

        if let Some(default) = p.default_value() {
            if let Err(err) = p.validate(default) {
                return Err(ZiError::schema(format!(
                    "invalid default value \"{}\" for {} parameter \"{}\": {}",
                    default,
                    ordinalize(i + 1),
                    p.name(),
                    err
                )));
            }
        }
    }

    Ok(())
}
