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

//! # Zi Parameter Module
//!
//! Describes a single named metric parameter: its kind, whether it is
//! required, its default value and its validator.
//!
//! Parameters are declared through a fluent [`ZiParamBuilder`]. Builder steps
//! never fail on their own; the first authoring mistake is remembered and
//! reported by [`ZiParamBuilder::build`] (or by [`crate::ZiMetric::new`],
//! which builds every parameter it is given).
//!
//! ```rust
//! use zimetric::ZiParam;
//!
//! let uri = ZiParam::connection("URI").as_session().with_default("tcp://localhost:3306");
//! let user = ZiParam::connection("User").required();
//! let db = ZiParam::general("Database").with_default("mysql");
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ZiError};
use crate::validator::{ZiValidator, ZiValidatorRef};

/// Role a parameter plays when a metric is evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZiParamKind {
    /// Session name, or the first connection parameter when no session matches.
    Session,
    /// Part of the connection settings a session can substitute.
    Connection,
    /// Plain metric argument.
    General,
}

impl ZiParamKind {
    /// Session and connection parameters both belong to the connection run.
    pub fn is_connection(&self) -> bool {
        matches!(self, ZiParamKind::Session | ZiParamKind::Connection)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ZiParamKind::Session => "session",
            ZiParamKind::Connection => "connection",
            ZiParamKind::General => "general",
        }
    }
}

/// Immutable, validated parameter descriptor owned by a [`crate::ZiMetric`].
#[derive(Clone)]
pub struct ZiParam {
    name: String,
    kind: ZiParamKind,
    required: bool,
    default_value: Option<String>,
    validator: Option<ZiValidatorRef>,
}

impl ZiParam {
    /// Starts declaring a general parameter.
    pub fn general(name: impl Into<String>) -> ZiParamBuilder {
        ZiParamBuilder::new(name.into(), ZiParamKind::General)
    }

    /// Starts declaring a connection parameter.
    pub fn connection(name: impl Into<String>) -> ZiParamBuilder {
        ZiParamBuilder::new(name.into(), ZiParamKind::Connection)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ZiParamKind {
        self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn has_validator(&self) -> bool {
        self.validator.is_some()
    }

    /// Runs the validator, if any. Parameters without one accept any value.
    pub fn validate(&self, value: &str) -> Result<()> {
        match &self.validator {
            Some(validator) => validator.validate(value),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for ZiParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZiParam")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("required", &self.required)
            .field("default_value", &self.default_value)
            .field("validator", &self.validator.is_some())
            .finish()
    }
}

/// Fluent builder for [`ZiParam`].
#[derive(Clone)]
pub struct ZiParamBuilder {
    name: String,
    kind: ZiParamKind,
    required: bool,
    default_value: Option<String>,
    validator: Option<ZiValidatorRef>,
    fault: Option<String>,
}

impl ZiParamBuilder {
    fn new(name: String, kind: ZiParamKind) -> Self {
        let fault = if name.is_empty() {
            Some("name cannot be empty".to_string())
        } else {
            None
        };

        ZiParamBuilder {
            name,
            kind,
            required: false,
            default_value: None,
            validator: None,
            fault,
        }
    }

    fn record_fault(&mut self, message: String) {
        if self.fault.is_none() {
            self.fault = Some(message);
        }
    }

    /// Turns a connection parameter into a dual purpose parameter that holds
    /// either a session name or the first connection value.
    pub fn as_session(mut self) -> Self {
        if self.kind == ZiParamKind::Connection {
            self.kind = ZiParamKind::Session;
        } else {
            let message = format!(
                "only connection typed parameter can be transformed to session, got {} parameter \"{}\"",
                self.kind.as_str(),
                self.name
            );
            self.record_fault(message);
        }
        self
    }

    /// Sets the value used when the parameter is omitted.
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        if self.required {
            let message = format!(
                "default value cannot be applied to required parameter \"{}\"",
                self.name
            );
            self.record_fault(message);
        } else {
            self.default_value = Some(value.into());
        }
        self
    }

    /// Sets or replaces the validator.
    pub fn with_validator<V>(self, validator: V) -> Self
    where
        V: ZiValidator + 'static,
    {
        self.with_shared_validator(Arc::new(validator))
    }

    /// Sets or replaces the validator with one shared between parameters.
    pub fn with_shared_validator(mut self, validator: ZiValidatorRef) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Makes the parameter mandatory.
    pub fn required(mut self) -> Self {
        if self.default_value.is_some() {
            let message = format!(
                "required parameter \"{}\" cannot have a default value",
                self.name
            );
            self.record_fault(message);
        } else {
            self.required = true;
        }
        self
    }

    /// Finishes the declaration, reporting the first authoring mistake made
    /// while building it.
    pub fn build(self) -> Result<ZiParam> {
        if let Some(message) = self.fault {
            return Err(ZiError::schema(message));
        }

        Ok(ZiParam {
            name: self.name,
            kind: self.kind,
            required: self.required,
            default_value: self.default_value,
            validator: self.validator,
        })
    }
}

impl fmt::Debug for ZiParamBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZiParamBuilder")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("required", &self.required)
            .field("default_value", &self.default_value)
            .field("validator", &self.validator.is_some())
            .field("fault", &self.fault)
            .finish()
    }
}
