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

//! # Zi Metric Error Module
//!
//! This module defines the error type shared by schema construction and
//! parameter evaluation.
//!
//! ## Error Categories
//!
//! Errors fall into two disjoint classes:
//!
//! - **Schema**: authoring mistakes in a plugin's declared parameters (empty
//!   or duplicate names, misplaced session, broken connection run, invalid
//!   default, session fields unknown to the schema). A correctly written
//!   plugin never produces these, so callers usually abort startup on them.
//! - **Evaluation**: mistakes in the user's item configuration
//!   (`TooManyParameters`, `TooFewParameters`, `InvalidParams`,
//!   `InvalidParameter`). These are surfaced verbatim to the operator.
//!
//! ## Usage
//!
//! ```rust
//! use zimetric::errors::{Result, ZiError};
//!
//! fn port(value: &str) -> Result<()> {
//!     value
//!         .parse::<u16>()
//!         .map(|_| ())
//!         .map_err(|err| ZiError::validation(err.to_string()))
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout Zi Metric.
pub type Result<T> = std::result::Result<T, ZiError>;

/// Canonical error enumeration for Zi Metric.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZiError {
    /// The metric schema itself is malformed.
    #[error("schema error: {message}")]
    Schema { message: String },

    /// More raw parameters were passed than the metric declares.
    #[error("Too many parameters.")]
    TooManyParameters,

    /// A required parameter was not supplied.
    #[error("Too few parameters: {message}")]
    TooFewParameters { message: String },

    /// Parameters were combined in a way the metric does not accept.
    #[error("Invalid parameters: {message}")]
    InvalidParams { message: String },

    /// A parameter value was rejected by its validator.
    #[error("invalid {ordinal} parameter \"{name}\": {message}")]
    InvalidParameter {
        ordinal: String,
        name: String,
        message: String,
    },

    /// Plain validation failure, typically raised by a validator.
    #[error("{message}")]
    Validation { message: String },

    /// No metric is registered under the requested key.
    #[error("unknown metric: {0}")]
    UnknownMetric(String),

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl From<serde_json::Error> for ZiError {
    fn from(err: serde_json::Error) -> Self {
        ZiError::Serde(err.to_string())
    }
}

impl ZiError {
    /// Helper to construct schema errors.
    pub fn schema<T: Into<String>>(message: T) -> Self {
        ZiError::Schema {
            message: message.into(),
        }
    }

    /// Helper to construct simple validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        ZiError::Validation {
            message: message.into(),
        }
    }

    pub fn too_few_parameters<T: Into<String>>(message: T) -> Self {
        ZiError::TooFewParameters {
            message: message.into(),
        }
    }

    pub fn invalid_params<T: Into<String>>(message: T) -> Self {
        ZiError::InvalidParams {
            message: message.into(),
        }
    }

    /// Wraps a validator failure with the parameter's position and name.
    pub fn invalid_parameter(
        ordinal: impl Into<String>,
        name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ZiError::InvalidParameter {
            ordinal: ordinal.into(),
            name: name.into(),
            message: message.into(),
        }
    }

    /// Returns true for errors caused by the metric's own declaration rather
    /// than by user-supplied parameters.
    pub fn is_schema(&self) -> bool {
        matches!(self, ZiError::Schema { .. })
    }
}
