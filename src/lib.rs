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

//! # Zi Metric Library
//!
//! Parameter schemas for monitoring plugin metrics. A plugin declares, once,
//! the ordered parameters each metric key accepts; at collection time the
//! raw parameters of a request are evaluated against that schema and the
//! configured sessions, producing a name-to-value mapping or a precise error.
//!
//! ## Module Overview
//!
//! - **param**: parameter descriptors and their builder
//! - **validator**: value validator contract
//! - **metric**: metric schema and its construction rules
//! - **eval**: runtime evaluation of raw parameters
//! - **session**: session lookup capabilities
//! - **registry**: metric set keyed by metric key
//! - **config**: JSON-declared schemas
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use zimetric::{ZiMetric, ZiMetricSet, ZiParam, ZiSession};
//!
//! let mut metrics = ZiMetricSet::new();
//! metrics.register(
//!     "mysql.ping",
//!     ZiMetric::new(
//!         "Tests if connection is alive or not.",
//!         vec![
//!             ZiParam::connection("URI").as_session(),
//!             ZiParam::connection("User"),
//!             ZiParam::connection("Password"),
//!         ],
//!         false,
//!     )?,
//! )?;
//!
//! let mut sessions = HashMap::new();
//! sessions.insert(
//!     "prod".to_string(),
//!     ZiSession::new().with_field("URI", "tcp://db:3306").with_field("User", "zbx"),
//! );
//!
//! let params = metrics.eval_params("mysql.ping", &["prod"], &sessions)?;
//! assert_eq!(params["User"], "zbx");
//! ```
//!
//! ## Error Handling
//!
//! All operations return `Result<T, ZiError>`. Mistakes in a schema
//! declaration surface as `ZiError::Schema`; mistakes in request parameters
//! as `TooManyParameters`, `TooFewParameters`, `InvalidParams` or
//! `InvalidParameter`.

pub mod errors;
pub mod ordinal;
pub mod validator;
pub mod param;
pub mod metric;
pub mod eval;
pub mod session;
pub mod registry;
pub mod config;

pub use errors::{Result, ZiError};
pub use ordinal::ordinalize;
pub use validator::{ZiValidator, ZiValidatorRef};
pub use param::{ZiParam, ZiParamBuilder, ZiParamKind};
pub use metric::ZiMetric;
pub use session::{ZiNoSessions, ZiSession, ZiSessionRecord, ZiSessionSource, ZiSessionTable};
pub use registry::ZiMetricSet;
pub use config::{ZiMetricConfig, ZiMetricSetConfig, ZiParamConfig};
