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

//! # Zi Validator Module
//!
//! A validator checks a single raw parameter value. Plugins supply their own
//! implementations; the engine only calls `validate` and, on failure, wraps
//! the returned message with the parameter's position and name.
//!
//! Plain closures can be used directly:
//!
//! ```rust
//! use zimetric::{ZiError, ZiParam};
//!
//! let port = ZiParam::connection("Port").with_validator(|value: &str| {
//!     value
//!         .parse::<u16>()
//!         .map(|_| ())
//!         .map_err(|_| ZiError::validation("port must be a number in 0-65535"))
//! });
//! ```

use std::sync::Arc;

use crate::errors::Result;

/// Contract for parameter value validators.
///
/// Validators are shared by immutable schemas across threads, so they must be
/// `Send + Sync`.
pub trait ZiValidator: Send + Sync {
    fn validate(&self, value: &str) -> Result<()>;
}

impl<F> ZiValidator for F
where
    F: Fn(&str) -> Result<()> + Send + Sync,
{
    fn validate(&self, value: &str) -> Result<()> {
        self(value)
    }
}

/// Shared handle to a validator owned by a parameter.
pub type ZiValidatorRef = Arc<dyn ZiValidator>;
