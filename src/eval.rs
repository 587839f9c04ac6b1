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

//! # Zi Parameter Evaluation
//!
//! Turns the raw positional parameters of a metric request into a mapping of
//! parameter names to values.
//!
//! ## Evaluation Steps
//!
//! 1. Reject more parameters than declared unless the metric is variadic.
//! 2. If the first parameter is a session parameter, try to resolve the first
//!    raw value as a session name. An unknown name is not an error: the value
//!    is then treated as the first connection parameter.
//! 3. Walk the declared parameters, applying required/default/validator
//!    rules. With a session active, connection parameters must not be passed
//!    directly.
//! 4. Fill connection parameters from the session's fields.
//!
//! Evaluation stops at the first error and never returns partial results.

use std::collections::HashMap;

use crate::errors::{Result, ZiError};
use crate::metric::ZiMetric;
use crate::ordinal::ordinalize;
use crate::param::{ZiParam, ZiParamKind};
use crate::session::{ZiSessionRecord, ZiSessionSource};

impl ZiMetric {
    /// Evaluates raw parameters against this schema and the configured
    /// sessions.
    pub fn eval_params<S, Src>(
        &self,
        raw: &[S],
        sessions: &Src,
    ) -> Result<HashMap<String, String>>
    where
        S: AsRef<str>,
        Src: ZiSessionSource + ?Sized,
    {
        let result = self.eval_inner(raw, sessions);
        if let Err(err) = &result {
            log::debug!(
                "metric.params.reject: parameters rejected - description={:?}, raw_count={}, error={}",
                self.description(),
                raw.len(),
                err
            );
        }
        result
    }

    fn eval_inner<S, Src>(
        &self,
        raw: &[S],
        sessions: &Src,
    ) -> Result<HashMap<String, String>>
    where
        S: AsRef<str>,
        Src: ZiSessionSource + ?Sized,
    {
        let params = self.params();

        if !self.is_variadic() && raw.len() > params.len() {
            return Err(ZiError::TooManyParameters);
        }

        let session = match raw.first() {
            Some(name) if self.has_session() => {
                let name: &str = name.as_ref();
                let found = sessions.find_session(name);
                if found.is_none() {
                    log::debug!(
                        "metric.session.miss: no session with this name, using it as a connection parameter - session={:?}",
                        name
                    );
                }
                found
            }
            _ => None,
        };

        let mut out = HashMap::new();

        for (i, p) in params.iter().enumerate() {
            let kind = match p.kind() {
                ZiParamKind::Session if session.is_some() => continue,
                ZiParamKind::Session | ZiParamKind::Connection => ZiParamKind::Connection,
                ZiParamKind::General => ZiParamKind::General,
            };

            // Connection values are superseded by the session, so their
            // rules are applied while merging it instead.
            let apply_rules = !(session.is_some() && kind == ZiParamKind::Connection);
            let ordinal = ordinalize(i + 1);

            let supplied: Option<&str> = raw.get(i).map(|v| v.as_ref());
            let value = match supplied {
                Some(value) if !value.is_empty() => value,
                _ => {
                    if !apply_rules {
                        continue;
                    }
                    if p.is_required() {
                        return Err(required_error(&ordinal, p));
                    }
                    match p.default_value() {
                        Some(default) => default,
                        None => continue,
                    }
                }
            };

            if apply_rules {
                p.validate(value).map_err(|err| {
                    ZiError::invalid_parameter(&ordinal, p.name(), err.to_string())
                })?;
            }

            match kind {
                ZiParamKind::General => {
                    out.insert(p.name().to_string(), value.to_string());
                }
                ZiParamKind::Connection | ZiParamKind::Session => {
                    if session.is_some() {
                        return Err(ZiError::invalid_params(format!(
                            "{} parameter \"{}\" cannot be passed along with session",
                            ordinal,
                            p.name()
                        )));
                    }
                    out.insert(p.name().to_string(), value.to_string());
                }
            }
        }

        if let Some(session) = session {
            merge_with_session(&mut out, params, session)?;
        }

        Ok(out)
    }
}

fn required_error(ordinal: &str, p: &ZiParam) -> ZiError {
    ZiError::too_few_parameters(format!("{} parameter \"{}\" is required", ordinal, p.name()))
}

/// Fills connection parameters with the session's fields, overwriting
/// anything already in `out`.
fn merge_with_session<R>(
    out: &mut HashMap<String, String>,
    params: &[ZiParam],
    session: &R,
) -> Result<()>
where
    R: ZiSessionRecord + ?Sized,
{
    for field in session.field_names() {
        let (i, p) = params
            .iter()
            .enumerate()
            .find(|(_, p)| p.kind().is_connection() && p.name() == field)
            .ok_or_else(|| {
                ZiError::schema(format!(
                    "cannot find connection parameter \"{}\" in schema",
                    field
                ))
            })?;
        let ordinal = ordinalize(i + 1);

        let mut value = session.field_value(field).unwrap_or_default();
        if value.is_empty() {
            if p.is_required() {
                return Err(required_error(&ordinal, p));
            }
            if let Some(default) = p.default_value() {
                value = default;
            }
        }

        if !value.is_empty() {
            p.validate(value).map_err(|err| {
                ZiError::invalid_parameter(&ordinal, p.name(), err.to_string())
            })?;
        }

        out.insert(p.name().to_string(), value.to_string());
    }

    Ok(())
}
