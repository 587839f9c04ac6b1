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

//! # Zi Session Module
//!
//! Sessions are named bundles of connection settings kept in the plugin
//! configuration. A metric whose first parameter is a session parameter
//! accepts a session name in place of the individual connection values.
//!
//! The engine only needs two capabilities:
//!
//! - [`ZiSessionSource`]: look a session up by its exact name
//! - [`ZiSessionRecord`]: enumerate a session's fields and read them by name
//!
//! Plugins with a typed session struct can derive the record accessors with
//! [`zi_session_record!`](crate::zi_session_record); plugins that keep
//! sessions as loose key/value maps can use [`ZiSession`] and
//! [`ZiSessionTable`].

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::Result;

/// Field access for one session. Field names match connection parameter names.
pub trait ZiSessionRecord {
    /// Names of every field the session exposes, in a stable order.
    fn field_names(&self) -> Vec<&str>;

    /// Value of a field, or `None` when the session has no such field.
    fn field_value(&self, name: &str) -> Option<&str>;
}

/// Keyed collection of sessions.
pub trait ZiSessionSource {
    type Record: ZiSessionRecord;

    /// Returns the session registered under exactly `name`.
    fn find_session(&self, name: &str) -> Option<&Self::Record>;
}

impl<R: ZiSessionRecord, H: BuildHasher> ZiSessionSource for HashMap<String, R, H> {
    type Record = R;

    fn find_session(&self, name: &str) -> Option<&R> {
        self.get(name)
    }
}

impl<R: ZiSessionRecord> ZiSessionSource for BTreeMap<String, R> {
    type Record = R;

    fn find_session(&self, name: &str) -> Option<&R> {
        self.get(name)
    }
}

/// Session source for plugins that have no sessions configured.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZiNoSessions;

impl ZiSessionSource for ZiNoSessions {
    type Record = ZiSession;

    fn find_session(&self, _name: &str) -> Option<&ZiSession> {
        None
    }
}

/// Untyped session: a flat map of field names to values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZiSession {
    fields: BTreeMap<String, String>,
}

impl ZiSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a field, returning the session for chaining.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ZiSession
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        ZiSession {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ZiSessionRecord for ZiSession {
    fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }

    fn field_value(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Named sessions as they appear in a plugin configuration block:
///
/// ```json
/// { "prod": { "URI": "tcp://db:3306", "User": "zbx", "Password": "secret" } }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZiSessionTable {
    sessions: BTreeMap<String, ZiSession>,
}

impl ZiSessionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, session: ZiSession) {
        self.sessions.insert(name.into(), session);
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Session names in ascending order.
    pub fn names(&self) -> Vec<&str> {
        self.sessions.keys().map(String::as_str).collect()
    }

    /// Parses a session table from a JSON object of objects.
    pub fn from_json(value: &Value) -> Result<Self> {
        let table: ZiSessionTable = serde_json::from_value(value.clone())?;
        log::debug!(
            "metric.sessions.load: session table parsed - sessions={}",
            table.len()
        );
        Ok(table)
    }
}

impl ZiSessionSource for ZiSessionTable {
    type Record = ZiSession;

    fn find_session(&self, name: &str) -> Option<&ZiSession> {
        self.sessions.get(name)
    }
}

/// Implements [`ZiSessionRecord`] for a struct of `String` fields by listing
/// each parameter name next to the field that holds it.
///
/// ```rust
/// use zimetric::zi_session_record;
///
/// struct MySqlSession {
///     uri: String,
///     user: String,
///     password: String,
/// }
///
/// zi_session_record!(MySqlSession {
///     "URI" => uri,
///     "User" => user,
///     "Password" => password,
/// });
/// ```
#[macro_export]
macro_rules! zi_session_record {
    ($ty:ty { $($param:literal => $field:ident),+ $(,)? }) => {
        impl $crate::session::ZiSessionRecord for $ty {
            fn field_names(&self) -> ::std::vec::Vec<&str> {
                ::std::vec![$($param),+]
            }

            fn field_value(&self, name: &str) -> ::std::option::Option<&str> {
                match name {
                    $($param => ::std::option::Option::Some(self.$field.as_str()),)+
                    _ => ::std::option::Option::None,
                }
            }
        }
    };
}
