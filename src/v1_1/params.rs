/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1_1::parsers::JsonObject;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parameters to be sent with a request to the API.
///
/// Values are not validated, whatever is set is sent and checked by the
/// service. Setting a key that is already present replaces its value.
#[derive(Serialize, Deserialize, Default, Clone, PartialEq, Debug)]
#[serde(transparent)]
pub struct RequestParams {
    params: JsonObject,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a complete set of parameters
    pub fn from_params(params: JsonObject) -> Self {
        Self { params }
    }

    /// Sets `key` to `value`, replacing any previous value
    pub fn set_param(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        log::trace!("Setting request param `{key}` to {value}");
        if let Some(previous) = self.params.insert(key, value) {
            log::trace!("Replaced previous value {previous}");
        }
        self
    }

    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    pub fn params(&self) -> &JsonObject {
        &self.params
    }

    pub fn into_params(self) -> JsonObject {
        self.params
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Copies all of `other` into this set. Values from `other` win on conflicts.
    pub fn merge(&mut self, other: RequestParams) -> &mut Self {
        for (key, value) in other.params {
            self.set_param(key, value);
        }
        self
    }

    /// Flattens the parameters into form fields, ordered by key.
    ///
    /// Strings are sent as is and lists are joined with `,`. A list or object
    /// inside a list is sent as its JSON text. `null` values are left out,
    /// also inside lists.
    pub fn to_form_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .params
            .iter()
            .filter_map(|(key, value)| form_value(value).map(|v| (key.clone(), v)))
            .collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        pairs
    }

    /// Url encoded form of [`RequestParams::to_form_pairs`]
    pub fn to_query_string(&self) -> String {
        self.to_form_pairs()
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl From<JsonObject> for RequestParams {
    fn from(params: JsonObject) -> Self {
        Self::from_params(params)
    }
}

fn form_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(form_list_item)
                .collect::<Vec<_>>()
                .join(","),
        ),
        other => form_list_item(other),
    }
}

// Lists inside a list are not flattened, they are sent as JSON text
fn form_list_item(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
