/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// A JSON object as returned by the API
pub type JsonObject = Map<String, Value>;

// Looks up the key and applies the cast. A present value that fails the cast
// is logged and reported as absent.
fn lookup<'a, T>(
    json: &'a JsonObject,
    key: &str,
    expected: &str,
    cast: impl FnOnce(&'a Value) -> Option<T>,
) -> Option<T> {
    let value = json.get(key)?;
    let result = cast(value);
    if result.is_none() {
        log::debug!("Result field `{key}` is not {expected}: {value}");
    }
    result
}

// Raw value, any shape
pub fn value<'a>(json: &'a JsonObject, key: &str) -> Option<&'a Value> {
    json.get(key)
}

pub fn string<'a>(json: &'a JsonObject, key: &str) -> Option<&'a str> {
    lookup(json, key, "a string", Value::as_str)
}

// Integral numbers only, `1.5` does not count
pub fn integer(json: &JsonObject, key: &str) -> Option<i64> {
    lookup(json, key, "an integer", Value::as_i64)
}

pub fn float(json: &JsonObject, key: &str) -> Option<f64> {
    lookup(json, key, "a number", Value::as_f64)
}

pub fn object<'a>(json: &'a JsonObject, key: &str) -> Option<&'a JsonObject> {
    lookup(json, key, "an object", Value::as_object)
}

// Every element has to be a string or the whole list is absent
pub fn string_list<'a>(json: &'a JsonObject, key: &str) -> Option<Vec<&'a str>> {
    lookup(json, key, "a list of strings", to_string_list)
}

// Every value has to be a string or the whole map is absent
pub fn string_map<'a>(json: &'a JsonObject, key: &str) -> Option<HashMap<&'a str, &'a str>> {
    lookup(json, key, "a map of strings", to_string_map)
}

// Maps of string maps, dropping the entries that are not string maps
pub fn nested_string_map<'a>(
    json: &'a JsonObject,
    key: &str,
) -> Option<HashMap<&'a str, HashMap<&'a str, &'a str>>> {
    lookup(json, key, "an object", |v| {
        v.as_object().map(|outer| {
            outer
                .iter()
                .filter_map(|(k, v)| to_string_map(v).map(|inner| (k.as_str(), inner)))
                .collect()
        })
    })
}

// Versions come back as numbers but are exposed as text. `null` is absent.
pub fn version(json: &JsonObject, key: &str) -> Option<String> {
    if json.get(key)?.is_null() {
        return None;
    }
    lookup(json, key, "a version", |v| match v {
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    })
}

// Parses RFC 3339 timestamps like `2017-08-11T12:24:32Z`
pub fn timestamp(json: &JsonObject, key: &str) -> Option<DateTime<Utc>> {
    lookup(json, key, "an RFC 3339 timestamp", |v| {
        v.as_str()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    })
}

fn to_string_list(value: &Value) -> Option<Vec<&str>> {
    value.as_array()?.iter().map(Value::as_str).collect()
}

fn to_string_map(value: &Value) -> Option<HashMap<&str, &str>> {
    value
        .as_object()?
        .iter()
        .map(|(k, v)| v.as_str().map(|s| (k.as_str(), s)))
        .collect()
}
