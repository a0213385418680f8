/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1_1::macros::{nested_result, owned_result, result_fields};
use crate::v1_1::result::{self, CommonResultKey};
use crate::v1_1::ResultJson;
use serde_json::Value;
use strum_macros::IntoStaticStr;

owned_result!(
    /// Holds information returned after renaming an asset.
    ///
    /// See [Cloudinary Upload API Docs](https://cloudinary.com/documentation/image_upload_api_reference#rename_method)
    /// for more details on the individual fields.
    RenameResult
);

impl RenameResult {
    result_fields! {
        next_cursor: str => RenameResultKey::NextCursor;
        context: raw => CommonResultKey::Context;
        derived: nested Derived => RenameResultKey::Derived;
        predominant: nested Predominant => RenameResultKey::Predominant;
        coordinates: nested Coordinates => RenameResultKey::Coordinates;
    }

    /// Every derived asset, whether the response holds a single object or a list.
    ///
    /// List elements that are not objects are skipped.
    pub fn derived_list(&self) -> Option<Vec<Derived<'_>>> {
        let key: &str = RenameResultKey::Derived.into();
        match self.param(key)? {
            Value::Object(json) => Some(vec![Derived::new(json)]),
            Value::Array(items) => Some(
                items
                    .iter()
                    .filter_map(Value::as_object)
                    .map(Derived::new)
                    .collect(),
            ),
            other => {
                log::debug!("Result field `{key}` is not an object or list: {other}");
                None
            }
        }
    }
}

#[derive(Debug, Clone, Copy, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
enum RenameResultKey {
    NextCursor,
    Derived,
    Predominant,
    Coordinates,
}

nested_result!(
    /// Coordinates of regions of interest in the image
    Coordinates
);

impl Coordinates<'_> {
    result_fields! {
        /// Custom coordinates set at upload
        custom: raw => CoordinatesKey::Custom;
        /// Detected face coordinates
        faces: raw => CoordinatesKey::Faces;
    }
}

#[derive(Debug, Clone, Copy, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
enum CoordinatesKey {
    Custom,
    Faces,
}

nested_result!(
    /// Predominant colors, as computed by each color model
    Predominant
);

impl Predominant<'_> {
    result_fields! {
        google: raw => PredominantKey::Google;
    }
}

#[derive(Debug, Clone, Copy, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
enum PredominantKey {
    Google,
}

nested_result!(
    /// A derived version of the asset
    Derived
);

impl Derived<'_> {
    result_fields! {
        transformation: str => DerivedKey::Transformation;
        format: str => CommonResultKey::Format;
        /// Derived asset identifier
        id: str => DerivedKey::Id;
        url: str => CommonResultKey::Url;
        secure_url: str => CommonResultKey::SecureUrl;
    }

    /// Size of the derived asset in bytes
    pub fn length(&self) -> Option<f64> {
        result::length(self.json)
    }
}

#[derive(Debug, Clone, Copy, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
enum DerivedKey {
    Transformation,
    Id,
}
