/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1_1::errors::CloudinaryError;
use crate::v1_1::macros::{nested_result, result_fields};
use crate::v1_1::parsers::{self, JsonObject};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::HashMap;
use strum_macros::IntoStaticStr;

// Older responses carry the size under `length` instead of `bytes`
pub(crate) const LEGACY_LENGTH_KEY: &str = "length";

/// Read access to the JSON document behind a result.
///
/// Every typed getter in this crate is a lookup into [`ResultJson::result_json`].
pub trait ResultJson {
    fn result_json(&self) -> &JsonObject;

    /// Returns the raw value stored under `key`
    fn param(&self, key: &str) -> Option<&Value> {
        self.result_json().get(key)
    }
}

/// Fields shared by the asset describing results ([`UploadResult`](crate::v1_1::UploadResult)
/// and [`RenameResult`](crate::v1_1::RenameResult)).
///
/// See [Cloudinary Upload API Docs](https://cloudinary.com/documentation/image_upload_api_reference#upload_response)
/// for more details on the individual fields.
pub trait CommonResult: ResultJson {
    fn public_id(&self) -> Option<&str> {
        parsers::string(self.result_json(), CommonResultKey::PublicId.into())
    }

    fn format(&self) -> Option<&str> {
        parsers::string(self.result_json(), CommonResultKey::Format.into())
    }

    /// Version of the asset. Numeric versions are returned as their decimal text.
    fn version(&self) -> Option<String> {
        parsers::version(self.result_json(), CommonResultKey::Version.into())
    }

    fn resource_type(&self) -> Option<&str> {
        parsers::string(self.result_json(), CommonResultKey::ResourceType.into())
    }

    /// Delivery type, e.g. `upload` or `private`
    fn url_type(&self) -> Option<&str> {
        parsers::string(self.result_json(), CommonResultKey::UrlType.into())
    }

    fn created_at(&self) -> Option<&str> {
        parsers::string(self.result_json(), CommonResultKey::CreatedAt.into())
    }

    /// [`CommonResult::created_at`] parsed as an RFC 3339 timestamp
    fn created_at_date(&self) -> Option<DateTime<Utc>> {
        parsers::timestamp(self.result_json(), CommonResultKey::CreatedAt.into())
    }

    /// Size of the asset in bytes
    fn length(&self) -> Option<f64> {
        length(self.result_json())
    }

    fn width(&self) -> Option<i64> {
        parsers::integer(self.result_json(), CommonResultKey::Width.into())
    }

    fn height(&self) -> Option<i64> {
        parsers::integer(self.result_json(), CommonResultKey::Height.into())
    }

    fn url(&self) -> Option<&str> {
        parsers::string(self.result_json(), CommonResultKey::Url.into())
    }

    fn secure_url(&self) -> Option<&str> {
        parsers::string(self.result_json(), CommonResultKey::SecureUrl.into())
    }

    fn tags(&self) -> Option<Vec<&str>> {
        parsers::string_list(self.result_json(), CommonResultKey::Tags.into())
    }

    fn exif(&self) -> Option<HashMap<&str, &str>> {
        parsers::string_map(self.result_json(), CommonResultKey::Exif.into())
    }

    fn metadata(&self) -> Option<HashMap<&str, &str>> {
        parsers::string_map(self.result_json(), CommonResultKey::Metadata.into())
    }

    fn faces(&self) -> Option<&Value> {
        parsers::value(self.result_json(), CommonResultKey::Faces.into())
    }

    fn colors(&self) -> Option<&Value> {
        parsers::value(self.result_json(), CommonResultKey::Colors.into())
    }

    fn moderation(&self) -> Option<&Value> {
        parsers::value(self.result_json(), CommonResultKey::Moderation.into())
    }

    /// Perceptual hash of the image
    fn phash(&self) -> Option<&str> {
        parsers::string(self.result_json(), CommonResultKey::Phash.into())
    }

    /// Results of the add-ons that ran on the asset
    fn info(&self) -> Option<Info<'_>> {
        parsers::object(self.result_json(), CommonResultKey::Info.into()).map(Info::new)
    }
}

#[derive(Debug, Clone, Copy, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub(crate) enum CommonResultKey {
    PublicId,
    Format,
    Version,
    ResourceType,
    #[strum(to_string = "type")]
    UrlType,
    CreatedAt,
    #[strum(to_string = "bytes")]
    Length,
    Width,
    Height,
    Url,
    SecureUrl,
    Tags,
    Exif,
    Metadata,
    Faces,
    Colors,
    Moderation,
    Context,
    Phash,
    Info,
}

nested_result!(
    /// Add-on results found under `info`
    Info
);

impl Info<'_> {
    result_fields! {
        categorization: raw => InfoKey::Categorization;
        detection: raw => InfoKey::Detection;
        ocr: raw => InfoKey::Ocr;
    }

    /// Returns the result of any other add-on by name
    pub fn get(&self, add_on: &str) -> Option<&Value> {
        self.json.get(add_on)
    }
}

#[derive(Debug, Clone, Copy, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
enum InfoKey {
    Categorization,
    Detection,
    Ocr,
}

// Size in bytes, falling back to the older `length` key
pub(crate) fn length(json: &JsonObject) -> Option<f64> {
    parsers::float(json, CommonResultKey::Length.into())
        .or_else(|| parsers::float(json, LEGACY_LENGTH_KEY))
}

// Unwraps the top level document of a response
pub(crate) fn into_object(value: Value) -> Result<JsonObject, CloudinaryError> {
    match value {
        Value::Object(json) => Ok(json),
        Value::Null => Err(CloudinaryError::ResultNotAnObject("null")),
        Value::Bool(_) => Err(CloudinaryError::ResultNotAnObject("boolean")),
        Value::Number(_) => Err(CloudinaryError::ResultNotAnObject("number")),
        Value::String(_) => Err(CloudinaryError::ResultNotAnObject("string")),
        Value::Array(_) => Err(CloudinaryError::ResultNotAnObject("array")),
    }
}
