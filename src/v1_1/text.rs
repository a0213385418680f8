/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1_1::parsers::JsonObject;
use crate::v1_1::RequestParams;
use serde::Serialize;
use serde_json::Value;
use strum_macros::IntoStaticStr;

/// Parameters for a request to generate an image of a text string.
///
/// ```rust
/// use cloudinary::v1_1::{FontWeight, TextDecoration, TextRequestParams};
///
/// let params = TextRequestParams::new("Sample text")
///     .set_font_family("Arial")
///     .set_font_size_from_int(24)
///     .set_font_weight(FontWeight::Bold)
///     .set_text_decoration(TextDecoration::Underline);
/// assert_eq!(params.params().len(), 5);
/// ```
///
/// The enum backed setters also take plain strings, those are sent without
/// any checks.
///
/// See [Cloudinary Upload API Docs](https://cloudinary.com/documentation/image_upload_api_reference#text_method)
/// for more details on the individual parameters.
#[derive(Serialize, Default, Clone, PartialEq, Debug)]
#[serde(transparent)]
pub struct TextRequestParams {
    params: RequestParams,
}

impl TextRequestParams {
    /// Action segment of the text endpoint url
    pub const ACTION: &'static str = "text";

    /// Creates parameters for the given text string
    pub fn new(text: impl Into<String>) -> Self {
        Self::default().set(TextParam::Text, Value::String(text.into()))
    }

    /// Starts from a complete set of parameters
    pub fn from_params(params: JsonObject) -> Self {
        Self {
            params: RequestParams::from_params(params),
        }
    }

    /// Identifier used to access the generated image. The service generates
    /// one when not set.
    pub fn set_public_id(self, public_id: impl Into<String>) -> Self {
        self.set(TextParam::PublicId, Value::String(public_id.into()))
    }

    pub fn set_font_family(self, font_family: impl Into<String>) -> Self {
        self.set(TextParam::FontFamily, Value::String(font_family.into()))
    }

    /// Font size in points. Defaults to 12.
    pub fn set_font_size(self, font_size: impl Into<String>) -> Self {
        self.set(TextParam::FontSize, Value::String(font_size.into()))
    }

    pub fn set_font_size_from_int(self, font_size: i64) -> Self {
        self.set_font_size(font_size.to_string())
    }

    /// Name or RGB value of the font color, e.g. `red` or `#ff0000`. Defaults
    /// to black.
    pub fn set_font_color(self, font_color: impl Into<String>) -> Self {
        self.set(TextParam::FontColor, Value::String(font_color.into()))
    }

    /// Takes a [`FontWeight`](crate::v1_1::FontWeight) or any string
    pub fn set_font_weight(self, font_weight: impl AsRef<str>) -> Self {
        self.set(TextParam::FontWeight, Value::from(font_weight.as_ref()))
    }

    /// Takes a [`FontStyle`](crate::v1_1::FontStyle) or any string
    pub fn set_font_style(self, font_style: impl AsRef<str>) -> Self {
        self.set(TextParam::FontStyle, Value::from(font_style.as_ref()))
    }

    /// Name or RGB value of the background color. Defaults to transparent.
    pub fn set_background(self, background: impl Into<String>) -> Self {
        self.set(TextParam::Background, Value::String(background.into()))
    }

    /// Text opacity from 0 (invisible) to 100. Defaults to 100.
    pub fn set_opacity(self, opacity: i64) -> Self {
        self.set(TextParam::Opacity, Value::from(opacity))
    }

    /// Takes a [`TextDecoration`](crate::v1_1::TextDecoration) or any string
    pub fn set_text_decoration(self, text_decoration: impl AsRef<str>) -> Self {
        self.set(TextParam::TextDecoration, Value::from(text_decoration.as_ref()))
    }

    pub fn params(&self) -> &RequestParams {
        &self.params
    }

    fn set(mut self, param: TextParam, value: Value) -> Self {
        let key: &'static str = param.into();
        self.params.set_param(key, value);
        self
    }
}

impl From<TextRequestParams> for RequestParams {
    fn from(text_params: TextRequestParams) -> Self {
        text_params.params
    }
}

impl AsRef<RequestParams> for TextRequestParams {
    fn as_ref(&self) -> &RequestParams {
        &self.params
    }
}

#[derive(Debug, Clone, Copy, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
enum TextParam {
    Text,
    PublicId,
    FontFamily,
    FontSize,
    FontColor,
    FontWeight,
    FontStyle,
    Background,
    Opacity,
    TextDecoration,
}
