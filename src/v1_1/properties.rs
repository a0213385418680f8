/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Font weight of a generated text image. Defaults to `normal` on the service.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Bold,
}

/// Font style of a generated text image. Defaults to `normal` on the service.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum FontStyle {
    Normal,
    Italic,
}

/// Decoration drawn on the generated text. Defaults to `none` on the service.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum TextDecoration {
    None,
    Underline,
    Strikethrough,
}

/// Resource type segment used in API endpoint paths
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum ResourceType {
    Image,
    Video,
    Raw,
    Auto,
}
