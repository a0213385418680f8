/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use thiserror::Error;

/// Error conditions that can be returned
///
/// Reading a field from a result never produces one of these. A missing or
/// mis-shaped field is reported as `None` by the accessor instead.
#[derive(Error, Debug)]
pub enum CloudinaryError {
    #[error("Deserialization error")]
    Deserialization(#[from] serde_json::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("Result document is not a JSON object, found: {0}")]
    ResultNotAnObject(&'static str),

    #[error("Invalid configuration url: {0}")]
    InvalidConfigUrl(String),

    #[error("Cloud name missing from configuration")]
    MissingCloudName(),
}
