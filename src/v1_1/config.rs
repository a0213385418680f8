/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1_1::errors::CloudinaryError;
use crate::v1_1::ResourceType;

// Root Cloudinary API
pub const API_ORIGIN: &str = "https://api.cloudinary.com";

pub const API_VERSION: &str = "v1_1";

const URL_SCHEME: &str = "cloudinary";

/// Account settings used to address the API.
///
/// Usually taken from a `cloudinary://<api_key>:<api_secret>@<cloud_name>`
/// url as shown on the account console.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Config {
    cloud_name: String,
    api_key: Option<String>,
    api_secret: Option<String>,
}

impl Config {
    /// Creates a new configuration from the provided account values
    pub fn new(cloud_name: &str, api_key: Option<&str>, api_secret: Option<&str>) -> Self {
        Self {
            cloud_name: cloud_name.into(),
            api_key: api_key.map(Into::into),
            api_secret: api_secret.map(Into::into),
        }
    }

    /// Parses a `cloudinary://` configuration url
    pub fn from_url(config_url: &str) -> Result<Self, CloudinaryError> {
        let parsed = url::Url::parse(config_url)?;
        if parsed.scheme() != URL_SCHEME {
            return Err(CloudinaryError::InvalidConfigUrl(format!(
                "expected `{URL_SCHEME}` scheme, found `{}`",
                parsed.scheme()
            )));
        }

        let cloud_name = parsed
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or(CloudinaryError::MissingCloudName())?;

        let api_key = Some(parsed.username())
            .filter(|key| !key.is_empty())
            .map(decode_credential)
            .transpose()?;
        let api_secret = parsed.password().map(decode_credential).transpose()?;

        log::debug!("Loaded configuration for cloud `{cloud_name}`");
        Ok(Self {
            cloud_name: cloud_name.to_string(),
            api_key,
            api_secret,
        })
    }

    pub fn cloud_name(&self) -> &str {
        &self.cloud_name
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn api_secret(&self) -> Option<&str> {
        self.api_secret.as_deref()
    }

    /// Builds the endpoint url for an action on the given resource type, e.g.
    /// `https://api.cloudinary.com/v1_1/demo/image/text`
    pub fn api_url(
        &self,
        resource_type: ResourceType,
        action: &str,
    ) -> Result<url::Url, CloudinaryError> {
        match self.cloud_name.as_str() {
            "" => return Err(CloudinaryError::MissingCloudName()),
            "." | ".." => {
                return Err(CloudinaryError::InvalidConfigUrl(format!(
                    "`{}` is not a cloud name",
                    self.cloud_name
                )));
            }
            _ => (),
        }

        let resource_type: &str = resource_type.into();
        let mut req_url = url::Url::parse(API_ORIGIN)?;
        // Each segment is percent-encoded, `/`, `?` and `#` stay inside it
        req_url
            .path_segments_mut()
            .map_err(|_| CloudinaryError::InvalidConfigUrl(API_ORIGIN.to_string()))?
            .clear()
            .extend([
                API_VERSION,
                self.cloud_name.as_str(),
                resource_type,
                action,
            ]);
        Ok(req_url)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key.as_ref().map(|_| "xxx"))
            .field("api_secret", &self.api_secret.as_ref().map(|_| "xxx"))
            .finish()
    }
}

// Credentials in the url may be percent-encoded
fn decode_credential(raw: &str) -> Result<String, CloudinaryError> {
    urlencoding::decode(raw)
        .map(|v| v.into_owned())
        .map_err(|err| CloudinaryError::InvalidConfigUrl(err.to_string()))
}
