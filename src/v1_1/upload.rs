/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1_1::macros::{nested_result, owned_result, result_fields};
use crate::v1_1::parsers;
use crate::v1_1::result::CommonResultKey;
use crate::v1_1::ResultJson;
use std::collections::HashMap;
use strum_macros::IntoStaticStr;

owned_result!(
    /// Holds information returned from the upload API.
    ///
    /// The fields shared with other asset results come from
    /// [`CommonResult`](crate::v1_1::CommonResult). Image and video specific
    /// fields are only present for the matching resource type.
    ///
    /// See [Cloudinary Upload API Docs](https://cloudinary.com/documentation/image_upload_api_reference#upload_response)
    /// for more details on the individual fields.
    UploadResult
);

impl UploadResult {
    result_fields! {
        signature: str => UploadResultKey::Signature;
        /// Token that allows deleting the asset without authentication for a
        /// limited time, only returned when requested at upload
        delete_token: str => UploadResultKey::DeleteToken;

        video: nested Video => UploadResultKey::Video;
        audio: nested Audio => UploadResultKey::Audio;
        frame_rate: float => UploadResultKey::FrameRate;
        bit_rate: int => UploadResultKey::BitRate;
        /// Length of the video in seconds
        duration: float => UploadResultKey::Duration;
    }

    /// Contextual metadata, keyed by section (usually `custom`)
    ///
    /// Sections that are not string maps are left out.
    pub fn context(&self) -> Option<HashMap<&str, HashMap<&str, &str>>> {
        parsers::nested_string_map(self.result_json(), CommonResultKey::Context.into())
    }
}

#[derive(Debug, Clone, Copy, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
enum UploadResultKey {
    Signature,
    // Image
    DeleteToken,
    // Video
    Video,
    Audio,
    FrameRate,
    BitRate,
    Duration,
}

nested_result!(
    /// Video stream details of an uploaded video
    Video
);

impl Video<'_> {
    result_fields! {
        /// Pixel format of the stream, e.g. `yuv420p`
        pix_format: str => VideoKey::PixFormat;
        codec: str => VideoKey::Codec;
        level: int => VideoKey::Level;
        bit_rate: int => VideoKey::BitRate;
    }
}

#[derive(Debug, Clone, Copy, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
enum VideoKey {
    PixFormat,
    Codec,
    Level,
    BitRate,
}

nested_result!(
    /// Audio stream details of an uploaded video
    Audio
);

impl Audio<'_> {
    result_fields! {
        codec: str => AudioKey::Codec;
        bit_rate: int => AudioKey::BitRate;
        /// Sample rate in Hz
        frequency: int => AudioKey::Frequency;
        channels: int => AudioKey::Channels;
        channel_layout: str => AudioKey::ChannelLayout;
    }
}

#[derive(Debug, Clone, Copy, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
enum AudioKey {
    Codec,
    BitRate,
    Frequency,
    Channels,
    ChannelLayout,
}
