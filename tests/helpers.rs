/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde_json::{Value, json};

#[allow(dead_code)]
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Response of uploading a short video
#[allow(dead_code)]
pub(crate) fn video_upload_response() -> Value {
    json!({
        "public_id": "dog_closeup",
        "version": 1312461204,
        "signature": "a1b2c3d4e5f6",
        "width": 864,
        "height": 576,
        "format": "mp4",
        "resource_type": "video",
        "type": "upload",
        "created_at": "2017-08-11T12:24:32Z",
        "bytes": 120253,
        "tags": ["animal", "dog"],
        "url": "http://res.cloudinary.com/demo/video/upload/v1312461204/dog_closeup.mp4",
        "secure_url": "https://res.cloudinary.com/demo/video/upload/v1312461204/dog_closeup.mp4",
        "context": {
            "custom": {"alt": "A dog", "caption": "Closeup"},
            "broken": ["not", "a", "map"]
        },
        "video": {
            "pix_format": "yuv420p",
            "codec": "h264",
            "level": 31,
            "bit_rate": 1046017
        },
        "audio": {
            "codec": "aac",
            "bit_rate": 128002,
            "frequency": 44100,
            "channels": 2,
            "channel_layout": "stereo"
        },
        "frame_rate": 25.0,
        "bit_rate": 1174015,
        "duration": 13.76
    })
}

// Response of renaming an image with all of the optional sections
#[allow(dead_code)]
pub(crate) fn rename_response() -> Value {
    json!({
        "public_id": "new_name",
        "version": "1574352012",
        "format": "jpg",
        "resource_type": "image",
        "type": "upload",
        "created_at": "2019-11-21T16:00:12Z",
        "bytes": 52871.0,
        "width": 1024,
        "height": 768,
        "url": "http://res.cloudinary.com/demo/image/upload/v1574352012/new_name.jpg",
        "secure_url": "https://res.cloudinary.com/demo/image/upload/v1574352012/new_name.jpg",
        "next_cursor": "8edbc61040178db60b0973ca9494bf3a",
        "exif": {"Make": "Canon", "Model": "EOS 5D"},
        "metadata": {"DPI": "72", "Colorspace": "sRGB"},
        "faces": [[12, 34, 56, 78]],
        "colors": [["#162E02", 6.7], ["#385B0C", 6.3]],
        "phash": "ba19c8ab5fa05a59",
        "tags": ["renamed"],
        "moderation": [{"kind": "manual", "status": "approved"}],
        "context": {"custom": {"alt": "renamed"}},
        "derived": {
            "transformation": "c_fill,w_100,h_100",
            "format": "webp",
            "bytes": 7112,
            "id": "8267a869b62a93a59248f35d7f124c1f",
            "url": "http://res.cloudinary.com/demo/image/upload/c_fill,w_100,h_100/v1574352012/new_name.webp",
            "secure_url": "https://res.cloudinary.com/demo/image/upload/c_fill,w_100,h_100/v1574352012/new_name.webp"
        },
        "predominant": {
            "google": [["yellow", 52.5], ["orange", 21.3]]
        },
        "coordinates": {
            "custom": [[10, 20, 100, 120]],
            "faces": [[98, 74, 61, 83]]
        },
        "info": {
            "detection": {"object_detection": {"status": "complete"}},
            "ocr": {"adv_ocr": {"status": "complete"}}
        }
    })
}
