/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

mod macros;
mod parsers;
pub mod config;
pub mod errors;
pub mod params;
pub mod properties;
pub mod rename;
pub mod result;
pub mod text;
pub mod upload;

pub use config::*;
pub use errors::*;
pub use params::*;
pub use parsers::JsonObject;
pub use properties::*;
pub use rename::*;
pub use result::{CommonResult, Info, ResultJson};
pub use text::*;
pub use upload::*;
