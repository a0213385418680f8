/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

// Declares a result type that owns its JSON document
macro_rules! owned_result {
    ( $(#[$meta:meta])* $name:ident ) => {
        $(#[$meta])*
        #[derive(serde::Serialize, serde::Deserialize, Default, Clone, PartialEq, Debug)]
        #[serde(transparent)]
        pub struct $name {
            json: $crate::v1_1::JsonObject,
        }

        impl $name {
            /// Wraps an already parsed result document
            pub fn from_json(json: $crate::v1_1::JsonObject) -> Self {
                Self { json }
            }

            /// Returns the underlying result document
            pub fn into_json(self) -> $crate::v1_1::JsonObject {
                self.json
            }
        }

        impl $crate::v1_1::ResultJson for $name {
            fn result_json(&self) -> &$crate::v1_1::JsonObject {
                &self.json
            }
        }

        impl $crate::v1_1::CommonResult for $name {}

        impl TryFrom<serde_json::Value> for $name {
            type Error = $crate::v1_1::CloudinaryError;

            fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
                $crate::v1_1::result::into_object(value).map(Self::from_json)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::v1_1::CloudinaryError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::try_from(serde_json::from_str::<serde_json::Value>(s)?)
            }
        }
    };
}

// Declares a read only view over a nested JSON object of a result
macro_rules! nested_result {
    ( $(#[$meta:meta])* $name:ident ) => {
        $(#[$meta])*
        #[derive(serde::Serialize, Clone, Copy, PartialEq, Debug)]
        #[serde(transparent)]
        pub struct $name<'a> {
            json: &'a $crate::v1_1::JsonObject,
        }

        impl<'a> $name<'a> {
            pub fn new(json: &'a $crate::v1_1::JsonObject) -> Self {
                Self { json }
            }
        }

        impl $crate::v1_1::ResultJson for $name<'_> {
            fn result_json(&self) -> &$crate::v1_1::JsonObject {
                self.json
            }
        }

        impl<'a> From<&'a $crate::v1_1::JsonObject> for $name<'a> {
            fn from(json: &'a $crate::v1_1::JsonObject) -> Self {
                Self::new(json)
            }
        }
    };
}

// Generates one typed getter per field from a `name: kind => key;` table
macro_rules! result_fields {
    () => {};
    ( $(#[$meta:meta])* $name:ident: str => $key:expr; $($rest:tt)* ) => {
        $(#[$meta])*
        pub fn $name(&self) -> Option<&str> {
            let json = $crate::v1_1::ResultJson::result_json(self);
            $crate::v1_1::parsers::string(json, $key.into())
        }
        $crate::v1_1::macros::result_fields!($($rest)*);
    };
    ( $(#[$meta:meta])* $name:ident: int => $key:expr; $($rest:tt)* ) => {
        $(#[$meta])*
        pub fn $name(&self) -> Option<i64> {
            let json = $crate::v1_1::ResultJson::result_json(self);
            $crate::v1_1::parsers::integer(json, $key.into())
        }
        $crate::v1_1::macros::result_fields!($($rest)*);
    };
    ( $(#[$meta:meta])* $name:ident: float => $key:expr; $($rest:tt)* ) => {
        $(#[$meta])*
        pub fn $name(&self) -> Option<f64> {
            let json = $crate::v1_1::ResultJson::result_json(self);
            $crate::v1_1::parsers::float(json, $key.into())
        }
        $crate::v1_1::macros::result_fields!($($rest)*);
    };
    ( $(#[$meta:meta])* $name:ident: raw => $key:expr; $($rest:tt)* ) => {
        $(#[$meta])*
        pub fn $name(&self) -> Option<&serde_json::Value> {
            let json = $crate::v1_1::ResultJson::result_json(self);
            $crate::v1_1::parsers::value(json, $key.into())
        }
        $crate::v1_1::macros::result_fields!($($rest)*);
    };
    ( $(#[$meta:meta])* $name:ident: nested $accessor:ident => $key:expr; $($rest:tt)* ) => {
        $(#[$meta])*
        pub fn $name(&self) -> Option<$accessor<'_>> {
            let json = $crate::v1_1::ResultJson::result_json(self);
            $crate::v1_1::parsers::object(json, $key.into()).map($accessor::new)
        }
        $crate::v1_1::macros::result_fields!($($rest)*);
    };
}

pub(crate) use {nested_result, owned_result, result_fields};
