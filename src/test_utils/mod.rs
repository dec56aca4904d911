#![allow(missing_docs)]

pub(crate) mod http;

pub(crate) use http::{assert_error_body, parse_json_body};
