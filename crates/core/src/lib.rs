#![forbid(unsafe_code)]

pub mod directive;
pub mod revision;

pub use directive::Directive;
pub use revision::*;
