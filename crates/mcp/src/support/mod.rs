#![forbid(unsafe_code)]

mod args;
mod clock;
mod crash;
mod jsonrpc;
mod logging;
mod runtime;

pub(crate) use args::*;
pub(crate) use clock::*;
pub(crate) use crash::*;
pub(crate) use jsonrpc::*;
pub(crate) use logging::*;
pub(crate) use runtime::*;
