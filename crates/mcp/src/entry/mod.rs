#![forbid(unsafe_code)]

pub(crate) mod framing;
mod stdio;

pub(crate) use stdio::run_stdio;
#[cfg(test)]
pub(crate) use stdio::serve;
