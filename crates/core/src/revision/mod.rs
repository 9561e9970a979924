#![forbid(unsafe_code)]

mod model;
mod policy;
mod retrieval;
mod store;

pub use model::*;
pub use policy::*;
pub use retrieval::*;
pub use store::*;

#[cfg(test)]
mod tests;
