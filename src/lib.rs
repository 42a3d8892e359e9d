pub mod client;
pub mod config;
pub mod context;
pub mod handler;
pub mod model;
pub mod retry;
pub mod util;

#[cfg(test)]
mod test_utils;

pub use config::Config;
pub use context::{Cancellation, Invocation};
pub use handler::Handler;
pub use model::{Item, ResponseEnvelope};
