// Library for tests to access modules

pub mod config;
pub mod counter_source;
pub mod error;
pub mod models;
pub mod normalize;
pub mod ports;
pub mod render;
pub mod sampler;
pub mod snapshot;
