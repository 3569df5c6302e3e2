pub mod config;
pub mod logging;

pub mod checksum;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod gazetteer;
pub mod generator;
pub mod output;
