pub mod config;
pub mod logging;

pub mod document;
pub mod error;
pub mod filter;
pub mod notify;
pub mod pipeline;
pub mod rewrite;
pub mod scan;
pub mod settings;
pub mod upload;
