pub mod analysis;
pub mod client;
pub mod config;
pub mod consts;
pub mod error;
pub mod export;
pub mod i18n;
pub mod image_source;
pub mod metrics;
pub mod progress;
pub mod result;
pub mod session;
pub mod upload;
pub mod view;
pub mod wire;
