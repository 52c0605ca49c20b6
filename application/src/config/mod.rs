//! Application-level configuration.
//!
//! This module provides parameter types that control how use cases behave:
//!
//! - [`BotParams`]: loop control (interval) and headline policy
//! - [`ImageParams`]: image search filters and artifact placement

pub mod bot_params;
pub mod image_params;

pub use bot_params::BotParams;
pub use image_params::ImageParams;
