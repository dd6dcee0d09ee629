//! Library entry for artix-news: the HTML-to-text engine and its surrounding pipeline.

pub mod convert;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod settings;
pub mod sources;
pub mod util;

pub use error::{Error, Result};
