pub mod config;
pub mod error;
pub mod logging;
pub mod rewrite;

pub use rewrite::{optimize_image, optimize_image_value, ImageInput, ImageRewriter};
