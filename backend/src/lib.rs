#[cfg(feature = "audio")]
pub mod audio;
pub mod context;
pub mod error;
pub mod input;
pub mod text;
pub mod texture;

pub use context::{Context, Handles};
pub use error::BackendError;
