#[cfg(feature = "image")]
pub mod image;
#[cfg(feature = "text")]
pub mod text;
