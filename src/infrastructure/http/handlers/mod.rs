//! HTTP Handlers

mod assets;
mod documents;
mod ping;
mod reader;

pub use assets::*;
pub use documents::*;
pub use ping::*;
pub use reader::*;
