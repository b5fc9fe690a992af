//! HTTP Handlers

mod export;
mod generation;
mod ping;
mod style;

pub use export::*;
pub use generation::*;
pub use ping::*;
pub use style::*;
