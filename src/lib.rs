pub mod error;
pub mod hal;
pub mod patterns;
pub mod player;

pub use error::{Error, Result};
pub use player::{PatternPlayer, Phase, Symbol};
