mod collection;
mod common;
mod game;

pub use collection::*;
pub use common::*;
pub use game::*;
