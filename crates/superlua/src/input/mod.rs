//! Input readers - parse source code into IR.

pub mod classify;
pub mod extract;
pub mod superlua;

pub use classify::{LineKind, classify};
pub use extract::{Block, extract_block};
pub use superlua::{ReadOptions, SUPERLUA_READER, SuperLuaReader, read_superlua};
