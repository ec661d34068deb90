//! Output writers - emit IR as source code.

pub mod lua;

pub use lua::{LUA_WRITER, LuaWriter, LuaWriterImpl, clean_params};
