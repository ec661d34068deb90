//! Registry for readers and writers.
//!
//! Built-ins are present from first use. Front ends pick a reader by source
//! file extension and a writer by target language, so another dialect only
//! needs to register its own pair.

use crate::traits::{Reader, Writer};
use std::sync::{LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

struct Registry {
    readers: Vec<&'static dyn Reader>,
    writers: Vec<&'static dyn Writer>,
}

static REGISTRY: LazyLock<RwLock<Registry>> = LazyLock::new(|| {
    RwLock::new(Registry {
        readers: vec![&crate::input::superlua::SUPERLUA_READER],
        writers: vec![&crate::output::lua::LUA_WRITER],
    })
});

fn registry() -> RwLockReadGuard<'static, Registry> {
    REGISTRY.read().unwrap_or_else(PoisonError::into_inner)
}

fn registry_mut() -> RwLockWriteGuard<'static, Registry> {
    REGISTRY.write().unwrap_or_else(PoisonError::into_inner)
}

/// Register a reader. Earlier registrations win on extension lookups.
pub fn register_reader(reader: &'static dyn Reader) {
    registry_mut().readers.push(reader);
}

/// Register a writer. Earlier registrations win on language lookups.
pub fn register_writer(writer: &'static dyn Writer) {
    registry_mut().writers.push(writer);
}

/// Reader for files with extension `ext` (without the dot).
pub fn reader_for_extension(ext: &str) -> Option<&'static dyn Reader> {
    registry()
        .readers
        .iter()
        .find(|r| r.extensions().contains(&ext))
        .copied()
}

/// Writer emitting `lang`.
pub fn writer_for_language(lang: &str) -> Option<&'static dyn Writer> {
    registry()
        .writers
        .iter()
        .find(|w| w.language() == lang)
        .copied()
}
