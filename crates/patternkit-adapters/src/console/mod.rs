//! Console adapters.

mod memory;

pub use memory::MemoryConsole;
