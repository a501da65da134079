mod get_memories;
mod get_memory;

pub use get_memories::*;
pub use get_memory::*;
