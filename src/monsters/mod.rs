//! Monster encounters: wave definitions, the built-in roster and the keyed
//! registry used to resolve attack targets.

mod data;
mod registry;
mod types;

pub use data::builtin_monsters;
pub use registry::MonsterRegistry;
pub use types::*;
