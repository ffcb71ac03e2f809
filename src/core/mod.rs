//! Registry core: listener storage, operations, and the shared handle.
//!
//! This module contains the stateful heart of the crate. The only state
//! holder is [`Registry`]; everything else here is what it stores
//! ([`Listener`]), projects ([`ListenerInfo`]), consumes ([`Op`]), or wraps
//! ([`SharedRegistry`]).
//!
//! Internal modules:
//! - `registry`: the three-level listener table and the six operations;
//! - `listener`: stored listeners and snapshot rows;
//! - `ops`: the operation-as-value vocabulary;
//! - `shared`: lock-per-operation handle for multi-threaded use.

mod listener;
mod ops;
mod registry;
mod shared;

pub use listener::{Listener, ListenerInfo};
pub use ops::Op;
pub use registry::Registry;
pub use shared::SharedRegistry;
