//! # Adapters Layer (Hexagonal Architecture)
//!
//! - `PinataContentStore`: HTTP pinning service
//! - `InMemoryContentStore`: deterministic local store for tests and dry runs

mod memory;
mod pinata;

pub use memory::InMemoryContentStore;
pub use pinata::PinataContentStore;
