//! In-memory shop stores.
//!
//! The catalog and cart are plain owned structs; the HTTP layer funnels
//! every mutation through their methods. Nothing here performs I/O, which
//! keeps the stores directly testable.

pub mod cart;
pub mod catalog;

pub use cart::CartStore;
pub use catalog::CatalogStore;
