//! On-disk assets served by the router.
//!
//! Files are read fresh on every request; nothing is cached.

pub mod resolver;
pub mod store;

pub use resolver::{ImageResolver, ResolvedResource, IMAGE_EXTENSIONS};
pub use store::AssetStore;
