pub use collection::{CollectionMut, CollectionOp};
pub use error::Unsupported;
pub use handle::ReadHandle;
pub use list::{ListMut, ListOp, ListWrite};
pub use map::{MapMut, MapOp};

mod collection;
mod error;
mod handle;
mod list;
mod map;
