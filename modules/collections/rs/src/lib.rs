pub use adapters::{add_all, remove, reverse};
pub use array::{to_array, to_array_in};
pub use fixed::{
    empty_list, empty_map, empty_set, n_copies, n_copies_checked, singleton, singleton_list,
    FixedList,
};
pub use views::{
    synchronized_list, unmodifiable_collection, unmodifiable_list, unmodifiable_map,
    unmodifiable_set, SynchronizedList, UnmodifiableCollection, UnmodifiableList,
    UnmodifiableMap,
};

pub use jcompat_core_rs::{
    CollectionMut, CollectionOp, ListMut, ListOp, ListWrite, MapMut, MapOp, ReadHandle,
    Unsupported,
};

mod adapters;
mod array;
mod fixed;
mod views;
