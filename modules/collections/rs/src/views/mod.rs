pub use synchronized::{synchronized_list, SynchronizedList};
pub use unmodifiable::{
    unmodifiable_collection, unmodifiable_list, unmodifiable_map, unmodifiable_set,
    UnmodifiableCollection, UnmodifiableList, UnmodifiableMap,
};

mod synchronized;
mod unmodifiable;
