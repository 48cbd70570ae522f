pub use factory::{
    empty_list, empty_map, empty_set, n_copies, n_copies_checked, singleton, singleton_list,
};
pub use fixed_list::FixedList;

mod factory;
mod fixed_list;
