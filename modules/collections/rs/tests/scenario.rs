use std::cell::RefCell;
use std::rc::Rc;

use eyre::Result;
use itertools::Itertools;
use rayon::ThreadPoolBuilder;

use jcompat_collections_rs::{
    add_all, empty_list, empty_map, n_copies, remove, reverse, synchronized_list, to_array,
    to_array_in, unmodifiable_list, unmodifiable_map, CollectionOp, FixedList,
};

const THREADS: usize = 8;
const APPENDS: usize = 256;

#[test]
fn build_materialize_reverse() {
    let mut list = empty_list();
    assert!(add_all(&mut list, ["a", "b", "c"]));

    let array = to_array(&list);
    assert_eq!(&*array, &["a", "b", "c"]);

    reverse(&mut list);
    assert_eq!(list, ["c", "b", "a"]);
    // The materialized array is a snapshot and keeps the original order
    assert_eq!(&*array, &["a", "b", "c"]);

    let reused = to_array_in(&list, vec![""; 5].into_boxed_slice());
    assert_eq!(&*reused, &["c", "b", "a", "", ""]);
}

#[test]
fn removal_distinguishes_absence_from_default_values() {
    let mut map = empty_map();
    map.insert("present", 0);

    assert_eq!(remove(&mut map, &"present"), Some(0));
    assert_eq!(remove(&mut map, &"present"), None);
    assert!(map.is_empty());
}

#[test]
fn views_observe_backing_containers() {
    let list = Rc::new(RefCell::new(empty_list()));
    let map = Rc::new(RefCell::new(empty_map()));
    let mut list_view = unmodifiable_list(Rc::clone(&list));
    let mut map_view = unmodifiable_map(Rc::clone(&map));

    add_all(&mut *list.borrow_mut(), 0..3);
    map.borrow_mut().insert("len", 3);

    assert_eq!(list_view.to_vec(), [0, 1, 2]);
    assert_eq!(map_view.get(&"len"), Some(3));

    assert!(list_view.clear().is_err());
    assert!(map_view.clear().is_err());
    assert_eq!(list.borrow().len(), 3);
    assert_eq!(map.borrow().len(), 1);
}

#[test]
fn concurrent_appends_are_never_lost() -> Result<()> {
    let list = synchronized_list(vec![usize::MAX; 3]);

    let pool = ThreadPoolBuilder::new().num_threads(THREADS).build()?;
    pool.scope(|s| {
        for item in 0..APPENDS {
            let list = &list;
            s.spawn(move |_| {
                list.add(item);
            });
        }
    });

    let items = list.into_inner();
    assert_eq!(items.len(), 3 + APPENDS);

    let counts = items.into_iter().counts();
    assert_eq!(counts[&usize::MAX], 3);
    assert!((0..APPENDS).all(|item| counts.get(&item) == Some(&1)));
    Ok(())
}

#[test]
fn concurrent_appends_through_a_borrowed_list() -> Result<()> {
    let mut backing = Vec::new();
    {
        let list = synchronized_list(&mut backing);
        let pool = ThreadPoolBuilder::new().num_threads(THREADS).build()?;
        pool.scope(|s| {
            for chunk in &(0..APPENDS).chunks(16) {
                let chunk = chunk.collect_vec();
                let list = &list;
                s.spawn(move |_| {
                    list.add_all(chunk);
                });
            }
        });
    }

    backing.sort_unstable();
    assert_eq!(backing, (0..APPENDS).collect_vec());
    Ok(())
}

#[test]
fn fixed_collections_keep_their_length() {
    let mut copies = n_copies(4, String::from("same"));
    reverse(&mut copies);
    assert_eq!(CollectionOp::len(&copies), 4);

    let mut single: FixedList<_> = FixedList::from(vec![1]);
    single[0] = 2;
    assert_eq!(single.into_vec(), [2]);
}
