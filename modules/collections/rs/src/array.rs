use jcompat_core_rs::CollectionOp;

/// Copy the collection into a newly allocated fixed-size array, in iteration order.
///
/// The result is a snapshot: later changes to the collection are not reflected.
pub fn to_array<C>(collection: &C) -> Box<[C::Item]>
where
    C: CollectionOp + ?Sized,
    C::Item: Clone,
{
    collection.iter().cloned().collect()
}

/// Copy the collection into `buffer` if it is large enough and return the same buffer.
///
/// When the buffer is strictly larger than the collection, the slot right after the copied
/// elements is reset to `Default::default()` and serves as a terminator; slots past it are left
/// untouched. If the buffer is too small it is dropped and a new array is returned instead.
pub fn to_array_in<C>(collection: &C, mut buffer: Box<[C::Item]>) -> Box<[C::Item]>
where
    C: CollectionOp + ?Sized,
    C::Item: Clone + Default,
{
    let len = collection.len();
    if buffer.len() < len {
        log::debug!(
            "Reuse buffer holds {} elements, collection has {}; allocating a new array",
            buffer.len(),
            len
        );
        return to_array(collection);
    }

    for (slot, item) in buffer.iter_mut().zip(collection.iter()) {
        slot.clone_from(item);
    }
    if buffer.len() > len {
        buffer[len] = Default::default();
    }
    buffer
}
