//! # Boundary-assignment grouping
//!
//! Both regrouping stages partition an ordered sequence the same way: walk
//! it once, bump a counter whenever an item satisfies the stage's predicate,
//! and use the counter's current value as that item's group id. The counter
//! is bumped *before* assignment, so a matching item opens a new group and
//! every following non-matching item joins it.
//!
//! ```text
//! opens?   F  T  F  T  F
//! id       0  1  1  2  2     →  {0} {1,2} {3,4}
//! ```
//!
//! Ids are monotonic, so groups are contiguous and nothing is reordered.
//! Members are folded into a [`Chunk`] as they arrive; only the reduced
//! fields survive.

use crate::types::Chunk;

/// Pair each item with its group id, in order.
fn with_group_ids<T>(
    items: impl IntoIterator<Item = T>,
    opens_group: impl Fn(&T) -> bool,
) -> impl Iterator<Item = (usize, T)> {
    items.into_iter().scan(0usize, move |counter, item| {
        if opens_group(&item) {
            *counter += 1;
        }
        Some((*counter, item))
    })
}

/// Fold `items` into one [`Chunk`] per group.
///
/// Each item is converted with `to_chunk` and then either starts the next
/// group or is absorbed into the current one.
pub fn regroup<T, I>(
    items: I,
    opens_group: impl Fn(&T) -> bool,
    to_chunk: impl Fn(T) -> Chunk,
) -> Vec<Chunk>
where
    I: IntoIterator<Item = T>,
{
    let mut done = Vec::new();
    let mut current: Option<(usize, Chunk)> = None;

    for (id, item) in with_group_ids(items, opens_group) {
        let chunk = to_chunk(item);
        match current.as_mut() {
            Some((current_id, acc)) if *current_id == id => acc.absorb(chunk),
            _ => done.extend(current.replace((id, chunk)).map(|(_, c)| c)),
        }
    }

    done.extend(current.map(|(_, chunk)| chunk));
    done
}
