//! Simultaneous head-to-head resolution

use std::collections::BTreeSet;

use ahash::AHashMap;

use crate::core::types::{Position, SnakeId};

/// Ids of every snake whose head shares a cell with another head
///
/// One pass over all post-move heads: the first claimant of a cell is
/// recorded, any later claimant marks both. The result does not depend on
/// the order heads are supplied in.
pub fn find_head_on_collisions(
    heads: impl IntoIterator<Item = (SnakeId, Position)>,
) -> BTreeSet<SnakeId> {
    let mut claimed: AHashMap<Position, SnakeId> = AHashMap::new();
    let mut eliminated = BTreeSet::new();

    for (id, head) in heads {
        match claimed.get(&head) {
            Some(&owner) if owner != id => {
                eliminated.insert(owner);
                eliminated.insert(id);
            }
            Some(_) => {}
            None => {
                claimed.insert(head, id);
            }
        }
    }

    eliminated
}
