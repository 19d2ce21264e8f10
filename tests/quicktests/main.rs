//! Property tests run against the public API only.

use quickcheck::{Arbitrary, Gen};

mod tree;

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<V> {
    /// Insert the V into the data structure
    Insert(V),
    /// Delete the V from the data structure
    Delete(V),
    /// Rebuild the data structure from scratch
    Rebalance,
}

impl<V> Arbitrary for Op<V>
where
    V: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 1, 2]).unwrap() {
            0 => Op::Insert(V::arbitrary(g)),
            1 => Op::Delete(V::arbitrary(g)),
            2 => Op::Rebalance,
            _ => unreachable!(),
        }
    }
}
