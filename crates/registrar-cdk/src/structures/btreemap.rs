use derive_more::{Deref, DerefMut};
use ic_stable_structures::{Memory, Storable, btreemap::BTreeMap as WrappedBTreeMap};

///
/// BTreeMap
/// a wrapper around the stable BTreeMap with collection helpers
///

#[derive(Deref, DerefMut)]
pub struct BTreeMap<K, V, M>
where
    K: Storable + Ord + Clone,
    V: Storable + Clone,
    M: Memory,
{
    data: WrappedBTreeMap<K, V, M>,
}

impl<K, V, M> BTreeMap<K, V, M>
where
    K: Storable + Ord + Clone,
    V: Storable + Clone,
    M: Memory,
{
    #[must_use]
    pub fn init(memory: M) -> Self {
        Self {
            data: WrappedBTreeMap::init(memory),
        }
    }

    /// Iterate owned key/value pairs in ascending key order.
    pub fn view(&self) -> impl Iterator<Item = (K, V)> + '_ {
        self.iter().map(|e| (e.key().clone(), e.value()))
    }
}

///
/// TESTS
///
