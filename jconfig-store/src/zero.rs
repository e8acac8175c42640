//! Zero-initialisation of configuration shapes.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::path::PathBuf;

/// Produces the value a configuration shape starts from before the file's
/// JSON is applied on top of it.
///
/// Unlike [`Default`], the contract is structural: containers are present
/// and empty, scalars are zero, and optional sub-structures are allocated
/// (`Some` of their own zero value) so that fields missing from the file
/// still come out non-null.
///
/// Derive it with `#[derive(ZeroInit)]` from the `jconfig` facade; the
/// derive also implements [`Default`] through `zero_init`, which
/// `#[serde(default)]` then uses for every field missing from a file.
pub trait ZeroInit {
    /// Returns the zero-initialised value.
    fn zero_init() -> Self;
}

macro_rules! zero_via_default {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ZeroInit for $ty {
                fn zero_init() -> Self {
                    <$ty as Default>::default()
                }
            }
        )*
    };
}

zero_via_default!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    String, PathBuf, (),
);

impl<T> ZeroInit for Vec<T> {
    fn zero_init() -> Self {
        Vec::new()
    }
}

impl<T> ZeroInit for VecDeque<T> {
    fn zero_init() -> Self {
        VecDeque::new()
    }
}

impl<K, V, S> ZeroInit for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn zero_init() -> Self {
        HashMap::default()
    }
}

impl<T, S> ZeroInit for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn zero_init() -> Self {
        HashSet::default()
    }
}

impl<K, V> ZeroInit for BTreeMap<K, V> {
    fn zero_init() -> Self {
        BTreeMap::new()
    }
}

impl<T> ZeroInit for BTreeSet<T> {
    fn zero_init() -> Self {
        BTreeSet::new()
    }
}

impl<T: ZeroInit> ZeroInit for Box<T> {
    fn zero_init() -> Self {
        Box::new(T::zero_init())
    }
}

impl<T: ZeroInit> ZeroInit for Option<T> {
    fn zero_init() -> Self {
        Some(T::zero_init())
    }
}

impl ZeroInit for serde_json::Value {
    fn zero_init() -> Self {
        serde_json::Value::Null
    }
}

macro_rules! zero_tuple {
    ($($name:ident),+) => {
        impl<$($name: ZeroInit),+> ZeroInit for ($($name,)+) {
            fn zero_init() -> Self {
                ($($name::zero_init(),)+)
            }
        }
    };
}

zero_tuple!(A);
zero_tuple!(A, B);
zero_tuple!(A, B, C);
zero_tuple!(A, B, C, D);
