//! Storable implementations for CBOR-encoded stable-memory values.
//!
//! Decoding panics on malformed bytes. Stable structures only ever hand back
//! bytes this crate wrote, so a failure here means corrupted memory and the
//! message must trap.

#[macro_export]
macro_rules! impl_storable_bounded {
    ($ident:ident, $max_size:expr, $is_fixed_size:expr) => {
        impl $crate::cdk::structures::storable::Storable for $ident {
            const BOUND: $crate::cdk::structures::storable::Bound =
                $crate::cdk::structures::storable::Bound::Bounded {
                    max_size: $max_size,
                    is_fixed_size: $is_fixed_size,
                };

            fn to_bytes(&self) -> ::std::borrow::Cow<'_, [u8]> {
                ::std::borrow::Cow::Owned(
                    $crate::serialize::serialize(self).expect("storable serialize"),
                )
            }

            fn into_bytes(self) -> ::std::vec::Vec<u8> {
                $crate::serialize::serialize(&self).expect("storable serialize")
            }

            fn from_bytes(bytes: ::std::borrow::Cow<[u8]>) -> Self {
                $crate::serialize::deserialize(&bytes).expect("storable deserialize")
            }
        }
    };
}
