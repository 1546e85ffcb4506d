//! # UniqueMap
//!
//! `uniquemap` provides [`BijectiveMap`], a map in which every key and every
//! value is unique, so a pair can be looked up from either side.
//! Inserting a key or a value that is already present is an error instead of
//! an overwrite, which keeps the two directions in agreement.
//!
//! ```rust
//! use uniquemap::{BijectiveMap, Error};
//!
//! fn main() -> uniquemap::Result<()> {
//!     let mut ports = BijectiveMap::new();
//!     ports.add("http",  80)?;
//!     ports.add("https", 443)?;
//!
//!     assert_eq!(ports.get_by_key(&"https")?, &443);
//!     assert_eq!(ports.get_by_value(&80)?,    &"http");
//!
//!     assert_eq!(ports.add("www", 80),   Err(Error::DuplicateValue));
//!     assert_eq!(ports.add("http", 8080), Err(Error::DuplicateKey));
//!     assert_eq!(ports.count(), 2);
//!
//!     assert!(ports.remove(&"http"));
//!     assert_eq!(ports.get_by_value(&80), Err(Error::ValueNotFound));
//!     Ok(())
//! }
//! ```

#![allow(clippy::needless_doctest_main)]

mod bidimap;
mod error;
pub mod iter;

pub use crate::bidimap::BijectiveMap;
pub use crate::error::Error;

/// A typedef of the result returned by many methods.
pub type Result<T, E = crate::error::Error> = std::result::Result<T, E>;

/// Builds a [`BijectiveMap`] from `key => value` pairs.
///
/// Evaluates to `Result<BijectiveMap<K, V>>`; a repeated key or value is
/// reported the same way [`BijectiveMap::add`] reports it.
///
/// # Examples
///
/// ```
/// use uniquemap::{bimap, Error};
///
/// let map = bimap!{ "a" => 1, "b" => 2 }.unwrap();
/// assert_eq!(map.get_by_value(&2), Ok(&"b"));
///
/// assert_eq!(bimap!{ "a" => 1, "b" => 1 }.err(), Some(Error::DuplicateValue));
/// ```
#[macro_export]
macro_rules! bimap {
    ( $( $key:expr => $value:expr ),* $(,)? ) => {
        $crate::BijectiveMap::<_, _, ::std::collections::hash_map::RandomState>::try_from_pairs(
            ::std::vec![ $( ($key, $value) ),* ]
        )
    };
}
