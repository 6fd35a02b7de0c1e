//! RFC 3454 character-class tables.
//!
//! Each submodule is a sorted, disjoint range table (or, for B.1/B.2, a
//! sorted key/replacement table) derived from a single RFC 3454 appendix
//! table. `ranges` holds the shared `O(log n)` lookup primitives; every
//! other submodule is pure data plus a thin `is_member`/`lookup` wrapper.

pub mod ranges;

pub mod b1;
pub mod b2;
pub mod bidi_class;
pub mod canonrep;
pub mod control;
pub mod deprecated;
pub mod noncharacter;
pub mod plaintext;
pub mod private_use;
pub mod spaces;
pub mod surrogate;
pub mod tagging;
pub mod unassigned;
