//! Port trait definitions (Hexagonal Architecture)
//!
//! - BreedSource: sub-breed lookups for a breed name
//!
//! Adapters in `adapters` and `infrastructure` implement these traits so the
//! domain stays independent of transport and caching details.

pub mod breed_source;

pub use breed_source::BreedSource;
