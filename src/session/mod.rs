//! Entropy capture sessions.
//!
//! An [`EntropySession`] owns the ordered sequence of captured tokens
//! for one alphabet. Input surfaces mutate it only through its methods;
//! metrics and text export are recomputed from the current sequence on
//! every call.

mod model;

pub use model::{EntropySession, SessionError};
