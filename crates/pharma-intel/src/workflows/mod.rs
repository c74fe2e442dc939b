//! Intelligence normalization and content scoring workflows.
//!
//! `signals`, `intelligence` and `scoring` are pure transformations over
//! immutable inputs. `submissions` is the boundary with the persistence store.

pub mod intelligence;
pub mod scoring;
pub mod signals;
pub mod submissions;
