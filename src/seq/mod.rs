//! Lazy sequence combinators.
//!
//! Each combinator is available in two equivalent forms: a free function
//! returning an anonymous lazy producer, and a named iterator struct whose
//! state is explicit. Both are forward-only and single-pass; exhaustion is
//! the ordinary `None` from [`Iterator::next`], never an error.
mod batched;
mod chain;
mod cycle;


pub use batched::{Batched, batched};
pub use chain::{Chain, chain};
pub use cycle::{Cycle, cycle};
