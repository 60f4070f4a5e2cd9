// SPDX-License-Identifier: MPL-2.0
//! Application layer - use cases and ports.
//!
//! This layer sits between the domain and the outside world:
//!
//! - [`port`]: Traits that infrastructure adapters implement
//!   ([`StyleService`](port::StyleService))
//! - [`session`]: The state container driving upload, analysis and generation
//! - [`prompt`]: Composition of the instructions sent to the remote model

pub mod port;
pub mod prompt;
pub mod session;
