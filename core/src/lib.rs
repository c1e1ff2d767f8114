//! Rule engines for three single-player grid games: Connect Four, Snake and Wordle.
//!
//! Each engine is a plain value that owns its whole state and exposes synchronous
//! transitions returning `Result<Outcome>`. Nothing in here touches a clock, a
//! terminal or a file: hosts pass in dates and seeds, and persistence goes
//! through the [`Storage`] seam owned by the session adapters.

#![no_std]

extern crate alloc;

pub use error::*;
pub use session::*;
pub use storage::*;
pub use types::*;

pub mod connect_four;
pub mod snake;
pub mod wordle;

mod error;
mod session;
mod storage;
mod types;
