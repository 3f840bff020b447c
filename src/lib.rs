#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod board;
mod common;
mod config;
mod coord;
mod fleet;
#[cfg(feature = "std")]
mod logging;
mod patterns;
mod placement;
mod probability;
pub mod protocol;
pub mod rl;
mod selector;
#[cfg(feature = "std")]
pub mod server;
mod session;
#[cfg(feature = "std")]
mod store;
#[cfg(feature = "std")]
pub mod transport;
#[cfg(feature = "std")]
mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use fleet::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use patterns::*;
pub use placement::*;
pub use probability::*;
pub use selector::*;
#[cfg(feature = "std")]
pub use server::serve_session;
pub use session::*;
#[cfg(feature = "std")]
pub use store::*;
#[cfg(feature = "std")]
pub use transport::tcp::TcpLineTransport;
#[cfg(feature = "std")]
pub use ui::*;
