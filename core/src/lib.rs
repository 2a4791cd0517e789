#![no_std]

extern crate alloc;

pub use whackamole_protocol as protocol;

pub use board::*;
pub use config::*;
pub use controller::*;
pub use effect::*;
pub use error::*;
pub use mode::*;
pub use summary::*;
pub use task::*;
pub use theme::*;
pub use timer::*;

mod board;
mod config;
mod controller;
mod effect;
mod error;
mod mode;
mod summary;
mod task;
mod theme;
mod timer;
