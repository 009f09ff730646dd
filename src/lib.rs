// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Welcome screen
//!
//! A single-window hello world over the KAS GUI toolkit: a bold label, a
//! menu bar (File: Hello, Exit; Help: About) and a status bar.
//!
//! The window is described by a toolkit-independent model:
//!
//! -   [`frame::Frame`] composes the panel, menu bar and status bar
//! -   [`menu`] assembles the menus and binds each item to a [`handler`]
//! -   [`accel`] parses keyboard accelerators such as `Ctrl-H`
//!
//! A [`session::Session`] applies handler effects through a
//! [`session::Presenter`]; [`shell`] implements that over KAS and runs the
//! event loop.

pub mod accel;
pub mod config;
mod error;
pub mod frame;
pub mod handler;
pub mod menu;
pub mod session;
pub mod shell;

pub use config::Config;
pub use error::{Error, Result};
pub use frame::Frame;
