// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Error types

use crate::menu::ItemId;
use thiserror::Error;

/// Errors from window construction and launch
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    /// A keyboard accelerator could not be parsed
    #[error("invalid accelerator {text:?}: {reason}")]
    Accelerator { text: String, reason: &'static str },

    /// An interactive menu item has no handler
    #[error("menu item {0} has no bound handler")]
    UnboundItem(ItemId),

    /// A handler was bound to an id not present in the menu bar
    #[error("handler bound to unknown menu item {0}")]
    UnknownItem(ItemId),

    /// A menu item id was bound more than once
    #[error("menu item {0} is bound more than once")]
    DuplicateBinding(ItemId),

    /// Two menu items share one id
    #[error("menu item id {0} is used more than once")]
    DuplicateItem(ItemId),

    /// Toolkit launch failure
    #[error("toolkit runner")]
    Runner(#[from] kas::runner::Error),
}

impl Error {
    pub(crate) fn accelerator(text: &str, reason: &'static str) -> Self {
        Error::Accelerator {
            text: text.to_string(),
            reason,
        }
    }
}

/// A `Result` type representing `T` or [`enum@Error`]
pub type Result<T> = std::result::Result<T, Error>;
