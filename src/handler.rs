// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Menu handlers
//!
//! Handlers are stateless: each returns an [`Effect`] which the running shell
//! applies on the dispatch thread.

/// Caption used by a message box when none is given
pub const DEFAULT_CAPTION: &str = "Message";

/// Icon shown beside a message box body
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Icon {
    #[default]
    Information,
}

impl Icon {
    /// Text glyph standing in for the icon
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Information => "ℹ",
        }
    }
}

/// A message box with a single "Ok" button
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageDialog {
    pub title: String,
    pub message: String,
    pub icon: Icon,
}

impl MessageDialog {
    /// Construct with the default caption and an information icon
    pub fn new(message: impl ToString) -> Self {
        MessageDialog {
            title: DEFAULT_CAPTION.to_string(),
            message: message.to_string(),
            icon: Icon::Information,
        }
    }

    /// Set the caption
    #[must_use]
    pub fn with_title(mut self, title: impl ToString) -> Self {
        self.title = title.to_string();
        self
    }

    /// Set the icon
    #[must_use]
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = icon;
        self
    }
}

/// Outcome of a handler
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Display a message box
    Dialog(MessageDialog),
    /// Close the window
    ///
    /// With `force`, the close may not be vetoed.
    Close { force: bool },
}

/// A menu handler
pub type Handler = fn() -> Effect;

/// Say hello to the user
pub fn show_greeting() -> Effect {
    Effect::Dialog(MessageDialog::new("hello from wxpython"))
}

/// Close the frame, terminating the program if it is the last window
pub fn close_window() -> Effect {
    Effect::Close { force: true }
}

/// Display the about box
pub fn show_about() -> Effect {
    Effect::Dialog(
        MessageDialog::new("this is a wxpython hello world sample")
            .with_title("about hello world 2")
            .with_icon(Icon::Information),
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn greeting() {
        let Effect::Dialog(dialog) = show_greeting() else {
            panic!("expected a dialog");
        };
        assert_eq!(dialog.message, "hello from wxpython");
        assert_eq!(dialog.title, DEFAULT_CAPTION);
        assert_eq!(dialog.icon, Icon::Information);
        assert_eq!(dialog.icon.glyph(), "ℹ");
    }

    #[test]
    fn about() {
        assert_eq!(
            show_about(),
            Effect::Dialog(MessageDialog {
                title: "about hello world 2".into(),
                message: "this is a wxpython hello world sample".into(),
                icon: Icon::Information,
            })
        );
    }

    #[test]
    fn close_is_forced() {
        assert_eq!(close_window(), Effect::Close { force: true });
    }
}
