// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Window configuration
//!
//! Construction parameters of the main window. Toolkit configuration
//! (themes, fonts, event timing) is left to KAS, which reads its own
//! options from the environment.

use crate::frame::LabelStyle;

/// Title of the main window
pub const TITLE: &str = "Welcome to GNU/Linux!";

/// Main window configuration
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Window title
    pub title: String,
    /// Text of the panel label
    pub label: String,
    /// Font adjustment of the panel label
    pub label_style: LabelStyle,
    /// Border above and left of the label, in logical pixels
    pub border: f32,
    /// Initial status-bar text
    pub status: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            title: TITLE.to_string(),
            label: "hello bro".to_string(),
            label_style: LabelStyle {
                point_size_delta: 10.0,
                bold: true,
            },
            border: 25.0,
            status: "everything's gud".to_string(),
        }
    }
}
