// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! The main window model
//!
//! A [`Frame`] composes a [`Panel`] (label plus layout), a [`MenuBar`] with
//! its [`Bindings`], and a [`StatusBar`]. It holds no toolkit resources: a
//! [`Session`](crate::session::Session) applies the [`Effect`]s its handlers
//! return.

use crate::accel::Accelerator;
use crate::config::Config;
use crate::handler::Effect;
use crate::menu::{self, Bindings, ItemId, MenuBar};
use crate::Result;
use kas::window::WindowId;

/// Font weight
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Weight {
    #[default]
    Normal,
    Bold,
}

/// A font description
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Font {
    /// Size in points
    pub point_size: f32,
    pub weight: Weight,
}

impl Font {
    /// Size of the platform default font, in points
    pub const DEFAULT_POINT_SIZE: f32 = 12.0;
}

impl Default for Font {
    fn default() -> Self {
        Font {
            point_size: Self::DEFAULT_POINT_SIZE,
            weight: Weight::Normal,
        }
    }
}

/// Adjustment applied to a base font
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LabelStyle {
    /// Points added to the base size
    pub point_size_delta: f32,
    pub bold: bool,
}

impl LabelStyle {
    /// Derive a font from `base`
    pub fn derive(&self, base: Font) -> Font {
        Font {
            point_size: base.point_size + self.point_size_delta,
            weight: if self.bold { Weight::Bold } else { base.weight },
        }
    }
}

/// Static text with a derived font
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    text: String,
    style: LabelStyle,
}

impl Label {
    /// Construct
    pub fn new(text: impl ToString, style: LabelStyle) -> Self {
        Label {
            text: text.to_string(),
            style,
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn style(&self) -> LabelStyle {
        self.style
    }

    /// The font used, given the platform default
    #[inline]
    pub fn font(&self) -> Font {
        self.style.derive(Font::default())
    }
}

/// A vertical flow with a border above and left of its children
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Layout {
    /// Top margin, in logical pixels
    pub top: f32,
    /// Left margin, in logical pixels
    pub left: f32,
}

impl Layout {
    /// Construct with equal top and left borders
    #[inline]
    pub fn vertical(border: f32) -> Self {
        Layout {
            top: border,
            left: border,
        }
    }
}

/// The client area: one label arranged by a layout
#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    label: Label,
    layout: Layout,
}

impl Panel {
    #[inline]
    pub fn label(&self) -> &Label {
        &self.label
    }

    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }
}

/// A single-line status bar
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusBar {
    text: String,
}

impl StatusBar {
    /// Construct
    pub fn new(text: impl ToString) -> Self {
        StatusBar {
            text: text.to_string(),
        }
    }

    /// Current text
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set text
    #[inline]
    pub fn set_text(&mut self, text: impl ToString) {
        self.text = text.to_string();
    }
}

/// Lifecycle of a [`Frame`]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum FrameState {
    /// Constructed, not yet shown
    #[default]
    Hidden,
    Shown,
    /// Terminal
    Closed,
}

/// The main window
#[derive(Clone, Debug)]
pub struct Frame {
    parent: Option<WindowId>,
    title: String,
    panel: Panel,
    menu_bar: MenuBar,
    bindings: Bindings,
    status_bar: StatusBar,
    state: FrameState,
}

impl Frame {
    /// Construct
    ///
    /// Builds the panel, menu bar and status bar. Fails if the menu bar
    /// cannot be assembled or any item is left without a handler.
    pub fn new(parent: Option<WindowId>, title: impl ToString, config: &Config) -> Result<Self> {
        let (menu_bar, bindings) = menu::assemble()?;
        let panel = Panel {
            label: Label::new(&config.label, config.label_style),
            layout: Layout::vertical(config.border),
        };

        let title = title.to_string();
        log::debug!("Frame::new: {title:?}");
        Ok(Frame {
            parent,
            title,
            panel,
            menu_bar,
            bindings,
            status_bar: StatusBar::new(&config.status),
            state: FrameState::Hidden,
        })
    }

    /// Construct a top-level frame titled from `config`
    #[inline]
    pub fn from_config(config: &Config) -> Result<Self> {
        Frame::new(None, &config.title, config)
    }

    #[inline]
    pub fn parent(&self) -> Option<WindowId> {
        self.parent
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    #[inline]
    pub fn menu_bar(&self) -> &MenuBar {
        &self.menu_bar
    }

    #[inline]
    pub fn status_text(&self) -> &str {
        self.status_bar.text()
    }

    #[inline]
    pub fn set_status_text(&mut self, text: impl ToString) {
        self.status_bar.set_text(text);
    }

    #[inline]
    pub fn state(&self) -> FrameState {
        self.state
    }

    #[inline]
    pub fn is_shown(&self) -> bool {
        self.state == FrameState::Shown
    }

    /// True unless closed
    #[inline]
    pub fn is_open(&self) -> bool {
        self.state != FrameState::Closed
    }

    /// Show the frame
    ///
    /// Has no effect on a closed frame.
    pub fn show(&mut self) {
        if self.state == FrameState::Hidden {
            self.state = FrameState::Shown;
        }
    }

    /// Close the frame
    ///
    /// Returns `true` if this call closed the frame; closing again is a no-op.
    pub fn close(&mut self) -> bool {
        if self.state == FrameState::Closed {
            return false;
        }
        log::info!("closing {:?}", self.title);
        self.state = FrameState::Closed;
        true
    }

    /// Run the handler bound to `id`
    ///
    /// Returns `None` if the frame is closed or nothing is bound to `id`.
    /// The caller applies the returned effect.
    pub fn activate(&mut self, id: ItemId) -> Option<Effect> {
        if !self.is_open() {
            log::debug!("activate {id}: frame closed");
            return None;
        }
        let handler = self.bindings.get(id)?;
        log::debug!("activate {id}");
        Some(handler())
    }

    /// Find the item triggered by `accel`
    #[inline]
    pub fn accelerator_target(&self, accel: &Accelerator) -> Option<ItemId> {
        self.menu_bar.accelerator_target(accel)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::handler::MessageDialog;
    use crate::menu::HELLO;

    fn frame() -> Frame {
        Frame::from_config(&Config::default()).unwrap()
    }

    #[test]
    fn construction() {
        let frame = frame();
        assert_eq!(frame.title(), "Welcome to GNU/Linux!");
        assert_eq!(frame.status_text(), "everything's gud");
        assert_eq!(frame.parent(), None);
        assert_eq!(frame.state(), FrameState::Hidden);
        assert_eq!(frame.panel().layout(), Layout { top: 25.0, left: 25.0 });
    }

    #[test]
    fn label_font() {
        let frame = frame();
        let label = frame.panel().label();
        assert_eq!(label.text(), "hello bro");
        let font = label.font();
        assert!(font.point_size > Font::default().point_size);
        assert_eq!(font.weight, Weight::Bold);
    }

    #[test]
    fn close_twice() {
        let mut frame = frame();
        frame.show();
        assert!(frame.is_shown());
        assert!(frame.close());
        assert!(!frame.close());
        assert!(!frame.is_open());
        frame.show();
        assert_eq!(frame.state(), FrameState::Closed);
    }

    #[test]
    fn activate() {
        let mut frame = frame();
        assert_eq!(
            frame.activate(HELLO),
            Some(Effect::Dialog(MessageDialog::new("hello from wxpython")))
        );
        assert_eq!(frame.activate(ItemId::Custom(99)), None);
        frame.close();
        assert_eq!(frame.activate(HELLO), None);
    }

    #[test]
    fn set_status() {
        let mut frame = frame();
        frame.set_status_text("busy");
        assert_eq!(frame.status_text(), "busy");
    }
}
