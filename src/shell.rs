// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! KAS shell
//!
//! Presents a [`Frame`] as a KAS window: a menu bar, the panel and a status
//! bar stacked in a column. Menu entries emit their [`ItemId`] as a message
//! and key presses are matched against item accelerators; both go through
//! the same [`Session`], which applies effects via the event context.

use crate::accel::Accelerator;
use crate::config::Config;
use crate::frame::{self, Frame, Panel};
use crate::handler::MessageDialog;
use crate::menu::{self, Entry, ItemId, MenuItem};
use crate::session::{Presenter, Session};
use crate::Result;
use kas::dir::{Directions, Right};
use kas::event::{ElementState, FocusSource};
use kas::layout::AlignHints;
use kas::prelude::*;
use kas::text::format::Markdown;
use kas::theme::MarginStyle;
use kas::widgets::adapt::{Align, Margins};
use kas::widgets::dialog::MessageBox;
use kas::widgets::{column, format_data, Filler, Label, Separator};
use kas::window::WindowId;

/// Label text of a menu entry, with its accelerator after a tab
fn entry_label(item: &MenuItem) -> String {
    match item.accelerator() {
        Some(accel) => format!("{}\t{}", item.text(), accel),
        None => item.text().to_string(),
    }
}

fn menubar(model: &menu::MenuBar) -> kas::widgets::menu::MenuBar<Frame, Right> {
    let mut builder = kas::widgets::menu::MenuBar::<Frame, Right>::builder();
    for m in model.menus() {
        let entries = m.entries().to_vec();
        builder = builder.menu(m.title().to_string(), move |mut menu| {
            for entry in &entries {
                match entry {
                    Entry::Item(item) => menu.push_entry(entry_label(item), item.id()),
                    Entry::Separator => menu.push_separator(),
                }
            }
        });
    }
    builder.build()
}

/// Markdown source rendering `label` with its style
///
/// Headings give a larger bold face; the heading level is picked from the
/// size increase.
fn label_markup(label: &frame::Label) -> String {
    let style = label.style();
    let mut text = String::with_capacity(label.text().len() + 4);
    for c in label.text().chars() {
        if matches!(c, '\\' | '*' | '_' | '#' | '`' | '[' | ']' | '~') {
            text.push('\\');
        }
        text.push(c);
    }

    let delta = style.point_size_delta;
    if delta >= 8.0 {
        format!("# {text}")
    } else if delta >= 4.0 {
        format!("## {text}")
    } else if delta > 0.0 {
        format!("### {text}")
    } else if style.bold {
        format!("**{text}**")
    } else {
        text
    }
}

fn panel(model: &Panel) -> impl Widget<Data = ()> + use<> {
    let label: Box<dyn Widget<Data = ()>> = match Markdown::new(&label_markup(model.label())) {
        Ok(md) => Box::new(Label::new(md)),
        Err(err) => {
            log::warn!("label markup: {err:?}");
            Box::new(Label::new(model.label().text().to_string()))
        }
    };

    let layout = model.layout();
    let label = Margins::new(
        Margins::new(label, Directions::UP, MarginStyle::Px(layout.top)),
        Directions::LEFT,
        MarginStyle::Px(layout.left),
    );
    column![Align::new(label, AlignHints::TOP_LEFT), Filler::maximize()]
}

/// Build a message box window for `dialog`
pub fn dialog_window(dialog: MessageDialog) -> Window<()> {
    log::debug!("dialog_window: {:?}", dialog.title);
    let body = format!("{} {}", dialog.icon.glyph(), dialog.message);
    MessageBox::new(body).into_window(dialog.title)
}

impl Presenter for EventCx<'_> {
    type Dialog = WindowId;

    fn open_dialog(&mut self, dialog: MessageDialog) -> WindowId {
        self.add_window::<()>(dialog_window(dialog))
    }

    fn close_dialog(&mut self, dialog: WindowId) {
        self.close_window(dialog);
    }

    fn exit_loop(&mut self) {
        self.exit();
    }
}

#[derive(Debug)]
struct ClaimKeys;

#[impl_self]
mod MainWindow {
    /// Root of the main window
    ///
    /// Owns the [`Session`] and holds key focus so that accelerators reach
    /// it; keys it does not match fall through to access-key handling.
    #[widget]
    #[layout(self.inner)]
    struct MainWindow<W: Widget<Data = Frame>> {
        core: widget_core!(),
        session: Session<WindowId>,
        #[widget(&self.session.frame)]
        inner: W,
    }

    impl Self {
        fn new(frame: Frame, inner: W) -> Self {
            MainWindow {
                core: Default::default(),
                session: Session::new(frame),
                inner,
            }
        }

        fn refresh(&mut self, cx: &mut EventCx) {
            cx.update(self.inner.as_node(&self.session.frame));
        }
    }

    impl Events for Self {
        type Data = ();

        fn configure(&mut self, cx: &mut ConfigCx) {
            cx.send(self.id(), ClaimKeys);
        }

        fn handle_event(&mut self, cx: &mut EventCx, _: &(), event: Event) -> IsUsed {
            match event {
                Event::Key(event, false) if event.state == ElementState::Pressed => {
                    let accel = Accelerator::new(cx.modifiers(), &event.logical_key);
                    if self.session.key(&accel, &mut *cx) {
                        self.refresh(cx);
                        Used
                    } else {
                        Unused
                    }
                }
                _ => Unused,
            }
        }

        fn handle_messages(&mut self, cx: &mut EventCx, _: &()) {
            if let Some(id) = cx.try_pop::<ItemId>() {
                if !self.session.activate(id, &mut *cx) {
                    log::warn!("menu item {id} is not bound");
                }
                self.refresh(cx);
                if self.session.frame.is_open() {
                    cx.request_key_focus(self.id(), None, FocusSource::Synthetic);
                }
            } else if let Some(ClaimKeys) = cx.try_pop() {
                cx.request_key_focus(self.id(), None, FocusSource::Synthetic);
            }
        }
    }
}

/// Build the KAS window presenting `frame`
///
/// The frame is marked shown.
pub fn window(mut frame: Frame) -> Window<()> {
    frame.show();
    let title = frame.title().to_string();

    let ui = column![
        menubar(frame.menu_bar()),
        Separator::new(),
        panel(frame.panel()).map_any(),
        Separator::new(),
        format_data!(frame: &Frame, "{}", frame.status_text()),
    ];

    Window::new(MainWindow::new(frame, ui), title)
}

/// Run the application
///
/// Constructs the main window from `config`, shows it and blocks in the KAS
/// event loop until Exit is chosen or the last window closes.
pub fn run(config: &Config) -> Result<()> {
    let frame = Frame::from_config(config)?;

    let theme = kas::theme::FlatTheme::new();
    let mut runner = kas::runner::Runner::with_theme(theme).build(())?;
    runner.add(window(frame));

    log::info!("starting event loop");
    runner.run()?;
    log::info!("event loop ended");
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::frame::LabelStyle;

    #[test]
    fn markup_heading() {
        let label = frame::Label::new(
            "hello bro",
            LabelStyle {
                point_size_delta: 10.0,
                bold: true,
            },
        );
        assert_eq!(label_markup(&label), "# hello bro");
    }

    #[test]
    fn markup_bold_escaped() {
        let label = frame::Label::new(
            "a*b",
            LabelStyle {
                point_size_delta: 0.0,
                bold: true,
            },
        );
        assert_eq!(label_markup(&label), r"**a\*b**");
    }

    #[test]
    fn accelerator_in_entry_label() {
        let (bar, _) = menu::assemble().unwrap();
        let hello = bar.item(menu::HELLO).unwrap();
        assert_eq!(entry_label(hello), "&Hello...\tCtrl-H");
        let exit = bar.item(ItemId::EXIT).unwrap();
        assert_eq!(entry_label(exit), "E&xit");
    }
}
