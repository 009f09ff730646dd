// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Applying handler effects
//!
//! A [`Session`] owns the [`Frame`] plus the message box currently open, if
//! any. Toolkit operations go through a [`Presenter`]; the running shell
//! implements it over the event context.

use crate::accel::Accelerator;
use crate::frame::Frame;
use crate::handler::{Effect, MessageDialog};
use crate::menu::ItemId;

/// Toolkit operations needed to apply an [`Effect`]
pub trait Presenter {
    /// Handle to an open message box
    type Dialog;

    /// Open a message box
    fn open_dialog(&mut self, dialog: MessageDialog) -> Self::Dialog;

    /// Close a message box opened by [`Self::open_dialog`]
    fn close_dialog(&mut self, dialog: Self::Dialog);

    /// Stop the event loop
    fn exit_loop(&mut self);
}

/// The main frame and its open message box
///
/// At most one message box is open at a time: opening another replaces it.
#[derive(Debug)]
pub struct Session<D> {
    pub frame: Frame,
    dialog: Option<D>,
}

impl<D> Session<D> {
    /// Construct
    pub fn new(frame: Frame) -> Self {
        Session {
            frame,
            dialog: None,
        }
    }

    /// The open message box, if any
    #[inline]
    pub fn dialog(&self) -> Option<&D> {
        self.dialog.as_ref()
    }

    /// Activate the item `id`
    ///
    /// Returns `true` if a handler ran.
    pub fn activate<P>(&mut self, id: ItemId, presenter: &mut P) -> bool
    where
        P: Presenter<Dialog = D> + ?Sized,
    {
        match self.frame.activate(id) {
            Some(effect) => {
                self.apply(effect, presenter);
                true
            }
            None => false,
        }
    }

    /// Handle a key press
    ///
    /// Returns `true` if `accel` triggered an item.
    pub fn key<P>(&mut self, accel: &Accelerator, presenter: &mut P) -> bool
    where
        P: Presenter<Dialog = D> + ?Sized,
    {
        match self.frame.accelerator_target(accel) {
            Some(id) => self.activate(id, presenter),
            None => false,
        }
    }

    fn apply<P>(&mut self, effect: Effect, presenter: &mut P)
    where
        P: Presenter<Dialog = D> + ?Sized,
    {
        match effect {
            Effect::Dialog(dialog) => {
                if let Some(old) = self.dialog.take() {
                    presenter.close_dialog(old);
                }
                log::debug!("dialog: {:?}", dialog.title);
                self.dialog = Some(presenter.open_dialog(dialog));
            }
            Effect::Close { force } => {
                log::trace!("close: force={force}");
                self.close(presenter);
            }
        }
    }

    fn close<P>(&mut self, presenter: &mut P)
    where
        P: Presenter<Dialog = D> + ?Sized,
    {
        if !self.frame.close() {
            return;
        }
        if let Some(dialog) = self.dialog.take() {
            presenter.close_dialog(dialog);
        }
        presenter.exit_loop();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::menu::HELLO;
    use crate::Config;

    #[derive(Default)]
    struct Recorder {
        next: u32,
        open: Vec<(u32, MessageDialog)>,
        exits: u32,
    }

    impl Presenter for Recorder {
        type Dialog = u32;

        fn open_dialog(&mut self, dialog: MessageDialog) -> u32 {
            self.next += 1;
            self.open.push((self.next, dialog));
            self.next
        }

        fn close_dialog(&mut self, dialog: u32) {
            self.open.retain(|(id, _)| *id != dialog);
        }

        fn exit_loop(&mut self) {
            self.exits += 1;
        }
    }

    fn session() -> Session<u32> {
        Session::new(Frame::from_config(&Config::default()).unwrap())
    }

    #[test]
    fn single_dialog() {
        let mut session = session();
        let mut rec = Recorder::default();
        assert!(session.activate(HELLO, &mut rec));
        assert!(session.activate(HELLO, &mut rec));
        assert_eq!(rec.open.len(), 1);
        assert_eq!(session.dialog(), Some(&2));
    }

    #[test]
    fn exit_closes_dialog() {
        let mut session = session();
        let mut rec = Recorder::default();
        session.activate(HELLO, &mut rec);
        assert!(session.activate(ItemId::EXIT, &mut rec));
        assert!(rec.open.is_empty());
        assert_eq!(rec.exits, 1);
        assert!(!session.frame.is_open());

        assert!(!session.activate(ItemId::EXIT, &mut rec));
        assert_eq!(rec.exits, 1);
    }

    #[test]
    fn ctrl_h() {
        let mut session = session();
        let mut rec = Recorder::default();
        assert!(session.key(&Accelerator::ctrl('h'), &mut rec));
        assert_eq!(rec.open[0].1.message, "hello from wxpython");
        assert!(!session.key(&Accelerator::ctrl('q'), &mut rec));
    }
}
