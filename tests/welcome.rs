use welcome::Config;
use welcome::accel::Accelerator;
use welcome::frame::{Font, Frame, Weight};
use welcome::handler::{Icon, MessageDialog};
use welcome::menu::{HELLO, ItemId};
use welcome::session::{Presenter, Session};

/// Records toolkit calls in place of a display
#[derive(Default)]
struct Screen {
    next: usize,
    dialogs: Vec<(usize, MessageDialog)>,
    exited: bool,
}

impl Presenter for Screen {
    type Dialog = usize;

    fn open_dialog(&mut self, dialog: MessageDialog) -> usize {
        self.next += 1;
        self.dialogs.push((self.next, dialog));
        self.next
    }

    fn close_dialog(&mut self, dialog: usize) {
        self.dialogs.retain(|(id, _)| *id != dialog);
    }

    fn exit_loop(&mut self) {
        assert!(!self.exited, "exit requested twice");
        self.exited = true;
    }
}

fn frame() -> Frame {
    Frame::from_config(&Config::default()).unwrap()
}

fn session() -> Session<usize> {
    let mut frame = frame();
    frame.show();
    Session::new(frame)
}

#[test]
fn initial_window() {
    let frame = frame();
    assert_eq!(frame.title(), "Welcome to GNU/Linux!");
    assert_eq!(frame.status_text(), "everything's gud");

    let label = frame.panel().label();
    assert_eq!(label.text(), "hello bro");
    assert!(label.font().point_size > Font::default().point_size);
    assert_eq!(label.font().weight, Weight::Bold);
}

#[test]
fn about_dialog() {
    let mut session = session();
    let mut screen = Screen::default();
    assert!(session.activate(ItemId::ABOUT, &mut screen));

    let (_, dialog) = &screen.dialogs[0];
    assert_eq!(dialog.title, "about hello world 2");
    assert_eq!(dialog.message, "this is a wxpython hello world sample");
    assert_eq!(dialog.icon, Icon::Information);
    assert!(!screen.exited);
}

#[test]
fn hello_twice_replaces_dialog() {
    let mut session = session();
    let mut screen = Screen::default();
    session.activate(HELLO, &mut screen);
    session.activate(HELLO, &mut screen);
    assert_eq!(screen.dialogs.len(), 1);
    assert_eq!(screen.dialogs[0].1.message, "hello from wxpython");
}

#[test]
fn exit_with_open_dialog() {
    let mut session = session();
    let mut screen = Screen::default();
    session.activate(HELLO, &mut screen);
    assert_eq!(screen.dialogs.len(), 1);

    session.activate(ItemId::EXIT, &mut screen);
    assert!(screen.dialogs.is_empty());
    assert!(screen.exited);
    assert!(!session.frame.is_open());
    assert_eq!(session.dialog(), None);
}

#[test]
fn exit_twice() {
    let mut session = session();
    let mut screen = Screen::default();
    assert!(session.activate(ItemId::EXIT, &mut screen));
    assert!(!session.activate(ItemId::EXIT, &mut screen));
    assert!(!session.activate(HELLO, &mut screen));
    assert!(screen.dialogs.is_empty());
}

#[test]
fn ctrl_h_says_hello() {
    let mut session = session();
    let mut screen = Screen::default();
    let accel = Accelerator::new(
        kas::event::ModifiersState::CONTROL,
        &kas::event::Key::Character("h".into()),
    );
    assert!(session.key(&accel, &mut screen));
    assert_eq!(screen.dialogs[0].1.message, "hello from wxpython");
    assert_eq!(screen.dialogs[0].1.title, "Message");
}

#[test]
fn kas_window_builds() {
    let _window = welcome::shell::window(frame());
}
