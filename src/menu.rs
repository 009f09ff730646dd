// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Menu assembly
//!
//! The menu bar is a plain tree of [`Menu`]s and [`MenuItem`]s; handlers are
//! kept separately in [`Bindings`], a table from [`ItemId`] to [`Handler`]
//! which is built once and validated against the menu bar.

use crate::accel::{self, Accelerator};
use crate::handler::{self, Handler};
use crate::{Error, Result};
use std::collections::HashMap;
use std::fmt;

/// Platform-recognised menu item identifiers
///
/// A shell may relocate stock items according to native conventions (e.g.
/// into the application menu on macOS).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StockId {
    Exit,
    About,
}

impl StockId {
    /// Default label (with access key)
    pub fn label(self) -> &'static str {
        match self {
            StockId::Exit => "E&xit",
            StockId::About => "&About",
        }
    }

    /// Default help text
    pub fn help(self) -> &'static str {
        match self {
            StockId::Exit => "Quit this program",
            StockId::About => "Show about dialog",
        }
    }
}

/// Identifier of a menu item
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ItemId {
    /// An application-defined id
    Custom(u32),
    /// A stock id
    Stock(StockId),
}

impl ItemId {
    pub const EXIT: ItemId = ItemId::Stock(StockId::Exit);
    pub const ABOUT: ItemId = ItemId::Stock(StockId::About);
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Custom(n) => write!(f, "#{n}"),
            ItemId::Stock(StockId::Exit) => f.write_str("exit"),
            ItemId::Stock(StockId::About) => f.write_str("about"),
        }
    }
}

/// An interactive menu entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItem {
    id: ItemId,
    text: String,
    accelerator: Option<Accelerator>,
    help: Option<String>,
}

impl MenuItem {
    /// Construct from an id and a label
    ///
    /// The label may carry an accelerator after a tab: `"&Hello...\tCtrl-H"`.
    pub fn new(id: ItemId, label: &str) -> Result<Self> {
        let (text, accelerator) = accel::split_label(label)?;
        Ok(MenuItem {
            id,
            text: text.to_string(),
            accelerator,
            help: None,
        })
    }

    /// Construct a stock item with its default label and help text
    pub fn stock(id: StockId) -> Self {
        MenuItem {
            id: ItemId::Stock(id),
            text: id.label().to_string(),
            accelerator: None,
            help: Some(id.help().to_string()),
        }
    }

    /// Set help text
    #[must_use]
    pub fn with_help(mut self, help: impl ToString) -> Self {
        self.help = Some(help.to_string());
        self
    }

    #[inline]
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Label text, including `&` access-key markers
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn accelerator(&self) -> Option<&Accelerator> {
        self.accelerator.as_ref()
    }

    #[inline]
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }
}

/// An entry of a [`Menu`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    Item(MenuItem),
    Separator,
}

/// A titled, ordered list of entries
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Menu {
    title: String,
    entries: Vec<Entry>,
}

impl Menu {
    /// Title, including `&` access-key markers
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Iterate over interactive items, skipping separators
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Item(item) => Some(item),
            Entry::Separator => None,
        })
    }
}

/// Builder for the entries of one [`Menu`]
///
/// Access through [`MenuBarBuilder::menu`].
pub struct MenuBuilder<'a> {
    entries: &'a mut Vec<Entry>,
}

impl<'a> MenuBuilder<'a> {
    /// Append an item
    #[inline]
    pub fn push_item(&mut self, item: MenuItem) {
        self.entries.push(Entry::Item(item));
    }

    /// Append an item, chain style
    #[inline]
    pub fn item(mut self, item: MenuItem) -> Self {
        self.push_item(item);
        self
    }

    /// Append a separator
    #[inline]
    pub fn push_separator(&mut self) {
        self.entries.push(Entry::Separator);
    }

    /// Append a separator, chain style
    #[inline]
    pub fn separator(mut self) -> Self {
        self.push_separator();
        self
    }
}

/// Builder for a [`MenuBar`]
#[derive(Default)]
pub struct MenuBarBuilder {
    menus: Vec<Menu>,
}

impl MenuBarBuilder {
    /// Append a menu, populated by `f`
    pub fn menu<F>(mut self, title: impl ToString, f: F) -> Self
    where
        F: FnOnce(MenuBuilder),
    {
        let mut entries = Vec::new();
        f(MenuBuilder {
            entries: &mut entries,
        });
        self.menus.push(Menu {
            title: title.to_string(),
            entries,
        });
        self
    }

    /// Build, checking that item ids are unique
    pub fn build(self) -> Result<MenuBar> {
        let bar = MenuBar { menus: self.menus };
        let mut seen = Vec::new();
        for item in bar.items() {
            if seen.contains(&item.id) {
                return Err(Error::DuplicateItem(item.id));
            }
            seen.push(item.id);
        }
        Ok(bar)
    }
}

/// An ordered list of menus
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuBar {
    menus: Vec<Menu>,
}

impl MenuBar {
    /// Construct via a builder
    #[inline]
    pub fn builder() -> MenuBarBuilder {
        MenuBarBuilder::default()
    }

    #[inline]
    pub fn menus(&self) -> &[Menu] {
        &self.menus
    }

    /// Iterate over interactive items of all menus
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.menus.iter().flat_map(Menu::items)
    }

    /// Find an item by id
    pub fn item(&self, id: ItemId) -> Option<&MenuItem> {
        self.items().find(|item| item.id == id)
    }

    /// Find the item triggered by an accelerator
    pub fn accelerator_target(&self, accel: &Accelerator) -> Option<ItemId> {
        self.items()
            .find(|item| item.accelerator.as_ref() == Some(accel))
            .map(|item| item.id)
    }
}

/// Builder for [`Bindings`]
#[derive(Default)]
pub struct BindingsBuilder {
    entries: Vec<(ItemId, Handler)>,
}

impl BindingsBuilder {
    /// Bind `handler` to item `id`
    #[inline]
    pub fn bind(mut self, id: ItemId, handler: Handler) -> Self {
        self.entries.push((id, handler));
        self
    }

    /// Build, validating against `bar`
    ///
    /// Every item of `bar` must be bound exactly once and every binding must
    /// name an item of `bar`.
    pub fn build(self, bar: &MenuBar) -> Result<Bindings> {
        let mut map = HashMap::with_capacity(self.entries.len());
        for (id, handler) in self.entries {
            if bar.item(id).is_none() {
                return Err(Error::UnknownItem(id));
            }
            if map.insert(id, handler).is_some() {
                return Err(Error::DuplicateBinding(id));
            }
        }

        if let Some(item) = bar.items().find(|item| !map.contains_key(&item.id)) {
            return Err(Error::UnboundItem(item.id));
        }

        Ok(Bindings { map })
    }
}

/// Table from menu item to handler
///
/// This is populated once and never mutated.
#[derive(Clone, Debug)]
pub struct Bindings {
    map: HashMap<ItemId, Handler>,
}

impl Bindings {
    /// Construct via a builder
    #[inline]
    pub fn builder() -> BindingsBuilder {
        BindingsBuilder::default()
    }

    /// Get the handler bound to `id`
    #[inline]
    pub fn get(&self, id: ItemId) -> Option<Handler> {
        self.map.get(&id).copied()
    }
}

/// Id of the "Hello" item
pub const HELLO: ItemId = ItemId::Custom(1);

const HELLO_LABEL: &str = "&Hello...\tCtrl-H";
const HELLO_HELP: &str = "help string shown in status bar for this menu item";

/// Build the File and Help menus and bind their handlers
pub fn assemble() -> Result<(MenuBar, Bindings)> {
    let hello = MenuItem::new(HELLO, HELLO_LABEL)?.with_help(HELLO_HELP);

    let bar = MenuBar::builder()
        .menu("&File", |menu| {
            menu.item(hello)
                .separator()
                .item(MenuItem::stock(StockId::Exit));
        })
        .menu("&Help", |menu| {
            menu.item(MenuItem::stock(StockId::About));
        })
        .build()?;

    let bindings = Bindings::builder()
        .bind(HELLO, handler::show_greeting)
        .bind(ItemId::EXIT, handler::close_window)
        .bind(ItemId::ABOUT, handler::show_about)
        .build(&bar)?;

    log::debug!("assemble: {} menus", bar.menus().len());
    Ok((bar, bindings))
}
