// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Keyboard accelerators
//!
//! An accelerator is a keyboard shortcut annotated on a menu item label,
//! written after a tab: `"&Hello...\tCtrl-H"`. Modifiers and key are joined
//! by `-` or `+`. Keys and modifiers use the toolkit's types so that a key
//! press compares directly against a parsed accelerator.

use crate::{Error, Result};
use kas::event::{Key, ModifiersState, NamedKey};
use std::fmt;
use std::str::FromStr;

const FUNCTION_KEYS: [NamedKey; 12] = [
    NamedKey::F1,
    NamedKey::F2,
    NamedKey::F3,
    NamedKey::F4,
    NamedKey::F5,
    NamedKey::F6,
    NamedKey::F7,
    NamedKey::F8,
    NamedKey::F9,
    NamedKey::F10,
    NamedKey::F11,
    NamedKey::F12,
];

/// A keyboard shortcut: modifiers plus one key
///
/// Character keys are stored lower-case.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Accelerator {
    pub modifiers: ModifiersState,
    pub key: Key,
}

impl Accelerator {
    /// Construct from a key press
    ///
    /// `key` should be the key without modifiers applied.
    pub fn new(modifiers: ModifiersState, key: &Key) -> Self {
        let key = match key {
            Key::Character(c) => Key::Character(c.to_lowercase().into()),
            key => key.clone(),
        };
        Accelerator { modifiers, key }
    }

    /// Shortcut for `Ctrl` plus a letter or digit
    pub fn ctrl(c: char) -> Self {
        let key = Key::Character(c.to_ascii_lowercase().to_string().into());
        Accelerator {
            modifiers: ModifiersState::CONTROL,
            key,
        }
    }
}

impl FromStr for Accelerator {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let mut parts: Vec<&str> = text.trim().split(['-', '+']).collect();
        let key = match parts.pop() {
            Some(key) if !key.is_empty() => key,
            _ => return Err(Error::accelerator(text, "missing key")),
        };

        let mut modifiers = ModifiersState::empty();
        for part in parts {
            modifiers |= match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => ModifiersState::CONTROL,
                "alt" => ModifiersState::ALT,
                "shift" => ModifiersState::SHIFT,
                _ => return Err(Error::accelerator(text, "unknown modifier")),
            };
        }

        let mut chars = key.chars();
        let key = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphanumeric() => {
                Key::Character(c.to_ascii_lowercase().to_string().into())
            }
            (Some('F' | 'f'), Some(_)) => match key[1..].parse::<usize>() {
                Ok(n @ 1..=12) => Key::Named(FUNCTION_KEYS[n - 1]),
                _ => return Err(Error::accelerator(text, "unknown key")),
            },
            _ => return Err(Error::accelerator(text, "unknown key")),
        };

        Ok(Accelerator { modifiers, key })
    }
}

impl fmt::Display for Accelerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(ModifiersState::CONTROL) {
            f.write_str("Ctrl-")?;
        }
        if self.modifiers.contains(ModifiersState::ALT) {
            f.write_str("Alt-")?;
        }
        if self.modifiers.contains(ModifiersState::SHIFT) {
            f.write_str("Shift-")?;
        }
        match &self.key {
            Key::Character(c) => f.write_str(&c.to_uppercase()),
            Key::Named(named) => match FUNCTION_KEYS.iter().position(|k| k == named) {
                Some(i) => write!(f, "F{}", i + 1),
                None => write!(f, "{named:?}"),
            },
            key => write!(f, "{key:?}"),
        }
    }
}

/// Split an item label into its text and optional accelerator
///
/// Everything after the first tab is parsed as an [`Accelerator`].
pub fn split_label(label: &str) -> Result<(&str, Option<Accelerator>)> {
    match label.split_once('\t') {
        Some((text, accel)) => Ok((text, Some(accel.parse()?))),
        None => Ok((label, None)),
    }
}
