//! Keyboard input model.

/// A key press, as reported by the host's input layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Key {
    /// Move up one cell.
    ArrowUp,
    /// Move down one cell.
    ArrowDown,
    /// Move left one cell.
    ArrowLeft,
    /// Move right one cell.
    ArrowRight,
    /// Switch direction, like [`Key::Tab`].
    Space,
    /// Switch direction if the focused cell has an answer in the other one.
    Tab,
    /// Clear the focused cell and step back.
    Backspace,
    /// Clear the focused cell.
    Delete,
    /// Jump to the first cell of the current answer.
    Home,
    /// Jump to the last cell of the current answer.
    End,
    /// A printable character.
    Character(char),
    /// Any other key; left to the host.
    Other(String),
}

impl Key {
    /// Maps a DOM-style key name to a key.
    ///
    /// Single-character names other than `" "` become [`Key::Character`];
    /// unrecognised longer names become [`Key::Other`].
    ///
    /// # Examples
    ///
    /// ```
    /// use crossword_game::Key;
    ///
    /// assert_eq!(Key::from_name("ArrowLeft"), Key::ArrowLeft);
    /// assert_eq!(Key::from_name(" "), Key::Space);
    /// assert_eq!(Key::from_name("q"), Key::Character('q'));
    /// assert_eq!(Key::from_name("F5"), Key::Other("F5".into()));
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            " " | "Space" => Self::Space,
            "Tab" => Self::Tab,
            "Backspace" => Self::Backspace,
            "Delete" => Self::Delete,
            "Home" => Self::Home,
            "End" => Self::End,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Self::Character(ch),
                    _ => Self::Other(name.to_owned()),
                }
            }
        }
    }
}

bitflags::bitflags! {
    /// Modifier keys held during a key press.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Control.
        const CTRL = 0b0001;
        /// Alt / Option.
        const ALT = 0b0010;
        /// Meta / Command / Windows.
        const META = 0b0100;
        /// Shift.
        const SHIFT = 0b1000;
    }
}

impl Modifiers {
    /// Returns `true` if a modifier that turns the press into a host shortcut
    /// is held. Shift alone is not one.
    #[must_use]
    pub fn is_shortcut(self) -> bool {
        self.intersects(Self::CTRL | Self::ALT | Self::META)
    }
}

/// Whether a key press was consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum KeyOutcome {
    /// The press was consumed; the host should suppress its default handling.
    Handled,
    /// The press was not consumed; the host may handle it.
    Ignored,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Key::from_name("Tab"), Key::Tab);
        assert_eq!(Key::from_name("Space"), Key::Space);
        assert_eq!(Key::from_name("End"), Key::End);
        assert_eq!(Key::from_name("é"), Key::Character('é'));
        assert_eq!(Key::from_name(""), Key::Other(String::new()));
        assert!(Key::from_name("Escape").is_other());
    }

    #[test]
    fn test_shortcut_modifiers() {
        assert!(!Modifiers::empty().is_shortcut());
        assert!(!Modifiers::SHIFT.is_shortcut());
        assert!(Modifiers::CTRL.is_shortcut());
        assert!((Modifiers::SHIFT | Modifiers::META).is_shortcut());
    }
}
