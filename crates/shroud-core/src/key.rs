use std::fmt;
use std::str::FromStr;

/// Symbolic identity of a keyboard key.
///
/// Produced by the platform layer's virtual-key translator and stable
/// across hook re-arms. `Unknown` is the total-function fallback for
/// raw codes with no key meaning (mouse buttons, keypad separators);
/// it is a valid translation result but can never be armed as a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Main-row and numpad digits
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    // Function keys
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
    F13, F14, F15, F16, F17, F18, F19, F20, F21, F22, F23, F24,

    // Control and navigation
    Cancel, Backspace, Tab, Clear, Return, Pause, Escape, Space,
    PageUp, PageDown, End, Home, Left, Up, Right, Down,
    Select, Print, Execute, PrintScreen, Insert, Delete, Help,

    // Modifiers (left/right variants collapse to these)
    Shift, Control, Alt, Meta, Menu,

    // Locks and power
    CapsLock, NumLock, ScrollLock, Sleep,

    // Punctuation (numpad and OEM)
    Asterisk, Plus, Minus, Slash, Comma, Period, Semicolon, Quote,
    LeftBracket, RightBracket, Backslash, Grave,

    // Browser and media
    BrowserBack, BrowserForward, BrowserRefresh, BrowserStop,
    BrowserSearch, BrowserFavorites, BrowserHome,
    VolumeMute, VolumeDown, VolumeUp,
    MediaNext, MediaPrevious, MediaStop, MediaPlayPause,
    LaunchMail, LaunchMedia, LaunchApp1, LaunchApp2,
    Play, Zoom,

    /// A raw code with no symbolic key meaning.
    Unknown,
}

impl Key {
    /// Returns the canonical operator-facing name of the key.
    pub fn name(self) -> &'static str {
        match self {
            Self::A => "A", Self::B => "B", Self::C => "C", Self::D => "D",
            Self::E => "E", Self::F => "F", Self::G => "G", Self::H => "H",
            Self::I => "I", Self::J => "J", Self::K => "K", Self::L => "L",
            Self::M => "M", Self::N => "N", Self::O => "O", Self::P => "P",
            Self::Q => "Q", Self::R => "R", Self::S => "S", Self::T => "T",
            Self::U => "U", Self::V => "V", Self::W => "W", Self::X => "X",
            Self::Y => "Y", Self::Z => "Z",

            Self::Digit0 => "0", Self::Digit1 => "1", Self::Digit2 => "2",
            Self::Digit3 => "3", Self::Digit4 => "4", Self::Digit5 => "5",
            Self::Digit6 => "6", Self::Digit7 => "7", Self::Digit8 => "8",
            Self::Digit9 => "9",

            Self::F1 => "F1", Self::F2 => "F2", Self::F3 => "F3",
            Self::F4 => "F4", Self::F5 => "F5", Self::F6 => "F6",
            Self::F7 => "F7", Self::F8 => "F8", Self::F9 => "F9",
            Self::F10 => "F10", Self::F11 => "F11", Self::F12 => "F12",
            Self::F13 => "F13", Self::F14 => "F14", Self::F15 => "F15",
            Self::F16 => "F16", Self::F17 => "F17", Self::F18 => "F18",
            Self::F19 => "F19", Self::F20 => "F20", Self::F21 => "F21",
            Self::F22 => "F22", Self::F23 => "F23", Self::F24 => "F24",

            Self::Cancel => "Cancel",
            Self::Backspace => "Backspace",
            Self::Tab => "Tab",
            Self::Clear => "Clear",
            Self::Return => "Enter",
            Self::Pause => "Pause",
            Self::Escape => "Escape",
            Self::Space => "Space",
            Self::PageUp => "PageUp",
            Self::PageDown => "PageDown",
            Self::End => "End",
            Self::Home => "Home",
            Self::Left => "Left",
            Self::Up => "Up",
            Self::Right => "Right",
            Self::Down => "Down",
            Self::Select => "Select",
            Self::Print => "Print",
            Self::Execute => "Execute",
            Self::PrintScreen => "PrintScreen",
            Self::Insert => "Insert",
            Self::Delete => "Delete",
            Self::Help => "Help",

            Self::Shift => "Shift",
            Self::Control => "Ctrl",
            Self::Alt => "Alt",
            Self::Meta => "Win",
            Self::Menu => "Menu",

            Self::CapsLock => "CapsLock",
            Self::NumLock => "NumLock",
            Self::ScrollLock => "ScrollLock",
            Self::Sleep => "Sleep",

            Self::Asterisk => "Asterisk",
            Self::Plus => "Plus",
            Self::Minus => "Minus",
            Self::Slash => "Slash",
            Self::Comma => "Comma",
            Self::Period => "Period",
            Self::Semicolon => "Semicolon",
            Self::Quote => "Quote",
            Self::LeftBracket => "LBracket",
            Self::RightBracket => "RBracket",
            Self::Backslash => "Backslash",
            Self::Grave => "Grave",

            Self::BrowserBack => "BrowserBack",
            Self::BrowserForward => "BrowserForward",
            Self::BrowserRefresh => "BrowserRefresh",
            Self::BrowserStop => "BrowserStop",
            Self::BrowserSearch => "BrowserSearch",
            Self::BrowserFavorites => "BrowserFavorites",
            Self::BrowserHome => "BrowserHome",
            Self::VolumeMute => "VolumeMute",
            Self::VolumeDown => "VolumeDown",
            Self::VolumeUp => "VolumeUp",
            Self::MediaNext => "MediaNext",
            Self::MediaPrevious => "MediaPrevious",
            Self::MediaStop => "MediaStop",
            Self::MediaPlayPause => "MediaPlayPause",
            Self::LaunchMail => "LaunchMail",
            Self::LaunchMedia => "LaunchMedia",
            Self::LaunchApp1 => "LaunchApp1",
            Self::LaunchApp2 => "LaunchApp2",
            Self::Play => "Play",
            Self::Zoom => "Zoom",

            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a key name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKeyError {
    name: String,
}

impl fmt::Display for ParseKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown key name: {:?}", self.name)
    }
}

impl std::error::Error for ParseKeyError {}

impl FromStr for Key {
    type Err = ParseKeyError;

    /// Parses an operator-facing key name, case-insensitively.
    ///
    /// Letters ("a"), digits ("7"), function keys ("F9"), and named
    /// keys with common aliases ("Enter"/"Return", "Esc"/"Escape")
    /// are accepted. `"Unknown"` is deliberately not parseable — it
    /// is a translation fallback, not an armable key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();

        // Single letter or digit
        if upper.len() == 1 {
            let ch = upper.as_bytes()[0];
            if ch.is_ascii_uppercase() {
                return Ok(LETTERS[(ch - b'A') as usize]);
            }
            if ch.is_ascii_digit() {
                return Ok(DIGITS[(ch - b'0') as usize]);
            }
        }

        // Function keys F1-F24
        if let Some(rest) = upper.strip_prefix('F')
            && let Ok(n) = rest.parse::<usize>()
            && (1..=24).contains(&n)
        {
            return Ok(FUNCTION_KEYS[n - 1]);
        }

        match upper.as_str() {
            "ENTER" | "RETURN" => Ok(Self::Return),
            "TAB" => Ok(Self::Tab),
            "ESCAPE" | "ESC" => Ok(Self::Escape),
            "SPACE" => Ok(Self::Space),
            "BACKSPACE" => Ok(Self::Backspace),
            "DELETE" | "DEL" => Ok(Self::Delete),
            "INSERT" | "INS" => Ok(Self::Insert),
            "HOME" => Ok(Self::Home),
            "END" => Ok(Self::End),
            "PAGEUP" | "PGUP" => Ok(Self::PageUp),
            "PAGEDOWN" | "PGDN" => Ok(Self::PageDown),
            "LEFT" => Ok(Self::Left),
            "UP" => Ok(Self::Up),
            "RIGHT" => Ok(Self::Right),
            "DOWN" => Ok(Self::Down),
            "PAUSE" => Ok(Self::Pause),
            "CLEAR" => Ok(Self::Clear),
            "CANCEL" => Ok(Self::Cancel),
            "SELECT" => Ok(Self::Select),
            "PRINT" => Ok(Self::Print),
            "EXECUTE" => Ok(Self::Execute),
            "PRINTSCREEN" | "PRTSC" => Ok(Self::PrintScreen),
            "HELP" => Ok(Self::Help),
            "SHIFT" => Ok(Self::Shift),
            "CTRL" | "CONTROL" => Ok(Self::Control),
            "ALT" => Ok(Self::Alt),
            "WIN" | "META" => Ok(Self::Meta),
            "MENU" | "APPS" => Ok(Self::Menu),
            "CAPSLOCK" => Ok(Self::CapsLock),
            "NUMLOCK" => Ok(Self::NumLock),
            "SCROLLLOCK" => Ok(Self::ScrollLock),
            "SLEEP" => Ok(Self::Sleep),
            "ASTERISK" => Ok(Self::Asterisk),
            "PLUS" | "EQUALS" => Ok(Self::Plus),
            "MINUS" => Ok(Self::Minus),
            "SLASH" => Ok(Self::Slash),
            "COMMA" => Ok(Self::Comma),
            "PERIOD" | "DOT" => Ok(Self::Period),
            "SEMICOLON" => Ok(Self::Semicolon),
            "QUOTE" => Ok(Self::Quote),
            "LBRACKET" => Ok(Self::LeftBracket),
            "RBRACKET" => Ok(Self::RightBracket),
            "BACKSLASH" => Ok(Self::Backslash),
            "GRAVE" | "BACKTICK" => Ok(Self::Grave),
            "BROWSERBACK" => Ok(Self::BrowserBack),
            "BROWSERFORWARD" => Ok(Self::BrowserForward),
            "BROWSERREFRESH" => Ok(Self::BrowserRefresh),
            "BROWSERSTOP" => Ok(Self::BrowserStop),
            "BROWSERSEARCH" => Ok(Self::BrowserSearch),
            "BROWSERFAVORITES" => Ok(Self::BrowserFavorites),
            "BROWSERHOME" => Ok(Self::BrowserHome),
            "VOLUMEMUTE" | "MUTE" => Ok(Self::VolumeMute),
            "VOLUMEDOWN" => Ok(Self::VolumeDown),
            "VOLUMEUP" => Ok(Self::VolumeUp),
            "MEDIANEXT" => Ok(Self::MediaNext),
            "MEDIAPREVIOUS" | "MEDIAPREV" => Ok(Self::MediaPrevious),
            "MEDIASTOP" => Ok(Self::MediaStop),
            "MEDIAPLAYPAUSE" | "PLAYPAUSE" => Ok(Self::MediaPlayPause),
            "LAUNCHMAIL" => Ok(Self::LaunchMail),
            "LAUNCHMEDIA" => Ok(Self::LaunchMedia),
            "LAUNCHAPP1" => Ok(Self::LaunchApp1),
            "LAUNCHAPP2" => Ok(Self::LaunchApp2),
            "PLAY" => Ok(Self::Play),
            "ZOOM" => Ok(Self::Zoom),
            _ => Err(ParseKeyError { name: s.into() }),
        }
    }
}

const LETTERS: [Key; 26] = [
    Key::A, Key::B, Key::C, Key::D, Key::E, Key::F, Key::G, Key::H, Key::I,
    Key::J, Key::K, Key::L, Key::M, Key::N, Key::O, Key::P, Key::Q, Key::R,
    Key::S, Key::T, Key::U, Key::V, Key::W, Key::X, Key::Y, Key::Z,
];

const DIGITS: [Key; 10] = [
    Key::Digit0, Key::Digit1, Key::Digit2, Key::Digit3, Key::Digit4,
    Key::Digit5, Key::Digit6, Key::Digit7, Key::Digit8, Key::Digit9,
];

const FUNCTION_KEYS: [Key; 24] = [
    Key::F1, Key::F2, Key::F3, Key::F4, Key::F5, Key::F6, Key::F7, Key::F8,
    Key::F9, Key::F10, Key::F11, Key::F12, Key::F13, Key::F14, Key::F15,
    Key::F16, Key::F17, Key::F18, Key::F19, Key::F20, Key::F21, Key::F22,
    Key::F23, Key::F24,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_parse_case_insensitively() {
        // Assert
        assert_eq!("a".parse::<Key>(), Ok(Key::A));
        assert_eq!("A".parse::<Key>(), Ok(Key::A));
        assert_eq!("z".parse::<Key>(), Ok(Key::Z));
    }

    #[test]
    fn digits_parse() {
        // Assert
        assert_eq!("0".parse::<Key>(), Ok(Key::Digit0));
        assert_eq!("9".parse::<Key>(), Ok(Key::Digit9));
    }

    #[test]
    fn function_keys_parse_across_full_range() {
        // Assert
        assert_eq!("F1".parse::<Key>(), Ok(Key::F1));
        assert_eq!("f12".parse::<Key>(), Ok(Key::F12));
        assert_eq!("F24".parse::<Key>(), Ok(Key::F24));
        assert!("F25".parse::<Key>().is_err());
        assert!("F0".parse::<Key>().is_err());
    }

    #[test]
    fn named_keys_and_aliases_parse() {
        // Assert
        assert_eq!("Enter".parse::<Key>(), Ok(Key::Return));
        assert_eq!("return".parse::<Key>(), Ok(Key::Return));
        assert_eq!("ESC".parse::<Key>(), Ok(Key::Escape));
        assert_eq!("pgdn".parse::<Key>(), Ok(Key::PageDown));
        assert_eq!("win".parse::<Key>(), Ok(Key::Meta));
    }

    #[test]
    fn unknown_is_not_parseable() {
        // "Unknown" is a translation fallback, never an armable target.
        assert!("Unknown".parse::<Key>().is_err());
        assert!("".parse::<Key>().is_err());
        assert!("NotAKey".parse::<Key>().is_err());
    }

    #[test]
    fn display_round_trips_for_parseable_keys() {
        // Arrange
        let keys = [Key::A, Key::Digit7, Key::F9, Key::Return, Key::Space];

        // Assert
        for key in keys {
            assert_eq!(key.name().parse::<Key>(), Ok(key));
        }
    }
}
