use shroud_core::Key;

/// Translates a Windows virtual-key code to its symbolic [`Key`].
///
/// Total and deterministic: every code maps to some `Key`, with
/// `Key::Unknown` for codes that carry no key meaning (mouse buttons,
/// the keypad separator and decimal point, OEM codes we don't name).
/// Left/right modifier variants collapse to the undistinguished
/// modifier, and numpad digits map to the same `Key` as the main row.
pub fn key_from_vk(vk: u32) -> Key {
    match vk {
        // 0x01-0x06 are mouse buttons (VK_LBUTTON..VK_XBUTTON2);
        // they fall through to Unknown below, except VK_CANCEL.
        0x03 => Key::Cancel, // VK_CANCEL

        0x08 => Key::Backspace, // VK_BACK
        0x09 => Key::Tab,       // VK_TAB
        0x0C => Key::Clear,     // VK_CLEAR
        0x0D => Key::Return,    // VK_RETURN
        0x10 => Key::Shift,     // VK_SHIFT
        0x11 => Key::Control,   // VK_CONTROL
        0x12 => Key::Alt,       // VK_MENU
        0x13 => Key::Pause,     // VK_PAUSE
        0x14 => Key::CapsLock,  // VK_CAPITAL
        0x1B => Key::Escape,    // VK_ESCAPE
        0x20 => Key::Space,     // VK_SPACE
        0x21 => Key::PageUp,    // VK_PRIOR
        0x22 => Key::PageDown,  // VK_NEXT
        0x23 => Key::End,       // VK_END
        0x24 => Key::Home,      // VK_HOME
        0x25 => Key::Left,      // VK_LEFT
        0x26 => Key::Up,        // VK_UP
        0x27 => Key::Right,     // VK_RIGHT
        0x28 => Key::Down,      // VK_DOWN
        0x29 => Key::Select,    // VK_SELECT
        0x2A => Key::Print,     // VK_PRINT
        0x2B => Key::Execute,   // VK_EXECUTE
        0x2C => Key::PrintScreen, // VK_SNAPSHOT
        0x2D => Key::Insert,    // VK_INSERT
        0x2E => Key::Delete,    // VK_DELETE
        0x2F => Key::Help,      // VK_HELP

        // Main-row digits 0-9
        0x30 => Key::Digit0,
        0x31 => Key::Digit1,
        0x32 => Key::Digit2,
        0x33 => Key::Digit3,
        0x34 => Key::Digit4,
        0x35 => Key::Digit5,
        0x36 => Key::Digit6,
        0x37 => Key::Digit7,
        0x38 => Key::Digit8,
        0x39 => Key::Digit9,

        // Letters A-Z
        0x41 => Key::A,
        0x42 => Key::B,
        0x43 => Key::C,
        0x44 => Key::D,
        0x45 => Key::E,
        0x46 => Key::F,
        0x47 => Key::G,
        0x48 => Key::H,
        0x49 => Key::I,
        0x4A => Key::J,
        0x4B => Key::K,
        0x4C => Key::L,
        0x4D => Key::M,
        0x4E => Key::N,
        0x4F => Key::O,
        0x50 => Key::P,
        0x51 => Key::Q,
        0x52 => Key::R,
        0x53 => Key::S,
        0x54 => Key::T,
        0x55 => Key::U,
        0x56 => Key::V,
        0x57 => Key::W,
        0x58 => Key::X,
        0x59 => Key::Y,
        0x5A => Key::Z,

        // Windows and application keys
        0x5B | 0x5C => Key::Meta, // VK_LWIN / VK_RWIN
        0x5D => Key::Menu,        // VK_APPS
        0x5F => Key::Sleep,       // VK_SLEEP

        // Numpad digits share the main-row identities
        0x60 => Key::Digit0,
        0x61 => Key::Digit1,
        0x62 => Key::Digit2,
        0x63 => Key::Digit3,
        0x64 => Key::Digit4,
        0x65 => Key::Digit5,
        0x66 => Key::Digit6,
        0x67 => Key::Digit7,
        0x68 => Key::Digit8,
        0x69 => Key::Digit9,
        0x6A => Key::Asterisk, // VK_MULTIPLY
        0x6B => Key::Plus,     // VK_ADD
        // 0x6C VK_SEPARATOR and 0x6E VK_DECIMAL stay Unknown
        0x6D => Key::Minus, // VK_SUBTRACT
        0x6F => Key::Slash, // VK_DIVIDE

        // Function keys F1-F24 (VK_F1 = 0x70)
        0x70 => Key::F1,
        0x71 => Key::F2,
        0x72 => Key::F3,
        0x73 => Key::F4,
        0x74 => Key::F5,
        0x75 => Key::F6,
        0x76 => Key::F7,
        0x77 => Key::F8,
        0x78 => Key::F9,
        0x79 => Key::F10,
        0x7A => Key::F11,
        0x7B => Key::F12,
        0x7C => Key::F13,
        0x7D => Key::F14,
        0x7E => Key::F15,
        0x7F => Key::F16,
        0x80 => Key::F17,
        0x81 => Key::F18,
        0x82 => Key::F19,
        0x83 => Key::F20,
        0x84 => Key::F21,
        0x85 => Key::F22,
        0x86 => Key::F23,
        0x87 => Key::F24,

        0x90 => Key::NumLock,    // VK_NUMLOCK
        0x91 => Key::ScrollLock, // VK_SCROLL

        // Left/right modifier variants collapse to the plain modifier
        0xA0 | 0xA1 => Key::Shift,   // VK_LSHIFT / VK_RSHIFT
        0xA2 | 0xA3 => Key::Control, // VK_LCONTROL / VK_RCONTROL
        0xA4 | 0xA5 => Key::Alt,     // VK_LMENU / VK_RMENU

        // Browser keys
        0xA6 => Key::BrowserBack,
        0xA7 => Key::BrowserForward,
        0xA8 => Key::BrowserRefresh,
        0xA9 => Key::BrowserStop,
        0xAA => Key::BrowserSearch,
        0xAB => Key::BrowserFavorites,
        0xAC => Key::BrowserHome,

        // Volume and media keys
        0xAD => Key::VolumeMute,
        0xAE => Key::VolumeDown,
        0xAF => Key::VolumeUp,
        0xB0 => Key::MediaNext,
        0xB1 => Key::MediaPrevious,
        0xB2 => Key::MediaStop,
        0xB3 => Key::MediaPlayPause,
        0xB4 => Key::LaunchMail,
        0xB5 => Key::LaunchMedia,
        0xB6 => Key::LaunchApp1,
        0xB7 => Key::LaunchApp2,

        // OEM punctuation (US layout names)
        0xBA => Key::Semicolon,    // VK_OEM_1
        0xBB => Key::Plus,         // VK_OEM_PLUS
        0xBC => Key::Comma,        // VK_OEM_COMMA
        0xBD => Key::Minus,        // VK_OEM_MINUS
        0xBE => Key::Period,       // VK_OEM_PERIOD
        0xBF => Key::Slash,        // VK_OEM_2
        0xC0 => Key::Grave,        // VK_OEM_3
        0xDB => Key::LeftBracket,  // VK_OEM_4
        0xDC => Key::Backslash,    // VK_OEM_5
        0xDD => Key::RightBracket, // VK_OEM_6
        0xDE => Key::Quote,        // VK_OEM_7

        0xFA => Key::Play, // VK_PLAY
        0xFB => Key::Zoom, // VK_ZOOM

        _ => Key::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_digits_translate() {
        // Assert
        assert_eq!(key_from_vk(0x41), Key::A);
        assert_eq!(key_from_vk(0x5A), Key::Z);
        assert_eq!(key_from_vk(0x30), Key::Digit0);
        assert_eq!(key_from_vk(0x39), Key::Digit9);
    }

    #[test]
    fn numpad_digits_share_main_row_identities() {
        // Assert
        assert_eq!(key_from_vk(0x60), Key::Digit0);
        assert_eq!(key_from_vk(0x69), Key::Digit9);
    }

    #[test]
    fn left_right_modifiers_collapse() {
        // Assert
        assert_eq!(key_from_vk(0xA0), Key::Shift);
        assert_eq!(key_from_vk(0xA1), Key::Shift);
        assert_eq!(key_from_vk(0xA2), Key::Control);
        assert_eq!(key_from_vk(0xA5), Key::Alt);
        assert_eq!(key_from_vk(0x5B), Key::Meta);
        assert_eq!(key_from_vk(0x5C), Key::Meta);
    }

    #[test]
    fn function_keys_cover_full_range() {
        // Assert
        assert_eq!(key_from_vk(0x70), Key::F1);
        assert_eq!(key_from_vk(0x7B), Key::F12);
        assert_eq!(key_from_vk(0x87), Key::F24);
    }

    #[test]
    fn codes_without_key_meaning_are_unknown() {
        // Mouse buttons, keypad separator/decimal, unassigned ranges.
        assert_eq!(key_from_vk(0x01), Key::Unknown);
        assert_eq!(key_from_vk(0x02), Key::Unknown);
        assert_eq!(key_from_vk(0x6C), Key::Unknown);
        assert_eq!(key_from_vk(0x6E), Key::Unknown);
        assert_eq!(key_from_vk(0x07), Key::Unknown);
        assert_eq!(key_from_vk(0xFF), Key::Unknown);
        assert_eq!(key_from_vk(0xFFFF), Key::Unknown);
    }

    #[test]
    fn translation_is_deterministic() {
        // Act twice, assert the same result
        for vk in 0..=0xFFu32 {
            assert_eq!(key_from_vk(vk), key_from_vk(vk));
        }
    }
}
