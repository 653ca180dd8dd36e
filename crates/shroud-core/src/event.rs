use crate::Key;

/// A notification published by the keyboard hook.
///
/// The platform layer publishes these synchronously to every current
/// subscriber; delivery is fire-and-forget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookEvent {
    /// The armed key was pressed.
    ///
    /// One event per key-down message: a held key auto-repeats, and
    /// each repeat produces its own event. System key-downs (e.g. with
    /// Alt held) are treated identically to plain key-downs.
    KeyMatched(Key),

    /// Hook installation failed with the given OS error code.
    ///
    /// The hook remains inactive; the caller may retry with the same
    /// or a different key.
    InstallFailed(i32),
}
