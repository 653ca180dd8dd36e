//! Win32 implementation of the Shroud core: the low-level keyboard
//! hook, process enumeration, and window-visibility control.
//!
//! Everything here is `#[cfg(windows)]`; on other targets this crate
//! compiles to an empty library so the workspace still builds.

/// Ctrl+C handling via `SetConsoleCtrlHandler`.
#[cfg(windows)]
pub mod ctrl_c;

/// Win32 top-level window enumeration.
#[cfg(windows)]
pub mod enumerate;

/// System-wide low-level keyboard hook.
#[cfg(windows)]
pub mod hook;

/// Virtual-key code translation.
#[cfg(windows)]
pub mod keys;

/// Process snapshot enumeration and process records.
#[cfg(windows)]
pub mod process;

/// Hide/show of a process's top-level windows.
#[cfg(windows)]
pub mod visibility;

/// Window type wrapping a Win32 `HWND`.
#[cfg(windows)]
pub mod window;

#[cfg(windows)]
pub use hook::KeyboardHook;
#[cfg(windows)]
pub use process::{ProcessList, ProcessRecord, is_process_alive};
#[cfg(windows)]
pub use window::Window;
