use windows::Win32::Foundation::{HWND, LPARAM};
use windows::Win32::UI::WindowsAndMessaging::EnumWindows;

use shroud_core::ShroudResult;

use crate::window::Window;

/// Collects every top-level window on the current desktop.
///
/// Deliberately unfiltered: hidden windows are included so a later
/// show pass can find the windows an earlier hide pass touched. Child
/// windows are never walked; hiding a top-level window hides its
/// children with it.
pub fn top_level_windows() -> ShroudResult<Vec<Window>> {
    let mut windows: Vec<Window> = Vec::new();

    // SAFETY: the callback only runs during this call, so the Vec
    // pointer smuggled through LPARAM outlives every use.
    unsafe {
        EnumWindows(
            Some(collect_window),
            LPARAM(&raw mut windows as isize),
        )?;
    }

    Ok(windows)
}

/// Collects the top-level windows owned by one process.
pub fn windows_of_process(pid: u32) -> ShroudResult<Vec<Window>> {
    let mut windows = top_level_windows()?;
    windows.retain(|window| window.owner_pid() == pid);
    Ok(windows)
}

extern "system" fn collect_window(hwnd: HWND, lparam: LPARAM) -> windows::core::BOOL {
    // SAFETY: lparam carries the Vec pointer from top_level_windows,
    // valid for the duration of the enumeration.
    let windows = unsafe { &mut *(lparam.0 as *mut Vec<Window>) };
    windows.push(Window::new(hwnd));
    true.into() // keep enumerating
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumeration_succeeds_on_any_desktop() {
        // Act
        let result = top_level_windows();

        // Assert — even a bare session has shell windows, but an
        // empty list is still a successful enumeration
        assert!(result.is_ok());
    }

    #[test]
    fn filtering_by_unused_pid_yields_nothing() {
        // Arrange — PIDs are multiples of 4; this one cannot own windows
        let pid = u32::MAX;

        // Act
        let windows = windows_of_process(pid).expect("enumeration should succeed");

        // Assert
        assert!(windows.is_empty());
    }
}
