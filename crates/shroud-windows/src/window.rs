use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{
    GetWindowTextLengthW, GetWindowTextW, GetWindowThreadProcessId, IsWindow, IsWindowVisible,
    SW_HIDE, SW_RESTORE, ShowWindow,
};

/// A top-level window, identified by its Win32 handle.
///
/// The handle is a weak reference: the window can be destroyed at any
/// moment by its owning process. Every operation tolerates a stale
/// handle and reports "no effect" rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    hwnd: HWND,
}

// HWND is a plain identifier, not an owned resource; sending it across
// threads is fine because every use revalidates through the OS.
unsafe impl Send for Window {}

impl Window {
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }

    /// Returns the PID of the process that owns this window, or 0 if
    /// the window is gone.
    pub fn owner_pid(&self) -> u32 {
        let mut pid = 0u32;
        // SAFETY: GetWindowThreadProcessId writes the owning PID; on a
        // stale handle it leaves pid at 0.
        unsafe { GetWindowThreadProcessId(self.hwnd, Some(&mut pid)) };
        pid
    }

    /// Returns whether the handle still refers to an existing window.
    pub fn is_window(&self) -> bool {
        // SAFETY: IsWindow accepts any handle value.
        unsafe { IsWindow(Some(self.hwnd)) }.as_bool()
    }

    /// Returns whether the window is currently shown.
    pub fn is_visible(&self) -> bool {
        // SAFETY: IsWindowVisible accepts any handle value.
        unsafe { IsWindowVisible(self.hwnd) }.as_bool()
    }

    /// Hides the window. Returns whether it was visible before.
    pub fn hide(&self) -> bool {
        // SAFETY: ShowWindow on a stale handle is a no-op.
        unsafe { ShowWindow(self.hwnd, SW_HIDE) }.as_bool()
    }

    /// Shows the window, restoring its previous placement (a window
    /// minimized before it was hidden comes back minimized-then-
    /// restored rather than forced to normal size).
    /// Returns whether it was visible before.
    pub fn restore(&self) -> bool {
        // SAFETY: ShowWindow on a stale handle is a no-op.
        unsafe { ShowWindow(self.hwnd, SW_RESTORE) }.as_bool()
    }

    /// Returns the window title, empty for untitled or gone windows.
    pub fn title(&self) -> String {
        // SAFETY: length query first, then a bounded read into a
        // buffer with room for the terminator.
        unsafe {
            let length = GetWindowTextLengthW(self.hwnd);
            if length == 0 {
                return String::new();
            }
            let mut buffer = vec![0u16; length as usize + 1];
            let copied = GetWindowTextW(self.hwnd, &mut buffer);
            String::from_utf16_lossy(&buffer[..copied as usize])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stale_window() -> Window {
        // Handle values are pointer-sized; this one never names a
        // real window.
        Window::new(HWND(0xDEAD_usize as *mut _))
    }

    #[test]
    fn stale_handle_reports_not_a_window() {
        // Arrange
        let window = stale_window();

        // Assert
        assert!(!window.is_window());
        assert!(!window.is_visible());
    }

    #[test]
    fn stale_handle_operations_are_no_ops() {
        // Arrange
        let window = stale_window();

        // Act + Assert — neither call reports a previously-visible window
        assert!(!window.hide());
        assert!(!window.restore());
    }

    #[test]
    fn stale_handle_has_no_owner_and_no_title() {
        // Arrange
        let window = stale_window();

        // Assert
        assert_eq!(window.owner_pid(), 0);
        assert!(window.title().is_empty());
    }
}
