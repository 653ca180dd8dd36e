use shroud_core::ShroudResult;
use shroud_core::{log_debug, log_info, log_warn};

use crate::enumerate;
use crate::process::is_process_alive;
use crate::window::Window;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Hide,
    Show,
}

impl Action {
    fn verb(self) -> &'static str {
        match self {
            Action::Hide => "hide",
            Action::Show => "show",
        }
    }
}

/// Hides every top-level window owned by `pid`.
///
/// Already-hidden windows are left alone, so repeated calls are
/// idempotent. Returns the number of windows whose state changed.
pub fn hide_process_windows(pid: i64) -> ShroudResult<usize> {
    apply(pid, Action::Hide)
}

/// Shows every top-level window owned by `pid`, restoring each
/// window's previous placement. Returns the number of windows whose
/// state changed.
pub fn show_process_windows(pid: i64) -> ShroudResult<usize> {
    apply(pid, Action::Show)
}

fn apply(pid: i64, action: Action) -> ShroudResult<usize> {
    // Reject nonsense PIDs before touching the OS. 0 is the idle
    // process and never owns windows; negatives come from records
    // whose process handle went stale.
    let pid = u32::try_from(pid)
        .ok()
        .filter(|&p| p != 0)
        .ok_or_else(|| format!("cannot {} windows: invalid PID {pid}", action.verb()))?;

    if !is_process_alive(pid) {
        return Err(format!(
            "cannot {} windows: no running process with PID {pid}",
            action.verb()
        )
        .into());
    }

    let windows = enumerate::windows_of_process(pid)?;
    if windows.is_empty() {
        log_info!("PID {pid} owns no top-level windows, nothing to {}", action.verb());
        return Ok(0);
    }

    let mut affected = 0;
    for window in &windows {
        if toggle_one(window, action) {
            affected += 1;
        }
    }

    log_info!(
        "{} {affected} of {} top-level windows of PID {pid}",
        match action {
            Action::Hide => "hid",
            Action::Show => "showed",
        },
        windows.len()
    );
    Ok(affected)
}

/// Applies one action to one window. Returns whether its visibility
/// changed.
fn toggle_one(window: &Window, action: Action) -> bool {
    if !window.is_window() {
        // The window died between enumeration and now.
        log_warn!("window vanished before the {} could be applied", action.verb());
        return false;
    }

    let visible = window.is_visible();
    match action {
        Action::Hide if visible => {
            window.hide();
            log_debug!("hid window '{}'", window.title());
            true
        }
        Action::Show if !visible => {
            window.restore();
            log_debug!("restored window '{}'", window.title());
            true
        }
        _ => false, // already in the requested state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_pid_is_rejected_before_any_os_work() {
        // Act
        let hide = hide_process_windows(0);
        let show = show_process_windows(0);

        // Assert
        assert!(hide.is_err());
        assert!(show.is_err());
    }

    #[test]
    fn negative_pid_is_rejected() {
        // Act
        let result = hide_process_windows(-1);

        // Assert
        assert!(result.unwrap_err().to_string().contains("invalid PID"));
    }

    #[test]
    fn dead_pid_is_reported_as_missing() {
        // Arrange — PIDs are multiples of 4; this one cannot exist
        let pid = i64::from(u32::MAX);

        // Act
        let result = show_process_windows(pid);

        // Assert
        assert!(result.unwrap_err().to_string().contains("no running process"));
    }

    #[test]
    fn windowless_process_affects_nothing() {
        // Arrange — the test runner itself owns no top-level windows
        let pid = i64::from(std::process::id());

        // Act
        let hidden = hide_process_windows(pid).expect("own process is alive");
        let shown = show_process_windows(pid).expect("own process is alive");

        // Assert
        assert_eq!(hidden, 0);
        assert_eq!(shown, 0);
    }
}
