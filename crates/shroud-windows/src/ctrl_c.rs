use std::sync::OnceLock;
use std::sync::mpsc::Sender;

use windows::Win32::System::Console::{CTRL_BREAK_EVENT, CTRL_C_EVENT, SetConsoleCtrlHandler};

use shroud_core::ShroudResult;

static SENDER: OnceLock<Sender<()>> = OnceLock::new();

/// Installs a console Ctrl+C / Ctrl+Break handler that signals `tx`.
///
/// Can be installed once per process; a second call fails rather than
/// silently replacing the first listener. The handler reports the
/// event as handled so the default terminate-immediately behavior is
/// suppressed and the caller gets a chance to clean up.
pub fn install(tx: Sender<()>) -> ShroudResult<()> {
    SENDER
        .set(tx)
        .map_err(|_| "console interrupt handler already installed")?;

    // SAFETY: the handler stays valid for the life of the process.
    unsafe { SetConsoleCtrlHandler(Some(ctrl_handler), true) }?;
    Ok(())
}

extern "system" fn ctrl_handler(ctrl_type: u32) -> windows::core::BOOL {
    match ctrl_type {
        CTRL_C_EVENT | CTRL_BREAK_EVENT => {
            if let Some(tx) = SENDER.get() {
                // The receiver may already be gone during shutdown.
                let _ = tx.send(());
            }
            true.into()
        }
        _ => false.into(), // close/logoff/shutdown keep default handling
    }
}
