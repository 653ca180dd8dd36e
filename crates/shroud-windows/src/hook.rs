use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Mutex, OnceLock};
use std::thread;

use shroud_core::{HookEvent, Key};
use windows::Win32::Foundation::{LPARAM, LRESULT, WPARAM};
use windows::Win32::System::Threading::GetCurrentThreadId;
use windows::Win32::UI::WindowsAndMessaging::{
    CallNextHookEx, DispatchMessageW, GetMessageW, KBDLLHOOKSTRUCT, MSG, PostThreadMessageW,
    SetWindowsHookExW, TranslateMessage, UnhookWindowsHookEx, WH_KEYBOARD_LL, WM_KEYDOWN, WM_QUIT,
    WM_SYSKEYDOWN,
};

use crate::keys;

/// Hook state shared between the control methods and the low-level
/// keyboard callback.
///
/// The Win32 callback is a bare `extern "system"` function and cannot
/// carry instance context, so this lives in a process-wide single
/// slot. That is also why at most one hook can be armed per process:
/// a second `set_hook` replaces the first instead of stacking.
struct HookShared {
    target: Key,
    active: bool,
    /// Raw `HHOOK` value, non-zero iff `active`. The handle itself is
    /// owned by the pump thread; this copy exists for introspection.
    hook_raw: usize,
    subscribers: Vec<Sender<HookEvent>>,
}

impl HookShared {
    /// Synchronous fire-and-forget broadcast. Subscribers whose
    /// receiving end is gone are dropped from the list.
    fn publish(&mut self, event: HookEvent) {
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }
}

fn shared() -> &'static Mutex<HookShared> {
    static SHARED: OnceLock<Mutex<HookShared>> = OnceLock::new();
    SHARED.get_or_init(|| {
        Mutex::new(HookShared {
            target: Key::Unknown,
            active: false,
            hook_raw: 0,
            subscribers: Vec::new(),
        })
    })
}

/// A system-wide keyboard hook that watches for a single armed key.
///
/// `set_hook` installs a `WH_KEYBOARD_LL` hook on a dedicated
/// message-pump thread; every key-down of the armed key (auto-repeats
/// included) publishes [`HookEvent::KeyMatched`] to all subscribers.
/// Dropping the hook disarms it.
pub struct KeyboardHook {
    pump: Option<PumpHandle>,
}

struct PumpHandle {
    thread_id: u32,
    handle: thread::JoinHandle<()>,
}

impl KeyboardHook {
    pub fn new() -> Self {
        Self { pump: None }
    }

    /// Registers a subscriber and returns its receiving end.
    ///
    /// Events published from the hook callback arrive on this channel.
    /// Subscription outlives re-arms: `set_hook` does not clear the
    /// subscriber list, dropping the `KeyboardHook` does.
    pub fn subscribe(&self) -> Receiver<HookEvent> {
        let (tx, rx) = mpsc::channel();
        if let Ok(mut state) = shared().lock() {
            state.subscribers.push(tx);
        }
        rx
    }

    /// Arms the hook for `key`.
    ///
    /// If a hook is already active it is stopped first, so two calls
    /// never leave two live hooks. On installation failure the state
    /// stays inactive and [`HookEvent::InstallFailed`] is published
    /// with the OS error code; the caller may retry.
    pub fn set_hook(&mut self, key: Key) {
        self.stop_hook();

        let (ready_tx, ready_rx) = mpsc::channel::<Result<u32, i32>>();
        let handle = thread::spawn(move || pump_thread(key, ready_tx));

        match ready_rx.recv() {
            Ok(Ok(thread_id)) => {
                self.pump = Some(PumpHandle { thread_id, handle });
            }
            Ok(Err(code)) => {
                let _ = handle.join();
                fail_install(code);
            }
            Err(_) => {
                // Pump thread died before reporting readiness.
                let _ = handle.join();
                fail_install(-1);
            }
        }
    }

    /// Disarms the hook. Idempotent: stopping an inactive hook is a
    /// no-op. An in-flight callback invocation is not interrupted;
    /// only future matches are prevented.
    pub fn stop_hook(&mut self) {
        let Some(pump) = self.pump.take() else {
            return;
        };

        // SAFETY: posting WM_QUIT to the pump thread makes its
        // GetMessageW loop return; the thread unhooks and clears the
        // shared state on its way out.
        unsafe {
            let _ = PostThreadMessageW(pump.thread_id, WM_QUIT, WPARAM(0), LPARAM(0));
        }
        let _ = pump.handle.join();
        shroud_core::log_info!("keyboard hook stopped");
    }

    /// Returns whether a hook is currently installed.
    pub fn is_active(&self) -> bool {
        // A handle is recorded iff the hook is active; check both so
        // a half-torn-down state never reads as armed.
        shared()
            .lock()
            .map(|s| s.active && s.hook_raw != 0)
            .unwrap_or(false)
    }

    /// Returns the currently armed key, if any.
    pub fn target(&self) -> Option<Key> {
        shared()
            .lock()
            .ok()
            .filter(|s| s.active)
            .map(|s| s.target)
    }
}

impl Default for KeyboardHook {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for KeyboardHook {
    fn drop(&mut self) {
        self.stop_hook();
        // Owner teardown also ends all subscriptions.
        if let Ok(mut state) = shared().lock() {
            state.subscribers.clear();
        }
    }
}

/// Records an installation failure: logs it and publishes exactly one
/// [`HookEvent::InstallFailed`]. The shared state is never touched, so
/// the hook stays inactive and a later `set_hook` may retry.
fn fail_install(code: i32) {
    shroud_core::log_error!("keyboard hook installation failed: {code}");
    if let Ok(mut state) = shared().lock() {
        state.publish(HookEvent::InstallFailed(code));
    }
}

/// Extracts the Win32 error code from a wrapping HRESULT.
///
/// `SetWindowsHookExW` failures surface as `HRESULT_FROM_WIN32` values
/// (`0x8007xxxx`); operators correlate failures against the Win32
/// error tables, so unwrap back to the raw code. Other HRESULTs pass
/// through unchanged.
fn win32_error_code(e: &windows::core::Error) -> i32 {
    let hresult = e.code().0;
    if (hresult as u32) & 0xFFFF_0000 == 0x8007_0000 {
        hresult & 0xFFFF
    } else {
        hresult
    }
}

/// Body of the message-pump thread.
///
/// `WH_KEYBOARD_LL` callbacks are delivered on the thread that
/// installed the hook, inside its `GetMessageW` call, so the hook
/// must live on a thread that pumps messages. `ready_tx` reports the
/// install outcome back to `set_hook` before the pump starts.
fn pump_thread(key: Key, ready_tx: Sender<Result<u32, i32>>) {
    // SAFETY: WH_KEYBOARD_LL installs a global low-level keyboard
    // hook; no DLL module is required and thread id 0 means all
    // threads on the desktop.
    let hook = match unsafe { SetWindowsHookExW(WH_KEYBOARD_LL, Some(keyboard_proc), None, 0) } {
        Ok(hook) => hook,
        Err(e) => {
            let _ = ready_tx.send(Err(win32_error_code(&e)));
            return;
        }
    };

    if let Ok(mut state) = shared().lock() {
        state.target = key;
        state.active = true;
        state.hook_raw = hook.0 as usize;
    }
    shroud_core::log_info!("keyboard hook armed, watching key {key}");

    let thread_id = unsafe { GetCurrentThreadId() };
    let _ = ready_tx.send(Ok(thread_id));

    run_message_pump();

    // SAFETY: the hook was installed on this thread and the pump has
    // exited, so no further callbacks are in flight here.
    unsafe {
        let _ = UnhookWindowsHookEx(hook);
    }
    if let Ok(mut state) = shared().lock() {
        state.target = Key::Unknown;
        state.active = false;
        state.hook_raw = 0;
    }
}

/// The Win32 message pump. Blocks until WM_QUIT is received; hook
/// callbacks are dispatched from inside `GetMessageW`.
fn run_message_pump() {
    let mut msg = MSG::default();

    while unsafe { GetMessageW(&mut msg, None, 0, 0).as_bool() } {
        unsafe {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
}

/// The low-level keyboard hook callback.
///
/// Runs on the system's input-dispatch path, so it must stay cheap
/// and must always forward the event to the next hook in the chain —
/// swallowing it would break key delivery for the whole session.
unsafe extern "system" fn keyboard_proc(code: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    if code >= 0 {
        let message = wparam.0 as u32;
        // Auto-repeat key-downs and system key-downs (Alt held) are
        // deliberately treated the same as a plain key-down.
        if message == WM_KEYDOWN || message == WM_SYSKEYDOWN {
            // SAFETY: for WH_KEYBOARD_LL, lparam points to a
            // KBDLLHOOKSTRUCT supplied by the OS for this call.
            let vk = unsafe { (*(lparam.0 as *const KBDLLHOOKSTRUCT)).vkCode };
            notify_if_match(keys::key_from_vk(vk));
        }
    }

    unsafe { CallNextHookEx(None, code, wparam, lparam) }
}

/// Publishes a match if the hook is armed and `key` equals the target.
///
/// Uses `try_lock`: the callback must never block behind the control
/// thread. A contended lock means the state is mid-transition
/// (arming or disarming); skipping the comparison then is safe, and
/// the event is forwarded to the chain regardless.
fn notify_if_match(key: Key) {
    let Ok(mut state) = shared().try_lock() else {
        return;
    };
    if state.active && key != Key::Unknown && key == state.target {
        state.publish(HookEvent::KeyMatched(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Serializes tests that poke the process-wide hook slot.
    fn test_guard() -> std::sync::MutexGuard<'static, ()> {
        static GUARD: Mutex<()> = Mutex::new(());
        GUARD.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Puts the shared slot into a known state and drains stale
    /// subscribers left over from other tests.
    fn arm_shared(target: Key, active: bool) {
        let mut state = shared().lock().expect("shared state poisoned");
        state.target = target;
        state.active = active;
        state.subscribers.clear();
    }

    fn subscribe_raw() -> Receiver<HookEvent> {
        let (tx, rx) = mpsc::channel();
        shared()
            .lock()
            .expect("shared state poisoned")
            .subscribers
            .push(tx);
        rx
    }

    #[test]
    fn matching_key_down_publishes_exactly_one_event() {
        let _guard = test_guard();
        // Arrange
        arm_shared(Key::A, true);
        let rx = subscribe_raw();

        // Act — synthetic key-down for "A"
        notify_if_match(keys::key_from_vk(0x41));

        // Assert
        assert_eq!(rx.try_recv(), Ok(HookEvent::KeyMatched(Key::A)));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn non_matching_key_down_publishes_nothing() {
        let _guard = test_guard();
        // Arrange
        arm_shared(Key::A, true);
        let rx = subscribe_raw();

        // Act — synthetic key-down for "B"
        notify_if_match(keys::key_from_vk(0x42));

        // Assert
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn inactive_hook_never_matches() {
        let _guard = test_guard();
        // Arrange
        arm_shared(Key::A, false);
        let rx = subscribe_raw();

        // Act
        notify_if_match(Key::A);

        // Assert
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn unknown_target_never_matches() {
        let _guard = test_guard();
        // An Unknown target means "nothing armed"; even a raw code
        // that translates to Unknown must not fire it.
        arm_shared(Key::Unknown, true);
        let rx = subscribe_raw();

        // Act
        notify_if_match(Key::Unknown);

        // Assert
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn publish_prunes_disconnected_subscribers() {
        let _guard = test_guard();
        // Arrange
        arm_shared(Key::A, true);
        let rx = subscribe_raw();
        drop(rx);

        // Act
        notify_if_match(Key::A);

        // Assert
        assert!(
            shared()
                .lock()
                .expect("shared state poisoned")
                .subscribers
                .is_empty()
        );
    }

    #[test]
    fn install_failure_publishes_exactly_one_event_and_stays_inactive() {
        let _guard = test_guard();
        // Arrange
        arm_shared(Key::Unknown, false);
        let rx = subscribe_raw();

        // Act — the shared path both set_hook failure branches take
        fail_install(1404); // ERROR_HOOK_TYPE_NOT_ALLOWED

        // Assert
        assert_eq!(rx.try_recv(), Ok(HookEvent::InstallFailed(1404)));
        assert!(rx.try_recv().is_err());
        assert!(!KeyboardHook::new().is_active());
    }

    #[test]
    fn win32_code_is_unwrapped_from_its_hresult() {
        use windows::core::{Error, HRESULT};

        // Arrange — HRESULT_FROM_WIN32(ERROR_ACCESS_DENIED) vs. a
        // non-Win32-facility HRESULT
        let wrapped = Error::from_hresult(HRESULT(0x8007_0005_u32 as i32));
        let custom = Error::from_hresult(HRESULT(0x8000_4005_u32 as i32));

        // Assert
        assert_eq!(win32_error_code(&wrapped), 5);
        assert_eq!(win32_error_code(&custom), 0x8000_4005_u32 as i32);
    }

    #[test]
    fn stop_hook_is_idempotent() {
        // Arrange
        let mut hook = KeyboardHook::new();

        // Act — stopping an inactive hook twice is a no-op both times
        hook.stop_hook();
        hook.stop_hook();

        // Assert
        assert!(hook.pump.is_none());
    }

    #[test]
    #[ignore = "requires an interactive desktop session"]
    fn arm_rearm_and_disarm_against_the_real_input_pipeline() {
        // Arrange
        let mut hook = KeyboardHook::new();

        // Act + Assert — arm, re-arm without an intervening stop,
        // then disarm; state must track the most recent call.
        hook.set_hook(Key::F9);
        assert!(hook.is_active());
        assert_eq!(hook.target(), Some(Key::F9));

        hook.set_hook(Key::F10);
        assert!(hook.is_active());
        assert_eq!(hook.target(), Some(Key::F10));

        hook.stop_hook();
        assert!(!hook.is_active());
        assert_eq!(hook.target(), None);
    }
}
