use shroud_core::{ProcessEntry, ShroudResult};

use windows::Win32::Foundation::{CloseHandle, HANDLE};
use windows::Win32::System::Diagnostics::ToolHelp::{
    CreateToolhelp32Snapshot, PROCESSENTRY32W, Process32FirstW, Process32NextW, TH32CS_SNAPPROCESS,
};
use windows::Win32::System::ProcessStatus::K32GetModuleFileNameExW;
use windows::Win32::System::Threading::{
    GetProcessId, OpenProcess, PROCESS_QUERY_INFORMATION, PROCESS_QUERY_LIMITED_INFORMATION,
    PROCESS_VM_READ,
};

/// One running process, backed by an exclusively owned Win32 handle.
///
/// The handle is closed exactly once when the record is dropped. Path
/// and name lookups query the OS lazily; a record stays valid (with
/// degraded answers) even after the process exits.
pub struct ProcessRecord {
    handle: HANDLE,
}

impl ProcessRecord {
    fn from_handle(handle: HANDLE) -> Self {
        Self { handle }
    }

    /// Returns the process ID, or -1 if the handle is invalid.
    pub fn pid(&self) -> i64 {
        if self.handle.is_invalid() {
            return -1;
        }
        // SAFETY: GetProcessId only reads from a valid process handle.
        i64::from(unsafe { GetProcessId(self.handle) })
    }

    /// Returns the full path of the process's executable.
    ///
    /// Empty when the lookup fails — the process may have exited, or
    /// the caller may lack rights. Callers fall back to
    /// [`ProcessEntry::display_name`].
    pub fn executable_path(&self) -> String {
        if self.handle.is_invalid() {
            return String::new();
        }

        let mut buffer = [0u16; 260]; // MAX_PATH
        // SAFETY: K32GetModuleFileNameExW fills the buffer with the
        // main module path of the given process.
        let length = unsafe { K32GetModuleFileNameExW(Some(self.handle), None, &mut buffer) };
        if length == 0 {
            shroud_core::log_debug!(
                "executable path lookup failed for PID {}: {}",
                self.pid(),
                windows::core::Error::from_win32()
            );
            return String::new();
        }
        String::from_utf16_lossy(&buffer[..length as usize])
    }
}

impl ProcessEntry for ProcessRecord {
    fn pid(&self) -> i64 {
        self.pid()
    }

    fn executable_path(&self) -> String {
        self.executable_path()
    }
}

impl Drop for ProcessRecord {
    fn drop(&mut self) {
        if self.handle.is_invalid() {
            return;
        }
        // SAFETY: the handle is exclusively ours; invalidating it
        // afterwards guards against any double release.
        unsafe {
            let _ = CloseHandle(self.handle);
        }
        self.handle = HANDLE::default();
    }
}

/// The current process list — a read-only indexed view over
/// [`ProcessRecord`]s, refreshed on demand from an OS snapshot.
#[derive(Default)]
pub struct ProcessList {
    records: Vec<ProcessRecord>,
}

impl ProcessList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the list from a fresh process snapshot.
    ///
    /// Every handle held by the previous result set is released
    /// before the new snapshot is taken, so repeated refreshes never
    /// leak handles. Processes that cannot be opened (protected or
    /// insufficient rights) are skipped — expected, not an error.
    /// Records appear in snapshot order; that order is not stable
    /// across calls.
    pub fn refresh(&mut self) -> ShroudResult<()> {
        self.records.clear();

        let snapshot = Snapshot::create()?;
        let mut entry = PROCESSENTRY32W {
            dwSize: size_of::<PROCESSENTRY32W>() as u32,
            ..Default::default()
        };

        // SAFETY: the snapshot handle is valid and entry.dwSize is
        // set, as Process32FirstW requires.
        unsafe { Process32FirstW(snapshot.handle(), &mut entry) }?;

        loop {
            // SAFETY: OpenProcess attempts to open the snapshot's
            // process with query+read rights, enough for the path
            // lookup later.
            match unsafe {
                OpenProcess(
                    PROCESS_QUERY_INFORMATION | PROCESS_VM_READ,
                    false,
                    entry.th32ProcessID,
                )
            } {
                Ok(handle) => self.records.push(ProcessRecord::from_handle(handle)),
                Err(e) => {
                    // System and protected processes refuse to open.
                    shroud_core::log_debug!(
                        "skipping PID {}: {e}",
                        entry.th32ProcessID
                    );
                }
            }

            // SAFETY: same snapshot/entry contract as above.
            if unsafe { Process32NextW(snapshot.handle(), &mut entry) }.is_err() {
                break;
            }
        }

        shroud_core::log_info!("enumerated {} processes", self.records.len());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ProcessRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProcessRecord> {
        self.records.iter()
    }

    /// Returns the first process whose display name contains `needle`,
    /// case-insensitively.
    pub fn find_by_name(&self, needle: &str) -> Option<&ProcessRecord> {
        let needle = needle.to_ascii_lowercase();
        self.records
            .iter()
            .find(|record| record.display_name().to_ascii_lowercase().contains(&needle))
    }
}

/// RAII guard for a Toolhelp32 snapshot handle.
struct Snapshot(HANDLE);

impl Snapshot {
    fn create() -> ShroudResult<Self> {
        // SAFETY: TH32CS_SNAPPROCESS requests a process-only snapshot.
        let handle = unsafe { CreateToolhelp32Snapshot(TH32CS_SNAPPROCESS, 0) }?;
        Ok(Self(handle))
    }

    fn handle(&self) -> HANDLE {
        self.0
    }
}

impl Drop for Snapshot {
    fn drop(&mut self) {
        // SAFETY: the snapshot handle is ours to close.
        unsafe {
            let _ = CloseHandle(self.0);
        }
    }
}

/// Checks whether a process with the given PID is still alive.
///
/// Opens it with the least-privilege access right that confirms
/// existence and closes the probe handle immediately. Used to detect
/// stale targets before touching any windows.
pub fn is_process_alive(pid: u32) -> bool {
    // SAFETY: a successful OpenProcess proves the PID refers to a
    // live process; the handle is closed right away.
    match unsafe { OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, pid) } {
        Ok(handle) => {
            unsafe {
                let _ = CloseHandle(handle);
            }
            true
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_finds_the_current_process() {
        // Arrange
        let mut list = ProcessList::new();

        // Act
        list.refresh().expect("snapshot should succeed");

        // Assert — we can always open ourselves
        let own_pid = i64::from(std::process::id());
        assert!(list.iter().any(|record| record.pid() == own_pid));
    }

    #[test]
    fn repeated_refresh_replaces_the_result_set() {
        // Arrange
        let mut list = ProcessList::new();
        list.refresh().expect("first snapshot");
        let first_len = list.len();

        // Act — records from the first refresh are dropped (handles
        // closed) before the second snapshot is built
        list.refresh().expect("second snapshot");

        // Assert — both refreshes see a populated system
        assert!(first_len > 0);
        assert!(!list.is_empty());
    }

    #[test]
    fn records_resolve_their_own_executable() {
        // Arrange
        let mut list = ProcessList::new();
        list.refresh().expect("snapshot should succeed");
        let own_pid = i64::from(std::process::id());

        // Act
        let record = list
            .iter()
            .find(|record| record.pid() == own_pid)
            .expect("own process present");

        // Assert — our own path is always resolvable
        assert!(!record.executable_path().is_empty());
        use shroud_core::ProcessEntry as _;
        assert!(record.display_name().to_ascii_lowercase().contains("shroud"));
    }

    #[test]
    fn invalid_handle_degrades_gracefully() {
        // Arrange
        let record = ProcessRecord::from_handle(HANDLE::default());

        // Assert
        assert_eq!(record.pid(), -1);
        assert!(record.executable_path().is_empty());
    }

    #[test]
    fn alive_probe_agrees_with_reality() {
        // Assert — our own PID is alive; PID 0 (idle) cannot be opened
        assert!(is_process_alive(std::process::id()));
        assert!(!is_process_alive(0));
    }

    #[test]
    fn find_by_name_is_case_insensitive() {
        // Arrange
        let mut list = ProcessList::new();
        list.refresh().expect("snapshot should succeed");

        // Act — the test binary itself is named shroud_windows-<hash>
        let found = list.find_by_name("SHROUD");

        // Assert
        assert!(found.is_some());
    }
}
