//! Debug-build log gates. All of these are compiled out of release builds
//! because their call sites live behind `#[cfg(debug_assertions)]`.

pub struct DebugFlags {
    pub print_fetch_progress: bool,
    pub print_state_serde: bool,
    pub print_ui_interactions: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_fetch_progress: true,
    print_state_serde: false,
    print_ui_interactions: false,
};
