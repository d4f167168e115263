//! Where the app keeps its persisted UI state.

pub struct AppPersistence {
    pub state_path: &'static str,
}

pub struct PersistenceConfig {
    pub app: AppPersistence,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    app: AppPersistence {
        state_path: "ma_confluence_state.json",
    },
};
