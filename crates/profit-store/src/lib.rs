//! # Profit Store
//!
//! 客戶端狀態容器與持久化
//!
//! 狀態由 UI 層持有並以可變引用傳遞，計算引擎本身永不觸碰此容器

pub mod persist;
pub mod state;

// Re-export 主要類型
pub use persist::PersistedState;
pub use state::AppState;
