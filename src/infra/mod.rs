//! Client-side persistence: storage backends, saved predictions and the
//! signed-in session.

pub mod predictions;
pub mod session;
pub mod storage;

pub use predictions::{storage_key, PredictionStore};
pub use session::{generate_user_id, LoginRequest, SessionManager, USER_KEY};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};

#[cfg(target_arch = "wasm32")]
pub use storage::WebStore;

/// Backend the app persists to on this target.
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = FileStore;

#[cfg(target_arch = "wasm32")]
pub type PlatformStore = WebStore;
