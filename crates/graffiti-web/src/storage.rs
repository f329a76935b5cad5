use graffiti_core::{PersistError, SnapshotStore, STORAGE_KEY};
use web_sys as web;

#[derive(Clone, Copy, Debug)]
enum Area {
    Local,
    Session,
}

/// Snapshot slot in `localStorage` or `sessionStorage`.
///
/// The storage object is looked up on every access: it can be missing or
/// throw (private browsing, disabled cookies) and that should only cost the
/// one save, not the whole session.
pub struct WebStorage {
    area: Area,
    key: String,
}

impl WebStorage {
    pub fn local() -> Self {
        Self {
            area: Area::Local,
            key: STORAGE_KEY.to_string(),
        }
    }

    pub fn session() -> Self {
        Self {
            area: Area::Session,
            key: STORAGE_KEY.to_string(),
        }
    }

    fn storage(&self) -> Result<web::Storage, PersistError> {
        let unavailable = || PersistError::Unavailable {
            store: self.name().to_string(),
        };
        let window = web::window().ok_or_else(unavailable)?;
        let storage = match self.area {
            Area::Local => window.local_storage(),
            Area::Session => window.session_storage(),
        };
        storage.ok().flatten().ok_or_else(unavailable)
    }

    fn backend_error(&self, e: wasm_bindgen::JsValue) -> PersistError {
        PersistError::Backend {
            store: self.name().to_string(),
            message: format!("{:?}", e),
        }
    }
}

impl SnapshotStore for WebStorage {
    fn name(&self) -> &str {
        match self.area {
            Area::Local => "localStorage",
            Area::Session => "sessionStorage",
        }
    }

    fn read(&self) -> Result<Option<String>, PersistError> {
        self.storage()?
            .get_item(&self.key)
            .map_err(|e| self.backend_error(e))
    }

    // A full quota surfaces here as a thrown QuotaExceededError.
    fn write(&mut self, data: &str) -> Result<(), PersistError> {
        self.storage()?
            .set_item(&self.key, data)
            .map_err(|e| self.backend_error(e))
    }

    fn clear(&mut self) -> Result<(), PersistError> {
        self.storage()?
            .remove_item(&self.key)
            .map_err(|e| self.backend_error(e))
    }
}
