use tracing::{debug, info, warn};

use crate::{
    book::{Book, BookDraft, ValidationError},
    core::store::BookStore,
    engine::{
        search::search,
        stats::{StatsSnapshot, compute},
    },
    persist::{LibrarySink, PersistResult, json::JsonFileSink, sqlite::SqliteSink},
    settings::{LibraryConfig, StorageBackend},
    types::{Position, SearchField},
};

use super::events::LibraryEvent;

/// Boundary the presentation layer drives.
///
/// Every mutation is written through the sink before the call returns. A
/// failed write is reported but the in-memory change stands.
pub struct Library {
    store: BookStore,
    sink: Option<Box<dyn LibrarySink>>,
    autosave: bool,
    events: Vec<LibraryEvent>,
}

impl Library {
    /// Library with no backing storage.
    pub fn in_memory() -> Self {
        Self {
            store: BookStore::new(),
            sink: None,
            autosave: true,
            events: Vec::new(),
        }
    }

    /// Library backed by `sink`. Nothing is loaded until [`Library::load_library`].
    pub fn with_sink(sink: Box<dyn LibrarySink>) -> Self {
        Self {
            sink: Some(sink),
            ..Self::in_memory()
        }
    }

    /// Builds the configured sink and loads from it.
    ///
    /// Only failing to open the sink is an error; a failed load leaves an
    /// empty library and queues [`LibraryEvent::LoadFailed`].
    pub fn open(config: &LibraryConfig) -> PersistResult<Self> {
        let sink: Box<dyn LibrarySink> = match config.backend {
            StorageBackend::Json => {
                Box::new(JsonFileSink::new(&config.data_path).pretty(config.pretty_json))
            }
            StorageBackend::Sqlite => Box::new(SqliteSink::open(&config.data_path)?),
        };

        let mut library = Self::with_sink(sink);
        library.autosave = config.autosave;
        library.load_library();
        Ok(library)
    }

    /// Controls whether mutations save immediately.
    pub fn set_autosave(&mut self, autosave: bool) {
        self.autosave = autosave;
    }

    pub fn store(&self) -> &BookStore {
        &self.store
    }

    pub fn books(&self) -> &[Book] {
        self.store.all()
    }

    /// Takes all queued events in emission order.
    pub fn drain_events(&mut self) -> Vec<LibraryEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn add_book(&mut self, draft: BookDraft) -> Result<Book, ValidationError> {
        let book = self.store.add(draft).inspect_err(|err| {
            debug!(error = %err, "rejected book draft");
        })?;
        let position = self.store.len() - 1;
        info!(position, title = %book.title, "book added");
        self.events.push(LibraryEvent::BookAdded { position });
        self.persist_after_mutation();
        Ok(book)
    }

    pub fn remove_book(&mut self, index: Position) -> bool {
        if !self.store.remove(index) {
            debug!(index, len = self.store.len(), "remove ignored, index out of range");
            return false;
        }
        info!(position = index, "book removed");
        self.events.push(LibraryEvent::BookRemoved { position: index });
        self.persist_after_mutation();
        true
    }

    pub fn toggle_read(&mut self, index: Position) -> bool {
        if !self.store.toggle_read(index) {
            debug!(index, len = self.store.len(), "toggle ignored, index out of range");
            return false;
        }
        let read_status = self.store.get(index).is_some_and(|b| b.read_status);
        info!(position = index, read_status, "read status toggled");
        self.events.push(LibraryEvent::ReadToggled {
            position: index,
            read_status,
        });
        self.persist_after_mutation();
        true
    }

    pub fn search_books(&self, term: &str, field: SearchField) -> Vec<Book> {
        search(self.store.all(), term, field)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Recomputed from the current store on every call.
    pub fn get_library_stats(&self) -> StatsSnapshot {
        compute(self.store.all())
    }

    /// Replaces the store with the persisted records.
    ///
    /// On failure the store is emptied and `false` returned.
    pub fn load_library(&mut self) -> bool {
        let Some(sink) = self.sink.as_mut() else {
            return true;
        };

        match sink.load() {
            Ok(books) => {
                let count = books.len();
                info!(source = %sink.describe(), count, "library loaded");
                self.store.replace_all(books);
                self.events.push(LibraryEvent::Loaded { count });
                true
            }
            Err(err) => {
                warn!(source = %sink.describe(), error = %err, "library load failed, starting empty");
                self.store.replace_all(Vec::new());
                self.events.push(LibraryEvent::LoadFailed {
                    reason: err.to_string(),
                });
                false
            }
        }
    }

    /// Writes the full collection through the sink.
    pub fn save_library(&mut self) -> bool {
        let count = self.store.len();
        let Some(sink) = self.sink.as_mut() else {
            self.events.push(LibraryEvent::Saved { count });
            return true;
        };

        match sink.save(self.store.all()) {
            Ok(()) => {
                debug!(target_path = %sink.describe(), count, "library saved");
                self.events.push(LibraryEvent::Saved { count });
                true
            }
            Err(err) => {
                warn!(target_path = %sink.describe(), error = %err, "library save failed, keeping in-memory state");
                self.events.push(LibraryEvent::SaveFailed {
                    reason: err.to_string(),
                });
                false
            }
        }
    }

    fn persist_after_mutation(&mut self) {
        if self.autosave {
            self.save_library();
        }
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::in_memory()
    }
}
