//! FlavorStore - ordered, in-memory collection of flavor records.
//!
//! Insertion order is listing order. Ids come from a monotonic counter, so an
//! id freed by a delete is never handed out again.
//!
//! ## Example
//!
//! ```
//! use flavor_api::{FlavorInput, FlavorStore, ListQuery};
//!
//! let store = FlavorStore::new();
//! let created = store.create(FlavorInput::named("chocolate")).unwrap();
//! assert_eq!(created.id, 1);
//!
//! let found = store.list(&ListQuery::named("chocolate")).unwrap();
//! assert_eq!(found.len(), 1);
//! ```

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use crate::error::StoreError;
use crate::flavor::{FlavorInput, FlavorRecord};
use crate::query::{ListQuery, DEFAULT_PAGE_LIMIT};
use crate::validate::NameRules;

/// Tunables for a [`FlavorStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    pub name_rules: NameRules,
    /// Page size when a list request gives `page` without `limit`.
    pub default_limit: usize,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            name_rules: NameRules::default(),
            default_limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

#[derive(Default)]
struct Collection {
    records: Vec<FlavorRecord>,
    last_id: u64,
}

/// Process-wide flavor collection. Clone-friendly via Arc.
///
/// Every operation holds the lock for its whole duration, so a failed call
/// leaves the collection untouched.
#[derive(Clone)]
pub struct FlavorStore {
    collection: Arc<RwLock<Collection>>,
    options: StoreOptions,
}

impl Default for FlavorStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FlavorStore {
    /// Create an empty store with default options.
    pub fn new() -> Self {
        Self::with_options(StoreOptions::default())
    }

    pub fn with_options(options: StoreOptions) -> Self {
        Self {
            collection: Arc::new(RwLock::new(Collection::default())),
            options,
        }
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Add a new record. The name must be valid and not held by any active record.
    pub fn create(&self, mut input: FlavorInput) -> Result<FlavorRecord, StoreError> {
        let name = self.take_valid_name(&mut input)?;
        let mut collection = self.write("create")?;

        if collection.records.iter().any(|r| r.name == name) {
            return Err(StoreError::Conflict(name));
        }

        collection.last_id += 1;
        let record = FlavorRecord::from_input(collection.last_id, name, input);
        collection.records.push(record.clone());

        info!(id = record.id, flavor = %record.name, "flavor created");
        Ok(record)
    }

    /// List records in insertion order, optionally filtered by exact name and paged.
    ///
    /// A page past the end of the unfiltered collection is `NotFound`; a
    /// filtered page with no matches is just empty. Page 1 is always valid.
    pub fn list(&self, query: &ListQuery) -> Result<Vec<FlavorRecord>, StoreError> {
        let window = query.page_request(self.options.default_limit)?;
        let collection = self.read("list")?;

        let matching: Vec<&FlavorRecord> = match &query.name {
            Some(name) => collection.records.iter().filter(|r| &r.name == name).collect(),
            None => collection.records.iter().collect(),
        };

        let Some(window) = window else {
            debug!(count = matching.len(), "listed flavors");
            return Ok(matching.into_iter().cloned().collect());
        };

        let offset = window.offset();
        if offset >= matching.len() {
            if query.name.is_none() && window.page > 1 {
                return Err(StoreError::NotFound(format!("page {}", window.page)));
            }
            return Ok(Vec::new());
        }

        let page: Vec<FlavorRecord> = matching
            .into_iter()
            .skip(offset)
            .take(window.limit)
            .cloned()
            .collect();
        debug!(page = window.page, limit = window.limit, count = page.len(), "listed flavor page");
        Ok(page)
    }

    pub fn get(&self, id: u64) -> Result<FlavorRecord, StoreError> {
        let collection = self.read("get")?;
        collection
            .records
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// Replace every mutable field of record `id`.
    ///
    /// The name is validated before the lookup and is not checked for
    /// uniqueness against other records.
    pub fn update(&self, id: u64, mut input: FlavorInput) -> Result<FlavorRecord, StoreError> {
        let name = self.take_valid_name(&mut input)?;
        let mut collection = self.write("update")?;

        let record = collection
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| not_found(id))?;
        record.replace(name, input);

        info!(id, flavor = %record.name, "flavor updated");
        Ok(record.clone())
    }

    pub fn delete(&self, id: u64) -> Result<(), StoreError> {
        let mut collection = self.write("delete")?;

        let index = collection
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| not_found(id))?;
        collection.records.remove(index);

        info!(id, "flavor deleted");
        Ok(())
    }

    /// Number of active records.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read("len")?.records.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    fn take_valid_name(&self, input: &mut FlavorInput) -> Result<String, StoreError> {
        let name = input
            .flavor
            .take()
            .ok_or_else(|| StoreError::Validation("flavor is required".into()))?;

        let rules = &self.options.name_rules;
        if !rules.is_valid(&name) {
            let spacing = if rules.allow_word_spaces {
                ", words separated by single spaces"
            } else {
                ""
            };
            return Err(StoreError::Validation(format!(
                "invalid flavor name {:?}: use 1 to {} ASCII letters{}",
                name, rules.max_len, spacing
            )));
        }
        Ok(name)
    }

    fn read(&self, operation: &'static str) -> Result<RwLockReadGuard<'_, Collection>, StoreError> {
        self.collection
            .read()
            .map_err(|_| StoreError::LockPoisoned(operation))
    }

    fn write(
        &self,
        operation: &'static str,
    ) -> Result<RwLockWriteGuard<'_, Collection>, StoreError> {
        self.collection
            .write()
            .map_err(|_| StoreError::LockPoisoned(operation))
    }
}

fn not_found(id: u64) -> StoreError {
    StoreError::NotFound(format!("flavor {}", id))
}
