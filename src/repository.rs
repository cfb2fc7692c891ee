use std::collections::HashSet;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::backend::KeyValueBackend;
use crate::codec;
use crate::error::Result;
use crate::models::Identified;
use crate::utils::ids;

/// Typed CRUD facade over a single storage key.
///
/// Every mutation is a full read-modify-write of the partition's
/// collection. There is no locking: two handles racing on the same key
/// lose one of the writes (last write wins), which is the storage model's
/// accepted behavior.
pub struct Partition<T> {
    backend: Arc<dyn KeyValueBackend>,
    key: String,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Partition<T>
where
    T: Identified + Serialize + DeserializeOwned + Clone,
{
    pub fn new(backend: Arc<dyn KeyValueBackend>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            _entity: PhantomData,
        }
    }

    /// All records in storage (insertion) order.
    pub fn list(&self) -> Vec<T> {
        codec::decode_collection(&self.key, self.backend.read(&self.key))
    }

    pub fn find_by_id(&self, id: i64) -> Option<T> {
        self.list().into_iter().find(|item| item.id() == id)
    }

    /// Append a record, minting its id against the full cross-entity id
    /// census when the given one is unusable or already taken. The minted
    /// id joins `existing_ids` so the caller can keep creating.
    pub fn create(&self, mut entity: T, existing_ids: &mut HashSet<String>) -> Result<T> {
        if !ids::is_valid_id(entity.id()) || existing_ids.contains(&entity.id().to_string()) {
            entity.set_id(ids::allocate(existing_ids)?);
        }
        existing_ids.insert(entity.id().to_string());

        let mut items = self.list();
        items.push(entity.clone());
        self.persist(&items)?;
        Ok(entity)
    }

    /// Replace-by-id. Silently does nothing when the id is not present;
    /// callers that care check existence first.
    pub fn update(&self, entity: &T) -> Result<()> {
        let mut items = self.list();
        let Some(slot) = items.iter_mut().find(|item| item.id() == entity.id()) else {
            return Ok(());
        };
        *slot = entity.clone();
        self.persist(&items)
    }

    /// Remove-by-id. Dependent records in other partitions are left alone.
    pub fn delete(&self, id: i64) -> Result<()> {
        let mut items = self.list();
        items.retain(|item| item.id() != id);
        self.persist(&items)
    }

    pub fn persist(&self, items: &[T]) -> Result<()> {
        let encoded = codec::encode(&items)?;
        self.backend.write(&self.key, &encoded)
    }

    /// Raw blob snapshot, for callers that need to undo a multi-partition
    /// write when a later leg fails.
    pub(crate) fn snapshot(&self) -> Option<String> {
        self.backend.read(&self.key)
    }

    pub(crate) fn restore(&self, snapshot: Option<&str>) -> Result<()> {
        match snapshot {
            Some(raw) => self.backend.write(&self.key, raw),
            None => self.backend.remove(&self.key),
        }
    }
}
