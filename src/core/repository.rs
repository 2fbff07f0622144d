use async_trait::async_trait;
use core::option::Option;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity, returning the id assigned by the store
    async fn create(&self, entity: &Entity) -> LibraryResult<u64>;

    // overwrite the stored entity matching id, returning the number updated
    async fn update(&self, id: u64, entity: &Entity) -> LibraryResult<usize>;

    // get the first entity matching id, in insertion order
    async fn get(&self, id: u64) -> LibraryResult<Option<Entity>>;

    // delete every entity matching id, returning the number removed
    async fn delete(&self, id: u64) -> LibraryResult<usize>;

    // all entities in insertion order
    async fn all(&self) -> LibraryResult<Vec<Entity>>;

    // number of entities currently stored
    async fn count(&self) -> LibraryResult<usize>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    InMemory,
}
