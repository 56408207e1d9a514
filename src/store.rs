//! Entity storage: ordered, owned collections of decoded records.
//!
//! Records live in growable owned sequences, one per entity type; every
//! record's sub-chains (binary chunks, object ids, strings) are dropped
//! exactly once when its list is cleared or dropped. There is no manual
//! teardown to get wrong.

use crate::codec::registry::EntityType;
use crate::entity::Entity;
use indexmap::IndexMap;

/// An ordered, owned list of same-typed entities.
#[derive(Debug, Clone, Default)]
pub struct EntityList {
    entities: Vec<Entity>,
}

impl EntityList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self { entities: Vec::new() }
    }

    /// Append an entity. O(1) amortized.
    pub fn append(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// The most recently appended entity.
    pub fn last(&self) -> Option<&Entity> {
        self.entities.last()
    }

    /// Mutable access to the most recently appended entity.
    pub fn last_mut(&mut self) -> Option<&mut Entity> {
        self.entities.last_mut()
    }

    /// Entity at `index`, in append order.
    pub fn get(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    /// Number of entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// True when the list holds nothing.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate in append order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Drop every entity (and all owned sub-chains) in the list.
    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

/// Per-type entity lists for one decoded stream, iterated in first-seen
/// type order so write-out is deterministic.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    lists: IndexMap<EntityType, EntityList>,
}

impl EntityStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { lists: IndexMap::new() }
    }

    /// Append an entity to its type's list, creating the list on first
    /// use.
    pub fn append(&mut self, entity: Entity) {
        self.lists
            .entry(entity.entity_type())
            .or_default()
            .append(entity);
    }

    /// The list for one entity type, if any records of it were stored.
    pub fn list(&self, entity_type: EntityType) -> Option<&EntityList> {
        self.lists.get(&entity_type)
    }

    /// The most recently appended entity of one type.
    pub fn last(&self, entity_type: EntityType) -> Option<&Entity> {
        self.lists.get(&entity_type).and_then(EntityList::last)
    }

    /// Total number of stored entities across all types.
    pub fn len(&self) -> usize {
        self.lists.values().map(EntityList::len).sum()
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate `(type, list)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityType, &EntityList)> {
        self.lists.iter().map(|(t, l)| (*t, l))
    }

    /// Iterate every stored entity, grouped by type in first-seen order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.lists.values().flat_map(EntityList::iter)
    }

    /// Drop everything. A no-op on an already-empty store.
    pub fn clear(&mut self) {
        self.lists.clear();
    }
}
