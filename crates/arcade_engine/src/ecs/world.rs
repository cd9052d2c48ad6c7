//! World implementation

use super::EntityId;
use bitflags::Flags;
use slotmap::SlotMap;

struct Slot<E, F> {
    tags: F,
    entity: E,
}

/// Arena containing all entities together with their tag flags
///
/// `E` is the entity type (usually an enum of the game's variants) and `F`
/// a bitflags type naming the collections an entity belongs to.
pub struct World<E, F> {
    slots: SlotMap<EntityId, Slot<E, F>>,
}

impl<E, F> World<E, F>
where
    F: Flags + Copy,
{
    /// Create a new world
    pub fn new() -> Self {
        Self {
            slots: SlotMap::with_key(),
        }
    }

    /// Insert an entity tagged with `tags`
    pub fn spawn(&mut self, entity: E, tags: F) -> EntityId {
        self.slots.insert(Slot { tags, entity })
    }

    /// Whether `id` refers to a live entity
    pub fn contains(&self, id: EntityId) -> bool {
        self.slots.contains_key(id)
    }

    /// Get an entity
    pub fn get(&self, id: EntityId) -> Option<&E> {
        self.slots.get(id).map(|slot| &slot.entity)
    }

    /// Get a mutable entity
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut E> {
        self.slots.get_mut(id).map(|slot| &mut slot.entity)
    }

    /// Tags of an entity
    pub fn tags(&self, id: EntityId) -> Option<F> {
        self.slots.get(id).map(|slot| slot.tags)
    }

    /// Iterate over entities carrying every flag in `tags`
    pub fn query(&self, tags: F) -> impl Iterator<Item = (EntityId, &E)> + '_ {
        self.slots
            .iter()
            .filter(move |(_, slot)| slot.tags.contains(tags))
            .map(|(id, slot)| (id, &slot.entity))
    }

    /// Mutably iterate over entities carrying every flag in `tags`
    pub fn query_mut(&mut self, tags: F) -> impl Iterator<Item = (EntityId, &mut E)> + '_ {
        self.slots
            .iter_mut()
            .filter(move |(_, slot)| slot.tags.contains(tags))
            .map(|(id, slot)| (id, &mut slot.entity))
    }

    /// Snapshot the ids carrying every flag in `tags`
    ///
    /// Use this when the loop body needs to mutate the world.
    pub fn ids(&self, tags: F) -> Vec<EntityId> {
        self.query(tags).map(|(id, _)| id).collect()
    }

    /// Number of entities carrying every flag in `tags`
    pub fn count(&self, tags: F) -> usize {
        self.query(tags).count()
    }

    /// Keep only the entities for which `keep` returns true
    pub fn retain(&mut self, mut keep: impl FnMut(EntityId, &mut E) -> bool) {
        self.slots.retain(|id, slot| keep(id, &mut slot.entity));
    }

    /// Total number of entities
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the world holds no entities
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<E, F> Default for World<E, F>
where
    F: Flags + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}
