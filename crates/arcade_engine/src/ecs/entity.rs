//! Entity implementation

slotmap::new_key_type! {
    /// Generational entity identifier
    ///
    /// Stale ids (of despawned entities) never alias a newer entity.
    pub struct EntityId;
}
