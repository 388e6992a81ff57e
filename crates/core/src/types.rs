/// All entity identifiers are opaque UUIDs. Unsaved candidates carry a
/// transient id minted by the caller.
pub type EntityId = uuid::Uuid;
