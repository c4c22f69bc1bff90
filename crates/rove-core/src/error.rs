use crate::item::ItemId;
use crate::location::LocationId;

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors that can occur when building or mutating a world.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The requested location ID does not exist in the world.
    #[error("location not found: {0}")]
    LocationNotFound(LocationId),

    /// The requested item ID does not exist in the world.
    #[error("item not found: {0}")]
    ItemNotFound(ItemId),
}
