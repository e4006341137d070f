//! Location repository trait defining the interface for location persistence.
//!
//! The contract covers insert-or-update, lookup by id,
//! delete by id, and listing/paging. No custom queries.

use agri_shared::types::{PaginatedResponse, Pagination};
use async_trait::async_trait;

use crate::domain::entities::location::Location;
use crate::errors::DomainError;

/// Repository trait for Location persistence operations
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use agri_core::domain::entities::location::Location;
/// use agri_core::errors::DomainError;
/// use agri_core::repositories::LocationRepository;
/// use agri_shared::types::{PaginatedResponse, Pagination};
///
/// struct PostgresLocationRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl LocationRepository for PostgresLocationRepository {
///     async fn find_by_id(&self, id: i64) -> Result<Option<Location>, DomainError> {
///         // Implementation here
///         Ok(None)
///     }
///
///     // ... other methods
/// #   async fn save(&self, l: Location) -> Result<Location, DomainError> { Ok(l) }
/// #   async fn exists_by_id(&self, _: i64) -> Result<bool, DomainError> { Ok(false) }
/// #   async fn delete_by_id(&self, _: i64) -> Result<bool, DomainError> { Ok(false) }
/// #   async fn find_all(&self) -> Result<Vec<Location>, DomainError> { Ok(vec![]) }
/// #   async fn find_page(&self, p: Pagination) -> Result<PaginatedResponse<Location>, DomainError> {
/// #       Ok(PaginatedResponse::new(vec![], p, 0))
/// #   }
/// #   async fn count(&self) -> Result<u64, DomainError> { Ok(0) }
/// }
/// ```
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Insert or update a location
    ///
    /// A location without an id is inserted and receives a new id. A location
    /// with an id replaces the stored row, or is inserted under that id when
    /// no such row exists.
    ///
    /// # Returns
    /// * `Ok(Location)` - The stored location, id always set
    /// * `Err(DomainError)` - Coordinates out of range or storage failure
    async fn save(&self, location: Location) -> Result<Location, DomainError>;

    /// Find a location by its identifier
    ///
    /// # Returns
    /// * `Ok(Some(Location))` - Location found
    /// * `Ok(None)` - No location with the given id
    /// * `Err(DomainError)` - Storage failure
    async fn find_by_id(&self, id: i64) -> Result<Option<Location>, DomainError>;

    /// Fetch a location that must exist
    ///
    /// # Returns
    /// * `Ok(Location)` - Location found
    /// * `Err(DomainError::NotFound)` - No location with the given id
    async fn get_by_id(&self, id: i64) -> Result<Location, DomainError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Location"))
    }

    /// Check whether a location with the given id exists
    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError>;

    /// Delete a location by its identifier
    ///
    /// # Returns
    /// * `Ok(true)` - Location was deleted
    /// * `Ok(false)` - Location not found
    /// * `Err(DomainError)` - Deletion failed
    async fn delete_by_id(&self, id: i64) -> Result<bool, DomainError>;

    /// List every location ordered by id
    async fn find_all(&self) -> Result<Vec<Location>, DomainError>;

    /// List one page of locations ordered by id
    async fn find_page(
        &self,
        pagination: Pagination,
    ) -> Result<PaginatedResponse<Location>, DomainError>;

    /// Count stored locations
    async fn count(&self) -> Result<u64, DomainError>;
}
