use super::EntityMetadata;

/// Trait implemented by every aggregate root
///
/// Bundles the per-instance accessors with the static metadata of the
/// aggregate class (index, collection and UI names).
pub trait AggregateRoot {
    /// Identifier type of the aggregate
    type Id;

    // ========================================================================
    // Instance accessors
    // ========================================================================

    /// Record ID
    fn id(&self) -> Self::Id;

    /// Business code of the record (for example "QT-25-00267")
    fn code(&self) -> &str;

    /// Display name / description of the record
    fn description(&self) -> &str;

    /// Lifecycle metadata
    fn metadata(&self) -> &EntityMetadata;

    /// Mutable lifecycle metadata
    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    // ========================================================================
    // Static aggregate-class metadata
    // ========================================================================

    /// Aggregate index within the system (for example "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name (for example "customer")
    fn collection_name() -> &'static str;

    /// Singular UI name (for example "Customer")
    fn element_name() -> &'static str;

    /// Plural UI name (for example "Customers")
    fn list_name() -> &'static str;

    // ========================================================================
    // Default implementations
    // ========================================================================

    /// Full system name of the aggregate (for example "a001_customer")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
