//! Entity - identity shared by every persisted record

/// A record kind stored under a store-assigned numeric identifier.
///
/// `id()` is `None` until the record has been saved once.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human readable kind, used in errors and logs
    const KIND: &'static str;

    fn id(&self) -> Option<i64>;

    /// Copy of the record carrying the given identifier
    fn with_id(self, id: i64) -> Self;

    fn is_new(&self) -> bool {
        self.id().is_none()
    }
}
