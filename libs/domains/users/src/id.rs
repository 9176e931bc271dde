use uuid::Uuid;

/// Source of identifiers for new users.
///
/// Injected into [`crate::service::UserService`] so tests can substitute
/// a deterministic generator.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> Uuid;
}

/// Production generator backed by random v4 UUIDs.
#[derive(Debug, Default, Clone)]
pub struct UuidGenerator;

impl UuidGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> Uuid {
        Uuid::new_v4()
    }
}
