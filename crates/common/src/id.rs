//! ID generation utilities.

use uuid::Uuid;

/// ID generator for persisted records.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    _private: (),
}

impl IdGenerator {
    /// Create a new ID generator.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Generate a new random UUID v4 record identifier.
    ///
    /// Record ids are immutable once assigned and globally unique.
    #[must_use]
    pub fn generate(&self) -> Uuid {
        Uuid::new_v4()
    }

    /// Generate a new UUID v7-based identifier.
    ///
    /// UUID v7 is time-ordered and suitable for keys where insertion
    /// order matters.
    #[must_use]
    pub fn generate_v7(&self) -> Uuid {
        Uuid::now_v7()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_unique() {
        let id_gen = IdGenerator::new();
        let id1 = id_gen.generate();
        let id2 = id_gen.generate();

        assert_ne!(id1, id2);
        assert_eq!(id1.get_version_num(), 4);
    }

    #[test]
    fn test_generate_v7_is_time_ordered_version() {
        let id_gen = IdGenerator::new();
        let id = id_gen.generate_v7();

        assert_eq!(id.get_version_num(), 7);
    }
}
