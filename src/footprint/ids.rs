use uuid::Uuid;

/// Source of the unique identifiers KiCad attaches to every footprint item.
pub trait UuidSource {
    /// Returns the next identifier.
    fn next_uuid(&mut self) -> Uuid;
}

/// Random version-4 identifiers, as KiCad itself generates them.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomUuids;

impl UuidSource for RandomUuids {
    fn next_uuid(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Counts up from 1; gives reproducible output for comparisons and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialUuids {
    next: u128,
}

impl UuidSource for SequentialUuids {
    fn next_uuid(&mut self) -> Uuid {
        self.next += 1;
        Uuid::from_u128(self.next)
    }
}
