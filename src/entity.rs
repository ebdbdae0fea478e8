/// Whether an entity has received any data yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityState {
    Empty,
    Filled,
}

impl EntityState {
    fn of(data: &str) -> Self {
        if data.is_empty() {
            EntityState::Empty
        } else {
            EntityState::Filled
        }
    }
}

/// Entity whose `receive` runs on a copy of itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueReceiverEntity {
    pub(crate) data: String,
}

impl ValueReceiverEntity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn state(&self) -> EntityState {
        EntityState::of(&self.data)
    }
}

/// Entity whose `receive` runs on the caller's original.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefReceiverEntity {
    pub(crate) data: String,
}

impl RefReceiverEntity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn state(&self) -> EntityState {
        EntityState::of(&self.data)
    }
}
