//! Transient entities rolled when the cat steps onto a tile.

use serde::{Deserialize, Serialize};

use crate::animal::Animal;
use crate::error::{CoreError, CoreResult};
use crate::item::Item;

/// Either a sick animal or an item. Produced, consumed in one interaction,
/// then discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entity {
    /// A sick animal to help.
    Animal(Animal),
    /// Something to pick up.
    Item(Item),
}

impl Entity {
    /// Short kind label used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Animal(_) => "animal",
            Self::Item(_) => "item",
        }
    }

    /// The wrapped item, or `InvalidEntityType` for anything else.
    pub fn as_item(&self) -> CoreResult<Item> {
        match self {
            Self::Item(item) => Ok(*item),
            other => Err(CoreError::InvalidEntityType {
                expected: "item",
                actual: other.kind(),
            }),
        }
    }
}

impl From<Item> for Entity {
    fn from(item: Item) -> Self {
        Self::Item(item)
    }
}

impl From<Animal> for Entity {
    fn from(animal: Animal) -> Self {
        Self::Animal(animal)
    }
}
