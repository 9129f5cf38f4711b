//! Consumable items, berry colors, and the ailments berries treat.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// The five berry colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BerryColor {
    /// Treats `Injured`.
    Red,
    /// Treats `Poisoned`.
    Green,
    /// Treats `Dehydrated`.
    Blue,
    /// Treats `Burned`.
    Yellow,
    /// Treats `Sad`.
    Purple,
}

impl BerryColor {
    /// All colors in inventory order.
    pub const ALL: [BerryColor; 5] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::Purple,
    ];

    /// Position of this color in [`BerryColor::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
            Self::Yellow => 3,
            Self::Purple => 4,
        }
    }

    /// The ailment this berry cures.
    pub fn treats(self) -> Ailment {
        match self {
            Self::Red => Ailment::Injured,
            Self::Green => Ailment::Poisoned,
            Self::Blue => Ailment::Dehydrated,
            Self::Yellow => Ailment::Burned,
            Self::Purple => Ailment::Sad,
        }
    }

    /// Parse a color name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "red" => Some(Self::Red),
            "green" => Some(Self::Green),
            "blue" => Some(Self::Blue),
            "yellow" => Some(Self::Yellow),
            "purple" => Some(Self::Purple),
            _ => None,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Yellow => "Yellow",
            Self::Purple => "Purple",
        }
    }
}

impl fmt::Display for BerryColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Something a sick animal can suffer from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Ailment {
    /// Cured by a red berry.
    Injured,
    /// Cured by a green berry.
    Poisoned,
    /// Cured by a blue berry.
    Dehydrated,
    /// Cured by a yellow berry.
    Burned,
    /// Cured by a purple berry.
    Sad,
    /// Cured by any berry when nothing better matches.
    Starving,
}

impl Ailment {
    /// All ailments, `Starving` last.
    pub const ALL: [Ailment; 6] = [
        Self::Injured,
        Self::Poisoned,
        Self::Dehydrated,
        Self::Burned,
        Self::Sad,
        Self::Starving,
    ];

    /// The berry mapped to this ailment. `None` for `Starving`, which any
    /// berry cures as a fallback.
    pub fn treated_by(self) -> Option<BerryColor> {
        BerryColor::ALL.into_iter().find(|c| c.treats() == self)
    }
}

impl fmt::Display for Ailment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Injured => write!(f, "Injured"),
            Self::Poisoned => write!(f, "Poisoned"),
            Self::Dehydrated => write!(f, "Dehydrated"),
            Self::Burned => write!(f, "Burned"),
            Self::Sad => write!(f, "Sad"),
            Self::Starving => write!(f, "Starving"),
        }
    }
}

/// A non-berry consumable that also grants an energy buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Boost {
    /// The common boost.
    Catnip,
    /// The rare, stronger boost.
    Silvervine,
}

impl fmt::Display for Boost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Catnip => write!(f, "Catnip"),
            Self::Silvervine => write!(f, "Silvervine"),
        }
    }
}

/// Something the cat can pick up and eat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Item {
    /// Catnip or Silvervine.
    Boost(Boost),
    /// A berry of one color.
    Berry(BerryColor),
}

impl Item {
    /// Parse item text such as `"Catnip"`, `"red berry"` or `"red"`.
    pub fn parse(input: &str) -> CoreResult<Self> {
        let words: Vec<String> = input.split_whitespace().map(str::to_lowercase).collect();
        let unknown = || CoreError::UnknownItem(input.trim().to_string());

        match words.as_slice() {
            [one] if one == "catnip" => Ok(Self::Boost(Boost::Catnip)),
            [one] if one == "silvervine" => Ok(Self::Boost(Boost::Silvervine)),
            [color] => BerryColor::parse(color).map(Self::Berry).ok_or_else(unknown),
            [color, berry] if berry == "berry" || berry == "berries" => {
                BerryColor::parse(color).map(Self::Berry).ok_or_else(unknown)
            }
            _ => Err(unknown()),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boost(boost) => write!(f, "{boost}"),
            Self::Berry(color) => write!(f, "{color} Berry"),
        }
    }
}
