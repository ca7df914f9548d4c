use crate::{Error, Result};
use serde::Serialize;
use std::collections::HashMap;

/// Display grouping of a pattern. Not derived from the pattern itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    StillLife,
    Oscillator,
    Gun,
    Spaceship,
    Methuselah,
    Puffer,
}

impl Category {
    pub const ALL: [Self; 6] = [
        Self::StillLife,
        Self::Oscillator,
        Self::Gun,
        Self::Spaceship,
        Self::Methuselah,
        Self::Puffer,
    ];

    /// Key used in file names and emitted scripts.
    pub fn name(self) -> &'static str {
        match self {
            Self::StillLife => "still_life",
            Self::Oscillator => "oscillator",
            Self::Gun => "gun",
            Self::Spaceship => "spaceship",
            Self::Methuselah => "methuselah",
            Self::Puffer => "puffer",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered registry of pattern ids grouped by category.
///
/// An id may appear only once across all categories.
#[derive(Clone, Debug)]
pub struct Catalog {
    groups: Vec<(Category, Vec<String>)>,
}

impl Catalog {
    pub fn new<I, S>(groups: impl IntoIterator<Item = (Category, I)>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let groups: Vec<(Category, Vec<String>)> = groups
            .into_iter()
            .map(|(category, ids)| (category, ids.into_iter().map(Into::into).collect()))
            .collect();

        let mut seen = HashMap::new();
        for (category, ids) in &groups {
            for id in ids {
                if let Some(first) = seen.insert(id.as_str(), *category) {
                    return Err(Error::DuplicatePattern {
                        id: id.clone(),
                        first: first.name(),
                        second: category.name(),
                    });
                }
            }
        }
        Ok(Self { groups })
    }

    /// The patterns bundled in `patterns/`.
    pub fn standard() -> Result<Self> {
        use Category::*;
        let groups: [(Category, &[&str]); 6] = [
            (StillLife, &["block", "beehive", "loaf", "boat"]),
            (
                Oscillator,
                &[
                    "blinker",
                    "toad",
                    "beacon",
                    "clock",
                    "jam",
                    "pentadecathlon",
                    "29p9",
                    "1234",
                    "rats",
                    "pulsar",
                    "queenbeeshuttle",
                ],
            ),
            (
                Spaceship,
                &[
                    "glider",
                    "lwss",
                    "mwss",
                    "hwss",
                    "sidecar",
                    "crab",
                    "turtle",
                    "orion2",
                    "canadagoose",
                ],
            ),
            (Methuselah, &["rpentomino", "acorn", "rabbits", "bheptomino"]),
            (Puffer, &["puffer1", "puffer2", "noahsark"]),
            (Gun, &["gosperglidergun", "b52bomber"]),
        ];
        Self::new(groups.map(|(category, ids)| (category, ids.iter().copied())))
    }

    /// `(category, id)` pairs in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (Category, &str)> + '_ {
        self.groups
            .iter()
            .flat_map(|(category, ids)| ids.iter().map(move |id| (*category, id.as_str())))
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|(_, ids)| ids.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
