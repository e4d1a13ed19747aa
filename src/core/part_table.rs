use std::ops::{Index, IndexMut};

use indexmap::IndexMap;
use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{DatumAttribute, DatumPart};

/// Fixed table with exactly one slot per `DatumPart`.
///
/// Indexing is by enum, so every lookup hits a defined slot. Serializes as a
/// map keyed by part name in declaration order; deserialization requires
/// every part to be present.
#[derive(Debug, Clone, PartialEq)]
pub struct PartTable<T> {
    slots: [T; DatumPart::COUNT],
}

impl<T> PartTable<T> {
    #[must_use]
    pub fn from_fn(mut init: impl FnMut(DatumPart) -> T) -> Self {
        Self {
            slots: std::array::from_fn(|index| init(DatumPart::ALL[index])),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (DatumPart, &T)> {
        DatumPart::ALL.into_iter().zip(self.slots.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (DatumPart, &mut T)> {
        DatumPart::ALL.into_iter().zip(self.slots.iter_mut())
    }

    #[must_use]
    pub fn map<U>(&self, mut f: impl FnMut(DatumPart, &T) -> U) -> PartTable<U> {
        PartTable::from_fn(|part| f(part, &self[part]))
    }
}

impl<T: Default> Default for PartTable<T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T> Index<DatumPart> for PartTable<T> {
    type Output = T;

    fn index(&self, part: DatumPart) -> &Self::Output {
        &self.slots[part.index()]
    }
}

impl<T> IndexMut<DatumPart> for PartTable<T> {
    fn index_mut(&mut self, part: DatumPart) -> &mut Self::Output {
        &mut self.slots[part.index()]
    }
}

impl<T: Serialize> Serialize for PartTable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(DatumPart::COUNT))?;
        for (part, value) in self.iter() {
            map.serialize_entry(&part, value)?;
        }
        map.end()
    }
}

impl<'de, T: Deserialize<'de> + Default> Deserialize<'de> for PartTable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut entries = IndexMap::<DatumPart, T>::deserialize(deserializer)?;
        let mut table = Self::default();
        for part in DatumPart::ALL {
            table[part] = entries
                .swap_remove(&part)
                .ok_or_else(|| D::Error::custom(format!("missing datum part `{}`", part.name())))?;
        }
        Ok(table)
    }
}

/// Scalar attribute table; slots never written read `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AttributeTable {
    values: [f64; DatumAttribute::COUNT],
}

impl AttributeTable {
    pub fn iter(&self) -> impl Iterator<Item = (DatumAttribute, f64)> + '_ {
        DatumAttribute::ALL
            .into_iter()
            .zip(self.values.iter().copied())
    }
}

impl Index<DatumAttribute> for AttributeTable {
    type Output = f64;

    fn index(&self, attribute: DatumAttribute) -> &Self::Output {
        &self.values[attribute.index()]
    }
}

impl IndexMut<DatumAttribute> for AttributeTable {
    fn index_mut(&mut self, attribute: DatumAttribute) -> &mut Self::Output {
        &mut self.values[attribute.index()]
    }
}

impl Serialize for AttributeTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(DatumAttribute::COUNT))?;
        for (attribute, value) in self.iter() {
            map.serialize_entry(&attribute, &value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AttributeTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = IndexMap::<DatumAttribute, f64>::deserialize(deserializer)?;
        let mut table = Self::default();
        for (attribute, value) in entries {
            table[attribute] = value;
        }
        Ok(table)
    }
}
