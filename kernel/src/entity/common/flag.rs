use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IsAvailable<T>(bool, PhantomData<T>);

impl<T> IsAvailable<T> {
    pub fn new(value: impl Into<bool>) -> Self {
        IsAvailable(value.into(), PhantomData)
    }

    pub fn get(&self) -> bool {
        self.0
    }
}

impl<T> From<IsAvailable<T>> for bool {
    fn from(value: IsAvailable<T>) -> Self {
        value.0
    }
}

impl<T> Serialize for IsAvailable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for IsAvailable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bool::deserialize(deserializer).map(IsAvailable::new)
    }
}
