//! `Optional<T>` goes over the wire exactly like `Option<T>`: an absent
//! value is `null` (or the format's equivalent), a present one is the bare
//! payload.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::optional::{Absent, Optional, Present};

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Present(val) => serializer.serialize_some(val),
            Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Optional::from_option)
    }
}
