#![cfg_attr(docsrs, doc(cfg(feature = "serde")))]

use alloc::vec::Vec;

use crate::Stack;

impl serde::Serialize for Stack {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(self.as_bytes(), serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Stack {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let bytes = <Vec<u8> as serde::Deserialize>::deserialize(d)?;
        Ok(Stack::from(bytes))
    }
}
