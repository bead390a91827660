// src/numerics/serialization.rs
// serde impls for Vector<T, N>, keyed by component name.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::numerics::types::traits::Component;
use crate::numerics::types::vector::Vector;

static COMPONENT_NAMES: [&str; 4] = ["x", "y", "z", "w"];

/// Field names of an `arity`-component vector, in storage order.
pub fn field_names(arity: usize) -> &'static [&'static str] {
    &COMPONENT_NAMES[..arity.min(COMPONENT_NAMES.len())]
}

struct VectorVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T, const N: usize> Visitor<'de> for VectorVisitor<T, N>
where
    T: Component + Deserialize<'de>,
{
    type Value = Vector<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a vector with fields {:?}", field_names(N))
    }

    // Binary codecs encode structs as plain sequences.
    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut components = [T::zero(); N];
        for (index, slot) in components.iter_mut().enumerate() {
            *slot = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(index, &self))?;
        }
        if seq.next_element::<IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(N + 1, &self));
        }
        Ok(Vector::from_array(components))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let names = field_names(N);
        let mut found: [Option<T>; N] = [None; N];

        while let Some(key) = map.next_key::<String>()? {
            let index = names
                .iter()
                .position(|name| *name == key)
                .ok_or_else(|| de::Error::unknown_field(&key, names))?;
            if found[index].is_some() {
                return Err(de::Error::duplicate_field(names[index]));
            }
            found[index] = Some(map.next_value()?);
        }

        let mut components = [T::zero(); N];
        for (index, slot) in components.iter_mut().enumerate() {
            *slot = found[index].ok_or_else(|| de::Error::missing_field(names[index]))?;
        }
        Ok(Vector::from_array(components))
    }
}

macro_rules! impl_serde {
    ($($n:literal),*) => {$(
        impl<T> Serialize for Vector<T, $n>
        where
            T: Component + Serialize,
        {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                let mut state = serializer.serialize_struct("Vector", $n)?;
                for (name, component) in field_names($n).iter().zip(self.iter()) {
                    state.serialize_field(*name, component)?;
                }
                state.end()
            }
        }

        impl<'de, T> Deserialize<'de> for Vector<T, $n>
        where
            T: Component + Deserialize<'de>,
        {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserializer.deserialize_struct("Vector", field_names($n), VectorVisitor::<T, $n>(PhantomData))
            }
        }
    )*};
}

impl_serde!(2, 3, 4);
