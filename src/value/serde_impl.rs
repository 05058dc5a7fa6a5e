//! `Serialize` and `Deserialize` for [`Value`].
//!
//! Values map onto the JSON data model one to one. Serializing a value that
//! contains itself fails instead of recursing forever; shared but acyclic
//! containers are written once per occurrence.

use std::cell::RefCell;
use std::fmt;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{self, SerializeMap, SerializeSeq};

use super::{Array, Object, Value};

struct GuardedValue<'a> {
    value: &'a Value,
    ancestors: &'a RefCell<Vec<usize>>,
}

impl GuardedValue<'_> {
    fn enter<E: ser::Error>(&self, identity: usize) -> Result<(), E> {
        let mut ancestors = self.ancestors.borrow_mut();
        if ancestors.contains(&identity) {
            return Err(E::custom("cannot serialize a value that contains itself"));
        }
        ancestors.push(identity);
        Ok(())
    }

    fn leave(&self) {
        self.ancestors.borrow_mut().pop();
    }

    const fn child<'b>(&'b self, value: &'b Value) -> GuardedValue<'b> {
        GuardedValue {
            value,
            ancestors: self.ancestors,
        }
    }
}

impl ser::Serialize for GuardedValue<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        match self.value {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(flag) => serializer.serialize_bool(*flag),
            Value::Number(number) => serializer.serialize_f64(*number),
            Value::String(text) => serializer.serialize_str(text),
            Value::Array(array) => {
                self.enter::<S::Error>(array.identity())?;
                let items = array.borrow();
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    seq.serialize_element(&self.child(item))?;
                }
                self.leave();
                seq.end()
            }
            Value::Object(object) => {
                self.enter::<S::Error>(object.identity())?;
                let entries = object.borrow();
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries.iter() {
                    map.serialize_entry(key, &self.child(value))?;
                }
                self.leave();
                map.end()
            }
        }
    }
}

impl ser::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        let ancestors = RefCell::new(Vec::new());
        GuardedValue {
            value: self,
            ancestors: &ancestors,
        }
        .serialize(serializer)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON-like value")
    }

    fn visit_bool<E: de::Error>(self, flag: bool) -> Result<Value, E> {
        Ok(Value::Bool(flag))
    }

    fn visit_i64<E: de::Error>(self, number: i64) -> Result<Value, E> {
        Ok(Value::from(number))
    }

    fn visit_u64<E: de::Error>(self, number: u64) -> Result<Value, E> {
        Ok(Value::from(number))
    }

    fn visit_f64<E: de::Error>(self, number: f64) -> Result<Value, E> {
        Ok(Value::Number(number))
    }

    fn visit_str<E: de::Error>(self, text: &str) -> Result<Value, E> {
        Ok(Value::from(text))
    }

    fn visit_string<E: de::Error>(self, text: String) -> Result<Value, E> {
        Ok(Value::String(text))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        de::Deserialize::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut items = Vec::with_capacity(capacity);
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Array(Array::from_vec(items)))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let object = Object::new();
        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            object.insert(key, value);
        }
        Ok(Value::Object(object))
    }
}

impl<'de> de::Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod serde_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Null, "null")]
    #[case(Value::from(true), "true")]
    #[case(Value::from(1.5), "1.5")]
    #[case(Value::from("hi"), r#""hi""#)]
    #[case(Value::array([1, 2]), "[1.0,2.0]")]
    fn test_serialize_scalars_and_arrays(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(serde_json::to_string(&value).unwrap(), expected);
    }

    #[test]
    fn test_object_key_order_survives_round_trip() {
        let json = r#"{"z":1.0,"a":[true,null],"m":{"k":"v"}}"#;
        let value: Value = serde_json::from_str(json).unwrap();
        assert_eq!(value.as_object().unwrap().keys(), vec!["z", "a", "m"]);
        assert_eq!(serde_json::to_string(&value).unwrap(), json);
    }

    #[test]
    fn test_cycle_is_an_error() {
        let object = Object::new();
        object.insert("self", object.clone());
        let error = serde_json::to_string(&Value::from(object)).unwrap_err();
        assert!(error.to_string().contains("contains itself"));
    }

    #[test]
    fn test_shared_subtree_is_written_each_time() {
        let shared = Value::array([1]);
        let root = Value::array([shared.clone(), shared]);
        assert_eq!(serde_json::to_string(&root).unwrap(), "[[1.0],[1.0]]");
    }
}
