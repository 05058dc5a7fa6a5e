//! A dynamic, nested value with shared containers.
//!
//! [`Value`] models loosely typed data: null, booleans, numbers, strings,
//! arrays and objects. Arrays and objects are *handles*. Cloning a handle
//! shares the underlying container, mutation through one handle is visible
//! through every other, and each container has a stable identity. That makes
//! it possible to build shared and even self-referential structures, which
//! is what [`search`](crate::search) is designed to walk safely.
//!
//! # Examples
//!
//! ```rust
//! use seqwise::value::{Object, Value};
//!
//! let root = Object::new();
//! root.insert("name", "root");
//! root.insert("self", root.clone());
//!
//! let again = root.get("self").and_then(|value| value.as_object().cloned());
//! assert!(again.is_some_and(|object| object.ptr_eq(&root)));
//! assert_eq!(format!("{:?}", Value::from(root)), r#"{"name": "root", "self": [Circular]}"#);
//! ```
//!
//! Values are single-threaded: they are neither `Send` nor `Sync`.

#[cfg(feature = "serde")]
mod serde_impl;

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::ops::{AsNumber, Nested, Nesting, Pluck};

static_assertions::assert_not_impl_any!(Value: Send, Sync);

/// A dynamically typed value.
#[derive(Clone, Default)]
pub enum Value {
    /// The absence of a value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A number.
    Number(f64),
    /// A string. Strings are always leaves, never containers.
    String(String),
    /// A shared, ordered list of values.
    Array(Array),
    /// A shared map from string keys to values, in insertion order.
    Object(Object),
}

/// A shared handle to a list of values.
#[derive(Clone, Default)]
pub struct Array(Rc<RefCell<Vec<Value>>>);

/// A shared handle to an insertion-ordered map of values.
#[derive(Clone, Default)]
pub struct Object(Rc<RefCell<Vec<(String, Value)>>>);

// =============================================================================
// Array
// =============================================================================

impl Array {
    /// An empty array.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps `items` in a new array.
    pub fn from_vec(items: Vec<Value>) -> Self {
        Self(Rc::new(RefCell::new(items)))
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Whether the array holds no items.
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// A handle to (or copy of) the item at `index`.
    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.borrow().get(index).cloned()
    }

    /// Appends `value`.
    pub fn push(&self, value: impl Into<Value>) {
        self.0.borrow_mut().push(value.into());
    }

    /// Replaces the item at `index`, returning the previous one. Out-of-range
    /// indices leave the array unchanged and return `None`.
    pub fn set(&self, index: usize, value: impl Into<Value>) -> Option<Value> {
        self.0
            .borrow_mut()
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, value.into()))
    }

    /// A snapshot of the items, each a handle or copy.
    pub fn to_vec(&self) -> Vec<Value> {
        self.0.borrow().clone()
    }

    /// Borrows the items in place.
    ///
    /// # Panics
    ///
    /// Panics if the array is currently being mutated through another handle.
    pub fn borrow(&self) -> Ref<'_, Vec<Value>> {
        self.0.borrow()
    }

    /// Whether both handles point at the same array.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// A number unique to this array among the live containers.
    pub fn identity(&self) -> usize {
        Rc::as_ptr(&self.0).cast::<()>() as usize
    }
}

impl From<Vec<Value>> for Array {
    fn from(items: Vec<Value>) -> Self {
        Self::from_vec(items)
    }
}

impl<V: Into<Value>> FromIterator<V> for Array {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Self::from_vec(iter.into_iter().map(Into::into).collect())
    }
}

// =============================================================================
// Object
// =============================================================================

impl Object {
    /// An empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Whether the object has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// A handle to (or copy of) the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.0
            .borrow()
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.clone())
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.borrow().iter().any(|(name, _)| name == key)
    }

    /// Stores `value` under `key`.
    ///
    /// An existing key keeps its position and its previous value is
    /// returned; a new key is appended.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        let mut entries = self.0.borrow_mut();
        if let Some((_, slot)) = entries.iter_mut().find(|(name, _)| *name == key) {
            return Some(std::mem::replace(slot, value));
        }
        entries.push((key, value));
        None
    }

    /// Removes `key`, returning its value.
    pub fn remove(&self, key: &str) -> Option<Value> {
        let mut entries = self.0.borrow_mut();
        let position = entries.iter().position(|(name, _)| name == key)?;
        Some(entries.remove(position).1)
    }

    /// The keys, in insertion order.
    pub fn keys(&self) -> Vec<String> {
        self.0.borrow().iter().map(|(name, _)| name.clone()).collect()
    }

    /// A snapshot of the entries, in insertion order.
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.0.borrow().clone()
    }

    /// Borrows the entries in place.
    ///
    /// # Panics
    ///
    /// Panics if the object is currently being mutated through another handle.
    pub fn borrow(&self) -> Ref<'_, Vec<(String, Value)>> {
        self.0.borrow()
    }

    /// Whether both handles point at the same object.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// A number unique to this object among the live containers.
    pub fn identity(&self) -> usize {
        Rc::as_ptr(&self.0).cast::<()>() as usize
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let object = Self::new();
        for (key, value) in iter {
            object.insert(key, value);
        }
        object
    }
}

// =============================================================================
// Value
// =============================================================================

impl Value {
    /// An array value holding `items`.
    pub fn array<V: Into<Self>>(items: impl IntoIterator<Item = V>) -> Self {
        Self::Array(items.into_iter().collect())
    }

    /// An object value holding `entries`; later duplicates overwrite earlier ones.
    pub fn object<K: Into<String>, V: Into<Self>>(entries: impl IntoIterator<Item = (K, V)>) -> Self {
        Self::Object(entries.into_iter().collect())
    }

    /// The name of this value's kind, as used in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Whether this is [`Value::Null`].
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Whether this is an array or an object.
    pub const fn is_container(&self) -> bool {
        matches!(self, Self::Array(_) | Self::Object(_))
    }

    /// The boolean, if this is one.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// The number, if this is one.
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// The string, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// The array handle, if this is an array.
    pub const fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    /// The object handle, if this is an object.
    pub const fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// The value under `key` when this is an object.
    pub fn get(&self, key: &str) -> Option<Self> {
        self.as_object()?.get(key)
    }

    /// The item at `index` when this is an array.
    pub fn at(&self, index: usize) -> Option<Self> {
        self.as_array()?.get(index)
    }

    /// The container identity, or `None` for scalars.
    pub fn identity(&self) -> Option<usize> {
        match self {
            Self::Array(array) => Some(array.identity()),
            Self::Object(object) => Some(object.identity()),
            _ => None,
        }
    }

    /// Whether both values are the same container.
    ///
    /// Scalars are never the same container, even when equal.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Array(left), Self::Array(right)) => left.ptr_eq(right),
            (Self::Object(left), Self::Object(right)) => left.ptr_eq(right),
            _ => false,
        }
    }
}

// -----------------------------------------------------------------------------
// equality
// -----------------------------------------------------------------------------

/// Structural equality.
///
/// Containers compare equal when they are the same container or hold equal
/// contents in the same order. Comparing two distinct cyclic structures does
/// not terminate.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Number(left), Self::Number(right)) => left == right,
            (Self::String(left), Self::String(right)) => left == right,
            (Self::Array(left), Self::Array(right)) => left == right,
            (Self::Object(left), Self::Object(right)) => left == right,
            _ => false,
        }
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.0.borrow() == *other.0.borrow()
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.0.borrow() == *other.0.borrow()
    }
}

// -----------------------------------------------------------------------------
// formatting
// -----------------------------------------------------------------------------

const CIRCULAR: &str = "[Circular]";

/// A value being rendered, with the identities of the containers that
/// enclose it.
struct Guarded<'a> {
    value: &'a Value,
    ancestors: &'a RefCell<Vec<usize>>,
    quote_strings: bool,
}

impl Guarded<'_> {
    const fn nested<'b>(&'b self, value: &'b Value) -> Guarded<'b> {
        Guarded {
            value,
            ancestors: self.ancestors,
            quote_strings: true,
        }
    }

    fn enter(&self, identity: usize) -> bool {
        let mut ancestors = self.ancestors.borrow_mut();
        if ancestors.contains(&identity) {
            return false;
        }
        ancestors.push(identity);
        true
    }

    fn leave(&self) {
        self.ancestors.borrow_mut().pop();
    }
}

impl fmt::Debug for Guarded<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Value::Null => formatter.write_str("null"),
            Value::Bool(flag) => write!(formatter, "{flag}"),
            Value::Number(number) => write!(formatter, "{number}"),
            Value::String(text) if self.quote_strings => write!(formatter, "{text:?}"),
            Value::String(text) => formatter.write_str(text),
            Value::Array(array) => {
                if !self.enter(array.identity()) {
                    return formatter.write_str(CIRCULAR);
                }
                let result = match array.0.try_borrow() {
                    Ok(items) => formatter
                        .debug_list()
                        .entries(items.iter().map(|item| self.nested(item)))
                        .finish(),
                    Err(_) => formatter.write_str("[Borrowed]"),
                };
                self.leave();
                result
            }
            Value::Object(object) => {
                if !self.enter(object.identity()) {
                    return formatter.write_str(CIRCULAR);
                }
                let result = match object.0.try_borrow() {
                    Ok(entries) => formatter
                        .debug_map()
                        .entries(entries.iter().map(|(key, value)| (key, self.nested(value))))
                        .finish(),
                    Err(_) => formatter.write_str("{Borrowed}"),
                };
                self.leave();
                result
            }
        }
    }
}

impl Value {
    fn guarded<'a>(&'a self, ancestors: &'a RefCell<Vec<usize>>, quote_strings: bool) -> Guarded<'a> {
        Guarded {
            value: self,
            ancestors,
            quote_strings,
        }
    }
}

/// Renders like JSON with strings quoted; a container that encloses itself
/// is shown as `[Circular]`.
impl fmt::Debug for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ancestors = RefCell::new(Vec::new());
        fmt::Debug::fmt(&self.guarded(&ancestors, true), formatter)
    }
}

/// Like [`Debug`](fmt::Debug), except that a top-level string is written
/// without quotes.
impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ancestors = RefCell::new(Vec::new());
        fmt::Debug::fmt(&self.guarded(&ancestors, false), formatter)
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&Value::Array(self.clone()), formatter)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&Value::Object(self.clone()), formatter)
    }
}

// -----------------------------------------------------------------------------
// conversions
// -----------------------------------------------------------------------------

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

macro_rules! impl_from_number {
    ($($type:ty),* $(,)?) => {
        $(
            impl From<$type> for Value {
                fn from(number: $type) -> Self {
                    Self::Number(f64::from(number))
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, u8, u16, u32, f32, f64);

impl From<i64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(number: i64) -> Self {
        Self::Number(number as f64)
    }
}

impl From<u64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(number: u64) -> Self {
        Self::Number(number as f64)
    }
}

impl From<usize> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(number: usize) -> Self {
        Self::Number(number as f64)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(Array::from_vec(items))
    }
}

impl From<Array> for Value {
    fn from(array: Array) -> Self {
        Self::Array(array)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Self::Object(object)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl FromIterator<Self> for Value {
    fn from_iter<T: IntoIterator<Item = Self>>(iter: T) -> Self {
        Self::Array(iter.into_iter().collect())
    }
}

// -----------------------------------------------------------------------------
// combinator integration
// -----------------------------------------------------------------------------

impl Pluck<&str> for Value {
    type Output = Self;

    fn pluck(&self, key: &&str) -> Option<Self> {
        self.get(key)
    }
}

impl Pluck<usize> for Value {
    type Output = Self;

    fn pluck(&self, index: &usize) -> Option<Self> {
        self.at(*index)
    }
}

impl Nested for Value {
    type Children = Vec<Self>;

    fn into_nesting(self) -> Nesting<Self, Vec<Self>> {
        match self {
            Self::Array(array) => Nesting::Branch(array.to_vec()),
            other => Nesting::Leaf(other),
        }
    }
}

/// Null reads as zero and booleans as zero or one; strings are parsed.
/// Containers have no numeric reading.
impl AsNumber for Value {
    fn as_number(&self) -> Option<f64> {
        match self {
            Self::Null => Some(0.0),
            Self::Bool(flag) => flag.as_number(),
            Self::Number(number) => number.as_number(),
            Self::String(text) => text.as_number(),
            Self::Array(_) | Self::Object(_) => None,
        }
    }
}
