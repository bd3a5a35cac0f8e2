use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::dec_parse::string_to_number;
use crate::number_format::number_to_string;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Rc<RefCell<ArrayValue>>),
    Object(Rc<RefCell<ObjectValue>>),
    /// A `Number` wrapper object created by `new Number(...)`.
    NumberObject(f64),
}

#[derive(Debug, Clone, Default)]
pub struct ObjectValue {
    pub(crate) entries: Vec<(String, Value)>,
    pub(crate) index_by_key: HashMap<String, usize>,
}

impl ObjectValue {
    pub fn new(entries: Vec<(String, Value)>) -> Self {
        let mut value = Self::default();
        for (key, entry_value) in entries {
            value.set_entry(key, entry_value);
        }
        value
    }

    pub fn set_entry(&mut self, key: String, value: Value) {
        if let Some(index) = self.index_by_key.get(&key).copied() {
            if let Some((_, existing)) = self.entries.get_mut(index) {
                *existing = value;
                return;
            }
        }
        let index = self.entries.len();
        self.entries.push((key.clone(), value));
        self.index_by_key.insert(key, index);
    }

    pub fn get_entry(&self, key: &str) -> Option<Value> {
        self.index_by_key
            .get(key)
            .and_then(|index| self.entries.get(*index))
            .map(|(_, value)| value.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for ObjectValue {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

/// Dense array storage. `None` elements are holes.
#[derive(Debug, Default, PartialEq)]
pub struct ArrayValue {
    pub elements: Vec<Option<Value>>,
    /// Own properties that are not stored as dense elements.
    pub properties: ObjectValue,
}

impl ArrayValue {
    pub fn new(elements: Vec<Value>) -> Self {
        Self {
            elements: elements.into_iter().map(Some).collect(),
            properties: ObjectValue::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// True when the array has no own properties besides its elements.
    pub fn has_only_elements(&self) -> bool {
        self.properties.is_empty()
    }

    /// The element at `index` unless it is a hole or out of bounds.
    pub fn valid_element(&self, index: usize) -> Option<&Value> {
        self.elements.get(index).and_then(Option::as_ref)
    }
}

impl Value {
    pub fn array(elements: Vec<Value>) -> Self {
        Self::Array(Rc::new(RefCell::new(ArrayValue::new(elements))))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::NumberObject(_) => "object number",
        }
    }

    /// Primitive kinds that carry a numeric payload directly.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Undefined | Self::Null | Self::Bool(_) | Self::Number(_)
        )
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Numeric payload of a numeric primitive; NaN for every other kind.
    pub fn numeric_payload(&self) -> f64 {
        match self {
            Self::Null => 0.0,
            Self::Bool(value) => {
                if *value {
                    1.0
                } else {
                    0.0
                }
            }
            Self::Number(value) => *value,
            _ => f64::NAN,
        }
    }

    /// Payload of a number or a `Number` wrapper object.
    pub fn unboxed_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) | Self::NumberObject(value) => Some(*value),
            _ => None,
        }
    }

    pub fn to_number(&self) -> f64 {
        match self {
            Self::Undefined | Self::Null | Self::Bool(_) | Self::Number(_) => {
                self.numeric_payload()
            }
            Self::NumberObject(value) => *value,
            Self::String(value) => string_to_number(value, false),
            Self::Array(_) => string_to_number(&self.as_string(), false),
            Self::Object(_) => f64::NAN,
        }
    }

    pub fn as_string(&self) -> String {
        let mut out = String::new();
        self.write_string(&mut out, &mut Vec::new());
        out
    }

    fn write_string(&self, out: &mut String, visiting: &mut Vec<*const RefCell<ArrayValue>>) {
        match self {
            Self::Undefined => out.push_str("undefined"),
            Self::Null => out.push_str("null"),
            Self::Bool(value) => out.push_str(if *value { "true" } else { "false" }),
            Self::Number(value) | Self::NumberObject(value) => {
                out.push_str(&number_to_string(*value))
            }
            Self::String(value) => out.push_str(value),
            Self::Object(_) => out.push_str("[object Object]"),
            Self::Array(array) => {
                let ptr = Rc::as_ptr(array);
                if visiting.contains(&ptr) {
                    return;
                }
                visiting.push(ptr);
                for (i, element) in array.borrow().elements.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    match element {
                        None | Some(Self::Undefined) | Some(Self::Null) => {}
                        Some(element) => element.write_string(out, visiting),
                    }
                }
                visiting.pop();
            }
        }
    }
}
