use std::cell::RefCell;
use std::rc::Rc;

use num_traits::ToPrimitive;

use crate::dec_parse::string_to_index;
use crate::runtime_values::{ArrayValue, Value};

/// Converts a value used as an array subscript into a 32-bit index.
///
/// Numeric primitives convert directly and strings must spell a decimal
/// number. A plain array (no side properties) is `0` when empty and the
/// coercion of its only element when it has exactly one. Any other value is
/// NaN. The result is an index only when it survives a round trip through
/// `u32` unchanged, otherwise `None`.
pub fn value_to_index(value: &Value) -> Option<u32> {
    let mut visiting: Vec<*const RefCell<ArrayValue>> = Vec::new();
    let mut current = value.clone();

    let num = loop {
        if current.is_numeric() {
            break current.numeric_payload();
        }

        if let Value::String(src) = &current {
            break string_to_index(src);
        }

        let Value::Array(array) = &current else {
            break f64::NAN;
        };

        let ptr = Rc::as_ptr(array);
        if visiting.contains(&ptr) {
            break f64::NAN;
        }
        visiting.push(ptr);

        let next = {
            let array = array.borrow();
            if !array.has_only_elements() {
                break f64::NAN;
            }
            if array.is_empty() {
                return Some(0);
            }
            if array.len() != 1 {
                break f64::NAN;
            }
            let Some(element) = array.valid_element(0) else {
                break f64::NAN;
            };
            element.clone()
        };
        current = next;
    };

    let index = num.to_u32().filter(|index| f64::from(*index) == num);
    if index.is_none() {
        tracing::trace!(value = num, "value is not an array index");
    }
    index
}
