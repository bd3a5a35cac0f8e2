use num_traits::ToPrimitive;

use crate::constants::{self, MAX_SAFE_INTEGER};
use crate::dec_parse::string_to_number;
use crate::number_format::{number_to_string, number_to_string_radix};
use crate::radix::Radix;
use crate::radix_scan::radix_parse;
use crate::runtime_values::Value;
use crate::{Error, Result};

/// Static methods of the `Number` constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberMethod {
    IsFinite,
    IsInteger,
    IsNaN,
    IsSafeInteger,
    ParseFloat,
    ParseInt,
}

/// Methods of `Number.prototype`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberInstanceMethod {
    ToString,
    ValueOf,
}

/// Number-related functions of the global object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalFunction {
    IsFinite,
    IsNaN,
    ParseFloat,
    ParseInt,
}

pub fn number_constant(name: &str) -> Option<f64> {
    let value = match name {
        "EPSILON" => constants::EPSILON,
        "MAX_SAFE_INTEGER" => constants::MAX_SAFE_INTEGER,
        "MIN_SAFE_INTEGER" => constants::MIN_SAFE_INTEGER,
        "MAX_VALUE" => constants::MAX_VALUE,
        "MIN_VALUE" => constants::MIN_VALUE,
        "NaN" => f64::NAN,
        "POSITIVE_INFINITY" => f64::INFINITY,
        "NEGATIVE_INFINITY" => f64::NEG_INFINITY,
        _ => return None,
    };
    Some(value)
}

pub fn is_finite(value: &Value) -> bool {
    matches!(value, Value::Number(num) if num.is_finite())
}

pub fn is_integer(value: &Value) -> bool {
    matches!(value, Value::Number(num) if num.is_finite() && *num == num.trunc())
}

pub fn is_safe_integer(value: &Value) -> bool {
    let Value::Number(num) = value else {
        return false;
    };
    num.to_i64().is_some_and(|int| int as f64 == *num) && num.abs() <= MAX_SAFE_INTEGER
}

pub fn is_nan(value: &Value) -> bool {
    matches!(value, Value::Number(num) if num.is_nan())
}

/// `parseInt` over an already stringified input. Only ASCII spaces are
/// skipped. A radix of `None` or `Some(0)` means decimal with `0x`
/// detection; radix 16 also accepts the prefix; any other radix outside
/// `[2, 36]` gives NaN.
pub fn parse_int(src: &str, radix: Option<i64>) -> f64 {
    let bytes = src.as_bytes();
    let Some(start) = bytes.iter().position(|&b| b != b' ') else {
        return f64::NAN;
    };
    let mut p = &bytes[start..];

    let negative = match p.first() {
        Some(b'-') => {
            p = &p[1..];
            true
        }
        Some(b'+') => {
            p = &p[1..];
            false
        }
        _ => false,
    };

    let mut test_prefix = p.len() > 1;
    let mut radix = match radix.unwrap_or(0) {
        0 => Radix::DECIMAL,
        requested => {
            let Some(radix) = u32::try_from(requested).ok().and_then(Radix::new) else {
                return f64::NAN;
            };
            if radix != Radix::HEX {
                test_prefix = false;
            }
            radix
        }
    };

    if test_prefix && p[0] == b'0' && matches!(p[1], b'x' | b'X') {
        p = &p[2..];
        radix = Radix::HEX;
    }

    match radix_parse(p, radix) {
        Some(scanned) => {
            let num = scanned.value as f64;
            if negative { -num } else { num }
        }
        None => f64::NAN,
    }
}

pub fn parse_float(src: &str) -> f64 {
    string_to_number(src, true)
}

/// `Number(value)` and `new Number(value)`.
pub fn construct_number(args: &[Value], construct: bool) -> Value {
    let num = args.first().map_or(0.0, Value::to_number);
    if construct {
        Value::NumberObject(num)
    } else {
        Value::Number(num)
    }
}

fn parse_int_args(args: &[Value]) -> f64 {
    let Some(input) = args.first() else {
        return f64::NAN;
    };
    let radix = args.get(1).map(radix_arg);
    parse_int(&input.as_string(), radix)
}

fn parse_float_args(args: &[Value]) -> f64 {
    args.first()
        .map_or(f64::NAN, |input| parse_float(&input.as_string()))
}

/// Integer conversion of a `parseInt` radix argument. NaN becomes 0 and
/// out-of-range values saturate, which the range check then rejects.
fn radix_arg(value: &Value) -> i64 {
    let num = value.to_number();
    if num.is_nan() { 0 } else { num.trunc() as i64 }
}

pub fn eval_number_method(method: NumberMethod, args: &[Value]) -> Value {
    let undefined = Value::Undefined;
    let first = args.first().unwrap_or(&undefined);
    match method {
        NumberMethod::IsFinite => Value::Bool(is_finite(first)),
        NumberMethod::IsInteger => Value::Bool(is_integer(first)),
        NumberMethod::IsNaN => Value::Bool(is_nan(first)),
        NumberMethod::IsSafeInteger => Value::Bool(is_safe_integer(first)),
        NumberMethod::ParseFloat => Value::Number(parse_float_args(args)),
        NumberMethod::ParseInt => Value::Number(parse_int_args(args)),
    }
}

pub fn eval_global_function(function: GlobalFunction, args: &[Value]) -> Value {
    match function {
        GlobalFunction::IsFinite => {
            Value::Bool(args.first().is_some_and(|arg| arg.to_number().is_finite()))
        }
        GlobalFunction::IsNaN => {
            Value::Bool(args.first().is_none_or(|arg| arg.to_number().is_nan()))
        }
        GlobalFunction::ParseFloat => Value::Number(parse_float_args(args)),
        GlobalFunction::ParseInt => Value::Number(parse_int_args(args)),
    }
}

fn this_number_value(this: &Value) -> Result<f64> {
    this.unboxed_number().ok_or_else(|| {
        tracing::debug!(kind = this.type_name(), "number method called on a non-number");
        Error::TypeError(format!("unexpected value type:{}", this.type_name()))
    })
}

pub fn eval_number_instance_method(
    method: NumberInstanceMethod,
    this: &Value,
    args: &[Value],
) -> Result<Value> {
    let numeric = this_number_value(this)?;

    match method {
        NumberInstanceMethod::ValueOf => Ok(Value::Number(numeric)),
        NumberInstanceMethod::ToString => {
            let radix = match args.first() {
                None | Some(Value::Undefined) => Radix::DECIMAL,
                Some(arg) => {
                    let requested = arg.to_number();
                    Radix::from_number(requested).inspect_err(|_| {
                        tracing::debug!(radix = requested, "rejecting toString radix");
                    })?
                }
            };

            if radix != Radix::DECIMAL && numeric.is_finite() {
                Ok(Value::String(number_to_string_radix(numeric, radix)))
            } else {
                Ok(Value::String(number_to_string(numeric)))
            }
        }
    }
}
