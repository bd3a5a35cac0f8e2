use super::*;

fn num(value: Value) -> f64 {
    match value {
        Value::Number(value) => value,
        other => panic!("expected number, got {other:?}"),
    }
}

#[test]
fn parse_int_detects_hex_prefix() {
    assert_eq!(parse_int("0x1F", Some(0)), 31.0);
    assert_eq!(parse_int("0x1F", None), 31.0);
    assert_eq!(parse_int("0X1f", Some(16)), 31.0);
    assert_eq!(parse_int("1F", Some(16)), 31.0);
    assert_eq!(parse_int("-0x10", None), -16.0);
    assert_eq!(parse_int("0x1F", Some(10)), 0.0);
    assert_eq!(parse_int("0x1F", Some(36)), 33.0 * 36.0 * 36.0 + 36.0 + 15.0);
    assert!(parse_int("0x", Some(16)).is_nan());
    assert!(parse_int("0x", None).is_nan());
    assert!(parse_int("0xg", None).is_nan());
}

#[test]
fn parse_int_skips_only_ascii_spaces() {
    assert_eq!(parse_int("  -42abc", None), -42.0);
    assert_eq!(parse_int("  +7", None), 7.0);
    assert!(parse_int("\t5", None).is_nan());
    assert!(parse_int("\n5", None).is_nan());
    assert!(parse_int("", None).is_nan());
    assert!(parse_int("   ", Some(10)).is_nan());
    assert!(parse_int("-", None).is_nan());
}

#[test]
fn parse_int_validates_radix() {
    assert_eq!(parse_int("10", Some(2)), 2.0);
    assert_eq!(parse_int("12", Some(2)), 1.0);
    assert_eq!(parse_int("z", Some(36)), 35.0);
    assert!(parse_int("10", Some(1)).is_nan());
    assert!(parse_int("10", Some(37)).is_nan());
    assert!(parse_int("10", Some(-16)).is_nan());
    assert!(parse_int("2", Some(2)).is_nan());
}

#[test]
fn parse_int_keeps_negative_zero() {
    let value = parse_int("-0", None);
    assert_eq!(value, 0.0);
    assert!(value.is_sign_negative());
}

#[test]
fn safe_integer_boundaries() {
    assert!(is_safe_integer(&Value::Number(MAX_SAFE_INTEGER)));
    assert!(is_safe_integer(&Value::Number(MIN_SAFE_INTEGER)));
    assert!(is_safe_integer(&Value::Number(-0.0)));
    assert!(!is_safe_integer(&Value::Number(MAX_SAFE_INTEGER + 1.0)));
    assert!(!is_safe_integer(&Value::Number(1.5)));
    assert!(!is_safe_integer(&Value::Number(1e300)));
    assert!(!is_safe_integer(&Value::Number(f64::NAN)));
    assert!(!is_safe_integer(&Value::Number(f64::INFINITY)));
    assert!(!is_safe_integer(&Value::string("1")));
}

#[test]
fn static_predicates_require_number_arguments() {
    assert_eq!(
        eval_number_method(NumberMethod::IsInteger, &[Value::Number(5.0)]),
        Value::Bool(true)
    );
    assert_eq!(
        eval_number_method(NumberMethod::IsInteger, &[Value::Number(5.5)]),
        Value::Bool(false)
    );
    assert_eq!(
        eval_number_method(NumberMethod::IsInteger, &[Value::Number(f64::INFINITY)]),
        Value::Bool(false)
    );
    assert_eq!(
        eval_number_method(NumberMethod::IsNaN, &[Value::Number(f64::NAN)]),
        Value::Bool(true)
    );
    assert_eq!(
        eval_number_method(NumberMethod::IsNaN, &[Value::string("abc")]),
        Value::Bool(false)
    );
    assert_eq!(
        eval_number_method(NumberMethod::IsFinite, &[Value::string("1")]),
        Value::Bool(false)
    );
    assert_eq!(
        eval_number_method(NumberMethod::IsFinite, &[Value::Number(1.0)]),
        Value::Bool(true)
    );
    assert_eq!(eval_number_method(NumberMethod::IsSafeInteger, &[]), Value::Bool(false));
}

#[test]
fn static_parse_methods_stringify_arguments() {
    assert_eq!(
        num(eval_number_method(
            NumberMethod::ParseInt,
            &[Value::string("ff"), Value::Number(16.0)]
        )),
        255.0
    );
    assert_eq!(
        num(eval_number_method(
            NumberMethod::ParseInt,
            &[Value::Number(1e21)]
        )),
        1.0
    );
    assert_eq!(
        num(eval_number_method(
            NumberMethod::ParseInt,
            &[Value::string("11"), Value::Undefined]
        )),
        11.0
    );
    assert!(num(eval_number_method(NumberMethod::ParseInt, &[])).is_nan());
    assert_eq!(
        num(eval_number_method(
            NumberMethod::ParseFloat,
            &[Value::string("3.25rem")]
        )),
        3.25
    );
    assert!(num(eval_number_method(NumberMethod::ParseFloat, &[])).is_nan());
}

#[test]
fn global_functions_coerce_their_argument() {
    assert_eq!(eval_global_function(GlobalFunction::IsNaN, &[]), Value::Bool(true));
    assert_eq!(
        eval_global_function(GlobalFunction::IsNaN, &[Value::string("abc")]),
        Value::Bool(true)
    );
    assert_eq!(
        eval_global_function(GlobalFunction::IsNaN, &[Value::string("12")]),
        Value::Bool(false)
    );
    assert_eq!(eval_global_function(GlobalFunction::IsFinite, &[]), Value::Bool(false));
    assert_eq!(
        eval_global_function(GlobalFunction::IsFinite, &[Value::Null]),
        Value::Bool(true)
    );
    assert_eq!(
        num(eval_global_function(
            GlobalFunction::ParseInt,
            &[Value::string("  0x1F")]
        )),
        31.0
    );
    assert_eq!(
        num(eval_global_function(
            GlobalFunction::ParseFloat,
            &[Value::string(".5")]
        )),
        0.5
    );
}

#[test]
fn constructor_converts_and_boxes() {
    assert_eq!(construct_number(&[], false), Value::Number(0.0));
    assert_eq!(construct_number(&[], true), Value::NumberObject(0.0));
    assert_eq!(
        construct_number(&[Value::string(" 42 ")], false),
        Value::Number(42.0)
    );
    assert_eq!(
        construct_number(&[Value::Bool(true)], true),
        Value::NumberObject(1.0)
    );
    assert_eq!(
        construct_number(&[Value::array(vec![Value::Number(7.0)])], false),
        Value::Number(7.0)
    );
    assert_eq!(construct_number(&[Value::array(vec![])], false), Value::Number(0.0));
    assert!(num(construct_number(&[Value::Undefined], false)).is_nan());
    assert!(num(construct_number(
        &[Value::array(vec![Value::Number(1.0), Value::Number(2.0)])],
        false
    ))
    .is_nan());
}

#[test]
fn value_of_unboxes_numbers() -> Result<()> {
    assert_eq!(
        eval_number_instance_method(NumberInstanceMethod::ValueOf, &Value::NumberObject(2.5), &[])?,
        Value::Number(2.5)
    );
    assert_eq!(
        eval_number_instance_method(NumberInstanceMethod::ValueOf, &Value::Number(-1.0), &[])?,
        Value::Number(-1.0)
    );
    match eval_number_instance_method(NumberInstanceMethod::ValueOf, &Value::Null, &[]) {
        Err(Error::TypeError(message)) => assert_eq!(message, "unexpected value type:null"),
        other => panic!("expected type error, got: {other:?}"),
    }
    Ok(())
}

#[test]
fn constructor_constants() {
    assert_eq!(number_constant("MAX_SAFE_INTEGER"), Some(9_007_199_254_740_991.0));
    assert_eq!(number_constant("MIN_SAFE_INTEGER"), Some(-9_007_199_254_740_991.0));
    assert_eq!(number_constant("EPSILON"), Some(f64::EPSILON));
    assert_eq!(number_constant("MAX_VALUE"), Some(f64::MAX));
    assert_eq!(number_constant("MIN_VALUE"), Some(f64::from_bits(1)));
    assert_eq!(number_constant("POSITIVE_INFINITY"), Some(f64::INFINITY));
    assert_eq!(number_constant("NEGATIVE_INFINITY"), Some(f64::NEG_INFINITY));
    assert!(number_constant("NaN").is_some_and(f64::is_nan));
    assert_eq!(number_constant("length"), None);
}

#[test]
fn error_display_names_the_error_kind() {
    assert_eq!(
        Error::RangeError("bad radix".into()).to_string(),
        "RangeError: bad radix"
    );
    assert_eq!(
        Error::TypeError("unexpected value type:null".into()).to_string(),
        "TypeError: unexpected value type:null"
    );
}
