use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_value_classes() {
    assert_eq!(Value::None.class(), Class::none_type());
    assert_eq!(Value::Bool(true).class(), Class::bool());
    assert_eq!(Value::int(1).class(), Class::int());
    assert_eq!(Value::float(1.5).class(), Class::float());
    assert_eq!(Value::string("a").class(), Class::str());
    assert_eq!(Value::bytes(*b"a").class(), Class::bytes());
    assert_eq!(Value::list(vec![]).class(), Class::list());
    assert_eq!(Value::tuple(vec![]).class(), Class::tuple());
    assert_eq!(Value::dict(Vec::<(String, Value)>::new()).class(), Class::dict());
}

#[test]
fn test_is_instance_builtins() {
    assert!(Value::int(5).is_instance(&Class::int()));
    assert!(!Value::string("a").is_instance(&Class::int()));
    assert!(!Value::float(2.5).is_instance(&Class::int()));
    assert!(!Value::int(3).is_instance(&Class::float()));
    assert!(Value::None.is_instance(&Class::none_type()));
    assert!(!Value::None.is_instance(&Class::int()));
}

#[test]
fn test_bool_is_an_int() {
    assert!(Value::Bool(false).is_instance(&Class::int()));
    assert!(Value::Bool(false).is_instance(&Class::bool()));
    assert!(!Value::int(0).is_instance(&Class::bool()));
}

#[test]
fn test_everything_is_an_object() {
    let point = Class::new("Point");
    let values = [
        Value::None,
        Value::int(1),
        Value::string("s"),
        Value::list(vec![Value::None]),
        Value::object(Object::new(point)),
    ];
    for v in &values {
        assert!(v.is_instance(&Class::object()), "{v:?}");
    }
}

#[test]
fn test_object_instances() {
    let animal = Class::new("Animal");
    let dog = Class::subclass("Dog", &animal);
    let rex = Value::object(Object::new(dog.clone()).with_field("name", Value::string("rex")));

    assert!(rex.is_instance(&dog));
    assert!(rex.is_instance(&animal));
    assert!(!rex.is_instance(&Class::new("Dog")));
    assert!(!Value::int(1).is_instance(&dog));
    assert_eq!(rex.type_name(), "Dog");
    assert_eq!(
        rex.as_object().and_then(|o| o.field("name")),
        Some(&Value::string("rex"))
    );
}

#[test]
fn test_object_equality_is_identity() {
    let point = Class::new("Point");
    let a = Value::object(Object::new(point.clone()));
    let b = Value::object(Object::new(point));
    assert_eq!(a, a.clone());
    assert_ne!(a, b);
}

#[test]
fn test_value_display() {
    assert_eq!(Value::None.to_string(), "None");
    assert_eq!(Value::Bool(true).to_string(), "True");
    assert_eq!(Value::int(42).to_string(), "42");
    assert_eq!(Value::float(1.0).to_string(), "1.0");
    assert_eq!(Value::float(2.5).to_string(), "2.5");
    assert_eq!(Value::string("hi").to_string(), "\"hi\"");
    assert_eq!(Value::bytes(*b"ab").to_string(), "b\"ab\"");
    assert_eq!(
        Value::list(vec![Value::int(1), Value::None]).to_string(),
        "[1, None]"
    );
    assert_eq!(Value::tuple(vec![Value::int(1)]).to_string(), "(1,)");
    assert_eq!(
        Value::dict([("k".to_string(), Value::int(1))]).to_string(),
        "{\"k\": 1}"
    );
    assert_eq!(
        Value::object(Object::new(Class::new("Point"))).to_string(),
        "<Point object>"
    );
}

#[test]
fn test_dict_keeps_insertion_order_and_last_write() {
    let d = Value::dict([
        ("b".to_string(), Value::int(1)),
        ("a".to_string(), Value::int(2)),
        ("b".to_string(), Value::int(3)),
    ]);
    let entries = d.as_dict().unwrap_or_default();
    assert_eq!(
        entries,
        &[
            ("b".to_string(), Value::int(3)),
            ("a".to_string(), Value::int(2))
        ][..]
    );
}

#[test]
fn test_dict_equality_ignores_order() {
    let a = Value::dict([
        ("x".to_string(), Value::int(1)),
        ("y".to_string(), Value::int(2)),
    ]);
    let b = Value::dict([
        ("y".to_string(), Value::int(2)),
        ("x".to_string(), Value::int(1)),
    ]);
    assert_eq!(a, b);
}

#[test]
fn test_conversions() {
    assert_eq!(Value::from(Some(3_i64)), Value::int(3));
    assert_eq!(Value::from(None::<i64>), Value::None);
    assert_eq!(Value::from("x"), Value::string("x"));
    assert_eq!(Value::Bool(true).as_int(), Some(1));
    assert!(!Value::None.is_truthy());
    assert!(!Value::int(0).is_truthy());
    assert!(Value::string("x").is_truthy());
}
