//! End-to-end behavior of typechecked functions.
//!
//! Each test declares a small function the way a user would, wraps it with
//! `typecheck`, and checks both the happy path and the exact error text.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use tych_guard::{
    typecheck, union_ty, Args, BindingError, CallPhase, Callable, Class, Function, GuardError,
    Object, OptionTy, Param, Typechecked, Value,
};

fn message(result: Result<Value, GuardError>) -> String {
    result.expect_err("call should fail").to_string()
}

/// `f(x: int) -> None`
fn f() -> Typechecked<Function> {
    let f = Function::builder("f")
        .annotated(Param::positional("x"), Class::int())
        .body(|_| Ok(Value::None))
        .expect("valid signature");
    typecheck(f).expect("valid annotations")
}

/// `g(x: OptionTy(int)) -> int`, returning `x or 0`
fn g() -> Typechecked<Function> {
    let g = Function::builder("g")
        .annotated(Param::positional("x"), OptionTy::new(Class::int()))
        .returns(Class::int())
        .body(|args| {
            let x = args.value("x");
            Ok(if x.is_truthy() { x } else { Value::int(0) })
        })
        .expect("valid signature");
    typecheck(g).expect("valid annotations")
}

#[test]
fn int_parameter_accepts_int() {
    assert_eq!(f().call(&Args::new().arg(5)).unwrap(), Value::None);
    assert_eq!(f().call(&Args::new().kwarg("x", 5)).unwrap(), Value::None);
}

#[test]
fn int_parameter_rejects_str() {
    assert_eq!(
        message(f().call(&Args::new().arg("a"))),
        "parameter 'x' of function 'f' should have type int"
    );
}

#[test]
fn optional_parameter_accepts_none() {
    assert_eq!(g().call(&Args::new().arg(Value::None)).unwrap(), Value::int(0));
    assert_eq!(g().call(&Args::new().arg(7)).unwrap(), Value::int(7));
}

#[test]
fn optional_parameter_rejects_other_types() {
    assert_eq!(
        message(g().call(&Args::new().arg(2.5))),
        "parameter 'x' of function 'g' should have type OptionTy(int)"
    );
}

#[test]
fn wrong_return_type_is_reported() {
    let g = Function::builder("g")
        .annotated(Param::positional("x"), OptionTy::new(Class::int()))
        .returns(Class::int())
        .body(|_| Ok(Value::None))
        .unwrap();
    let g = typecheck(g).unwrap();
    assert_eq!(
        message(g.call(&Args::new().arg(Value::None))),
        "function 'g' should have return type int"
    );
}

#[test]
fn undeclared_return_must_be_none() {
    let h = Function::builder("h")
        .body(|_| Ok(Value::string("surprise")))
        .unwrap();
    let h = typecheck(h).unwrap();
    let err = h.call(&Args::new()).unwrap_err();
    assert_eq!(err.phase(), CallPhase::ReturnChecking);
    assert_eq!(err.to_string(), "function 'h' should return None");
}

#[test]
fn unannotated_function_behaves_like_original() {
    let echo_none = Function::builder("noop")
        .param(Param::positional("a"))
        .param(Param::positional("b").with_default(1))
        .body(|_| Ok(Value::None))
        .unwrap();
    let original = echo_none.clone();
    let wrapped = typecheck(echo_none).unwrap();

    for args in [
        Args::new().arg("x"),
        Args::new().arg(Value::list(vec![])).arg(2.5),
        Args::new().kwarg("b", Value::None).kwarg("a", 1),
    ] {
        assert_eq!(wrapped.call(&args).ok(), original.call(&args).ok());
    }

    let too_many = Args::new().arg(1).arg(2).arg(3);
    assert_eq!(
        wrapped.call(&too_many).unwrap_err().as_binding(),
        Some(&BindingError::TooManyPositional)
    );
    assert!(original.call(&too_many).is_err());
}

#[test]
fn union_parameter() {
    let show = Function::builder("show")
        .annotated(Param::positional("v"), union_ty!(Class::int(), Class::str()))
        .returns(Class::str())
        .body(|args| Ok(Value::string(args.value("v").to_string())))
        .unwrap();
    let show = typecheck(show).unwrap();

    assert_eq!(show.call(&Args::new().arg(5)).unwrap(), Value::string("5"));
    assert_eq!(
        show.call(&Args::new().arg("a")).unwrap(),
        Value::string("\"a\"")
    );
    assert_eq!(
        message(show.call(&Args::new().arg(2.5))),
        "parameter 'v' of function 'show' should have type UnionTy([int, str])"
    );
}

#[test]
fn nested_descriptor_in_message() {
    let pick = Function::builder("pick")
        .annotated(
            Param::positional("v"),
            union_ty!(OptionTy::new(Class::int()), Class::str()),
        )
        .body(|_| Ok(Value::None))
        .unwrap();
    let pick = typecheck(pick).unwrap();

    assert!(pick.call(&Args::new().arg(Value::None)).is_ok());
    assert_eq!(
        message(pick.call(&Args::new().arg(Value::list(vec![])))),
        "parameter 'v' of function 'pick' should have type UnionTy([OptionTy(int), str])"
    );
}

#[test]
fn user_classes_and_subclasses() {
    let shape = Class::new("Shape");
    let circle = Class::subclass("Circle", &shape);

    let area = Function::builder("area")
        .annotated(Param::positional("s"), shape.clone())
        .returns(Class::float())
        .body(|_| Ok(Value::float(1.0)))
        .unwrap();
    let area = typecheck(area).unwrap();

    let c = Value::object(Object::new(circle));
    assert_eq!(area.call(&Args::new().arg(c)).unwrap(), Value::float(1.0));

    let other = Value::object(Object::new(Class::new("Shape")));
    assert_eq!(
        message(area.call(&Args::new().arg(other))),
        "parameter 's' of function 'area' should have type Shape"
    );
}

#[test]
fn binding_errors_propagate_before_checks() {
    let err = f().call(&Args::new().arg("a").kwarg("x", 1)).unwrap_err();
    assert_eq!(err.phase(), CallPhase::Binding);
    assert_eq!(err.to_string(), "multiple values for argument 'x'");

    let err = f().call(&Args::new().arg(1).kwarg("y", 2)).unwrap_err();
    assert_eq!(err.to_string(), "got an unexpected keyword argument 'y'");
}

#[test]
fn first_failing_parameter_is_reported() {
    let add = Function::builder("add")
        .annotated(Param::positional("a"), Class::int())
        .annotated(Param::positional("b"), Class::int())
        .returns(Class::int())
        .body(|args| {
            let a = args.value("a").as_int().unwrap_or_default();
            let b = args.value("b").as_int().unwrap_or_default();
            Ok(Value::int(a + b))
        })
        .unwrap();
    let add = typecheck(add).unwrap();

    assert_eq!(add.call(&Args::new().arg(2).arg(3)).unwrap(), Value::int(5));
    assert_eq!(
        message(add.call(&Args::new().arg("x").arg("y"))),
        "parameter 'a' of function 'add' should have type int"
    );
    assert_eq!(
        message(add.call(&Args::new().arg(1).arg("y"))),
        "parameter 'b' of function 'add' should have type int"
    );
}

#[test]
fn bool_satisfies_int() {
    assert!(f().call(&Args::new().arg(true)).is_ok());
}
