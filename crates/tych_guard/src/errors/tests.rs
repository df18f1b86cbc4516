use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_type_mismatch_messages() {
    let param = TypeMismatch::Parameter {
        param: "x".into(),
        func: "f".into(),
        expected: "int".into(),
    };
    assert_eq!(
        param.to_string(),
        "parameter 'x' of function 'f' should have type int"
    );

    let none = TypeMismatch::ReturnNone { func: "f".into() };
    assert_eq!(none.to_string(), "function 'f' should return None");

    let ret = TypeMismatch::Return {
        func: "g".into(),
        expected: "OptionTy(int)".into(),
    };
    assert_eq!(
        ret.to_string(),
        "function 'g' should have return type OptionTy(int)"
    );
}

#[test]
fn test_binding_messages() {
    assert_eq!(
        BindingError::TooManyPositional.to_string(),
        "too many positional arguments"
    );
    assert_eq!(
        BindingError::MissingArgument { name: "x".into() }.to_string(),
        "missing a required argument: 'x'"
    );
    assert_eq!(
        BindingError::UnexpectedKeyword { name: "z".into() }.to_string(),
        "got an unexpected keyword argument 'z'"
    );
    assert_eq!(
        BindingError::PositionalOnlyAsKeyword { name: "a".into() }.to_string(),
        "'a' parameter is positional only, but was passed as a keyword"
    );
}

#[test]
fn test_guard_error_is_transparent() {
    let err = GuardError::from(TypeMismatch::ReturnNone { func: "f".into() });
    assert_eq!(err.to_string(), "function 'f' should return None");

    let err = GuardError::from(BindingError::MultipleValues { name: "x".into() });
    assert_eq!(err.to_string(), "multiple values for argument 'x'");

    let err = GuardError::raised("disk on fire");
    assert_eq!(err.to_string(), "disk on fire");
}

#[test]
fn test_guard_error_phases() {
    assert_eq!(
        GuardError::from(BindingError::TooManyPositional).phase(),
        CallPhase::Binding
    );
    assert_eq!(
        GuardError::from(TypeMismatch::Parameter {
            param: "x".into(),
            func: "f".into(),
            expected: "int".into(),
        })
        .phase(),
        CallPhase::ParamChecking
    );
    assert_eq!(
        GuardError::from(TypeMismatch::ReturnNone { func: "f".into() }).phase(),
        CallPhase::ReturnChecking
    );
    assert_eq!(GuardError::raised("boom").phase(), CallPhase::Invoking);
}

#[test]
fn test_signature_error_messages() {
    let err = SignatureError::WrongOrder {
        name: "x".into(),
        kind: ParamKind::PositionalOrKeyword,
        after: ParamKind::KeywordOnly,
    };
    assert_eq!(
        err.to_string(),
        "wrong parameter order: positional or keyword parameter 'x' follows a keyword-only parameter"
    );
}
