use retonfa::{compile, CompileError, Regex};

#[test]
fn missing_operands() {
    for pattern in ["a|", "|a", "a||b", "|", "*", "*a", "a|*", ""] {
        match Regex::new(pattern) {
            Err(CompileError::Malformed { operands, operators }) => {
                assert_ne!(operands, operators + 1, "{:?}", pattern)
            }
            other => panic!("{:?} compiled to {:?}", pattern, other),
        }
    }
}

#[test]
fn unmatched_parentheses() {
    for pattern in ["(a", "a)", "(a|b", "((a)", "a)(b"] {
        assert_eq!(
            compile(pattern),
            Err(CompileError::UnmatchedParenthesis),
            "{:?}",
            pattern
        );
    }
}

#[test]
fn empty_groups() {
    for pattern in ["()", "a()", "(|)", "(*)"] {
        assert!(compile(pattern).is_err(), "{:?}", pattern);
    }
}

#[test]
fn error_is_std_error() {
    fn message(err: &dyn std::error::Error) -> String {
        err.to_string()
    }
    let err = compile("a|").unwrap_err();
    assert!(message(&err).starts_with("malformed expression"));
}
