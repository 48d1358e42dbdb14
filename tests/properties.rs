use std::{cell::Cell, rc::Rc};

use calx::{evaluate, parse, Environment, ErrorKind, Expression, Interpreter, Number, Rational};

fn eval(src: &str) -> Result<Number, ErrorKind> {
    Interpreter::new().eval(src)
}

#[test]
fn same_precedence_is_left_associative() {
    assert_eq!(eval("1-2-3"), Ok(Number::Int(-4)));
    assert_eq!(eval("2 ** 3 ** 2"), Ok(Number::Int(64)));
    assert_eq!(eval("100 ÷ 10 ÷ 5"), Ok(Number::Int(2)));
    assert_eq!(eval("8 | 1 & 3"), Ok(Number::Int(1)));
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(eval("(1+2)*3"), Ok(Number::Int(9)));
    assert_eq!(eval("1+2*3"), Ok(Number::Int(7)));
    assert_eq!(eval("( 1 + 2 ) * ( 3 - 1 )"), Ok(Number::Int(6)));
    assert_eq!(eval("1 + 16 >> 2"), Ok(Number::Int(5)));
}

#[test]
fn literal_notations() {
    assert_eq!(eval("0b101"), Ok(Number::Int(5)));
    assert_eq!(eval("0xFF"), Ok(Number::Int(255)));
    assert_eq!(eval("#FF"), Ok(Number::Int(255)));
    assert_eq!(eval("-0x10"), Ok(Number::Int(-16)));
    assert_eq!(eval("1.5 + 1"), Ok(Number::Float(2.5)));
}

#[test]
fn rational_literals_are_exact() {
    assert_eq!(eval("3/4"), Ok(Number::Rational(Rational::new(3, 4))));
    assert_eq!(eval("1/3 + 1/6"), Ok(Number::Rational(Rational::new(1, 2))));
    assert_eq!(eval("4/0"), Err(ErrorKind::DivisionByZero));
}

#[test]
fn unbound_names_fail_at_evaluation() {
    let expr = parse("x").unwrap();
    assert_eq!(
        evaluate(&expr, &Environment::standard()),
        Err(ErrorKind::UnboundReference("x".into()))
    );

    let expr = parse("a % b").unwrap();
    let mut env = Environment::new();
    env.define_number("a", 1i64);
    env.define_number("b", 2i64);
    assert_eq!(
        evaluate(&expr, &env),
        Err(ErrorKind::UnboundReference("%".into()))
    );

    assert_eq!(eval("nope(1)"), Err(ErrorKind::UnboundReference("nope".into())));
}

#[test]
fn call_forms_agree_for_one_argument() {
    assert_eq!(parse("f 4").unwrap(), parse("f(4)").unwrap());
    assert_eq!(eval("sqrt 16"), eval("sqrt(16)"));
    assert_eq!(eval("max(1, 5/2, 2)"), Ok(Number::Rational(Rational::new(5, 2))));
}

#[test]
fn zero_argument_call() {
    let expr = parse("f()").unwrap();
    assert_eq!(
        *expr,
        Expression::Call {
            id: "f",
            args: vec![]
        }
    );

    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let mut env = Environment::new();
    env.define_function("f", move |args: &[Number]| {
        counter.set(counter.get() + 1);
        Ok(Number::Int(args.len() as i64))
    });

    assert_eq!(evaluate(&expr, &env), Ok(Number::Int(0)));
    assert_eq!(calls.get(), 1);
}

#[test]
fn repeated_evaluation_is_stable() {
    let expr = parse("max(x, 2) * 3/4 - y").unwrap();
    let mut env = Environment::standard();
    env.define_number("x", 5i64);
    env.define_number("y", 0.25);

    let first = evaluate(&expr, &env);
    assert_eq!(first, Ok(Number::Float(3.5)));
    assert_eq!(evaluate(&expr, &env), first);
}

#[test]
fn same_tree_under_different_algebras() {
    let expr = parse("a + b * c").unwrap();

    let mut ints = Environment::standard();
    ints.define_number("a", 1i64);
    ints.define_number("b", 2i64);
    ints.define_number("c", 3i64);

    // Max-plus algebra: `+` is max, `*` is addition.
    let mut tropical = ints.clone();
    tropical.define_operator("+", |a: Number, b: Number| {
        Ok(Number::Float(a.to_f64().max(b.to_f64())))
    });
    tropical.define_operator("*", |a: Number, b: Number| {
        Ok(Number::Float(a.to_f64() + b.to_f64()))
    });

    assert_eq!(evaluate(&expr, &ints), Ok(Number::Int(7)));
    assert_eq!(evaluate(&expr, &tropical), Ok(Number::Float(5.0)));
}

#[test]
fn rounding_near_the_integer_limits() {
    assert_eq!(
        eval("floor(-9223372036854775807/2)"),
        Ok(Number::Int(-4611686018427387904))
    );
    assert_eq!(
        eval("ceil(9223372036854775807/2)"),
        Ok(Number::Int(4611686018427387904))
    );
}

#[test]
fn deep_nesting_is_an_error() {
    let src = format!("{}1{}", "(".repeat(1000), ")".repeat(1000));
    assert!(matches!(
        eval(&src),
        Err(ErrorKind::Parse { ref expected, .. }) if expected == "shallower nesting"
    ));

    let src = format!("{}1{}", "(".repeat(100), ")".repeat(100));
    assert_eq!(eval(&src), Ok(Number::Int(1)));
}

#[test]
fn minus_without_space_is_an_argument() {
    let mut env = Environment::standard();
    env.define_number("a", 5i64);

    let spaced = parse("2 * a - 1").unwrap();
    assert_eq!(evaluate(&spaced, &env), Ok(Number::Int(9)));

    let applied = parse("2 * a -1").unwrap();
    assert_eq!(
        evaluate(&applied, &env),
        Err(ErrorKind::BindingMismatch {
            name: "a".into(),
            expected: "a function",
            found: "a number",
        })
    );
}
