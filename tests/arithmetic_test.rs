mod common;
use common::*;

#[test]
fn test_commutative() {
    for &(a, b) in &[(3, 4), (-5, 12), (0, 7), (i32::MAX, 1), (-1, -1)] {
        let line = |op: &str| format!("{} {} {}", a, b, op);
        assert_eq!(run(&line("+")), (String::new(), vec![a.wrapping_add(b)]));
        assert_eq!(run(&line("*")), (String::new(), vec![a.wrapping_mul(b)]));
        assert_eq!(run(&line("and")), (String::new(), vec![a & b]));
        assert_eq!(run(&line("or")), (String::new(), vec![a | b]));
        assert_eq!(run(&line("xor")), (String::new(), vec![a ^ b]));
    }
}

#[test]
fn test_subtract_binding() {
    assert_eq!(run("10 3 -"), (String::new(), vec![-7]));
    assert_eq!(run("3 10 -"), (String::new(), vec![7]));
    for &(a, b) in &[(1, 2), (-8, 5), (100, -100)] {
        let (_, stack) = run(&format!("{} {} -", a, b));
        assert_eq!(stack, vec![b - a]);
    }
}

#[test]
fn test_divide_binding() {
    assert_eq!(run("6 3 /"), (String::new(), vec![0]));
    assert_eq!(run("3 6 /"), (String::new(), vec![2]));
    assert_eq!(run("3 -7 /"), (String::new(), vec![-2]));
}

#[test]
fn test_mod_binding() {
    assert_eq!(run("7 3 mod"), (String::new(), vec![3]));
    assert_eq!(run("3 7 mod"), (String::new(), vec![1]));
    assert_eq!(run("3 -7 mod"), (String::new(), vec![-1]));
}

#[test]
fn test_shift_binding() {
    assert_eq!(run("1 4 <<"), (String::new(), vec![8]));
    assert_eq!(run("4 1 <<"), (String::new(), vec![16]));
    assert_eq!(run("4 256 >>"), (String::new(), vec![16]));
    assert_eq!(run("28 -1 >>"), (String::new(), vec![15]));
    assert_eq!(run("0 -8 >>"), (String::new(), vec![-8]));
}

#[test]
fn test_unary() {
    assert_eq!(run("5 negate"), (String::new(), vec![-5]));
    assert_eq!(run("1 2 negate"), (String::new(), vec![1, -2]));
    assert_eq!(run("0 invert"), (String::new(), vec![-1]));
    assert_eq!(run("0x0f invert"), (String::new(), vec![!0x0f]));
}

#[test]
fn test_ram_plus() {
    assert_eq!(run("0 ram+"), (String::new(), vec![0x1000_0000]));
    assert_eq!(run("0x20 ram+"), (String::new(), vec![0x1000_0020]));
}

#[test]
fn test_chained() {
    assert_eq!(run("2 3 4 * +"), (String::new(), vec![14]));
    assert_eq!(run("1 2 3 4 5 + + + +"), (String::new(), vec![15]));
}

#[test]
fn test_division_by_zero() {
    assert_eq!(
        run("0 5 /"),
        ("?DIVISION BY ZERO /\n".to_string(), vec![0, 5])
    );
    assert_eq!(
        run("0 5 mod"),
        ("?DIVISION BY ZERO mod\n".to_string(), vec![0, 5])
    );
    assert_eq!(
        run("-1 -2147483648 /"),
        ("?OVERFLOW /\n".to_string(), vec![-1, i32::MIN])
    );
}

#[test]
fn test_underflow() {
    assert_eq!(run("+"), ("?STACK UNDERFLOW +\n".to_string(), vec![]));
    assert_eq!(run("7 -"), ("?STACK UNDERFLOW -\n".to_string(), vec![7]));
    assert_eq!(run("negate"), ("?STACK UNDERFLOW negate\n".to_string(), vec![]));
}
