mod common;
use cmder::lang::Token;
use cmder::mach::{Runtime, STACK_CAPACITY};
use common::*;

#[cfg(all(feature = "rf69", feature = "romvars"))]
const WORDS: &str = " nl + - * / mod negate invert and or xor << >> ram+ dump words \
                     rf-init rf-txpower rom@ rom!\n";

#[cfg(all(feature = "rf69", feature = "romvars"))]
#[test]
fn test_words() {
    let mut r = Runtime::default();
    r.enter("1 2 words");
    assert_eq!(exec(&mut r), WORDS);
    r.enter("words");
    assert_eq!(exec(&mut r), WORDS);
    assert_eq!(stack(&r), vec![1, 2]);
}

#[test]
fn test_words_matches_table() {
    let mut r = Runtime::default();
    r.enter("words");
    let out = exec(&mut r);
    assert!(out.ends_with('\n'));
    let names: Vec<&str> = r.table().iter().map(|c| c.name()).collect();
    let listed: Vec<&str> = out.trim_end_matches('\n').split(' ').skip(1).collect();
    assert_eq!(listed, names);
}

#[test]
fn test_nl() {
    let (out, stack) = run("nl nl");
    assert_eq!(out, "\n\n");
    assert!(stack.is_empty());
}

#[test]
fn test_unknown_command() {
    let mut r = Runtime::default();
    assert!(r.lookup("nonexistent-command").is_none());
    r.enter("1 2 3");
    exec(&mut r);
    let err = r.invoke("nonexistent-command").unwrap_err();
    assert_eq!(err.to_string(), "UNKNOWN COMMAND nonexistent-command");
    assert_eq!(stack(&r), vec![1, 2, 3]);
}

#[test]
fn test_error_drops_rest_of_line() {
    let mut r = Runtime::default();
    r.enter("1 2 frob 3 4");
    assert_eq!(exec(&mut r), "?UNKNOWN COMMAND frob\n");
    assert_eq!(stack(&r), vec![1, 2]);
    r.enter("5");
    assert_eq!(exec(&mut r), "");
    assert_eq!(stack(&r), vec![1, 2, 5]);
}

#[test]
fn test_output_before_error() {
    let mut r = Runtime::default();
    r.enter("nl +");
    assert_eq!(exec(&mut r), "\n?STACK UNDERFLOW +\n");
}

#[test]
fn test_stack_overflow() {
    let mut r = Runtime::default();
    let line = (0..STACK_CAPACITY as i32 + 1)
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    r.enter(&line);
    assert_eq!(exec(&mut r), "?STACK OVERFLOW\n");
    assert_eq!(r.stack().depth(), STACK_CAPACITY);
    assert_eq!(r.stack().top().unwrap(), STACK_CAPACITY as i32 - 1);
}

#[test]
fn test_exec_tokens() {
    let mut r = Runtime::default();
    for token in &[
        Token::Literal(6),
        Token::Literal(7),
        Token::Word("*".to_string()),
    ] {
        r.exec(token).unwrap();
    }
    assert_eq!(r.pop().unwrap(), 42);
    assert!(r.pop().is_err());
}

#[test]
fn test_clear() {
    let mut r = Runtime::default();
    r.enter("1 2 3");
    exec(&mut r);
    r.enter("4 5");
    r.clear();
    assert_eq!(exec(&mut r), "");
    assert!(r.stack().is_empty());
}

#[test]
fn test_echo() {
    let mut r = Runtime::default();
    r.echo(b'A');
    r.echo(10);
    assert_eq!(exec(&mut r), "65\n10\n");
}
