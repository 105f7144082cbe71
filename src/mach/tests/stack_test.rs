use crate::lang::ErrorCode;
use crate::mach::OperandStack;

#[test]
fn test_push_pop_order() {
    let mut s = OperandStack::<4>::new();
    s.push(1).unwrap();
    s.push(2).unwrap();
    s.push(3).unwrap();
    assert_eq!(s.depth(), 3);
    assert_eq!(s.pop().unwrap(), 3);
    assert_eq!(s.top().unwrap(), 2);
    assert_eq!(s.pop().unwrap(), 2);
    assert_eq!(s.pop().unwrap(), 1);
    assert!(s.is_empty());
}

#[test]
fn test_underflow() {
    let mut s = OperandStack::<4>::new();
    assert!(s.pop().unwrap_err().is(ErrorCode::StackUnderflow));
    assert!(s.top().is_err());
    assert!(s.top_mut().is_err());
    s.push(9).unwrap();
    assert!(s.require(1).is_ok());
    assert!(s.require(2).unwrap_err().is(ErrorCode::StackUnderflow));
}

#[test]
fn test_overflow_keeps_contents() {
    let mut s = OperandStack::<3>::new();
    s.push(10).unwrap();
    s.push(20).unwrap();
    s.push(30).unwrap();
    assert!(s.is_full());
    assert!(s.push(40).unwrap_err().is(ErrorCode::StackOverflow));
    assert_eq!(s.iter().collect::<Vec<_>>(), vec![10, 20, 30]);
}

#[test]
fn test_peek() {
    let mut s = OperandStack::<8>::new();
    for v in 1..=4 {
        s.push(v).unwrap();
    }
    assert_eq!(s.peek(0).unwrap(), 4);
    assert_eq!(s.peek(1).unwrap(), 3);
    assert_eq!(s.peek(3).unwrap(), 1);
    assert!(s.peek(4).is_err());
}

#[test]
fn test_default_capacity() {
    let mut s: OperandStack = OperandStack::new();
    assert_eq!(s.capacity(), 32);
    for v in 0..32 {
        s.push(v).unwrap();
    }
    assert!(s.push(32).is_err());
    s.clear();
    assert!(s.is_empty());
    assert_eq!(s.iter().count(), 0);
}
