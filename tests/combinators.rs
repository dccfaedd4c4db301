use optional::{apply, apply_ref, bind, bind_ref, Optional};

fn add_one(x: i32) -> i32 {
    x + 1
}

fn add_one_ref(x: &i32) -> i32 {
    *x + 1
}

fn add_one_optional(x: i32) -> Optional<i32> {
    Optional::of(x + 1)
}

fn add_one_optional_ref(x: &i32) -> Optional<i32> {
    Optional::of(*x + 1)
}

fn always_empty(_: i32) -> Optional<i32> {
    Optional::empty()
}

fn always_empty_ref(_: &i32) -> Optional<i32> {
    Optional::empty()
}

#[test]
fn apply_present() {
    let y = apply(add_one, Optional::of(1));
    assert!(y.is_present());
    assert_eq!(y.get_or_panic(), 2);
}

#[test]
fn apply_missing() {
    let y = apply(add_one, Optional::empty());
    assert!(!y.is_present());
}

#[test]
fn apply_changes_type() {
    let y = apply(|x: i32| x.to_string(), Optional::of(7));
    assert_eq!(y.get_or_panic(), "7");
}

#[test]
fn apply_ref_present() {
    let x = Optional::of(1);
    let y = apply_ref(add_one_ref, &x);
    assert!(y.is_present());
    assert_eq!(y.get_or_panic(), 2);
    assert_eq!(x.get_or_panic(), 1);
}

#[test]
fn apply_ref_missing() {
    let x = Optional::empty();
    let y = apply_ref(add_one_ref, &x);
    assert!(!y.is_present());
}

#[test]
fn apply_ref_borrows_without_moving() {
    let x = Optional::of(vec![1, 2, 3]);
    let len = apply_ref(Vec::len, &x);
    assert_eq!(len.get_or_panic(), 3);
    assert_eq!(x.get_or_panic(), [1, 2, 3]);
}

#[test]
fn apply_ref_sees_the_stored_value() {
    let x = Optional::of(String::from("a"));
    let same = apply_ref(|v| std::ptr::eq(v, x.as_ref().unwrap()), &x);
    assert!(same.get_or_panic());
}

#[test]
fn bind_present() {
    let y = bind(add_one_optional, Optional::of(1));
    assert!(y.is_present());
    assert_eq!(y.get_or_panic(), 2);
}

#[test]
fn bind_function_returns_missing() {
    let y = bind(always_empty, Optional::of(1));
    assert!(!y.is_present());
}

#[test]
fn bind_missing() {
    let y = bind(add_one_optional, Optional::empty());
    assert!(!y.is_present());
}

#[test]
fn bind_ref_present() {
    let x = Optional::of(1);
    let y = bind_ref(add_one_optional_ref, &x);
    assert!(y.is_present());
    assert_eq!(y.get_or_panic(), 2);
}

#[test]
fn bind_ref_function_returns_missing() {
    let x = Optional::of(1);
    let y = bind_ref(always_empty_ref, &x);
    assert!(!y.is_present());
}

#[test]
fn bind_ref_sees_the_stored_value() {
    let x = Optional::of(String::from("a"));
    let same = bind_ref(|v| Optional::of(std::ptr::eq(v, x.as_ref().unwrap())), &x);
    assert!(same.get_or_panic());
}

#[test]
fn bind_ref_missing() {
    let x = Optional::empty();
    let y = bind_ref(add_one_optional_ref, &x);
    assert!(!y.is_present());
}

#[test]
fn callbacks_are_skipped_for_missing_values() {
    let x = Optional::<i32>::empty();
    let never = |_: &i32| -> i32 { panic!("callback invoked for missing value") };

    assert!(!apply(|v: i32| never(&v), x).is_present());
    assert!(!apply_ref(never, &x).is_present());
    assert!(!bind(|v: i32| Optional::of(never(&v)), x).is_present());
    assert!(!bind_ref(|v: &i32| Optional::of(never(v)), &x).is_present());
}
