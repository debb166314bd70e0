//! Compose covers every kind pairing plus the ordering, immutability and
//! optimization behaviors callers rely on.

use rich_delta::{attrs, Delta, Op};

#[test]
fn insert_and_insert() {
    let a = Delta::from(vec![Op::insert("A", attrs! {})]);
    let b = Delta::from(vec![Op::insert("B", attrs! {})]);
    let expected = Delta::from(vec![Op::insert("BA", attrs! {})]);
    assert_eq!(expected, a.compose(&b));
}

#[test]
fn insert_and_retain() {
    let a = Delta::from(vec![Op::insert("A", attrs! {})]);
    let b = Delta::from(vec![Op::retain(
        1,
        attrs! { "bold" => "true", "color" => "red" },
    )]);
    let expected = Delta::from(vec![Op::insert(
        "A",
        attrs! { "bold" => "true", "color" => "red" },
    )]);
    assert_eq!(expected, a.compose(&b));
}

#[test]
fn insert_and_delete_cancel() {
    let a = Delta::from(vec![Op::insert("A", attrs! {})]);
    let b = Delta::from(vec![Op::delete(1)]);
    assert_eq!(Delta::new(), a.compose(&b));
}

#[test]
fn delete_and_insert() {
    let a = Delta::from(vec![Op::delete(1)]);
    let b = Delta::from(vec![Op::insert("B", attrs! {})]);
    let expected = Delta::from(vec![Op::insert("B", attrs! {}), Op::delete(1)]);
    assert_eq!(expected, a.compose(&b));
}

#[test]
fn delete_and_retain() {
    let a = Delta::from(vec![Op::delete(1)]);
    let b = Delta::from(vec![Op::retain(
        1,
        attrs! { "bold" => "true", "color" => "red" },
    )]);
    let expected = Delta::from(vec![
        Op::delete(1),
        Op::retain(1, attrs! { "bold" => "true", "color" => "red" }),
    ]);
    assert_eq!(expected, a.compose(&b));
}

#[test]
fn delete_and_delete() {
    let a = Delta::from(vec![Op::delete(1)]);
    let b = Delta::from(vec![Op::delete(1)]);
    assert_eq!(Delta::from(vec![Op::delete(2)]), a.compose(&b));
}

#[test]
fn retain_and_insert() {
    let a = Delta::from(vec![Op::retain(1, attrs! { "color" => "blue" })]);
    let b = Delta::from(vec![Op::insert("B", attrs! {})]);
    let expected = Delta::from(vec![
        Op::insert("B", attrs! {}),
        Op::retain(1, attrs! { "color" => "blue" }),
    ]);
    assert_eq!(expected, a.compose(&b));
}

#[test]
fn retain_and_retain() {
    let a = Delta::from(vec![Op::retain(1, attrs! { "color" => "blue" })]);
    let b = Delta::from(vec![Op::retain(
        1,
        attrs! { "bold" => "true", "color" => "red", "font" => "null" },
    )]);
    let expected = Delta::from(vec![Op::retain(
        1,
        attrs! { "bold" => "true", "color" => "red", "font" => "null" },
    )]);
    assert_eq!(expected, a.compose(&b));
}

#[test]
fn retain_and_delete() {
    let a = Delta::from(vec![Op::retain(1, attrs! { "color" => "blue" })]);
    let b = Delta::from(vec![Op::delete(1)]);
    assert_eq!(Delta::from(vec![Op::delete(1)]), a.compose(&b));
}

#[test]
fn insert_in_the_middle_of_text() {
    let a = Delta::from(vec![Op::insert("Hello", attrs! {})]);
    let mut b = Delta::new();
    b.retain(3).insert("X");
    let expected = Delta::from(vec![Op::insert("HelXlo", attrs! {})]);
    assert_eq!(expected, a.compose(&b));
}

#[test]
fn insert_and_delete_ordering_independence() {
    let a = Delta::from(vec![Op::insert("Hello", attrs! {})]);
    let b = Delta::from(vec![Op::insert("Hello", attrs! {})]);

    let mut insert_first = Delta::new();
    insert_first.retain(3).insert("X").delete(1);
    let mut delete_first = Delta::new();
    delete_first.retain(3).delete(1).insert("X");

    let expected = Delta::from(vec![Op::insert("HelXo", attrs! {})]);
    assert_eq!(expected, a.compose(&insert_first));
    assert_eq!(expected, b.compose(&delete_first));
}

#[test]
fn delete_entire_text() {
    let mut a = Delta::new();
    a.retain(4).insert("Hello");
    let b = Delta::from(vec![Op::delete(9)]);
    assert_eq!(Delta::from(vec![Op::delete(4)]), a.compose(&b));
}

#[test]
fn retain_more_than_length_of_text() {
    let a = Delta::from(vec![Op::insert("Hello", attrs! {})]);
    let b = Delta::from(vec![Op::retain(10, attrs! {})]);
    assert_eq!(
        Delta::from(vec![Op::insert("Hello", attrs! {})]),
        a.compose(&b)
    );
}

#[test]
fn compose_with_empty_is_chopped_identity() {
    let mut a = Delta::new();
    a.insert("Test").retain(4);
    let mut chopped = a.clone();
    chopped.chop();
    assert_eq!(chopped, a.compose(&Delta::new()));
}

#[test]
fn operands_are_not_mutated() {
    let attr1 = attrs! { "bold" => "true" };
    let attr2 = attrs! { "bold" => "true" };
    let a1 = Delta::from(vec![Op::insert("Test", attr1.clone())]);
    let a2 = Delta::from(vec![Op::insert("Test", attr1.clone())]);
    let mut b1 = Delta::new();
    b1.retain_with(1, attrs! { "color" => "red" }).delete(2);
    let b2 = b1.clone();

    let expected = Delta::from(vec![
        Op::insert("T", attrs! { "color" => "red", "bold" => "true" }),
        Op::insert("t", attr1.clone()),
    ]);
    assert_eq!(expected, a1.compose(&b1));
    assert_eq!(a2, a1);
    assert_eq!(b2, b1);
    assert_eq!(attr2, attr1);
}

#[test]
fn retain_head_optimization() {
    let mut a = Delta::new();
    a.insert_with("A", attrs! { "bold" => "true" })
        .insert("B")
        .insert_with("C", attrs! { "bold" => "true" })
        .delete(1);
    let mut b = Delta::new();
    b.retain(3).insert("D");
    let mut expected = Delta::new();
    expected
        .insert_with("A", attrs! { "bold" => "true" })
        .insert("B")
        .insert_with("C", attrs! { "bold" => "true" })
        .insert("D")
        .delete(1);
    assert_eq!(expected, a.compose(&b));
}

#[test]
fn retain_head_optimization_with_split() {
    let mut a = Delta::new();
    a.insert_with("A", attrs! { "bold" => "true" })
        .insert("B")
        .insert_with("C", attrs! { "bold" => "true" })
        .retain(5)
        .delete(1);
    let mut b = Delta::new();
    b.retain(4).insert("D");
    let mut expected = Delta::new();
    expected
        .insert_with("A", attrs! { "bold" => "true" })
        .insert("B")
        .insert_with("C", attrs! { "bold" => "true" })
        .retain(1)
        .insert("D")
        .retain(4)
        .delete(1);
    assert_eq!(expected, a.compose(&b));
}

#[test]
fn retain_tail_optimization() {
    let mut a = Delta::new();
    a.insert_with("A", attrs! { "bold" => "true" })
        .insert("B")
        .insert_with("C", attrs! { "bold" => "true" });
    let b = Delta::from(vec![Op::delete(1)]);
    let mut expected = Delta::new();
    expected
        .insert("B")
        .insert_with("C", attrs! { "bold" => "true" });
    assert_eq!(expected, a.compose(&b));
}

#[test]
fn retain_tail_optimization_with_join() {
    let mut a = Delta::new();
    a.insert_with("A", attrs! { "bold" => "true" })
        .insert("B")
        .insert_with("C", attrs! { "bold" => "true" })
        .insert("D")
        .insert_with("E", attrs! { "bold" => "true" })
        .insert("F");
    let mut b = Delta::new();
    b.retain(1).delete(1);
    let mut expected = Delta::new();
    expected
        .insert_with("AC", attrs! { "bold" => "true" })
        .insert("D")
        .insert_with("E", attrs! { "bold" => "true" })
        .insert("F");
    assert_eq!(expected, a.compose(&b));
}

#[test]
fn compose_is_associative() {
    let base = Delta::from(vec![Op::insert("Hello World", attrs! {})]);
    let mut b = Delta::new();
    b.retain(6).insert_with("there ", attrs! { "bold" => "true" });
    let mut c = Delta::new();
    c.retain(2).delete(3).insert("y");

    assert_eq!(base.compose(&b).compose(&c), base.compose(&b.compose(&c)));
}
