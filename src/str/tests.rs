#![cfg(test)]

use super::*;

#[test]
fn test_contains() {
    let subject = "Foo bar foo baz fizzbuzz";
    assert!(contains(["baz"], subject));
    assert!(!contains(["biz"], subject));
    assert!(contains(vec!["foo".to_owned(), "bar".to_owned()], "Fiz bar fuzz biz"));
    assert!(!contains(["foo", "bar"], "Fiz baz fuzz biz"));
    assert!(!contains([""], subject), "Empty searches shouldn't match anything.");
    assert!(!contains(Vec::<&str>::new(), subject));
}

#[test]
fn test_is() {
    assert!(is(["foo"], "foo"));
    assert!(!is(["fiz"], "foo"));
    assert!(!is(["Foo"], "foo"), "Matching should be case sensitive.");
    assert!(is(["foo", "bar"], "bar"));
    assert!(!is(["foo", "bar"], "fizz"));
}

#[test]
fn test_length_counts_chars() {
    assert_eq!(length("four"), 4);
    assert_eq!(length("naïve"), 5, "Length should count characters, not bytes.");
    assert_eq!(length(""), 0);
}

#[test]
fn test_replace() {
    assert_eq!(replace("three", "four", "Two plus two equals three"), "Two plus two equals four");
    assert_eq!(
        replace("three", "four", "Two plus two equals four"),
        "Two plus two equals four",
        "A missing search should leave the subject alone."
    );
    assert_eq!(replace("ab", "", "aabb"), "", "New occurrences should be replaced too.");
    assert_eq!(replace("o", "oo", "foo"), "foooo", "A self-containing replacement runs once.");
    assert_eq!(replace("", "x", "abc"), "abc");
}

#[test]
fn test_begins_and_ends_with() {
    let subject = "I end with a bow.";
    assert!(ends_with(".", subject));
    assert!(!ends_with("bow", subject));
    assert!(begins_with("I", subject));
    assert!(!begins_with("end", subject));
    assert!(ends_with("", subject));
    assert!(begins_with("", subject));
}

#[test]
fn test_append_and_prepend() {
    assert_eq!(append("teapot!", "I'm a little", None), "I'm a little teapot!");
    assert_eq!(append("", "I'm a little", None), "I'm a little");
    assert_eq!(append("b", "a", Some("-")), "a-b");
    assert_eq!(append("b", "", None), "");

    assert_eq!(prepend("Who", "let the dogs out?", None), "Who let the dogs out?");
    assert_eq!(prepend("", "let the dogs out?", None), "let the dogs out?");
    assert_eq!(prepend("a", "b", Some("")), "ab");
}

#[test]
fn test_combine() {
    assert_eq!(combine(["anchovy", "pizza"], None), "anchovy pizza");
    assert_eq!(combine(["anchovy", "pizza"], Some("-")), "anchovy-pizza");
    assert_eq!(combine(["one", "two", "three"], Some(", ")), "one, two, three");
    assert_eq!(combine(Vec::<String>::new(), None), "");
}
