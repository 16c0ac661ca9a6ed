//! Query-string codec round trips.

use testresult::TestResult;

use till::query_string::{QueryStringError, Value, encode, parse};

fn scalar(value: &str) -> Value {
    Value::Scalar(value.to_string())
}

fn list(values: &[&str]) -> Value {
    Value::List(values.iter().map(ToString::to_string).collect())
}

#[test]
fn encodes_an_object_of_scalars() {
    let pairs = vec![
        ("name".to_string(), scalar("Leonardo")),
        ("profession".to_string(), scalar("developer")),
    ];

    assert_eq!(encode(&pairs), "name=Leonardo&profession=developer");
}

#[test]
fn encodes_an_array_value() {
    let pairs = vec![
        ("name".to_string(), scalar("Leonardo")),
        ("abilities".to_string(), list(&["Js", "TDD"])),
    ];

    assert_eq!(encode(&pairs), "name=Leonardo&abilities=Js,TDD");
}

#[test]
fn parses_a_query_string_to_pairs() -> TestResult {
    let pairs = parse("name=Leonardo&profession=developer")?;

    assert_eq!(
        pairs,
        vec![
            ("name".to_string(), scalar("Leonardo")),
            ("profession".to_string(), scalar("developer")),
        ]
    );

    Ok(())
}

#[test]
fn parses_a_single_key_value_pair() -> TestResult {
    let pairs = parse("name=Leonardo")?;

    assert_eq!(pairs, vec![("name".to_string(), scalar("Leonardo"))]);

    Ok(())
}

#[test]
fn parses_comma_separated_values_as_arrays() -> TestResult {
    let pairs = parse("name=Leonardo&abilities=Js,TDD")?;

    assert_eq!(
        pairs,
        vec![
            ("name".to_string(), scalar("Leonardo")),
            ("abilities".to_string(), list(&["Js", "TDD"])),
        ]
    );

    Ok(())
}

#[test]
fn round_trips_scalars_and_flat_arrays() -> TestResult {
    let pairs = vec![
        ("name".to_string(), scalar("Leonardo")),
        ("abilities".to_string(), list(&["Js", "TDD"])),
        ("profession".to_string(), scalar("developer")),
    ];

    assert_eq!(parse(&encode(&pairs))?, pairs);

    Ok(())
}

#[test]
fn rejects_a_segment_without_a_separator() {
    assert_eq!(
        parse("name"),
        Err(QueryStringError::MalformedPair("name".to_string()))
    );
}
