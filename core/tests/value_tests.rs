use chrono::DateTime;
use jtrace::ArgValue;

#[test]
fn scalars_stringify_canonically() {
    assert_eq!(ArgValue::Null.to_string(), "null");
    assert_eq!(ArgValue::Bool(true).to_string(), "true");
    assert_eq!(ArgValue::Bool(false).to_string(), "false");
    assert_eq!(ArgValue::Int(-42).to_string(), "-42");
    assert_eq!(ArgValue::Float(1.5).to_string(), "1.5");
}

#[test]
fn strings_are_quoted_and_escaped() {
    assert_eq!(ArgValue::from("plain").to_string(), "'plain'");
    assert_eq!(ArgValue::from("it's").to_string(), r"'it\'s'");
}

#[test]
fn date_times_render_as_rfc3339() {
    let dt = DateTime::parse_from_rfc3339("2024-03-05T10:20:30+01:00").expect("valid date");
    assert_eq!(ArgValue::from(dt).to_string(), "2024-03-05T10:20:30+01:00");

    let precise =
        DateTime::parse_from_rfc3339("2024-03-05T10:20:30.250+01:00").expect("valid date");
    assert_eq!(
        ArgValue::DateTime(precise).to_string(),
        "2024-03-05T10:20:30.250+01:00"
    );
}

#[test]
fn sequences_render_key_value_pairs() {
    let list = ArgValue::seq([ArgValue::Int(1), ArgValue::from("a")]);
    assert_eq!(list.to_string(), "[0 => 1, 1 => 'a']");

    let nested = ArgValue::Seq(vec![(
        ArgValue::from("k"),
        ArgValue::seq([ArgValue::Null]),
    )]);
    assert_eq!(nested.to_string(), "['k' => [0 => null]]");
    assert_eq!(ArgValue::seq([]).to_string(), "[]");
}

#[test]
fn objects_without_text_render_their_type_name() {
    let user = ArgValue::object("App\\Model\\User");
    assert_eq!(user.to_string(), "App\\Model\\User");

    let stringable = ArgValue::Object {
        type_name: "App\\Money".to_string(),
        text: Some("10 EUR".to_string()),
    };
    assert_eq!(stringable.to_string(), "'10 EUR'");

    let stream = ArgValue::Resource {
        kind: "stream".to_string(),
    };
    assert_eq!(stream.to_string(), "resource (stream)");
}

#[test]
fn type_names_of_primitives() {
    assert_eq!(ArgValue::Null.type_name(), "null");
    assert_eq!(ArgValue::Bool(true).type_name(), "bool");
    assert_eq!(ArgValue::Int(1).type_name(), "int");
    assert_eq!(ArgValue::Float(1.0).type_name(), "float");
    assert_eq!(ArgValue::from("s").type_name(), "string");
    assert_eq!(ArgValue::seq([]).type_name(), "array");
}

#[test]
fn complex_values_hide_behind_their_type_name() {
    assert_eq!(ArgValue::Bool(true).render(false), "true");
    assert_eq!(ArgValue::from("x").render(false), "'x'");
    assert_eq!(ArgValue::seq([ArgValue::Int(1)]).render(false), "array");
    assert_eq!(ArgValue::seq([ArgValue::Int(1)]).render(true), "[0 => 1]");
    assert_eq!(
        ArgValue::object("App\\Model\\User").render(false),
        "App\\Model\\User"
    );
}
