//! Integration tests for binding values into HTML templates.
//!
//! This test suite exercises the public API end to end:
//! - Selector parsing and tag matching
//! - Slicing the login form fixture
//! - Text, escaped, embedded, and multi-value bindings
//! - Sequential multi-selector binding, from code and from a JSON document
//! - Hierarchical composition, where one binding's output is another's value
//!
//! Fixtures are located in `tests/fixtures/`.

mod common;

use common::load_fixture;
use hbind::{Bindings, HbindError, Selector, Value, bind, bind_all, hbind, slice};

#[test]
fn test_selector_parsing_matches_login_form_tags() {
    assert_eq!(Selector::parse("form").name(), Some("form"));
    assert!(Selector::parse("input").matches("<input />"));
    assert!(Selector::parse("p.error").matches(r#"<p class="error">"#));
    assert!(Selector::parse("#name").matches(r#"<input type="text" name="name" value="" />"#));
}

#[test]
fn test_slice_login_form_by_classname() {
    let form = load_fixture("login_form.html");
    let parts = slice(&form, &Selector::parse("p.error"));

    assert_eq!(parts.len(), 3);
    assert_eq!(parts[1].text, r#"<p class="error"></p>"#);
    assert!(parts[1].matched);
}

#[test]
fn test_slice_login_form_by_name_attribute() {
    let form = load_fixture("login_form.html");
    let parts = slice(&form, &Selector::parse("#name"));

    assert_eq!(parts.len(), 3);
    assert_eq!(parts[1].text, r#"<input type="text" name="name" value="" />"#);
}

#[test]
fn test_slice_reconstructs_login_form() {
    let form = load_fixture("login_form.html");
    for raw in ["p", "input", "#login", "form:action", "p.missing"] {
        let rebuilt: String = slice(&form, &Selector::parse(raw)).iter().map(|s| s.text).collect();
        assert_eq!(rebuilt, form, "selector {raw}");
    }
}

#[test]
fn test_bind_text_escaped_and_embedded() {
    let form = load_fixture("login_form.html");

    let text = bind(&form, &Selector::parse("p.error"), &Value::from("Lorem Ipsum")).unwrap();
    assert!(text.contains(r#"<p class="error">Lorem Ipsum</p>"#));

    let markup = Value::from("<b>Lorem</b> Ipsum");
    let escaped = bind(&form, &Selector::parse("p.error"), &markup).unwrap();
    assert!(escaped.contains(r#"<p class="error">&lt;b&gt;Lorem&lt;/b&gt; Ipsum</p>"#));

    let embedded = bind(&form, &Selector::parse("p.error!"), &markup).unwrap();
    assert!(embedded.contains(r#"<p class="error"><b>Lorem</b> Ipsum</p>"#));
}

#[test]
fn test_bind_multiple_values() {
    let form = load_fixture("login_form.html");
    let values = Value::from(["Lorem", "Ipsum"]);
    let output = bind(&form, &Selector::parse("p.error"), &values).unwrap();

    assert!(output.contains(r#"<p class="error">Lorem</p>"#));
    assert!(output.contains(r#"<p class="error">Ipsum</p>"#));
}

#[test]
fn test_hbind_multiple_selectors() {
    let form = load_fixture("login_form.html");
    let expected = load_fixture("login_form_bound.html");

    let output = hbind(
        &form,
        [
            ("form:action", Value::from("http://example.org")),
            ("p.error!", Value::from(["<b>Yay</b>", "Fail"])),
            ("#name:value", Value::from("no name")),
        ],
    )
    .unwrap();

    assert_eq!(output.trim(), expected.trim());
}

#[test]
fn test_bind_all_from_json_document() {
    let form = load_fixture("login_form.html");
    let expected = load_fixture("login_form_bound.html");
    let bindings = Bindings::from_json(&load_fixture("bindings.json")).unwrap();

    let output = bind_all(&form, &bindings).unwrap();

    assert_eq!(output.trim(), expected.trim());
}

#[test]
fn test_bind_nested_tag() {
    let output = bind(
        r#"<div><div class="foo"></div></div>"#,
        &Selector::parse("div.foo"),
        &Value::from("Lorem Ipsum"),
    )
    .unwrap();

    assert_eq!(output, r#"<div><div class="foo">Lorem Ipsum</div></div>"#);
}

#[test]
fn test_bind_initial_values_with_nested_fragments() {
    let form = load_fixture("signup_form.html");
    let name_field = hbind(r#"<input type="text" name="name"/>"#, [(":value", "Troels")]).unwrap();
    let email_field =
        hbind(r#"<input type="text" name="email"/>"#, [(":value", "troelskn@gamil.com")]).unwrap();

    insta::assert_snapshot!(&name_field, @r#"<input value="Troels" type="text" name="name"/>"#);

    let output = hbind(
        &form,
        [
            ("form:action", Value::from("http://example.org")),
            ("p.error", Value::Absent),
            (
                "p.field!",
                Value::from(vec![
                    name_field,
                    email_field,
                    r#"<input type="password" name="password"/>"#.to_string(),
                ]),
            ),
        ],
    )
    .unwrap();

    let expected = concat!(
        "\n",
        r#"<form action="http://example.org" method="post">"#,
        "\n\n",
        r#"<p class="field"><input value="Troels" type="text" name="name"/></p>"#,
        r#"<p class="field"><input value="troelskn@gamil.com" type="text" name="email"/></p>"#,
        r#"<p class="field"><input type="password" name="password"/></p>"#,
        "\n<p>\n",
        r#"  <input type="submit" id="login" />"#,
        "\n</p>\n</form>\n",
    );
    assert_eq!(output, expected);
}

#[test]
fn test_selector_order_is_significant() {
    let template = r#"<ul class="list"></ul>"#;
    let item = r#"<li class="item"></li>"#;

    let items_first = hbind(template, [("ul.list!", item), ("li.item", "one")]).unwrap();
    let items_last = hbind(template, [("li.item", "one"), ("ul.list!", item)]).unwrap();

    insta::assert_snapshot!(items_first, @r#"<ul class="list"><li class="item">one</li></ul>"#);
    assert_eq!(items_last, r#"<ul class="list"><li class="item"></li></ul>"#);
}

#[test]
fn test_unmatched_selectors_leave_template_unchanged() {
    let form = load_fixture("login_form.html");
    let output = hbind(&form, [("table", "x"), ("#missing:value", "y"), ("p.nope", "z")]).unwrap();
    assert_eq!(output, form);
}

#[test]
fn test_content_binding_to_self_closing_tag_fails() {
    let result = hbind("<div><p/></div>", [("p", "Lorem Ipsum")]);
    assert!(matches!(result, Err(HbindError::ReplaceShape { .. })));

    let result = hbind(r#"<div><p foo="bar"/></div>"#, [("p", "Lorem Ipsum")]);
    let err = result.unwrap_err();
    assert!(err.to_string().contains(r#"<p foo="bar"/>"#));
}

#[test]
fn test_unicode_content_is_preserved() {
    let template = "<h1 class=\"title\">\u{1F600}</h1><p>caf\u{e9}</p>";
    let output = hbind(template, [("h1.title", "gr\u{fc}\u{df}e \u{1F389}")]).unwrap();
    assert_eq!(output, "<h1 class=\"title\">gr\u{fc}\u{df}e \u{1F389}</h1><p>caf\u{e9}</p>");
}
