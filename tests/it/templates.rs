use matches::assert_matches;
use pretty_assertions::assert_eq;
use serde_json::json;

use tagsmith::Config;

use crate::new_registry;

#[test]
fn inline_tags() -> anyhow::Result<()> {
    let registry = new_registry(Config::default());

    assert_eq!(
        registry.render_template(r#"{{tag "h1" "Header"}}"#, &())?,
        "<h1>Header</h1>\n"
    );
    assert_eq!(
        registry.render_template(r#"{{tag "div" id="comment"}}"#, &())?,
        "<div id=\"comment\"></div>\n"
    );
    assert_eq!(
        registry.render_template(r#"{{tag "abbr" "WHO" title="World Health Organization"}}"#, &())?,
        "<abbr title=\"World Health Organization\">WHO</abbr>\n"
    );

    Ok(())
}

#[test]
fn newline_override() -> anyhow::Result<()> {
    let registry = new_registry(Config::default());

    assert_eq!(
        registry.render_template(r#"{{tag "div" "content" id="tag-id" newline=false}}"#, &())?,
        "<div id=\"tag-id\">content</div>\n"
    );
    assert_eq!(
        registry.render_template(r#"{{tag "li" "content" newline=true}}"#, &())?,
        "<li>\ncontent\n</li>\n"
    );

    Ok(())
}

#[test]
fn null_content() -> anyhow::Result<()> {
    let registry = new_registry(Config::default());

    assert_eq!(
        registry.render_template(r#"{{tag "div" missing}}"#, &json!({}))?,
        "<div>\n\n</div>\n"
    );

    Ok(())
}

#[test]
fn attributes_from_context() -> anyhow::Result<()> {
    let registry = new_registry(Config {
        output_format_is_xhtml: true,
        ..Config::default()
    });

    let data = json!({ "classes": ["big", "red"], "agreed": true });

    assert_eq!(
        registry.render_template(r#"{{tag "input" type="checkbox" checked=agreed class=classes}}"#, &data)?,
        "<input checked=\"checked\" class=\"big_red\" type=\"checkbox\" />\n"
    );

    Ok(())
}

#[test]
fn unset_boolean_attribute() -> anyhow::Result<()> {
    let registry = new_registry(Config::default());

    assert_eq!(
        registry.render_template(r#"{{tag "option" "PHP" value="0" selected=false}}"#, &())?,
        "<option value=\"0\">PHP</option>\n"
    );

    Ok(())
}

#[test]
fn block_tags() -> anyhow::Result<()> {
    let registry = new_registry(Config::default());

    let template = concat!(
        r#"{{#tag "div" class="list"}}"#,
        r#"{{#tag "ol"}}{{tag "li" "A"}}{{tag "li" "B"}}{{/tag}}"#,
        r#"{{/tag}}"#,
    );

    assert_eq!(
        registry.render_template(template, &())?,
        "<div class=\"list\">\n<ol>\n<li>A</li>\n<li>B</li>\n\n</ol>\n\n</div>\n"
    );

    Ok(())
}

#[test]
fn block_ignores_literal_content() -> anyhow::Result<()> {
    let registry = new_registry(Config::default());

    let html = registry.render_template(
        r#"{{#tag "div" "tag-content"}}{{tag "label" "Comments:" for="comments"}}{{/tag}}"#,
        &(),
    )?;

    assert!(!html.contains("tag-content"));
    assert_eq!(
        html,
        "<div>\n<label for=\"comments\">Comments:</label>\n\n</div>\n"
    );

    Ok(())
}

#[test]
fn block_with_plain_markup() -> anyhow::Result<()> {
    let registry = new_registry(Config::default());

    assert_eq!(
        registry.render_template(
            r#"{{#tag "div" id="comments"}}<p>Just plain HTML content</p>{{/tag}}"#,
            &()
        )?,
        "<div id=\"comments\">\n<p>Just plain HTML content</p>\n</div>\n"
    );

    Ok(())
}

#[test]
fn content_is_not_escaped() -> anyhow::Result<()> {
    let registry = new_registry(Config::default());

    assert_eq!(
        registry.render_template(r#"{{tag "p" body}}"#, &json!({ "body": "<b>&</b>" }))?,
        "<p><b>&</b></p>\n"
    );

    Ok(())
}

#[test]
fn compact_output() -> anyhow::Result<()> {
    let registry = new_registry(Config {
        add_newlines_after_tags: false,
        ..Config::default()
    });

    assert_eq!(
        registry.render_template(r#"{{#tag "ul"}}{{tag "li" "A"}}{{tag "br"}}{{/tag}}"#, &())?,
        "<ul><li>A</li><br></ul>"
    );

    Ok(())
}

#[test]
fn missing_tag_name() {
    let registry = new_registry(Config::default());

    assert_matches!(registry.render_template("{{tag 1}}", &()), Err(_));
    assert_matches!(registry.render_template(r#"{{tag missing "x"}}"#, &()), Err(_));
}
