use handlebars::Handlebars;

use tagsmith::{helper, Config, TagRenderer};

mod templates;

fn xhtml_renderer() -> TagRenderer {
    TagRenderer::with_config(Config {
        output_format_is_xhtml: true,
        ..Config::default()
    })
}

fn new_registry(config: Config) -> Handlebars<'static> {
    let mut registry = Handlebars::new();
    helper::register(&mut registry, config);
    registry
}

#[test]
fn as_xhtml() {
    let renderer = xhtml_renderer();

    for tag in &["area", "base", "br", "col", "frame", "hr", "img", "input", "link", "meta", "param"] {
        assert_eq!(renderer.render_tag(tagsmith::Tag::new(*tag)), format!("<{} />\n", tag));
    }
}

#[test]
fn boolean_attributes() {
    let renderer = TagRenderer::new();

    for attr in &["selected", "checked", "disabled", "readonly", "multiple"] {
        let on = tagsmith::Tag::new("input").attr("type", "dummy").attr(*attr, true);
        assert_eq!(
            renderer.render_tag(on),
            format!("<input type=\"dummy\" {0}=\"{0}\">\n", attr)
        );

        for off in vec![
            tagsmith::AttrValue::from(false),
            tagsmith::AttrValue::Nil,
            tagsmith::AttrValue::from(""),
        ] {
            let tag = tagsmith::Tag::new("input").attr("type", "dummy").attr(*attr, off);
            assert_eq!(renderer.render_tag(tag), "<input type=\"dummy\">\n");
        }
    }
}
