use scry_render::render;
use scry_types::{RenderNode, Value, TEMPLATE_COMPONENT, TEMPLATE_CVE};

pub const COMPONENT_TITLE: &str = "Component";
pub const CVE_TITLE: &str = "CVE advisory";

/// What the view layer should draw for a query's results.
#[derive(Debug, Clone, PartialEq)]
pub enum Canvas {
    /// Nothing matched.
    Empty,
    /// A recognized template: headed panel around the rendered payload.
    Template {
        title: &'static str,
        body: RenderNode,
    },
    /// A declared template nobody knows: error marker plus a raw fallback.
    UnknownTemplate { tag: String, fallback: RenderNode },
    /// No template applied; the whole payload rendered as-is.
    Plain(RenderNode),
}

/// Template selection over a loose results payload.
///
/// An object declaring `{template, data}` is honored strictly; without a
/// declaration the payload's fields pick a template; failing both, the whole
/// payload goes straight through the renderer. Arrays (the show-all case)
/// always take the plain path.
pub fn render_results(results: &serde_json::Value) -> Canvas {
    if results.is_null() {
        return Canvas::Empty;
    }

    if let Some(fields) = results.as_object() {
        if let (Some(tag), Some(data)) = (
            fields.get("template").and_then(|t| t.as_str()),
            fields.get("data"),
        ) {
            return match tag {
                t if t == TEMPLATE_COMPONENT => Canvas::Template {
                    title: COMPONENT_TITLE,
                    body: render_json(data),
                },
                t if t == TEMPLATE_CVE => Canvas::Template {
                    title: CVE_TITLE,
                    body: render_json(data),
                },
                other => Canvas::UnknownTemplate {
                    tag: other.to_string(),
                    fallback: render_json(data),
                },
            };
        }

        // fallback: infer a template from well-known payload fields
        if fields.contains_key("cve") {
            return Canvas::Template {
                title: CVE_TITLE,
                body: render_json(results),
            };
        }
        if fields.contains_key("components") || fields.contains_key("package") {
            return Canvas::Template {
                title: COMPONENT_TITLE,
                body: render_json(results),
            };
        }
    }

    Canvas::Plain(render_json(results))
}

fn render_json(json: &serde_json::Value) -> RenderNode {
    render(&Value::from(json))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_component_template_is_honored() {
        let results = serde_json::json!({
            "template": "component",
            "data": {"package": {"name": "log4j-core"}}
        });
        match render_results(&results) {
            Canvas::Template { title, .. } => assert_eq!(title, COMPONENT_TITLE),
            other => panic!("expected component template, got {other:?}"),
        }
    }

    #[test]
    fn unknown_declared_template_falls_back_with_a_marker() {
        let results = serde_json::json!({
            "template": "holographic",
            "data": {"a": 1}
        });
        match render_results(&results) {
            Canvas::UnknownTemplate { tag, fallback } => {
                assert_eq!(tag, "holographic");
                assert_eq!(
                    fallback,
                    RenderNode::KeyValueList(vec![("a".to_string(), RenderNode::text("1"))])
                );
            }
            other => panic!("expected unknown-template fallback, got {other:?}"),
        }
    }

    #[test]
    fn cve_field_infers_the_cve_template() {
        let results = serde_json::json!({"cve": {"osv": {"id": "CVE-2021-44228"}}});
        match render_results(&results) {
            Canvas::Template { title, .. } => assert_eq!(title, CVE_TITLE),
            other => panic!("expected cve template, got {other:?}"),
        }
    }

    #[test]
    fn package_field_infers_the_component_template() {
        let results = serde_json::json!({"package": {"name": "log4j-api"}});
        match render_results(&results) {
            Canvas::Template { title, .. } => assert_eq!(title, COMPONENT_TITLE),
            other => panic!("expected component template, got {other:?}"),
        }
    }

    #[test]
    fn arrays_go_straight_through_the_renderer() {
        let results = serde_json::json!([
            {"template": "component", "data": {"x": 1}},
            {"template": "cve", "data": {"y": 2}}
        ]);
        match render_results(&results) {
            Canvas::Plain(_) => {}
            other => panic!("expected plain rendering, got {other:?}"),
        }
    }

    #[test]
    fn null_results_are_empty() {
        assert_eq!(render_results(&serde_json::Value::Null), Canvas::Empty);
    }

    #[test]
    fn unrecognized_objects_render_plain() {
        let results = serde_json::json!({"whatever": true});
        match render_results(&results) {
            Canvas::Plain(node) => assert_eq!(
                node,
                RenderNode::KeyValueList(vec![(
                    "whatever".to_string(),
                    RenderNode::text("true")
                )])
            ),
            other => panic!("expected plain rendering, got {other:?}"),
        }
    }
}
