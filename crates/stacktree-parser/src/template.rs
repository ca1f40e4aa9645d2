//! Template structure and dependency graph construction.
//!
//! A parsed [`Template`] owns the [`DependencyGraph`] of its elements. The
//! graph is built in two passes: every element of `Parameters`, `Resources`
//! and `Outputs` is declared first (in that section order, then document
//! order), and only then are references resolved into edges, so forward
//! references inside a section resolve like backward ones.

use indexmap::IndexMap;
use log::{debug, trace};
use serde_yaml::{Mapping, Value};

use stacktree_core::{Category, DependencyGraph, Element};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    refs,
};

/// A parsed template: the declared elements and their direct dependencies.
#[derive(Debug, Clone, Default)]
pub struct Template {
    graph: DependencyGraph,
}

impl Template {
    /// Returns the dependency graph of the template's elements.
    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }
}

/// Builds a [`Template`] from a parsed YAML/JSON document.
pub(crate) fn build(root: &Value) -> Result<Template, ParseError> {
    let Some(root) = root.as_mapping() else {
        return Err(Diagnostic::error("template root is not a mapping")
            .with_code(ErrorCode::E100)
            .with_help("a template is a mapping with `Parameters`, `Resources` and `Outputs` sections")
            .into());
    };

    let definitions = declared_elements(root)?;

    let mut graph = DependencyGraph::new();
    for element in definitions.keys() {
        graph.add_node(*element);
    }

    for (element, definition) in &definitions {
        for name in refs::references(definition) {
            match resolve(&graph, name) {
                Some(target) => {
                    trace!(source = element.to_string(), target = target.to_string(); "Recorded dependency");
                    graph.add_edge(*element, target);
                }
                None => {
                    debug!(element = element.to_string(), reference = name; "Skipping reference to undeclared name");
                }
            }
        }
    }

    Ok(Template { graph })
}

/// Collects every declared element with its definition, in section order then
/// document order.
fn declared_elements(root: &Mapping) -> Result<IndexMap<Element, &Value>, ParseError> {
    let mut collector = DiagnosticCollector::new();
    let mut definitions = IndexMap::new();

    for category in Category::ALL {
        let section = category.section();
        let entries = match root.get(section) {
            None | Some(Value::Null) => continue,
            Some(Value::Mapping(entries)) => entries,
            Some(_) => {
                collector.emit(
                    Diagnostic::error(format!("`{section}` section is not a mapping"))
                        .with_code(ErrorCode::E101)
                        .with_help(format!(
                            "declare each entry of `{section}` as `Name: definition`"
                        )),
                );
                continue;
            }
        };

        for (key, definition) in entries {
            match key.as_str() {
                Some(name) => {
                    definitions.insert(Element::new(name, category), definition);
                }
                None => collector.emit(
                    Diagnostic::error(format!(
                        "element name `{}` in `{section}` is not a string",
                        describe(key)
                    ))
                    .with_code(ErrorCode::E102)
                    .with_help("element names must be plain strings"),
                ),
            }
        }
    }

    collector.finish()?;
    Ok(definitions)
}

/// Resolves a referenced name to a declared element.
///
/// Parameters take precedence over resources; outputs cannot be referenced.
fn resolve(graph: &DependencyGraph, name: &str) -> Option<Element> {
    [Element::parameter(name), Element::resource(name)]
        .into_iter()
        .find(|candidate| graph.contains_node(*candidate))
}

/// Single-line rendering of a non-string key for diagnostics.
fn describe(key: &Value) -> String {
    match key {
        Value::Null => "null".to_string(),
        Value::Bool(value) => value.to_string(),
        Value::Number(value) => value.to_string(),
        Value::String(value) => value.clone(),
        Value::Sequence(_) => "[...]".to_string(),
        Value::Mapping(_) => "{...}".to_string(),
        Value::Tagged(tagged) => format!("{} ...", tagged.tag),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_from(yaml: &str) -> Result<Template, ParseError> {
        let root: Value = serde_yaml::from_str(yaml).expect("test YAML should parse");
        build(&root)
    }

    #[test]
    fn test_sections_in_fixed_order() {
        let template = build_from(
            r#"
Outputs:
  Out: {Value: 1}
Resources:
  Res: {Type: AWS::SNS::Topic}
Parameters:
  Param: {Type: String}
"#,
        )
        .unwrap();

        let nodes: Vec<Element> = template.graph().nodes().collect();
        assert_eq!(
            nodes,
            vec![
                Element::parameter("Param"),
                Element::resource("Res"),
                Element::output("Out"),
            ]
        );
    }

    #[test]
    fn test_forward_reference_within_section() {
        let template = build_from(
            r#"
Resources:
  First:
    Type: AWS::SQS::Queue
    Properties:
      RedrivePolicy:
        deadLetterTargetArn: !GetAtt Second.Arn
  Second:
    Type: AWS::SQS::Queue
"#,
        )
        .unwrap();

        let graph = template.graph();
        assert_eq!(
            graph.get(Element::resource("First")).collect::<Vec<_>>(),
            vec![Element::resource("Second")]
        );
    }

    #[test]
    fn test_parameter_wins_over_resource() {
        assert_eq!(
            resolve(
                &{
                    let mut graph = DependencyGraph::new();
                    graph.add_node(Element::resource("Name"));
                    graph.add_node(Element::parameter("Name"));
                    graph
                },
                "Name"
            ),
            Some(Element::parameter("Name"))
        );
    }

    #[test]
    fn test_outputs_are_not_reference_targets() {
        let template = build_from(
            r#"
Resources:
  Res:
    Type: AWS::SNS::Topic
    DependsOn: Out
Outputs:
  Out:
    Value: !Ref Res
"#,
        )
        .unwrap();

        let graph = template.graph();
        assert_eq!(graph.get(Element::resource("Res")).count(), 0);
        assert_eq!(
            graph.get(Element::output("Out")).collect::<Vec<_>>(),
            vec![Element::resource("Res")]
        );
    }

    #[test]
    fn test_null_section_is_empty() {
        let template = build_from("Parameters:\nResources:\n  A: {Type: X}\n").unwrap();

        assert_eq!(template.graph().nodes_count(), 1);
    }

    #[test]
    fn test_root_not_mapping() {
        let err = build_from("- a\n- b\n").unwrap_err();

        assert_eq!(err.diagnostics().len(), 1);
        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E100));
    }

    #[test]
    fn test_structural_errors_are_collected() {
        let err = build_from(
            r#"
Parameters: [not, a, mapping]
Resources:
  1: {Type: X}
Outputs: just text
"#,
        )
        .unwrap_err();

        let codes: Vec<_> = err.diagnostics().iter().map(|d| d.code()).collect();
        assert_eq!(
            codes,
            vec![
                Some(ErrorCode::E101),
                Some(ErrorCode::E102),
                Some(ErrorCode::E101),
            ]
        );
        assert_eq!(
            err.diagnostics()[1].message(),
            "element name `1` in `Resources` is not a string"
        );
    }

    #[test]
    fn test_compound_key_is_described_on_one_line() {
        let err = build_from("Resources:\n  ? [Compound, Key]\n  : {Type: X}\n").unwrap_err();

        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E102));
        assert_eq!(
            err.diagnostics()[0].message(),
            "element name `[...]` in `Resources` is not a string"
        );
    }
}
