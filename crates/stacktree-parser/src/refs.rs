//! Reference discovery inside element definitions.
//!
//! CloudFormation expresses a dependency on another element in four ways:
//!
//! | Form | Long syntax | Short syntax |
//! |---|---|---|
//! | Reference | `Ref: Name` | `!Ref Name` |
//! | Attribute | `Fn::GetAtt: [Name, Attr]` or `Fn::GetAtt: Name.Attr` | `!GetAtt Name.Attr` |
//! | Substitution | `Fn::Sub: "${Name}"` or `Fn::Sub: [template, vars]` | `!Sub "${Name}"` |
//! | Explicit | `DependsOn: Name` or `DependsOn: [Name, ...]` | |
//!
//! Everything else (other intrinsic functions, nested properties, lists) is
//! searched recursively. The names returned here are unresolved: pseudo
//! parameters such as `AWS::Region` come back as-is and are filtered out when
//! the graph is built.

use std::collections::HashSet;

use serde_yaml::{Mapping, Value, value::TaggedValue};

use crate::sub;

/// Returns the names referenced anywhere inside `definition`, in the order
/// they appear. Repeated references are kept.
pub(crate) fn references(definition: &Value) -> Vec<&str> {
    let mut refs = Vec::new();
    collect(definition, &mut refs);
    refs
}

fn collect<'a>(value: &'a Value, refs: &mut Vec<&'a str>) {
    match value {
        Value::Mapping(mapping) => collect_mapping(mapping, refs),
        Value::Sequence(items) => items.iter().for_each(|item| collect(item, refs)),
        Value::Tagged(tagged) => collect_tagged(tagged, refs),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
    }
}

fn collect_mapping<'a>(mapping: &'a Mapping, refs: &mut Vec<&'a str>) {
    for (key, value) in mapping {
        match key.as_str() {
            Some("Ref") => collect_ref(value, refs),
            Some("Fn::GetAtt") => collect_get_att(value, refs),
            Some("Fn::Sub") => collect_sub(value, refs),
            Some("DependsOn") => collect_depends_on(value, refs),
            _ => collect(value, refs),
        }
    }
}

/// Short-form intrinsics (`!Ref`, `!GetAtt`, `!Sub`, `!If`, ...).
fn collect_tagged<'a>(tagged: &'a TaggedValue, refs: &mut Vec<&'a str>) {
    let tag = tagged.tag.to_string();
    match tag.trim_start_matches('!') {
        "Ref" => collect_ref(&tagged.value, refs),
        "GetAtt" => collect_get_att(&tagged.value, refs),
        "Sub" => collect_sub(&tagged.value, refs),
        _ => collect(&tagged.value, refs),
    }
}

fn collect_ref<'a>(value: &'a Value, refs: &mut Vec<&'a str>) {
    match value.as_str() {
        Some(name) => refs.push(name),
        None => collect(value, refs),
    }
}

fn collect_get_att<'a>(value: &'a Value, refs: &mut Vec<&'a str>) {
    match value {
        Value::String(target) => refs.push(sub::element_name(target)),
        Value::Sequence(items) => {
            let mut items = items.iter();
            if let Some(first) = items.next() {
                match first.as_str() {
                    Some(name) => refs.push(name),
                    None => collect(first, refs),
                }
            }
            // The attribute name may itself be computed, e.g. `!Ref AttrParam`.
            items.for_each(|item| collect(item, refs));
        }
        _ => collect(value, refs),
    }
}

fn collect_sub<'a>(value: &'a Value, refs: &mut Vec<&'a str>) {
    match value {
        Value::String(template) => refs.extend(sub::variable_names(template)),
        Value::Sequence(items) => match (items.first(), items.get(1)) {
            (Some(Value::String(template)), vars) => {
                let locals: HashSet<&str> = vars
                    .and_then(Value::as_mapping)
                    .map(|vars| vars.keys().filter_map(Value::as_str).collect())
                    .unwrap_or_default();

                refs.extend(
                    sub::variable_names(template)
                        .into_iter()
                        .filter(|name| !locals.contains(name)),
                );
                items.iter().skip(1).for_each(|item| collect(item, refs));
            }
            _ => items.iter().for_each(|item| collect(item, refs)),
        },
        _ => collect(value, refs),
    }
}

fn collect_depends_on<'a>(value: &'a Value, refs: &mut Vec<&'a str>) {
    match value {
        Value::String(name) => refs.push(name),
        Value::Sequence(items) => {
            for item in items {
                match item.as_str() {
                    Some(name) => refs.push(name),
                    None => collect(item, refs),
                }
            }
        }
        _ => collect(value, refs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs_of(yaml: &str) -> Vec<String> {
        let value: Value = serde_yaml::from_str(yaml).expect("test YAML should parse");
        references(&value).into_iter().map(String::from).collect()
    }

    #[test]
    fn test_long_form_ref() {
        assert_eq!(refs_of("BucketName: {Ref: NameParam}"), vec!["NameParam"]);
    }

    #[test]
    fn test_short_form_ref() {
        assert_eq!(refs_of("BucketName: !Ref NameParam"), vec!["NameParam"]);
    }

    #[test]
    fn test_get_att_forms() {
        assert_eq!(refs_of("Arn:\n  Fn::GetAtt: [Queue, Arn]\n"), vec!["Queue"]);
        assert_eq!(refs_of("Arn:\n  Fn::GetAtt: Queue.Arn\n"), vec!["Queue"]);
        assert_eq!(refs_of("Arn: !GetAtt Queue.Arn"), vec!["Queue"]);
        assert_eq!(refs_of("Arn: !GetAtt [Queue, Arn]"), vec!["Queue"]);
    }

    #[test]
    fn test_get_att_with_computed_attribute() {
        assert_eq!(
            refs_of("Value: !GetAtt [Stack, !Ref OutputName]"),
            vec!["Stack", "OutputName"]
        );
    }

    #[test]
    fn test_sub_string_form() {
        assert_eq!(
            refs_of(r#"Url: !Sub "https://${Api}.execute-api.${AWS::Region}/${Stage.Name}""#),
            vec!["Api", "AWS::Region", "Stage"]
        );
    }

    #[test]
    fn test_sub_list_form_skips_local_variables() {
        let yaml = r#"
Command:
  Fn::Sub:
    - "${Local} ${Bucket} ${!Escaped}"
    - Local: !Ref Param
"#;
        assert_eq!(refs_of(yaml), vec!["Bucket", "Param"]);
    }

    #[test]
    fn test_depends_on_forms() {
        assert_eq!(refs_of("DependsOn: Gateway"), vec!["Gateway"]);
        assert_eq!(refs_of("DependsOn: [Gateway, Route]"), vec!["Gateway", "Route"]);
    }

    #[test]
    fn test_nested_intrinsics_are_searched() {
        let yaml = r#"
Type: AWS::EC2::Instance
Properties:
  SubnetId: !If [IsPublic, !Ref PublicSubnet, !Ref PrivateSubnet]
  Tags:
    - Key: Name
      Value:
        Fn::Join:
          - "-"
          - - Ref: Env
            - app
"#;
        assert_eq!(refs_of(yaml), vec!["PublicSubnet", "PrivateSubnet", "Env"]);
    }

    #[test]
    fn test_duplicates_are_kept_in_order() {
        let yaml = "A: !Ref X\nB: !Ref Y\nC: !Ref X\n";
        assert_eq!(refs_of(yaml), vec!["X", "Y", "X"]);
    }

    #[test]
    fn test_plain_values_have_no_references() {
        assert!(refs_of("Type: AWS::SNS::Topic\nProperties: {DisplayName: Ref}").is_empty());
        assert!(refs_of("42").is_empty());
    }
}
