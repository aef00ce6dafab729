//! Property encoding: a property map becomes an ordered list of fact lines

use super::sanitize;
use crate::graph::{Properties, PropertyValue};
use std::collections::BTreeSet;

/// Encode `properties` as facts attached to `head`.
///
/// The first line is always `<head>.`. Each property then contributes, in
/// map order:
///
/// - scalar: `<key>(<head>, <value>).`
/// - list: `<key>(<head>, [<v1>,<v2>,...]).`
/// - map: `<key>(<head>).` followed by the nested map encoded against the
///   head `<key>(<head>)`, depth first
///
/// Null and empty-string values produce no line.
pub fn encode(head: &str, properties: &Properties) -> Vec<String> {
    encode_excluding(head, properties, &BTreeSet::new())
}

/// Like [`encode`], but keys in `excluded` are skipped at every depth.
pub fn encode_excluding(
    head: &str,
    properties: &Properties,
    excluded: &BTreeSet<String>,
) -> Vec<String> {
    let mut lines = vec![format!("{head}.")];

    for (key, value) in properties {
        if excluded.contains(key) || value.is_absent() {
            continue;
        }
        match value {
            PropertyValue::Array(items) => {
                lines.push(format!("{key}({head}, {}).", render_list(items)));
            }
            PropertyValue::Object(nested) => {
                let nested_head = format!("{key}({head})");
                lines.extend(encode_excluding(&nested_head, nested, excluded));
            }
            scalar if scalar.is_scalar() => {
                lines.push(format!("{key}({head}, {}).", render_scalar(scalar)));
            }
            _ => {}
        }
    }

    lines
}

/// Render a single value as a fact argument.
///
/// Strings are sanitized. Numbers and booleans are written as-is: integers
/// in decimal, floats always with a fractional part (`1.0`, `0.9`,
/// `1.0e20`). Non-finite floats become the atoms `nan`, `inf`, `neg_inf`.
pub fn render_scalar(value: &PropertyValue) -> String {
    match value {
        PropertyValue::String(s) => sanitize(s),
        PropertyValue::Int(i) => i.to_string(),
        PropertyValue::Float(f) => render_float(*f),
        PropertyValue::Bool(b) => b.to_string(),
        PropertyValue::Null => String::new(),
        PropertyValue::Array(items) => render_list(items),
        PropertyValue::Object(map) => render_quoted(map),
    }
}

fn render_float(f: f64) -> String {
    if f.is_nan() {
        return "nan".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "inf" } else { "neg_inf" }.to_string();
    }
    let text = format!("{f:?}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !mantissa.contains('.') => {
            format!("{mantissa}.0e{exponent}")
        }
        _ => text,
    }
}

/// `[a,b,c]` with absent elements dropped; nested lists nest.
fn render_list(items: &[PropertyValue]) -> String {
    let rendered: Vec<String> = items
        .iter()
        .filter(|v| !v.is_absent())
        .map(render_scalar)
        .collect();
    format!("[{}]", rendered.join(","))
}

/// Maps inside lists have no fact shape of their own; they are written as
/// a quoted atom holding their compact JSON text.
fn render_quoted(map: &Properties) -> String {
    let json = match serde_json::to_string(map) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!(error = %e, "cannot render nested map, writing empty atom");
            String::new()
        }
    };
    format!("'{}'", json.replace('\\', "\\\\").replace('\'', "\\'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(pairs: Vec<(&str, PropertyValue)>) -> Properties {
        pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
    }

    #[test]
    fn empty_map_is_just_the_head() {
        assert_eq!(encode("gene(brca1)", &Properties::new()), vec!["gene(brca1)."]);
    }

    #[test]
    fn scalar_property() {
        let lines = encode("gene(brca1)", &props(vec![("k", "v".into())]));
        assert_eq!(lines, vec!["gene(brca1).", "k(gene(brca1), v)."]);
    }

    #[test]
    fn scalar_strings_are_sanitized_numbers_are_not() {
        let lines = encode(
            "h",
            &props(vec![
                ("name", "Breast Cancer 1".into()),
                ("score", 0.9_f64.into()),
                ("start", 43044295_i64.into()),
                ("whole", 2.0_f64.into()),
                ("flag", true.into()),
            ]),
        );
        assert_eq!(
            lines,
            vec![
                "h.",
                "name(h, breast_cancer_1).",
                "score(h, 0.9).",
                "start(h, 43044295).",
                "whole(h, 2.0).",
                "flag(h, true).",
            ]
        );
    }

    #[test]
    fn floats_keep_a_fractional_part_at_any_magnitude() {
        let lines = encode(
            "h",
            &props(vec![
                ("big", 1e20_f64.into()),
                ("tiny", 1e-7_f64.into()),
                ("scaled", 1.5e300_f64.into()),
                ("negative", (-2e-10_f64).into()),
            ]),
        );
        assert_eq!(
            lines,
            vec![
                "h.",
                "big(h, 1.0e20).",
                "tiny(h, 1.0e-7).",
                "scaled(h, 1.5e300).",
                "negative(h, -2.0e-10).",
            ]
        );
    }

    #[test]
    fn non_finite_floats_are_lowercase_atoms() {
        let lines = encode(
            "h",
            &props(vec![
                ("nan", f64::NAN.into()),
                ("up", f64::INFINITY.into()),
                ("down", f64::NEG_INFINITY.into()),
            ]),
        );
        assert_eq!(lines, vec!["h.", "nan(h, nan).", "up(h, inf).", "down(h, neg_inf)."]);
    }

    #[test]
    fn list_property_is_one_line() {
        let lines = encode(
            "h",
            &props(vec![("synonyms", vec!["BRCC1", "RNF53", "FANC-S"].into())]),
        );
        assert_eq!(lines, vec!["h.", "synonyms(h, [brcc1,rnf53,fanc_s])."]);
    }

    #[test]
    fn empty_list_is_written() {
        let lines = encode("h", &props(vec![("tags", PropertyValue::Array(Vec::new()))]));
        assert_eq!(lines, vec!["h.", "tags(h, [])."]);
    }

    #[test]
    fn nested_map_recurses_depth_first() {
        let inner = props(vec![("a", 1_i64.into())]);
        let lines = encode(
            "h",
            &props(vec![("k", inner.into()), ("after", "x".into())]),
        );
        assert_eq!(lines, vec!["h.", "k(h).", "a(k(h), 1).", "after(h, x)."]);
    }

    #[test]
    fn doubly_nested_map() {
        let deepest = props(vec![("v", "z".into())]);
        let middle = props(vec![("m", deepest.into())]);
        let lines = encode("h", &props(vec![("outer", middle.into())]));
        assert_eq!(
            lines,
            vec!["h.", "outer(h).", "m(outer(h)).", "v(m(outer(h)), z)."]
        );
    }

    #[test]
    fn absent_values_are_dropped() {
        let lines = encode(
            "h",
            &props(vec![
                ("empty", "".into()),
                ("null", PropertyValue::Null),
                ("kept", "y".into()),
            ]),
        );
        assert_eq!(lines, vec!["h.", "kept(h, y)."]);
    }

    #[test]
    fn excluded_keys_skip_at_every_depth() {
        let excluded: BTreeSet<String> = ["source".to_string()].into();
        let nested = props(vec![("source", "x".into()), ("id", "y".into())]);
        let lines = encode_excluding(
            "h",
            &props(vec![("source", "HPA".into()), ("evidence", nested.into())]),
            &excluded,
        );
        assert_eq!(lines, vec!["h.", "evidence(h).", "id(evidence(h), y)."]);
    }

    #[test]
    fn list_of_maps_is_quoted_json() {
        let element = props(vec![("tissue", "liver".into())]);
        let lines = encode(
            "h",
            &props(vec![("items", PropertyValue::Array(vec![element.into()]))]),
        );
        assert_eq!(lines[1], r#"items(h, ['{"tissue":"liver"}'])."#);
    }

    #[test]
    fn list_of_lists_nests() {
        let lines = encode(
            "h",
            &props(vec![(
                "pairs",
                PropertyValue::Array(vec![vec![1_i64, 2].into(), vec![3_i64].into()]),
            )]),
        );
        assert_eq!(lines[1], "pairs(h, [[1,2],[3]]).");
    }

    #[test]
    fn absent_list_elements_are_dropped() {
        let lines = encode(
            "h",
            &props(vec![(
                "l",
                PropertyValue::Array(vec!["a".into(), "".into(), PropertyValue::Null, "b".into()]),
            )]),
        );
        assert_eq!(lines[1], "l(h, [a,b]).");
    }
}
