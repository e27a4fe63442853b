//! Field-descriptor resolution.
//!
//! Turns the raw [`FieldSpec`] table declared by a record type into the
//! resolved, deterministically ordered [`FieldDescriptor`] list the codec
//! caches for its lifetime. Resolution applies the selection policy (ignored
//! fields, reference-kind fields) and fixes the two orderings the codec
//! relies on: name order for value emission and column matching, display
//! order for header generation.

use crate::config::CodecConfig;
use crate::record::{FieldSpec, ValueKind};

/// Resolved metadata for one serializable field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: &'static str,
    kind: ValueKind,
    display_name: &'static str,
    display_order: Option<u32>,
}

impl FieldDescriptor {
    /// Field name; the CSV column key, matched case-insensitively on decode.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared value kind.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Header title; defaults to the field name.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    /// Explicit header position, if annotated.
    #[must_use]
    pub fn display_order(&self) -> Option<u32> {
        self.display_order
    }

    /// True when the descriptor matches the given column title,
    /// case-insensitively by field name.
    #[must_use]
    pub fn matches_column(&self, title: &str) -> bool {
        self.name.eq_ignore_ascii_case(title)
    }
}

/// Resolves the descriptor set for a record type.
///
/// Drops ignored specs, drops [`ValueKind::Other`] specs while the
/// reference-field policy is enabled, and sorts the survivors ascending by
/// field name. The result is deterministic for a given spec table and
/// policy, so text encoded through one codec instance decodes through
/// another built with the same configuration.
pub(crate) fn resolve(specs: Vec<FieldSpec>, config: &CodecConfig) -> Vec<FieldDescriptor> {
    let mut descriptors: Vec<FieldDescriptor> = specs
        .into_iter()
        .filter(|spec| !spec.ignored)
        .filter(|spec| !(config.ignore_reference_fields && spec.kind == ValueKind::Other))
        .map(|spec| FieldDescriptor {
            name: spec.name,
            kind: spec.kind,
            display_name: spec.display_name.unwrap_or(spec.name),
            display_order: spec.display_order,
        })
        .collect();

    descriptors.sort_by(|a, b| a.name.cmp(b.name));
    descriptors
}

/// Returns the descriptors in header order: explicit display order first,
/// unordered fields after all ordered ones, ties broken by field name.
pub(crate) fn header_order(descriptors: &[FieldDescriptor]) -> Vec<&FieldDescriptor> {
    let mut ordered: Vec<&FieldDescriptor> = descriptors.iter().collect();
    ordered.sort_by_key(|d| (d.display_order.unwrap_or(u32::MAX), d.name));
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specs() -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("zeta", ValueKind::Text),
            FieldSpec::new("alpha", ValueKind::Integer),
            FieldSpec::new("secret", ValueKind::Text).ignored(),
            FieldSpec::new("blob", ValueKind::Other),
        ]
    }

    #[test]
    fn test_resolve_sorts_by_name() {
        let descriptors = resolve(specs(), &CodecConfig::default());
        let names: Vec<_> = descriptors.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_resolve_drops_ignored_fields() {
        let descriptors = resolve(specs(), &CodecConfig::default());
        assert!(!descriptors.iter().any(|d| d.name() == "secret"));
    }

    #[test]
    fn test_resolve_reference_policy() {
        let strict = resolve(specs(), &CodecConfig::default());
        assert!(!strict.iter().any(|d| d.name() == "blob"));

        let lenient = CodecConfig {
            ignore_reference_fields: false,
            ..CodecConfig::default()
        };
        let all = resolve(specs(), &lenient);
        assert!(all.iter().any(|d| d.name() == "blob"));
    }

    #[test]
    fn test_resolve_empty_specs_is_legal() {
        assert!(resolve(Vec::new(), &CodecConfig::default()).is_empty());
    }

    #[test]
    fn test_display_name_defaults_to_field_name() {
        let descriptors = resolve(
            vec![FieldSpec::new("plain", ValueKind::Text)],
            &CodecConfig::default(),
        );
        assert_eq!(descriptors[0].display_name(), "plain");
    }

    #[test]
    fn test_header_order_annotated_before_unordered() {
        let descriptors = resolve(
            vec![
                FieldSpec::new("unordered", ValueKind::Text),
                FieldSpec::new("second", ValueKind::Text).display_order(2),
                FieldSpec::new("first", ValueKind::Text).display_order(1),
            ],
            &CodecConfig::default(),
        );
        let names: Vec<_> = header_order(&descriptors)
            .iter()
            .map(|d| d.name())
            .collect();
        assert_eq!(names, vec!["first", "second", "unordered"]);
    }

    #[test]
    fn test_header_order_ties_broken_by_name() {
        let descriptors = resolve(
            vec![
                FieldSpec::new("bravo", ValueKind::Text),
                FieldSpec::new("alpha", ValueKind::Text),
                FieldSpec::new("tail", ValueKind::Text).display_order(7),
            ],
            &CodecConfig::default(),
        );
        let names: Vec<_> = header_order(&descriptors)
            .iter()
            .map(|d| d.name())
            .collect();
        assert_eq!(names, vec!["tail", "alpha", "bravo"]);
    }

    #[test]
    fn test_matches_column_case_insensitive() {
        let descriptors = resolve(
            vec![FieldSpec::new("EmpId", ValueKind::Integer)],
            &CodecConfig::default(),
        );
        assert!(descriptors[0].matches_column("empid"));
        assert!(descriptors[0].matches_column("EMPID"));
        assert!(!descriptors[0].matches_column("emp_id"));
    }
}
