//! Builds the field map for one payload over one set of leaf paths.
//!
//! Three passes run in order, each only over paths still without an entry:
//! 1. The fixed rule table ([`crate::rules::RULES`]).
//! 2. Work-package fields (`ap{n}_nr`, `ap{n}_bezeichnung`, `ap{n}_pm`).
//! 3. Yearly funding sums (`jahr_{year}`).
//!
//! A match whose rendered value is empty writes nothing and leaves the path
//! open for the later passes.

use crate::rules::first_match;
use indexmap::IndexMap;
use mantelbogen_format::{format_euro, normalize_text, to_number};
use mantelbogen_types::{FieldMapping, LeafPath, Payload};
use std::collections::HashMap;

/// The mappings chosen for a document, in leaf-index order.
#[derive(Debug, Clone, Default)]
pub struct FieldMap {
    entries: IndexMap<LeafPath, FieldMapping>,
}

impl FieldMap {
    pub fn get(&self, path: &LeafPath) -> Option<&FieldMapping> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &LeafPath) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldMapping> {
        self.entries.values()
    }
}

/// Collects matches per path before they are put into index order.
#[derive(Default)]
struct Matches {
    found: HashMap<LeafPath, FieldMapping>,
}

impl Matches {
    fn is_open(&self, path: &LeafPath) -> bool {
        !self.found.contains_key(path)
    }

    /// Records a match unless the value is empty. Returns whether it was kept.
    fn record(&mut self, path: &LeafPath, value: String, source: String) -> bool {
        if value.is_empty() {
            return false;
        }
        self.found.insert(path.clone(), FieldMapping { path: path.clone(), value, source });
        true
    }
}

/// Maps every leaf path the payload has a value for.
pub fn build_field_map(payload: &Payload, paths: &[LeafPath]) -> FieldMap {
    let mut matches = Matches::default();
    apply_rules(payload, paths, &mut matches);
    apply_work_packages(payload, paths, &mut matches);
    apply_yearly_sums(payload, paths, &mut matches);

    let entries: IndexMap<LeafPath, FieldMapping> = paths
        .iter()
        .filter_map(|path| matches.found.remove(path).map(|m| (path.clone(), m)))
        .collect();
    log::debug!("Mapped {} of {} leaf paths", entries.len(), paths.len());
    FieldMap { entries }
}

fn apply_rules(payload: &Payload, paths: &[LeafPath], matches: &mut Matches) {
    for path in paths {
        let lowered = path.lowered();
        let Some(rule) = first_match(&lowered) else {
            continue;
        };
        let value = rule.render(payload, &lowered);
        if !matches.record(path, value, rule.source.to_string()) {
            log::debug!("{:?} matched {:?} but the payload value is empty", path.as_str(), rule.category);
        }
    }
}

fn apply_work_packages(payload: &Payload, paths: &[LeafPath], matches: &mut Matches) {
    for (i, package) in payload.work_packages.iter().enumerate() {
        let n = i + 1;
        let fields = [
            (format!("ap{}_nr", n), normalize_text(&package.nr)),
            (format!("ap{}_bezeichnung", n), normalize_text(&package.title)),
            (format!("ap{}_pm", n), normalize_text(&package.pm)),
        ];
        let source = format!("workPackages[{}]", i);

        for path in paths {
            if !matches.is_open(path) {
                continue;
            }
            // Later fragments overwrite earlier ones on the same path.
            let lowered = path.lowered();
            for (key, value) in &fields {
                if lowered.contains(key.as_str()) {
                    matches.record(path, value.clone(), source.clone());
                }
            }
        }
    }
}

fn apply_yearly_sums(payload: &Payload, paths: &[LeafPath], matches: &mut Matches) {
    for (year, amount) in &payload.company.yearly_funding_sums {
        let year = year.trim();
        if year.is_empty() {
            continue;
        }
        let key = format!("jahr_{}", year.to_lowercase());
        let value = format_euro(to_number(amount));

        for path in paths {
            if matches.is_open(path) && path.lowered().contains(&key) {
                matches.record(path, value.clone(), format!("company.yearlyFundingSums.{}", year));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn paths(raw: &[&str]) -> Vec<LeafPath> {
        raw.iter().map(|p| LeafPath::from(*p)).collect()
    }

    fn payload() -> Payload {
        Payload::from_value(json!({
            "project": {
                "name": "ProjektX",
                "startDate": "2024-03-05",
                "endDate": "31.12.2026",
                "durationMonths": 34
            },
            "company": {
                "name": "ACME GmbH",
                "funding": { "ratePct": 50, "surchargePct": "100", "maxProjectSum": 400000 },
                "computed": {
                    "personnelCost": 1234.5,
                    "projectSum": 200000,
                    "fundingSum": "",
                    "realSurchargePct": 87.26,
                    "verschenkt": null
                },
                "yearlyFundingSums": { "2025": 10000, "2024": 5000.5 }
            },
            "workPackages": [
                { "nr": "1", "title": "Konzept", "pm": 6 },
                { "nr": "2", "title": "Umsetzung", "pm": null }
            ]
        }))
        .unwrap()
    }

    fn value<'a>(map: &'a FieldMap, path: &str) -> Option<&'a str> {
        map.get(&LeafPath::from(path)).map(|m| m.value.as_str())
    }

    #[test]
    fn test_fixed_rules_render_values() {
        let leaves = paths(&[
            "formular/akronym",
            "formular/firma",
            "formular/projektbeginn",
            "formular/projektende",
            "formular/dauer",
            "formular/personalkosten",
            "formular/projektsumme",
            "formular/foerderquote_pct",
            "formular/gemeinkosten",
            "formular/maxprojektsumme",
            "formular/realzuschlag_prozent",
        ]);
        let map = build_field_map(&payload(), &leaves);

        assert_eq!(value(&map, "formular/akronym"), Some("ProjektX"));
        assert_eq!(value(&map, "formular/firma"), Some("ACME GmbH"));
        assert_eq!(value(&map, "formular/projektbeginn"), Some("05.03.2024"));
        assert_eq!(value(&map, "formular/projektende"), Some("31.12.2026"));
        assert_eq!(value(&map, "formular/dauer"), Some("34"));
        assert_eq!(value(&map, "formular/personalkosten"), Some("1.234,50"));
        assert_eq!(value(&map, "formular/projektsumme"), Some("200.000,00"));
        assert_eq!(value(&map, "formular/foerderquote_pct"), Some("50,0 %"));
        assert_eq!(value(&map, "formular/gemeinkosten"), Some("100,0"));
        assert_eq!(value(&map, "formular/maxprojektsumme"), Some("400.000,00"));
        assert_eq!(value(&map, "formular/realzuschlag_prozent"), Some("87,3 %"));
        assert_eq!(
            map.get(&LeafPath::from("formular/maxprojektsumme")).unwrap().source,
            "company.funding.maxProjectSum"
        );
    }

    #[test]
    fn test_currency_rules_write_zero_for_missing_numbers() {
        let leaves = paths(&["formular/foerdersumme", "formular/verschenkt"]);
        let map = build_field_map(&payload(), &leaves);
        assert_eq!(value(&map, "formular/foerdersumme"), Some("0,00"));
        assert_eq!(value(&map, "formular/verschenkt"), Some("0,00"));
    }

    #[test]
    fn test_empty_text_values_are_not_mapped() {
        let leaves = paths(&["formular/akronym", "formular/beginn"]);
        let map = build_field_map(&Payload::default(), &leaves);
        assert!(map.is_empty());
    }

    #[test]
    fn test_work_package_pass() {
        let leaves = paths(&[
            "formular/ap/ap1_nr",
            "formular/ap/ap1_bezeichnung",
            "formular/ap/ap1_pm",
            "formular/ap/ap2_nr",
            "formular/ap/ap2_bezeichnung",
            "formular/ap/ap2_pm",
            "formular/ap/ap3_nr",
        ]);
        let map = build_field_map(&payload(), &leaves);

        assert_eq!(value(&map, "formular/ap/ap1_nr"), Some("1"));
        assert_eq!(value(&map, "formular/ap/ap1_bezeichnung"), Some("Konzept"));
        assert_eq!(value(&map, "formular/ap/ap1_pm"), Some("6"));
        assert_eq!(value(&map, "formular/ap/ap2_bezeichnung"), Some("Umsetzung"));
        assert_eq!(value(&map, "formular/ap/ap2_pm"), None);
        assert_eq!(value(&map, "formular/ap/ap3_nr"), None);
        assert_eq!(map.get(&LeafPath::from("formular/ap/ap2_nr")).unwrap().source, "workPackages[1]");
    }

    #[test]
    fn test_last_work_package_fragment_wins() {
        let leaves = paths(&["formular/ap1_nr_ap1_pm", "formular/ap2_nr_ap2_pm"]);
        let map = build_field_map(&payload(), &leaves);
        assert_eq!(value(&map, "formular/ap1_nr_ap1_pm"), Some("6"));
        // An empty later value does not clear an earlier match.
        assert_eq!(value(&map, "formular/ap2_nr_ap2_pm"), Some("2"));
    }

    #[test]
    fn test_fixed_rules_take_precedence_over_work_packages() {
        // "ap1_beginn" matches the start date rule first.
        let leaves = paths(&["formular/ap1_beginn_ap1_nr"]);
        let map = build_field_map(&payload(), &leaves);
        assert_eq!(value(&map, "formular/ap1_beginn_ap1_nr"), Some("05.03.2024"));
    }

    #[test]
    fn test_yearly_sums_pass() {
        let leaves = paths(&["formular/summen/jahr_2024", "formular/summen/jahr_2025", "formular/summen/jahr_2026"]);
        let map = build_field_map(&payload(), &leaves);
        assert_eq!(value(&map, "formular/summen/jahr_2024"), Some("5.000,50"));
        assert_eq!(value(&map, "formular/summen/jahr_2025"), Some("10.000,00"));
        assert_eq!(value(&map, "formular/summen/jahr_2026"), None);
        assert_eq!(
            map.get(&LeafPath::from("formular/summen/jahr_2025")).unwrap().source,
            "company.yearlyFundingSums.2025"
        );
    }

    #[test]
    fn test_mapping_preserves_index_order() {
        let leaves = paths(&[
            "formular/summen/jahr_2024",
            "formular/ap1_nr",
            "formular/notiz",
            "formular/akronym",
        ]);
        let map = build_field_map(&payload(), &leaves);
        let order: Vec<&str> = map.iter().map(|m| m.path.as_str()).collect();
        assert_eq!(order, vec!["formular/summen/jahr_2024", "formular/ap1_nr", "formular/akronym"]);
        assert!(!map.contains(&LeafPath::from("formular/notiz")));
    }
}
