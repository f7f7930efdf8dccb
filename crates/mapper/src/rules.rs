//! The ordered keyword rule table.
//!
//! Each leaf path is tested against [`RULES`] top to bottom; the first rule
//! whose [`Matcher`] accepts the lower-cased path decides the value. Keeping
//! the table as data makes the precedence visible and testable.

use mantelbogen_format::{format_date, format_euro, format_percent, normalize_text, to_number};
use mantelbogen_types::Payload;
use serde_json::Value;

/// Path fragments that request a `%` suffix on percentage values.
const PERCENT_SYMBOL_MARKERS: &[&str] = &["pct", "prozent"];

/// The semantic slot a rule fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    ProjectName,
    CompanyName,
    StartDate,
    EndDate,
    Duration,
    PersonnelCost,
    ProjectSum,
    FundingSum,
    FundingRate,
    Surcharge,
    MaxProjectSum,
    RealSurcharge,
    Giveaway,
}

/// How a payload value is turned into field text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Render {
    Text,
    Date,
    Currency,
    /// One decimal; suffixed with ` %` when the path carries a symbol marker.
    Percent,
}

/// Keyword predicate over a lower-cased path: every group must contribute at
/// least one contained keyword, and no excluded keyword may appear.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    pub all_of: &'static [&'static [&'static str]],
    pub none_of: &'static [&'static str],
}

impl Matcher {
    pub fn matches(&self, lowered_path: &str) -> bool {
        self.all_of
            .iter()
            .all(|group| group.iter().any(|k| lowered_path.contains(k)))
            && !self.none_of.iter().any(|k| lowered_path.contains(k))
    }
}

/// One row of the rule table.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub category: Category,
    pub matcher: Matcher,
    /// Dotted payload location reported alongside the value.
    pub source: &'static str,
    pub render: Render,
    value: fn(&Payload) -> &Value,
}

impl Rule {
    /// Renders this rule's payload value for the given lower-cased path.
    pub fn render(&self, payload: &Payload, lowered_path: &str) -> String {
        let value = (self.value)(payload);
        match self.render {
            Render::Text => normalize_text(value),
            Render::Date => format_date(&normalize_text(value)),
            Render::Currency => format_euro(to_number(value)),
            Render::Percent => format_percent(to_number(value), wants_percent_symbol(lowered_path)),
        }
    }
}

pub fn wants_percent_symbol(lowered_path: &str) -> bool {
    PERCENT_SYMBOL_MARKERS.iter().any(|m| lowered_path.contains(m))
}

/// The first rule accepting the path, if any.
pub fn first_match(lowered_path: &str) -> Option<&'static Rule> {
    RULES.iter().find(|rule| rule.matcher.matches(lowered_path))
}

pub static RULES: [Rule; 13] = [
    Rule {
        category: Category::ProjectName,
        matcher: Matcher { all_of: &[&["akronym", "projektname"]], none_of: &[] },
        source: "project.name",
        render: Render::Text,
        value: |p| &p.project.name,
    },
    Rule {
        category: Category::CompanyName,
        matcher: Matcher { all_of: &[&["firma", "unternehmensname"]], none_of: &[] },
        source: "company.name",
        render: Render::Text,
        value: |p| &p.company.name,
    },
    Rule {
        category: Category::StartDate,
        matcher: Matcher { all_of: &[&["beginn", "start", "von"]], none_of: &[] },
        source: "project.startDate",
        render: Render::Date,
        value: |p| &p.project.start_date,
    },
    Rule {
        category: Category::EndDate,
        matcher: Matcher { all_of: &[&["ende", "bis"]], none_of: &[] },
        source: "project.endDate",
        render: Render::Date,
        value: |p| &p.project.end_date,
    },
    Rule {
        category: Category::Duration,
        matcher: Matcher { all_of: &[&["dauer"]], none_of: &[] },
        source: "project.durationMonths",
        render: Render::Text,
        value: |p| &p.project.duration_months,
    },
    Rule {
        category: Category::PersonnelCost,
        matcher: Matcher { all_of: &[&["personalkosten"]], none_of: &[] },
        source: "company.computed.personnelCost",
        render: Render::Currency,
        value: |p| &p.company.computed.personnel_cost,
    },
    Rule {
        category: Category::ProjectSum,
        matcher: Matcher { all_of: &[&["projektsumme"]], none_of: &["max"] },
        source: "company.computed.projectSum",
        render: Render::Currency,
        value: |p| &p.company.computed.project_sum,
    },
    Rule {
        category: Category::FundingSum,
        matcher: Matcher { all_of: &[&["foerdersumme", "fördersumme"]], none_of: &[] },
        source: "company.computed.fundingSum",
        render: Render::Currency,
        value: |p| &p.company.computed.funding_sum,
    },
    Rule {
        category: Category::FundingRate,
        matcher: Matcher { all_of: &[&["foerderquote", "förderquote"]], none_of: &[] },
        source: "company.funding.ratePct",
        render: Render::Percent,
        value: |p| &p.company.funding.rate_pct,
    },
    Rule {
        category: Category::Surcharge,
        matcher: Matcher {
            all_of: &[&["zuschlag", "gemeinkosten", "zuschlagsfaktor"]],
            none_of: &["real"],
        },
        source: "company.funding.surchargePct",
        render: Render::Percent,
        value: |p| &p.company.funding.surcharge_pct,
    },
    Rule {
        category: Category::MaxProjectSum,
        matcher: Matcher {
            all_of: &[&["max"], &["foerder", "förder", "projekt"], &["summe", "betrag"]],
            none_of: &[],
        },
        source: "company.funding.maxProjectSum",
        render: Render::Currency,
        value: |p| &p.company.funding.max_project_sum,
    },
    Rule {
        category: Category::RealSurcharge,
        matcher: Matcher { all_of: &[&["real"], &["zuschlag"]], none_of: &[] },
        source: "company.computed.realSurchargePct",
        render: Render::Percent,
        value: |p| &p.company.computed.real_surcharge_pct,
    },
    Rule {
        category: Category::Giveaway,
        matcher: Matcher { all_of: &[&["verschenkt", "differenz"]], none_of: &[] },
        source: "company.computed.verschenkt",
        render: Render::Currency,
        value: |p| &p.company.computed.verschenkt,
    },
];
