//! The caller-supplied payload: project, company and work-package figures.
//!
//! Every leaf value is kept as a raw [`serde_json::Value`] because callers send
//! numbers, numeric strings and free text interchangeably. Rendering into the
//! document's conventions happens later, in the formatter.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Treats an explicit `null` the same as an absent key.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Like [`nullable`], but only a JSON object fills the group. Derived struct
/// deserializers would also read an array positionally.
fn object_or_null<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(T::default()),
        value => from_object(value).map_err(D::Error::custom),
    }
}

/// A list of objects, or `null` for an empty list.
fn object_list_or_null<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .into_iter()
            .map(from_object)
            .collect::<Result<_, _>>()
            .map_err(D::Error::custom),
        other => Err(D::Error::custom(format!("expected a list or null, found {}", other))),
    }
}

fn from_object<T: DeserializeOwned>(value: Value) -> Result<T, serde_json::Error> {
    if !value.is_object() {
        return Err(serde_json::Error::custom(format!("expected an object, found {}", value)));
    }
    serde_json::from_value(value)
}

/// The complete semantic input of an analyze or fill call.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    #[serde(default, deserialize_with = "object_or_null")]
    pub project: ProjectInfo,
    #[serde(default, deserialize_with = "object_or_null")]
    pub company: CompanyInfo,
    #[serde(default, deserialize_with = "object_list_or_null")]
    pub work_packages: Vec<WorkPackage>,
}

impl Payload {
    /// Parses a payload from its JSON text. The top level must be an object.
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        Self::from_value(serde_json::from_str(source)?)
    }

    /// Builds a payload from an already parsed JSON value, which must be an
    /// object.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        from_object(value)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub start_date: Value,
    #[serde(default)]
    pub end_date: Value,
    #[serde(default)]
    pub duration_months: Value,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    #[serde(default)]
    pub name: Value,
    #[serde(default, deserialize_with = "object_or_null")]
    pub funding: FundingParams,
    #[serde(default, deserialize_with = "object_or_null")]
    pub computed: ComputedFigures,
    /// Funding amount per calendar year, keyed by the year as text.
    #[serde(default, deserialize_with = "nullable")]
    pub yearly_funding_sums: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingParams {
    #[serde(default)]
    pub rate_pct: Value,
    #[serde(default)]
    pub surcharge_pct: Value,
    #[serde(default)]
    pub max_project_sum: Value,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedFigures {
    #[serde(default)]
    pub personnel_cost: Value,
    #[serde(default)]
    pub project_sum: Value,
    #[serde(default)]
    pub funding_sum: Value,
    #[serde(default)]
    pub real_surcharge_pct: Value,
    /// Funding left unclaimed; the name is part of the payload contract.
    #[serde(default)]
    pub verschenkt: Value,
}

/// One work package ("Arbeitspaket"). Its ordinal in the list, not `nr`,
/// decides which `ap{n}_*` fields it fills.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WorkPackage {
    #[serde(default)]
    pub nr: Value,
    #[serde(default)]
    pub title: Value,
    #[serde(default)]
    pub pm: Value,
}
