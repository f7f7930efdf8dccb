use serde_json::{Value, json};

/// A datasets packet shaped like a ZIM cover sheet, with `identity` as the
/// acronym already present in the document.
pub fn cover_sheet_datasets(identity: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<xfa:datasets xmlns:xfa="http://www.xfa.org/schema/xfa-data/1.0/">
  <xfa:data>
    <formular>
      <teil_1>
        <akronym>{}</akronym>
        <projektname/>
        <firma></firma>
        <projektbeginn/>
        <projektende/>
        <dauer/>
      </teil_1>
      <finanzen>
        <personalkosten/>
        <projektsumme/>
        <foerdersumme/>
        <foerderquote_pct/>
        <gemeinkosten/>
        <maxprojektsumme/>
        <realzuschlag/>
        <verschenkt/>
      </finanzen>
      <ap><ap1_nr/><ap1_bezeichnung/><ap1_pm/></ap>
      <ap><ap2_nr/><ap2_bezeichnung/><ap2_pm/></ap>
      <summen><jahr_2024/><jahr_2025/></summen>
      <notiz>bleibt &amp; unverändert</notiz>
    </formular>
  </xfa:data>
  <dd:dataDescription xmlns:dd="http://ns.adobe.com/data-description/" dd:name="formular"/>
</xfa:datasets>"#,
        identity
    )
}

/// Number of leaves in [`cover_sheet_datasets`].
pub const COVER_SHEET_LEAVES: usize = 23;

/// A payload that has a value for every cover sheet leaf except `notiz`.
pub fn full_payload(project_name: &str) -> Value {
    json!({
        "project": {
            "name": project_name,
            "startDate": "2024-01-01",
            "endDate": "2025-12-31",
            "durationMonths": 24
        },
        "company": {
            "name": "Müller & Söhne GmbH",
            "funding": { "ratePct": 50, "surchargePct": 100, "maxProjectSum": "450000" },
            "computed": {
                "personnelCost": 1234.5,
                "projectSum": 246900,
                "fundingSum": 123450,
                "realSurchargePct": 87.26,
                "verschenkt": -12.5
            },
            "yearlyFundingSums": { "2024": 60000, "2025": 63450 }
        },
        "workPackages": [
            { "nr": 1, "title": "Konzeption", "pm": 6 },
            { "nr": 2, "title": "Umsetzung & Test", "pm": "12,5" }
        ]
    })
}

/// Number of leaves [`full_payload`] fills in [`cover_sheet_datasets`].
pub const FULL_PAYLOAD_FILLED: usize = 22;
