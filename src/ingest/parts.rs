/// One row of the required cut list CSV. Field names follow the source
/// spreadsheet's header (`LEN`, `QTY`) rather than Rust convention, since
/// `serde(rename)` binds the odd header once here instead of leaking it
/// into the rest of the crate.
#[derive(Debug, serde::Deserialize)]
pub struct PartRow {
    #[serde(rename = "LEN")]
    pub len: f64,
    #[serde(rename = "QTY")]
    pub qty: u32,
    #[serde(rename = "LABEL / PART DESCRIPTION", default)]
    pub label: String,
}
