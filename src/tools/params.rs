//! Tool arguments with their documented defaults.
//!
//! `ref_type` and the number formats name the values OPS documents. Anything
//! else is kept verbatim and forwarded, so OPS itself decides whether it is
//! acceptable. Argument names outside a tool's schema are ignored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which kind of number is being looked up.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RefType {
    #[default]
    Publication,
    Application,
    #[serde(untagged)]
    Other(String),
}

impl RefType {
    pub const ALL: [&'static str; 2] = ["publication", "application"];

    pub fn as_str(&self) -> &str {
        match self {
            RefType::Publication => "publication",
            RefType::Application => "application",
            RefType::Other(value) => value,
        }
    }
}

/// OPS patent-number formatting conventions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberFormat {
    #[default]
    Epodoc,
    Docdb,
    Original,
    #[serde(untagged)]
    Other(String),
}

impl NumberFormat {
    pub const ALL: [&'static str; 3] = ["epodoc", "docdb", "original"];

    pub fn as_str(&self) -> &str {
        match self {
            NumberFormat::Epodoc => "epodoc",
            NumberFormat::Docdb => "docdb",
            NumberFormat::Original => "original",
            NumberFormat::Other(value) => value,
        }
    }
}

impl fmt::Display for RefType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const DEFAULT_SEARCH_RANGE: &str = "1-200";

/// `search_patents`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    /// CQL query
    pub q: String,
    /// page range such as `1-25`
    #[serde(default = "default_range")]
    pub range: String,
}

/// `get_biblio`, `get_abstract`, `get_full_cycle`, `get_legal`
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentParams {
    pub number: String,
    #[serde(default)]
    pub ref_type: RefType,
    #[serde(default)]
    pub ref_format: NumberFormat,
}

/// `get_family`. With both flags set, `biblio` wins.
#[derive(Debug, Clone, Deserialize)]
pub struct FamilyParams {
    pub number: String,
    #[serde(default)]
    pub ref_type: RefType,
    #[serde(default)]
    pub ref_format: NumberFormat,
    #[serde(default)]
    pub biblio: bool,
    #[serde(default)]
    pub legal: bool,
}

/// `convert_number`
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertParams {
    pub number: String,
    #[serde(default)]
    pub ref_type: RefType,
    #[serde(default)]
    pub input_format: NumberFormat,
    #[serde(default = "default_output_format")]
    pub output_format: NumberFormat,
}

fn default_range() -> String {
    DEFAULT_SEARCH_RANGE.to_owned()
}

fn default_output_format() -> NumberFormat {
    NumberFormat::Docdb
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn document_defaults_are_publication_epodoc() {
        let params: DocumentParams = serde_json::from_value(json!({"number": "EP1000000"})).unwrap();
        assert_eq!(params.ref_type, RefType::Publication);
        assert_eq!(params.ref_format, NumberFormat::Epodoc);
    }

    #[test]
    fn convert_defaults_to_epodoc_into_docdb() {
        let params: ConvertParams = serde_json::from_value(json!({"number": "EP1000000"})).unwrap();
        assert_eq!(params.input_format, NumberFormat::Epodoc);
        assert_eq!(params.output_format, NumberFormat::Docdb);
    }

    #[test]
    fn search_range_defaults() {
        let params: SearchParams = serde_json::from_value(json!({"q": "pa=huawei"})).unwrap();
        assert_eq!(params.range, "1-200");
    }

    #[test]
    fn undocumented_values_are_kept_verbatim() {
        let params: DocumentParams = serde_json::from_value(json!({
            "number": "EP1",
            "ref_type": "priority",
            "ref_format": "DOCDB"
        }))
        .unwrap();
        assert_eq!(params.ref_type, RefType::Other("priority".into()));
        assert_eq!(params.ref_format, NumberFormat::Other("DOCDB".into()));
        assert_eq!(params.ref_format.to_string(), "DOCDB");

        let known: ConvertParams = serde_json::from_value(json!({"number": "EP1", "output_format": "original"})).unwrap();
        assert_eq!(known.output_format, NumberFormat::Original);
    }

    #[test]
    fn non_string_enum_values_are_rejected() {
        let bad = serde_json::from_value::<DocumentParams>(json!({"number": "EP1", "ref_type": 7}));
        assert!(bad.is_err());
    }

    #[test]
    fn unknown_argument_names_are_ignored() {
        let params: FamilyParams = serde_json::from_value(json!({
            "number": "EP1000000",
            "biblio": true,
            "verbose": true,
            "page": 3
        }))
        .unwrap();
        assert_eq!(params.number, "EP1000000");
        assert!(params.biblio);

        let search: SearchParams = serde_json::from_value(json!({"q": "ti=plastic", "limit": 5})).unwrap();
        assert_eq!(search.range, DEFAULT_SEARCH_RANGE);
    }

    #[test]
    fn missing_number_is_rejected() {
        assert!(serde_json::from_value::<FamilyParams>(json!({"biblio": true})).is_err());
    }
}
