//! JSON schemas advertised through `tools/list`.

use serde_json::{json, Value};

use crate::server::protocol::ToolSchema;
use crate::tools::params::{NumberFormat, RefType, DEFAULT_SEARCH_RANGE};
use crate::tools::OpsTool;

pub fn json_schema_object(properties: Value, required: Vec<&str>) -> Value {
    json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

pub fn json_schema_string(description: &str) -> Value {
    json!({
        "type": "string",
        "description": description
    })
}

pub fn json_schema_string_default(description: &str, default: &str) -> Value {
    json!({
        "type": "string",
        "description": description,
        "default": default
    })
}

pub fn json_schema_enum(description: &str, values: &[&str], default: &str) -> Value {
    json!({
        "type": "string",
        "description": description,
        "enum": values,
        "default": default
    })
}

pub fn json_schema_boolean(description: &str) -> Value {
    json!({
        "type": "boolean",
        "description": description,
        "default": false
    })
}

fn number_property() -> Value {
    json_schema_string("Patent, publication or application number, e.g. \"EP1000000\"")
}

fn ref_type_property() -> Value {
    json_schema_enum("Reference type", &RefType::ALL, RefType::Publication.as_str())
}

fn format_property(description: &str, default: NumberFormat) -> Value {
    json_schema_enum(description, &NumberFormat::ALL, default.as_str())
}

fn document_schema() -> Value {
    json_schema_object(
        json!({
            "number": number_property(),
            "ref_type": ref_type_property(),
            "ref_format": format_property("Number format", NumberFormat::Epodoc),
        }),
        vec!["number"],
    )
}

pub fn tool_schema(tool: OpsTool) -> ToolSchema {
    let (description, input_schema) = match tool {
        OpsTool::SearchPatents => (
            "Search published patents with an OPS CQL query. Fields include pa (applicant), \
             ti (title), ab (abstract), pd (publication date), ic (IPC class), pn/an \
             (publication/application number) and all (any field); boolean operators \
             and, or, within, any must be lowercase. Example: \
             pa=huawei and pd within \"2021\" and ti=\"wireless\". \
             If a query using all= fails, retry with ti= and/or ab= only.",
            json_schema_object(
                json!({
                    "q": json_schema_string("CQL query using OPS fields and syntax only"),
                    "range": json_schema_string_default(
                        "Result range such as \"1-25\" (at most 100 per page)",
                        DEFAULT_SEARCH_RANGE,
                    ),
                }),
                vec!["q"],
            ),
        ),
        OpsTool::GetBiblio => (
            "Bibliographic data (titles, applicants, inventors, classifications) for a patent number.",
            document_schema(),
        ),
        OpsTool::GetAbstract => ("Abstract text for a patent number.", document_schema()),
        OpsTool::GetFullCycle => (
            "Full-cycle data for a patent number: all publication stages, citations and search reports.",
            document_schema(),
        ),
        OpsTool::GetFamily => (
            "INPADOC family members for a patent number, optionally restricted to bibliographic or legal data.",
            json_schema_object(
                json!({
                    "number": number_property(),
                    "ref_type": ref_type_property(),
                    "ref_format": format_property("Number format", NumberFormat::Epodoc),
                    "biblio": json_schema_boolean("Return family bibliographic data (takes precedence over legal)"),
                    "legal": json_schema_boolean("Return family legal data"),
                }),
                vec!["number"],
            ),
        ),
        OpsTool::GetLegal => (
            "Legal status and procedural events for a patent number.",
            document_schema(),
        ),
        OpsTool::ConvertNumber => (
            "Convert a patent number between the epodoc, docdb and original formats.",
            json_schema_object(
                json!({
                    "number": number_property(),
                    "ref_type": ref_type_property(),
                    "input_format": format_property("Format of the given number", NumberFormat::Epodoc),
                    "output_format": format_property("Format to convert into", NumberFormat::Docdb),
                }),
                vec!["number"],
            ),
        ),
    };

    ToolSchema {
        name: tool.name().to_owned(),
        description: description.to_owned(),
        input_schema,
    }
}
