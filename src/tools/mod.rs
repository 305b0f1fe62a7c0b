//! The seven OPS tools: argument parsing, URL building, delegation to [`OpsClient`].

pub mod params;
pub mod paths;
pub mod schema;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::error::OpsError;
use crate::server::protocol::ToolSchema;
use crate::sources::fetch::OpsClient;
use params::{ConvertParams, DocumentParams, FamilyParams, SearchParams};
use paths::PublishedView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpsTool {
    SearchPatents,
    GetBiblio,
    GetAbstract,
    GetFullCycle,
    GetFamily,
    GetLegal,
    ConvertNumber,
}

impl OpsTool {
    pub const ALL: [OpsTool; 7] = [
        OpsTool::SearchPatents,
        OpsTool::GetBiblio,
        OpsTool::GetAbstract,
        OpsTool::GetFullCycle,
        OpsTool::GetFamily,
        OpsTool::GetLegal,
        OpsTool::ConvertNumber,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OpsTool::SearchPatents => "search_patents",
            OpsTool::GetBiblio => "get_biblio",
            OpsTool::GetAbstract => "get_abstract",
            OpsTool::GetFullCycle => "get_full_cycle",
            OpsTool::GetFamily => "get_family",
            OpsTool::GetLegal => "get_legal",
            OpsTool::ConvertNumber => "convert_number",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }
}

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("unknown tool '{0}'")]
    UnknownTool(String),

    #[error("invalid arguments for {tool}: {message}")]
    InvalidArguments { tool: &'static str, message: String },

    #[error(transparent)]
    Ops(#[from] OpsError),
}

/// Tool adapters over one shared [`OpsClient`].
#[derive(Debug, Clone)]
pub struct PatentTools {
    client: OpsClient,
}

impl PatentTools {
    pub fn new(client: OpsClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &OpsClient {
        &self.client
    }

    pub fn list_schemas(&self) -> Vec<ToolSchema> {
        OpsTool::ALL.into_iter().map(schema::tool_schema).collect()
    }

    /// Dispatch a `tools/call` by name. `arguments` may be `null` for "no arguments".
    pub async fn call(&self, name: &str, arguments: Value) -> Result<Value, ToolError> {
        let tool = OpsTool::from_name(name).ok_or_else(|| ToolError::UnknownTool(name.to_owned()))?;
        info!(tool = tool.name(), "tool call");

        let result = match tool {
            OpsTool::SearchPatents => self.search_patents(parse_args(tool, arguments)?).await,
            OpsTool::GetBiblio => self.get_biblio(parse_args(tool, arguments)?).await,
            OpsTool::GetAbstract => self.get_abstract(parse_args(tool, arguments)?).await,
            OpsTool::GetFullCycle => self.get_full_cycle(parse_args(tool, arguments)?).await,
            OpsTool::GetFamily => self.get_family(parse_args(tool, arguments)?).await,
            OpsTool::GetLegal => self.get_legal(parse_args(tool, arguments)?).await,
            OpsTool::ConvertNumber => self.convert_number(parse_args(tool, arguments)?).await,
        };

        result.map_err(|e| {
            warn!(tool = tool.name(), error = %e, "tool call failed");
            ToolError::Ops(e)
        })
    }

    pub async fn search_patents(&self, params: SearchParams) -> Result<Value, OpsError> {
        let url = paths::search_url(self.client.base_url());
        let query = [("q", params.q.as_str()), ("Range", params.range.as_str())];
        self.client.fetch(&url, Some(&query[..])).await
    }

    pub async fn get_biblio(&self, params: DocumentParams) -> Result<Value, OpsError> {
        self.published_data(params, PublishedView::Biblio).await
    }

    pub async fn get_abstract(&self, params: DocumentParams) -> Result<Value, OpsError> {
        self.published_data(params, PublishedView::Abstract).await
    }

    pub async fn get_full_cycle(&self, params: DocumentParams) -> Result<Value, OpsError> {
        self.published_data(params, PublishedView::FullCycle).await
    }

    pub async fn get_family(&self, params: FamilyParams) -> Result<Value, OpsError> {
        let url = paths::family_url(self.client.base_url(), &params);
        self.client.fetch(&url, None).await
    }

    pub async fn get_legal(&self, params: DocumentParams) -> Result<Value, OpsError> {
        let url = paths::legal_url(self.client.base_url(), &params);
        self.client.fetch(&url, None).await
    }

    pub async fn convert_number(&self, params: ConvertParams) -> Result<Value, OpsError> {
        let url = paths::number_service_url(self.client.base_url(), &params);
        self.client.fetch(&url, None).await
    }

    async fn published_data(&self, params: DocumentParams, view: PublishedView) -> Result<Value, OpsError> {
        let url = paths::published_data_url(self.client.base_url(), &params, view);
        self.client.fetch(&url, None).await
    }
}

fn parse_args<T: DeserializeOwned>(tool: OpsTool, arguments: Value) -> Result<T, ToolError> {
    let arguments = if arguments.is_null() {
        Value::Object(Default::default())
    } else {
        arguments
    };
    serde_json::from_value(arguments).map_err(|e| ToolError::InvalidArguments {
        tool: tool.name(),
        message: e.to_string(),
    })
}
