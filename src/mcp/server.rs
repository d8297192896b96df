use std::path::{Path, PathBuf};

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    cli::{args::CommonArgs, commands::check::run_checks},
    config::{ConfigLoadResult, load_config},
    core::{CheckContext, context::resolve_path, parsers::load_bundle},
    rules::IgnoreList,
};

use super::types::{
    BundleInfo, ConfigDto, ConfigValues, GetBundleParams, GetConfigParams, MockIssueItem,
    Pagination, ScanMocksParams, ScanMocksResult,
};

const DEFAULT_LIMIT: usize = 20;
const MAX_LIMIT: usize = 100;

#[derive(Clone)]
pub struct MocklintMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for MocklintMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl MocklintMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Scan API mocks for hard-coded messages and keys missing from the bundle
    #[tool(
        description = "Check API mock responses against the translation bundle. Reports mocks whose message has no i18n key (missing-i18n-key), keys not defined in the bundle (missing-bundle-entry), and mocks that fail to parse (parse-error). Returns a paginated list of issues."
    )]
    pub async fn scan_mocks(
        &self,
        params: Parameters<ScanMocksParams>,
    ) -> Result<CallToolResult, McpError> {
        let limit = params
            .0
            .limit
            .map(|v| v as usize)
            .unwrap_or(DEFAULT_LIMIT)
            .min(MAX_LIMIT);
        let offset = params.0.offset.map(|v| v as usize).unwrap_or(0);

        let ctx = load_context(&params.0.project_root_path)?;
        let result = run_checks(&ctx, &[]);

        let total_count = result.issues.len();
        let items: Vec<MockIssueItem> = result
            .issues
            .iter()
            .skip(offset)
            .take(limit)
            .map(MockIssueItem::from)
            .collect();
        let has_more = offset + items.len() < total_count;

        let scan_result = ScanMocksResult {
            total_count,
            files_checked: ctx.files.len(),
            parse_error_count: result.parse_error_count,
            items,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        };

        json_result(&scan_result)
    }

    /// Get the translation bundle used for checks
    #[tool(
        description = "Get the translation bundle mocks are checked against: file path, display name, number of keys, and keys exempt from coverage."
    )]
    pub async fn get_bundle(
        &self,
        params: Parameters<GetBundleParams>,
    ) -> Result<CallToolResult, McpError> {
        let root_dir = Path::new(&params.0.project_root_path);
        let config = load_project_config(root_dir)?.config;

        // Does not require the mocks directory
        let bundle_path = resolve_path(root_dir, &config.bundle);
        let bundle = load_bundle(&bundle_path, &config.bundle_name)
            .map_err(|e| McpError::internal_error(format!("{:#}", e), None))?;
        let ignore_list: IgnoreList = config.ignore_keys.into_iter().collect();

        let info = BundleInfo {
            file_path: bundle.file_path.clone(),
            bundle_name: bundle.name.clone(),
            key_count: bundle.len(),
            ignore_keys: ignore_list.keys().into_iter().map(str::to_string).collect(),
        };

        json_result(&info)
    }

    /// Get the current mocklint configuration
    #[tool(description = "Get the current mocklint configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_project_config(path)?;

        let config_dto = ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        };

        json_result(&config_dto)
    }
}

fn load_project_config(root_dir: &Path) -> Result<ConfigLoadResult, McpError> {
    load_config(root_dir)
        .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))
}

fn load_context(project_root_path: &str) -> Result<CheckContext, McpError> {
    let args = CommonArgs {
        root: Some(PathBuf::from(project_root_path)),
        ..CommonArgs::default()
    };

    CheckContext::new(&args)
        .map_err(|e| McpError::internal_error(format!("Failed to initialize: {:#}", e), None))
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("JSON serialization failed: {}", e), None))?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_handler]
impl ServerHandler for MocklintMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Mocklint MCP helps AI agents keep API mock responses wired to the translation bundle.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. get_bundle - Get the translation bundle path, name and key count\n\
                 3. scan_mocks - Get mocks with hard-coded messages or keys missing from the bundle (paginated)\n\n\
                 Recommended Workflow:\n\
                 1. Use scan_mocks to list issues\n\
                 2. For missing-i18n-key, add an `i18n.key` to the mock's first message\n\
                 3. For missing-bundle-entry, add the key to the bundle, or to `ignoreKeys` when it is served from another bundle\n\
                 4. Run scan_mocks again: adding keys to mocks can create new missing-bundle-entry issues."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = MocklintMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
