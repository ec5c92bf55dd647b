use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, Implementation, ListToolsResult,
    PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::{ErrorData as McpError, ServerHandler};
use serde_json::{json, Map, Value};

use crate::price::service::PriceService;

pub const SERVER_NAME: &str = "crypto_price_tracker";

const GET_CRYPTO_PRICE: &str = "get_crypto_price";

/// MCP server exposing the price lookup as a single `get_crypto_price` tool.
#[derive(Clone)]
pub struct CryptoPriceServer {
    prices: PriceService,
}

impl CryptoPriceServer {
    pub fn new(prices: PriceService) -> Self {
        Self { prices }
    }

    fn get_crypto_price_tool() -> Tool {
        let schema = json!({
            "type": "object",
            "properties": {
                "crypto_id": {
                    "type": "string",
                    "description": "CoinGecko coin id, e.g. \"bitcoin\""
                },
                "currency": {
                    "type": "string",
                    "description": "Quote currency code",
                    "default": "usd"
                }
            },
            "required": ["crypto_id"]
        });
        let schema = match schema {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Tool::new(
            GET_CRYPTO_PRICE,
            "Get the current price of a cryptocurrency in the given quote currency",
            Arc::new(schema),
        )
    }
}

fn parse_arguments(args: &Map<String, Value>) -> Result<(String, String), McpError> {
    let crypto_id = args
        .get("crypto_id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| McpError::invalid_params("missing required argument 'crypto_id'", None))?;
    let currency = args.get("currency").and_then(Value::as_str).unwrap_or("usd");
    Ok((crypto_id.to_string(), currency.to_string()))
}

impl ServerHandler for CryptoPriceServer {
    fn get_info(&self) -> ServerInfo {
        let mut server_info = Implementation::from_build_env();
        server_info.name = SERVER_NAME.to_string();
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info,
            instructions: Some(
                "Exposes get_crypto_price, which returns the current price of a \
                 cryptocurrency from CoinGecko as a human-readable string."
                    .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            next_cursor: None,
            tools: vec![Self::get_crypto_price_tool()],
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        if request.name != GET_CRYPTO_PRICE {
            return Err(McpError::invalid_params(
                format!("unknown tool: {}", request.name),
                None,
            ));
        }

        let args = request.arguments.unwrap_or_default();
        let (crypto_id, currency) = parse_arguments(&args)?;
        let outcome = self.prices.lookup(&crypto_id, &currency).await;

        Ok(CallToolResult::success(vec![Content::text(
            outcome.render(),
        )]))
    }
}
