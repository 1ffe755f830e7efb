//! Brew Calculator MCP Server Implementation
//!
//! Thin adapter from MCP tool calls to the calculator tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};

use crate::tools::calculator;
use crate::tools::status::StatusTracker;

/// Brew Calculator MCP Service
#[derive(Clone)]
pub struct BrewService {
    status_tracker: Arc<StatusTracker>,
    tool_router: ToolRouter<BrewService>,
}

impl BrewService {
    pub fn new() -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new()),
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for BrewService {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RecipeParams {
    /// Recipe object (see calculator_instructions for the format)
    pub recipe: serde_json::Value,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateIbuParams {
    /// Recipe object (see calculator_instructions for the format)
    pub recipe: serde_json::Value,
    /// Original gravity (e.g. 1.054); computed from the recipe when omitted
    pub og: Option<f64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateAbvParams {
    /// Original gravity (e.g. 1.050)
    pub og: f64,
    /// Final gravity (e.g. 1.010)
    pub fg: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertUnitsParams {
    pub value: f64,
    /// Source unit: g, kg, oz, lb, ml, l, gal
    pub from: String,
    /// Target unit: g, kg, oz, lb, ml, l, gal
    pub to: String,
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

fn recipe_from(value: serde_json::Value) -> Result<crate::models::Recipe, McpError> {
    calculator::parse_recipe(value).map_err(|e| McpError::invalid_params(e, None))
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl BrewService {
    // --- Status ---

    #[tool(description = "Get the current status of the brew calculator including build info and process information")]
    fn brew_status(&self) -> Result<CallToolResult, McpError> {
        to_json(&self.status_tracker.get_status())
    }

    #[tool(description = "Get the recipe format and calculation order. Call this before the first calculation in a session.")]
    fn calculator_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CALCULATOR_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CALCULATOR_INSTRUCTIONS)]))
    }

    // --- Calculations ---

    #[tool(description = "Total recipe mass in pounds, with fermentable, hop, yeast, and item subtotals")]
    fn calc_batch_size(&self, Parameters(p): Parameters<RecipeParams>) -> Result<CallToolResult, McpError> {
        let recipe = recipe_from(p.recipe)?;
        to_json(&calculator::calc_batch_size(&recipe))
    }

    #[tool(description = "Original and final gravity of a recipe, with each fermentable's gravity points")]
    fn calculate_gravity(&self, Parameters(p): Parameters<RecipeParams>) -> Result<CallToolResult, McpError> {
        let recipe = recipe_from(p.recipe)?;
        to_json(&calculator::calculate_gravity(&recipe))
    }

    #[tool(description = "Bitterness (IBU) of a recipe at the given original gravity. Hops without alpha acid are ignored.")]
    fn calculate_ibu(&self, Parameters(p): Parameters<CalculateIbuParams>) -> Result<CallToolResult, McpError> {
        let recipe = recipe_from(p.recipe)?;
        to_json(&calculator::calculate_ibu(&recipe, p.og))
    }

    #[tool(description = "Alcohol by volume from original and final gravity, rounded to a whole percent")]
    fn calculate_abv(&self, Parameters(p): Parameters<CalculateAbvParams>) -> Result<CallToolResult, McpError> {
        to_json(&calculator::calculate_abv(p.og, p.fg))
    }

    #[tool(description = "Run every calculation on a recipe: batch mass, boil size, OG, FG, ABV, IBU")]
    fn analyze_recipe(&self, Parameters(p): Parameters<RecipeParams>) -> Result<CallToolResult, McpError> {
        let recipe = recipe_from(p.recipe)?;
        let analysis = calculator::analyze_recipe(&recipe);
        tracing::info!(
            "Analyzed '{}': OG {:.3}, FG {:.3}, {} IBU, {}% ABV",
            analysis.name,
            analysis.og,
            analysis.fg,
            analysis.ibu.round(),
            analysis.abv
        );
        to_json(&analysis)
    }

    // --- Units ---

    #[tool(description = "Convert a quantity between g, kg, oz, lb (mass) or ml, oz, l, gal (volume)")]
    fn convert_units(&self, Parameters(p): Parameters<ConvertUnitsParams>) -> Result<CallToolResult, McpError> {
        let result = calculator::convert_units(p.value, &p.from, &p.to)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for BrewService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "brewcalc".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Brew Calculator".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Brew Calculator - gravity, bitterness, and alcohol metrics for beer recipes. \
                 IMPORTANT: Call calculator_instructions for the recipe format. \
                 Calculations: calc_batch_size, calculate_gravity, calculate_ibu, calculate_abv, analyze_recipe. \
                 Units: convert_units. Status: brew_status."
                    .into(),
            ),
        }
    }
}
