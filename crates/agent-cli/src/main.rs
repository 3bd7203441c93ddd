//! Command-line interface for the travel agents
//!
//! Runs the travel tools locally and prints the agent declarations a host
//! runtime would load. Model-driven runs need a host runner and are not
//! available here; invoking an agent tool reports that.

use agent_tools::{Tool, ToolKind};
use agent_travel::hotel::DEFAULT_HOTEL_TYPE;
use agent_travel::itinerary::DEFAULT_DESTINATION;
use agent_travel::{AgentApp, AgentFactory, AgentPattern, TravelConfig, tools};
use agent_utils::LogFormat;
use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use comfy_table::Table;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "agent-cli")]
#[command(about = "Run and inspect the travel agents", long_about = None)]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Current weather for a city
    Weather { city: String },
    /// Itinerary suggestions for a weather description
    Itinerary {
        weather_report: String,
        #[arg(long, default_value = DEFAULT_DESTINATION)]
        city: String,
    },
    /// Book a hotel
    Hotel {
        city: String,
        #[arg(long, default_value = DEFAULT_HOTEL_TYPE)]
        hotel_type: String,
    },
    /// Book a theme park ticket if the weather allows
    Ticket { weather_report: String },
    /// Current time in UTC
    Time,
    /// List the root agent's tools
    Tools(Selection),
    /// Print the root agent's declaration as JSON
    Describe(Selection),
    /// Execute a tool by name with JSON parameters
    Invoke {
        tool: String,
        #[arg(long, default_value = "{}")]
        params: String,
        #[command(flatten)]
        selection: Selection,
    },
}

/// Overrides for the root agent selection
#[derive(Args, Debug, Default)]
struct Selection {
    /// travel or theme-park
    #[arg(long)]
    app: Option<AgentApp>,
    /// single or multi
    #[arg(long)]
    pattern: Option<AgentPattern>,
    /// Model identifier written into the agents
    #[arg(long)]
    model: Option<String>,
}

impl Selection {
    fn factory(&self) -> anyhow::Result<AgentFactory> {
        let mut config = TravelConfig::default().with_env()?;
        if let Some(app) = self.app {
            config.app = app;
        }
        if let Some(pattern) = self.pattern {
            config.pattern = pattern;
        }
        if let Some(model) = &self.model {
            config.model.clone_from(model);
        }
        config.validate()?;
        let factory = AgentFactory::new(Arc::new(config));
        debug!(config = ?factory.config(), "Resolved travel configuration");
        Ok(factory)
    }
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn tool_table(tools: &[Arc<dyn Tool>]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Tool", "Kind", "Description"]);
    for tool in tools {
        let kind = match tool.kind() {
            ToolKind::Function => "function",
            ToolKind::Agent => "agent",
        };
        table.add_row(vec![tool.name(), kind, tool.description()]);
    }
    table
}

async fn invoke(
    tool: &str,
    params: &str,
    selection: &Selection,
) -> anyhow::Result<serde_json::Value> {
    let params: serde_json::Value =
        serde_json::from_str(params).context("--params must be a JSON object")?;

    let catalog = tools::catalog();
    let root = selection.factory()?.root_agent()?;
    let tool = catalog
        .get(tool)
        .or_else(|| root.tools().get(tool))
        .ok_or_else(|| {
            anyhow::anyhow!(
                "unknown tool '{tool}'; available: {}",
                catalog.names().join(", ")
            )
        })?;

    info!(tool = tool.name(), "Invoking tool");
    Ok(tool.execute(params).await?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = agent_utils::Config::from_env()?;
    if cli.json_logs {
        config.log_format = LogFormat::Json;
    }
    agent_utils::init_tracing_with(config.log_format);
    debug!(
        app = %config.app_name,
        environment = %config.environment,
        production = config.is_production(),
        "Starting agent-cli"
    );

    match cli.command {
        Command::Weather { city } => print_json(&agent_travel::get_weather(&city)),
        Command::Itinerary {
            weather_report,
            city,
        } => print_json(&agent_travel::create_travel_itinerary(&weather_report, &city)),
        Command::Hotel { city, hotel_type } => {
            print_json(&agent_travel::book_hotel(&city, &hotel_type))
        }
        Command::Ticket { weather_report } => {
            print_json(&agent_travel::book_theme_park_ticket(&weather_report))
        }
        Command::Time => print_json(&agent_travel::get_current_time()),
        Command::Tools(selection) => {
            let root = selection.factory()?.root_agent()?;
            println!("{}", tool_table(&root.tools().list_tools()));
            Ok(())
        }
        Command::Describe(selection) => {
            let root = selection.factory()?.root_agent()?;
            print_json(&root.card())
        }
        Command::Invoke {
            tool,
            params,
            selection,
        } => print_json(&invoke(&tool, &params, &selection).await?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_invoke() {
        let cli = Cli::try_parse_from([
            "agent-cli",
            "invoke",
            "book_hotel",
            "--params",
            r#"{"city":"Miami"}"#,
            "--pattern",
            "single",
        ])
        .unwrap();

        match cli.command {
            Command::Invoke {
                tool, selection, ..
            } => {
                assert_eq!(tool, "book_hotel");
                assert_eq!(selection.pattern, Some(AgentPattern::Single));
                assert_eq!(selection.app, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["agent-cli", "hotel", "Paris"]).unwrap();
        match cli.command {
            Command::Hotel { city, hotel_type } => {
                assert_eq!(city, "Paris");
                assert_eq!(hotel_type, DEFAULT_HOTEL_TYPE);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_bad_app_rejected() {
        assert!(Cli::try_parse_from(["agent-cli", "describe", "--app", "casino"]).is_err());
    }

    fn travel_multi() -> Selection {
        Selection {
            app: Some(AgentApp::Travel),
            pattern: Some(AgentPattern::Multi),
            model: None,
        }
    }

    #[test]
    fn test_tool_table_lists_specialists() {
        let root = travel_multi().factory().unwrap().root_agent().unwrap();
        let rendered = tool_table(&root.tools().list_tools()).to_string();

        for specialist in ["weather_specialist", "itinerary_specialist", "hotel_specialist"] {
            assert!(rendered.contains(specialist), "{rendered}");
        }
        assert!(!rendered.contains("function"));
        assert!(!rendered.contains("get_weather"));
    }

    #[tokio::test]
    async fn test_invoke_books_hotel() {
        let out = invoke(
            "book_hotel",
            r#"{"city":"Miami","hotel_type":"beachfront resort"}"#,
            &travel_multi(),
        )
        .await
        .unwrap();

        assert_eq!(out["status"], "success");
        assert_eq!(out["message"], "Beachfront Resort successfully booked in Miami!");
        assert_eq!(out["booking"]["booking_confirmation"], "HTL-2586");
    }

    #[tokio::test]
    async fn test_invoke_agent_tool_needs_runner() {
        let err = invoke(
            "weather_specialist",
            r#"{"request":"London"}"#,
            &travel_multi(),
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("No runner bound"), "{err}");
    }

    #[tokio::test]
    async fn test_invoke_unknown_tool() {
        let err = invoke("teleport", "{}", &Selection::default()).await.unwrap_err();
        assert!(err.to_string().contains("unknown tool 'teleport'"));
    }

    #[tokio::test]
    async fn test_invoke_bad_params() {
        let err = invoke("get_weather", "not json", &Selection::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("--params"));
    }
}
