use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reactdocs::{Config, ConfigLoader, ReactAnalyzer, ToolDispatcher};

#[derive(Parser)]
#[command(name = "reactdocs")]
#[command(
    version,
    about = "React component documentation generator for project trees"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Project root override (defaults to config / REACTDOCS_ROOT)
    #[arg(long, short, env = "REACTDOCS_ROOT")]
    root: Option<PathBuf>,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List projects under the root
    ListProjects,

    /// Generate component documentation for one project
    AnalyzeProject {
        #[arg(help = "Project directory name under the root")]
        project: String,
    },

    /// Analyze a single component file and print the analysis as JSON
    AnalyzeReact {
        #[arg(help = "Path to a .tsx or .jsx file")]
        file: PathBuf,
    },

    /// Invoke a tool by name with raw JSON arguments
    Call {
        #[arg(help = "Tool name (analyze-react, analyze-project, list-projects)")]
        tool: String,
        #[arg(default_value = "{}", help = "JSON arguments object")]
        arguments: String,
    },
}

fn main() -> ExitCode {
    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config: Config = ConfigLoader::load()?;
    if let Some(root) = cli.root {
        config.root = root;
    }
    config.validate()?;

    let analyzer = ReactAnalyzer::new();
    let dispatcher = ToolDispatcher::new(&config, &analyzer);

    match cli.command {
        Commands::ListProjects => {
            let result = dispatcher.call("list-projects", serde_json::json!({}))?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::AnalyzeProject { project } => {
            let result = dispatcher.call(
                "analyze-project",
                serde_json::json!({ "projectName": project }),
            )?;
            match result {
                serde_json::Value::String(markdown) => println!("{}", markdown),
                other => println!("{}", serde_json::to_string_pretty(&other)?),
            }
        }
        Commands::AnalyzeReact { file } => {
            let source = std::fs::read_to_string(&file)?;
            let result = dispatcher.call("analyze-react", serde_json::json!({ "files": source }))?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Call { tool, arguments } => {
            let arguments: serde_json::Value = serde_json::from_str(&arguments)?;
            let result = dispatcher.call(&tool, arguments).map_err(|e| match e {
                reactdocs::DocsError::MethodNotFound { tool } => anyhow::anyhow!(
                    "Method not found: {} (available tools: {})",
                    tool,
                    ToolDispatcher::<ReactAnalyzer>::tool_names().join(", ")
                ),
                other => other.into(),
            })?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
