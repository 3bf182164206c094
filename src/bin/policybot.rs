//! Command-line interface for policybot
//! This binary inspects how the chat client interprets assistant replies.
//!
//! Usage:
//!   policybot citation `<text>`                       - Split a trailing citation off an answer
//!   policybot parse `<text>` [--explain]              - Read the embedded object of a reply
//!   policybot render `<path>` [--format `<format>`]   - Render an agent response (`-` for stdin)
//!   policybot request `<message>` [--api-base `<url>`] - Show the request a message would send
//!   policybot prompts                               - List example prompts
//!   policybot list-formats                          - List output formats

use clap::{Arg, ArgAction, ArgMatches, Command};
use policybot::config::{ClientConfig, ConfigError, Overrides};
use policybot::reply::formats::FormatRegistry;
use policybot::reply::{
    extract_citation, parse_jsonish_detailed, render, render_trace, AgentResponse, Conversation,
    EXAMPLE_PROMPTS,
};
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_arg = Arg::new("config")
        .long("config")
        .short('c')
        .help("Configuration file layered over the defaults and ./policybot.toml");
    let trace_arg = Arg::new("trace")
        .long("trace")
        .help("Include the agent trace")
        .action(ArgAction::SetTrue);

    let matches = Command::new("policybot")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect how PolicyBot interprets assistant replies")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("citation")
                .about("Split a trailing (source — location) citation off an answer")
                .arg(Arg::new("text").help("Answer text").required(true).index(1)),
        )
        .subcommand(
            Command::new("parse")
                .about("Read the object embedded in a reply")
                .arg(Arg::new("text").help("Reply text").required(true).index(1))
                .arg(
                    Arg::new("explain")
                        .long("explain")
                        .help("Say why no object was read")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Render an agent response or a raw answer")
                .arg(
                    Arg::new("path")
                        .help("File holding the response, or - for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'text', 'json')"),
                )
                .arg(trace_arg.clone())
                .arg(config_arg.clone()),
        )
        .subcommand(
            Command::new("request")
                .about("Show the request a user message would send")
                .arg(Arg::new("message").help("User message").required(true).index(1))
                .arg(
                    Arg::new("api-base")
                        .long("api-base")
                        .help("Agent backend base URL (e.g., 'http://localhost:8000')"),
                )
                .arg(trace_arg)
                .arg(config_arg),
        )
        .subcommand(Command::new("prompts").about("List example prompts"))
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    let result = match matches.subcommand() {
        Some(("citation", sub)) => handle_citation_command(required(sub, "text")),
        Some(("parse", sub)) => handle_parse_command(required(sub, "text"), sub.get_flag("explain")),
        Some(("render", sub)) => handle_render_command(sub),
        Some(("request", sub)) => handle_request_command(sub),
        Some(("prompts", _)) => {
            for prompt in EXAMPLE_PROMPTS {
                println!("{}", prompt);
            }
            Ok(())
        }
        Some(("list-formats", _)) => handle_list_formats_command(),
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn required<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    // clap enforces presence of required args before we get here
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .unwrap_or_default()
}

/// Build the client configuration from defaults, files, environment and flags
fn load_config(matches: &ArgMatches) -> Result<ClientConfig, ConfigError> {
    let flag = |name: &str| {
        matches
            .try_get_one::<String>(name)
            .ok()
            .flatten()
            .cloned()
    };
    let overrides = Overrides {
        trace: matches.get_flag("trace"),
        format: flag("format"),
        api_base: flag("api-base"),
    };
    ClientConfig::load(
        matches.get_one::<String>("config").map(Path::new),
        &overrides,
    )
}

fn handle_citation_command(text: &str) -> CliResult {
    let split = extract_citation(text);
    println!("{}", serde_json::to_string_pretty(&split)?);
    Ok(())
}

fn handle_parse_command(text: &str, explain: bool) -> CliResult {
    match parse_jsonish_detailed(text) {
        Ok(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        Err(e) => {
            println!("null");
            if explain {
                eprintln!("{}", e);
            }
        }
    }
    Ok(())
}

/// Handle the render command
fn handle_render_command(matches: &ArgMatches) -> CliResult {
    let config = load_config(matches)?;
    let registry = FormatRegistry::with_defaults();
    if !registry.has(&config.format) {
        return Err(format!(
            "unknown format '{}' (available: {})",
            config.format,
            registry.list_formats().join(", ")
        )
        .into());
    }

    let input = read_input(required(matches, "path"))?;
    let response = response_from_input(&input);

    let mut conversation = Conversation::new(&config.greeting, config.trace);
    let message = render(conversation.receive(response));
    print!("{}", registry.format(&message, &config.format)?);

    if config.trace {
        if let Some(steps) = conversation.last_trace() {
            println!();
            print!("{}", render_trace(steps));
        }
    }
    Ok(())
}

fn handle_request_command(matches: &ArgMatches) -> CliResult {
    let config = load_config(matches)?;
    let mut conversation = Conversation::new(&config.greeting, config.trace);
    match conversation.submit(required(matches, "message")) {
        Some(request) => {
            println!("POST {}", config.agent_url());
            println!("{}", serde_json::to_string_pretty(&request)?);
            Ok(())
        }
        None => Err("message is empty".into()),
    }
}

fn handle_list_formats_command() -> CliResult {
    let registry = FormatRegistry::with_defaults();
    for name in registry.list_formats() {
        let description = registry
            .get(&name)
            .map(|f| f.description().to_string())
            .unwrap_or_default();
        println!("  {:<6} {}", name, description);
    }
    Ok(())
}

fn read_input(path: &str) -> Result<String, std::io::Error> {
    if path == "-" {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        Ok(input)
    } else {
        std::fs::read_to_string(path)
    }
}

/// Treat input shaped like `{"answer": ..., "trace": ...}` as an agent response
/// and anything else as the raw answer text.
fn response_from_input(input: &str) -> AgentResponse {
    if let Ok(value @ Value::Object(_)) = serde_json::from_str::<Value>(input) {
        let is_response = value
            .as_object()
            .map(|o| o.contains_key("answer") || o.contains_key("trace"))
            .unwrap_or(false);
        if is_response {
            if let Ok(response) = serde_json::from_value(value) {
                return response;
            }
        }
    }
    AgentResponse {
        answer: Some(input.trim_end_matches(['\n', '\r']).to_string()),
        trace: None,
    }
}
