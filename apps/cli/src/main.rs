//! HAL command line tool
//!
//! Usage:
//!   halcyon expand "/orders/{id}{?page}" id=7 page=2
//!   halcyon expand "/search{?tags*}" tags=red,blue
//!   halcyon convert order.json --to xml
//!   halcyon --config halcyon.yaml convert order.json --to json

mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use halcyon::format::{json_to_xml, parse_json, render_json};
use halcyon::uri_template::{UriTemplate, Variables};
use halcyon::{CompiledConfig, HalConfig};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[clap(name = "halcyon")]
#[clap(about = "Expand URI templates and convert HAL documents", version)]
struct Cli {
    /// YAML configuration file
    #[clap(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[clap(short, long, global = true)]
    verbose: bool,

    /// Write logs as JSON
    #[clap(long, global = true)]
    log_json: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Expand an RFC 6570 URI template
    Expand {
        template: String,

        /// Variables as name=value; a comma-separated value is a list
        variables: Vec<String>,

        /// Fail when a variable is missing instead of expanding it to nothing
        #[clap(long)]
        strict: bool,
    },

    /// Read a HAL JSON document and write it as JSON or XML
    Convert {
        /// Input file, or `-` for stdin
        file: PathBuf,

        #[clap(long, value_enum, default_value_t = Format::Xml)]
        to: Format,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Xml,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.log_json);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Expand {
            template,
            variables,
            strict,
        } => {
            let href = expand(&template, &variables, strict)?;
            println!("{}", href);
        }
        Command::Convert { file, to } => {
            let input = read_input(&file)?;
            println!("{}", convert(&input, to, &config)?);
        }
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<CompiledConfig> {
    let config = match path {
        Some(path) => HalConfig::from_file(path)?,
        None => HalConfig::default(),
    };
    Ok(config.compile()?)
}

fn read_input(file: &Path) -> Result<String> {
    if file == Path::new("-") {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read stdin")?;
        return Ok(input);
    }
    std::fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))
}

fn parse_variables(args: &[String]) -> Result<Variables> {
    let mut variables = Variables::new();
    for arg in args {
        let (name, value) = arg
            .split_once('=')
            .with_context(|| format!("Expected name=value, got '{}'", arg))?;
        variables = if value.contains(',') {
            variables.list(name, value.split(','))
        } else {
            variables.scalar(name, value)
        };
    }
    Ok(variables)
}

fn expand(template: &str, args: &[String], strict: bool) -> Result<String> {
    let template = UriTemplate::parse(template)?;
    let variables = parse_variables(args)?;

    if strict {
        return Ok(template.expand_strict(&variables)?);
    }

    let expansion = template.expand_with_report(&variables);
    for name in &expansion.missing {
        tracing::warn!(variable = name.as_str(), "variable not provided");
    }
    Ok(expansion.href)
}

fn convert(input: &str, to: Format, config: &CompiledConfig) -> Result<String> {
    let output = match to {
        Format::Xml => json_to_xml(input, &config.xml)?,
        Format::Json => render_json(&parse_json(input)?, &config.json)?,
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_expand_with_lists() {
        let href = expand("/search{?q,tags*}", &args(&["q=hal", "tags=red,blue"]), false).unwrap();
        assert_eq!(href, "/search?q=hal&tags=red&tags=blue");
    }

    #[test]
    fn test_expand_strict_fails_on_missing() {
        assert_eq!(expand("/orders/{id}", &args(&[]), false).unwrap(), "/orders/");
        assert!(expand("/orders/{id}", &args(&[]), true).is_err());
    }

    #[test]
    fn test_bad_arguments() {
        assert!(expand("/orders/{id", &args(&[]), false).is_err());
        assert!(expand("/orders/{id}", &args(&["id"]), false).is_err());
    }

    #[test]
    fn test_convert() {
        let input = r#"{"_links":{"self":{"href":"/orders/1"}},"total_due":30}"#;
        let config = CompiledConfig::default();

        assert_eq!(
            convert(input, Format::Xml, &config).unwrap(),
            r#"<resource rel="self" href="/orders/1"><totalDue>30</totalDue></resource>"#
        );
        assert_eq!(
            convert(input, Format::Json, &config).unwrap(),
            r#"{"_links":{"self":{"href":"/orders/1"}},"totalDue":30}"#
        );
    }
}
