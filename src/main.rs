use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::Result;
use std::path::PathBuf;
use std::process::ExitCode;

use sylva::catalog::{self, SystemDefinition};
use sylva::expander::{expand, expanded_len};
use sylva::interpreter::formatter::{BasicFormatter, DebugFormatter, SegmentFormatter};
use sylva::interpreter::{TraceConfig, Tracer};
use sylva::render::{RenderSink, SvgCanvas};

#[derive(Debug, Parser)]
#[clap(name = "sylva", version)]
pub struct CLArgs {
    #[clap(subcommand)]
    pub routine: SylvaCommand,
}

#[derive(Debug, Subcommand)]
pub enum SylvaCommand {
    /// List the built-in L-systems.
    List,
    /// Show a built-in L-system's description, axiom and rules.
    Describe { name: String },
    /// Expand a built-in L-system and print the result.
    Expand {
        name: String,
        /// Override the preset's iteration count.
        #[clap(long = "iterations")]
        iterations: Option<u32>,
        #[clap(long = "format", value_enum, default_value = "full")]
        format: ExpansionFormat,
    },
    /// Expand and interpret a built-in L-system.
    Render {
        name: String,
        /// Override the preset's iteration count.
        #[clap(long = "iterations")]
        iterations: Option<u32>,
        /// Write an SVG document here instead of printing segments.
        #[clap(long = "output")]
        output: Option<PathBuf>,
        #[clap(long = "format", value_enum, default_value = "basic")]
        format: SegmentFormat,
    },
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ExpansionFormat {
    /// The full expanded symbol string.
    Full,
    /// Only the expanded length, computed without materializing the string.
    Length,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum SegmentFormat {
    Basic,
    Debug,
}

fn main() -> ExitCode {
    sylva_main().expect("Encountered an error!")
}

fn sylva_main() -> Result<ExitCode> {
    color_eyre::install().expect("Can't fail at first call!");
    let args = CLArgs::parse();
    match args.routine {
        SylvaCommand::List => {
            for name in catalog::names() {
                println!("{name}");
            }
        }
        SylvaCommand::Describe { name } => {
            let Some(system) = lookup(&name) else {
                return Ok(ExitCode::from(65));
            };
            describe(system);
        }
        SylvaCommand::Expand {
            name,
            iterations,
            format,
        } => {
            let Some(system) = lookup(&name) else {
                return Ok(ExitCode::from(65));
            };
            let grammar = system.grammar();
            let iterations = iterations.unwrap_or(grammar.iterations);
            match format {
                ExpansionFormat::Full => {
                    println!("{}", expand(&grammar.axiom, &grammar.rules, iterations));
                }
                ExpansionFormat::Length => {
                    println!("{}", expanded_len(&grammar.axiom, &grammar.rules, iterations));
                }
            }
        }
        SylvaCommand::Render {
            name,
            iterations,
            output,
            format,
        } => {
            let Some(system) = lookup(&name) else {
                return Ok(ExitCode::from(65));
            };
            let mut grammar = system.grammar();
            if let Some(iterations) = iterations {
                grammar.iterations = iterations;
            }
            if let Err(error) = grammar.validate() {
                eprintln!("{error}");
                return Ok(ExitCode::from(65));
            }

            eprintln!("Expanding {}...", system.name);
            let symbols = expand(&grammar.axiom, &grammar.rules, grammar.iterations);
            eprintln!("Interpreting {} symbols...", symbols.chars().count());

            let tracer = Tracer::new(TraceConfig::from(&grammar));
            match output {
                Some(path) => {
                    let mut canvas = SvgCanvas::new();
                    for segment in tracer.trace(symbols.chars()) {
                        match segment {
                            Ok(segment) => canvas.accept(&segment),
                            Err(error) => {
                                eprintln!("{error}");
                                return Ok(ExitCode::from(65));
                            }
                        }
                    }
                    eprintln!("Writing {} segments to {:?}...", canvas.segment_count(), path);
                    std::fs::write(&path, canvas.to_svg())?;
                }
                None => {
                    let formatter: Box<dyn SegmentFormatter> = match format {
                        SegmentFormat::Basic => Box::new(BasicFormatter),
                        SegmentFormat::Debug => Box::new(DebugFormatter),
                    };
                    for segment in tracer.trace(symbols.chars()) {
                        match segment {
                            Ok(segment) => println!("{}", formatter.format(&segment)),
                            Err(error) => {
                                eprintln!("{}", formatter.format_error(&error));
                                return Ok(ExitCode::from(65));
                            }
                        }
                    }
                }
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn lookup(name: &str) -> Option<&'static SystemDefinition> {
    let system = catalog::find(name);
    if system.is_none() {
        eprintln!("Unknown L-system {name:?}. Available systems:");
        for known in catalog::names() {
            eprintln!("  {known}");
        }
    }
    system
}

fn describe(system: &SystemDefinition) {
    println!("{}", system.name);
    println!();
    println!("{}", system.description);
    println!();
    println!("Axiom: {}", system.axiom);
    println!("Rules:");
    for (symbol, replacement) in system.rules {
        println!("  {symbol} -> {replacement}");
    }
    println!("Angle: {} degrees", system.angle_degrees);
    println!("Iterations: {}", system.iterations);
}
