//! gongwen CLI - inspect classification and build-command streams

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use gongwen::{build_commands, classify_str, BlockKind, BuildCommand};

#[derive(Parser)]
#[command(name = "gongwen")]
#[command(version)]
#[command(about = "Classify constrained Markdown into styled official-document build commands", long_about = None)]
struct Cli {
    /// Input Markdown file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the build-command stream as JSON
    #[command(alias = "cmd")]
    Commands {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Print the classified block stream as JSON
    Blocks {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Summarize the document structure
    Info {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Commands {
            input,
            output,
            compact,
        }) => cmd_commands(&input, output.as_deref(), compact),
        Some(Commands::Blocks {
            input,
            output,
            compact,
        }) => cmd_blocks(&input, output.as_deref(), compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        None => {
            // Default behavior: emit commands if input is provided
            if let Some(input) = cli.input {
                cmd_commands(&input, cli.output.as_deref(), false)
            } else {
                println!("{}", "Usage: gongwen <FILE> [-o OUTPUT]".yellow());
                println!("       gongwen --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn read_input(input: &Path) -> Result<String, Box<dyn std::error::Error>> {
    log::debug!("reading {}", input.display());
    Ok(fs::read_to_string(input)?)
}

fn write_output(
    content: &str,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            println!("{} {}", "Wrote".green().bold(), path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}

fn cmd_commands(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let commands = build_commands(&text)?;

    let json = if compact {
        serde_json::to_string(&commands)?
    } else {
        serde_json::to_string_pretty(&commands)?
    };
    write_output(&json, output)
}

fn cmd_blocks(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let blocks = classify_str(&text);

    let json = if compact {
        serde_json::to_string(&blocks)?
    } else {
        serde_json::to_string_pretty(&blocks)?
    };
    write_output(&json, output)
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let blocks = classify_str(&text);
    let commands = build_commands(&text)?;

    let count = |kind: BlockKind| blocks.iter().filter(|b| b.kind == kind).count();

    println!("{}", "Document structure".bold());
    println!("  lines:      {}", text.lines().count());
    println!("  blocks:     {}", blocks.len());

    if let Some(title) = blocks.iter().find(|b| b.kind == BlockKind::Title) {
        println!("  title:      {}", title.source_text.cyan());
    } else {
        println!("  title:      {}", "(none)".dimmed());
    }

    println!("  headings:   {}", count(BlockKind::Heading2) + count(BlockKind::Heading3) + count(BlockKind::Heading4));
    println!("  list items: {}", count(BlockKind::ListItem));
    println!("  paragraphs: {}", count(BlockKind::Paragraph));
    println!("  tables:     {}", count(BlockKind::Table));
    println!(
        "  commands:   {} ({} content)",
        commands.len(),
        commands.iter().filter(|c| c.is_content()).count()
    );

    for command in &commands {
        if let BuildCommand::Table(table) = command {
            println!(
                "  table:      {} columns x {} rows",
                table.columns,
                table.rows.len()
            );
        }
    }

    Ok(())
}
