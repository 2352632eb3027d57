//! tex CLI tool.

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use mlua::Lua;
use tex_lua::{eval_string, register_helpers_with, HelperConfig};
use tex_naming::{initialism, normalize, Mode};
use tracing::Level;

#[derive(Parser)]
#[command(name = "tex")]
#[command(author, version, about = "Initialism-aware identifier normalization for code templates", long_about = None)]
struct Cli {
    /// Global table the Lua helpers are installed under
    #[arg(long, global = true, env = "TEX_HELPERS_TABLE", default_value = tex_lua::DEFAULT_TABLE)]
    table: String,

    /// Do not bind snake_case aliases for the Lua helpers
    #[arg(long, global = true)]
    no_aliases: bool,

    /// Log registration details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert names to identifiers (reads stdin lines when no names are given)
    Convert {
        /// Produce unexported identifiers instead of exported ones
        #[arg(short, long)]
        unexported: bool,

        /// Names to convert
        names: Vec<String>,
    },

    /// Evaluate a Lua expression with the naming helpers registered
    Eval {
        /// Lua chunk; its result is printed
        expr: String,
    },

    /// List known initialisms
    Initialisms,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .init();

    let config = HelperConfig::new()
        .table(&cli.table)
        .snake_case_aliases(!cli.no_aliases);

    let result = match cli.command {
        Commands::Convert { unexported, names } => {
            let mode = if unexported {
                Mode::Unexported
            } else {
                Mode::Exported
            };
            run_convert(mode, names)
        }
        Commands::Eval { expr } => run_eval(&config, &expr),
        Commands::Initialisms => run_list_initialisms(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_convert(mode: Mode, names: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if names.is_empty() {
        tracing::debug!("reading names from stdin");
        for line in io::stdin().lock().lines() {
            let line = line?;
            writeln!(out, "{}", normalize(line.trim_end_matches('\r'), mode))?;
        }
    } else {
        for name in &names {
            writeln!(out, "{}", normalize(name, mode))?;
        }
    }

    Ok(())
}

fn run_eval(config: &HelperConfig, expr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let lua = Lua::new();
    register_helpers_with(&lua, config)?;

    let value = eval_string(&lua, expr)?;
    println!("{}", value);

    Ok(())
}

fn run_list_initialisms() -> Result<(), Box<dyn std::error::Error>> {
    println!("Known initialisms:");
    for entry in initialism::all() {
        println!("  {}", entry);
    }
    Ok(())
}
