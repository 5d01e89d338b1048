use anyhow::Result;
use clap::{Parser, Subcommand};
use crossterm::style::Stylize;
use crossterm::{cursor, execute, terminal};
use gematria_core::core::table::letters;
use gematria_core::{logging, ExportConfig, ExportError, GematriaEngine, ScoreRecord};
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;

const EMPTY_INPUT: &str = "Result: (Empty input)";

#[derive(Parser)]
#[command(name = "gematria")]
#[command(about = "Hebrew linear gematria calculator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory for saved logs
    #[arg(long, global = true, env = "GEMATRIA_OUT_DIR", default_value = ".")]
    out_dir: PathBuf,

    /// File name prefix for saved logs
    #[arg(long, global = true, default_value = "gematria_log")]
    stem: String,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Score each argument
    Score {
        #[arg(required = true)]
        texts: Vec<String>,

        /// Save the results as .txt and .csv
        #[arg(long)]
        save: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the letter value table
    Table {
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = ExportConfig::new(cli.out_dir).with_stem(cli.stem);
    let mut engine = GematriaEngine::with_config(config);

    match cli.command {
        None => run_interactive(&mut engine)?,
        Some(Commands::Score { texts, save, json }) => {
            if json {
                let records: Vec<ScoreRecord> =
                    texts.iter().filter_map(|t| engine.calculate(t)).collect();
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                for line in score_lines(&mut engine, &texts) {
                    println!("{line}");
                }
            }
            if save {
                save_and_report(&engine)?;
            }
        }
        Some(Commands::Table { json }) => print_table(json)?,
    }
    Ok(())
}

fn run_interactive(engine: &mut GematriaEngine) -> Result<()> {
    print_banner()?;

    loop {
        print!("> ");
        stdout().flush()?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }

        match input.trim() {
            "exit" => break,
            ":save" => {
                if let Err(e) = save_and_report(engine) {
                    eprintln!("{} {}", "❌ Error saving:".red(), e);
                }
            }
            ":table" => print_table(false)?,
            ":log" => {
                if engine.log().is_empty() {
                    println!("(log is empty)");
                }
                for record in engine.log().records() {
                    println!("{}", styled_line(record));
                }
            }
            text => match engine.calculate(text) {
                Some(record) => println!("Result: {}", styled_result(&record)),
                None => println!("{EMPTY_INPUT}"),
            },
        }
    }
    Ok(())
}

fn print_banner() -> Result<()> {
    let mut out = stdout();
    execute!(out, terminal::Clear(terminal::ClearType::All), cursor::MoveTo(0, 0))?;
    println!("{}", "Hebrew Linear Gematria Tool".bold());
    println!("---------------------------------------------------------------");
    println!("Type Hebrew text and press [Enter] to calculate.");
    println!("':log' shows the session, ':save' writes it, ':table' lists values, 'exit' quits.\n");
    Ok(())
}

fn styled_result(record: &ScoreRecord) -> String {
    let label = record.label().to_string();
    let label = if record.is_prime { label.green().to_string() } else { label };
    format!("{} ({})", record.score, label)
}

fn styled_line(record: &ScoreRecord) -> String {
    format!("{} → {}", record.input, styled_result(record))
}

/// One output line per argument; blank arguments get the empty-input line.
fn score_lines(engine: &mut GematriaEngine, texts: &[String]) -> Vec<String> {
    texts
        .iter()
        .map(|text| match engine.calculate(text) {
            Some(record) => styled_line(&record),
            None => EMPTY_INPUT.to_string(),
        })
        .collect()
}

fn save_and_report(engine: &GematriaEngine) -> Result<(), ExportError> {
    let paths = engine.save_logs()?;
    println!("✅ Logs saved as {} + {}", paths.text.display(), paths.csv.display());
    Ok(())
}

fn print_table(json: bool) -> Result<()> {
    if json {
        let rows: Vec<_> = letters()
            .map(|(letter, value)| serde_json::json!({ "letter": letter, "value": value }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("Aleph-Bet Linear Gematria Table (Aleph = 1 to Tav = 22)");
    println!("{:<8}{}", "Letter", "Value");
    for (letter, value) in letters() {
        println!("{:<8}{}", letter, value);
    }
    Ok(())
}
