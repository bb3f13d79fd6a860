use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use unit_converter::config::Config;
use unit_converter::history::format_result;
use unit_converter::session::{
    convert_text, parse_command, run_batch, AppContext, Command, Screen, SessionError,
};
use unit_converter::units::{units_of, Domain, UnknownUnitPolicy};

#[derive(Parser)]
#[command(name = "unitconv")]
#[command(about = "Convert length, weight and temperature values", long_about = None)]
struct Cli {
    /// Config file (default: ./unitconv.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single value
    Convert {
        /// Unit family: length, weight or temperature
        domain: Domain,

        /// Value to convert
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Source unit symbol (e.g. "cm")
        from: String,

        /// Target unit symbol (e.g. "m")
        to: String,

        /// Reject unit symbols the domain does not know
        #[arg(long)]
        strict: bool,
    },

    /// List the units of one or all domains
    Units {
        /// Unit family (default: all)
        domain: Option<Domain>,
    },

    /// Convert every line of a file and export the history as JSON
    Batch {
        /// Input file, one "<domain> <value> <from> <to>" per line
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Reject unit symbols the domain does not know
        #[arg(long)]
        strict: bool,
    },

    /// Interactive session with per-screen history
    Repl,
}

fn main() {
    let cli = Cli::parse();

    let config = match Config::discover(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&config);

    let validation = config.validate();
    if validation.has_issues() {
        eprintln!("{}", validation);
    }
    if !validation.is_valid() {
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Convert {
            domain,
            value,
            from,
            to,
            strict,
        } => convert_once(&config, domain, &value, &from, &to, strict),
        Commands::Units { domain } => {
            list_units(domain);
            Ok(())
        }
        Commands::Batch {
            input,
            output,
            strict,
        } => batch_file(&config, &input, output.as_deref(), strict),
        Commands::Repl => run_repl(config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn policy_for(config: &Config, strict: bool) -> UnknownUnitPolicy {
    if strict {
        UnknownUnitPolicy::Reject
    } else {
        config.unknown_units
    }
}

fn convert_once(
    config: &Config,
    domain: Domain,
    value: &str,
    from: &str,
    to: &str,
    strict: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let record = convert_text(domain, value, from, to, policy_for(config, strict))
        .map_err(|e| e.user_message())?;
    println!("{}", format_result(record.result(), to, config.precision));
    Ok(())
}

fn list_units(domain: Option<Domain>) {
    let domains = match domain {
        Some(domain) => vec![domain],
        None => Domain::ALL.to_vec(),
    };

    for domain in domains {
        println!("{} (base: {}):", domain, domain.base_symbol());
        for unit in units_of(domain) {
            println!("  - {:<3} {}", unit.symbol, unit.name);
        }
    }
}

fn batch_file(
    config: &Config,
    input: &Path,
    output: Option<&Path>,
    strict: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(input)
        .map_err(|e| format!("Failed to read {}: {}", input.display(), e))?;
    let report = run_batch(&content, policy_for(config, strict));

    for failure in &report.failures {
        eprintln!("line {}: {}", failure.line, failure.message);
    }

    let json = report.history.to_json()?;
    if let Some(output_path) = output {
        std::fs::write(output_path, json)
            .map_err(|e| format!("Failed to write {}: {}", output_path.display(), e))?;
        println!("History exported to {}", output_path.display());
    } else {
        println!("{}", json);
    }

    if !report.is_clean() {
        eprintln!(
            "{} line(s) failed, {} converted",
            report.failures.len(),
            report.converted()
        );
    }

    Ok(())
}

const REPL_HELP: &str = "\
Commands:
  length | weight | temperature   open a converter
  back                            return to the main menu
  from <unit> / to <unit>         change the selected units
  <value>                         convert with the selected units
  <value> <from> [to] <to>        convert with explicit units
  units                           list units
  history                         show this converter's conversions
  export <path>                   write this converter's history as JSON
  help                            show this text
  quit                            leave";

fn run_repl(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = AppContext::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Unit converter. Type 'help' for commands.");
    print_screen(&context);

    loop {
        print!("{}> ", prompt(&context));
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = match parse_command(&line) {
            Some(command) => command,
            None => continue,
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{}", REPL_HELP),
            Command::Open(domain) => {
                context.navigate(Screen::Converter(domain));
                print_screen(&context);
            }
            Command::Back => {
                context.navigate(Screen::MainMenu);
                print_screen(&context);
            }
            Command::Units => list_units(context.session().map(|s| s.domain())),
            Command::SelectFrom(unit) => {
                report(context.session_mut().and_then(|s| s.select_from(&unit)));
                print_selection(&context);
            }
            Command::SelectTo(unit) => {
                report(context.session_mut().and_then(|s| s.select_to(&unit)));
                print_selection(&context);
            }
            Command::History => match context.session() {
                Some(session) => println!("{}", session.table()),
                None => println!("{}", SessionError::NoActiveConverter.user_message()),
            },
            Command::Export(path) => match context.session() {
                Some(session) => match session.export(&path) {
                    Ok(count) => println!("{} record(s) exported to {}", count, path.display()),
                    Err(e) => println!("{}", e.user_message()),
                },
                None => println!("{}", SessionError::NoActiveConverter.user_message()),
            },
            Command::Convert { value, units } => {
                let outcome = context.session_mut().and_then(|session| match &units {
                    Some((from, to)) => session.convert_with(&value, from, to),
                    None => session.submit(&value),
                });
                match outcome {
                    Ok(outcome) => println!("{}", outcome.label),
                    Err(e) => println!("{}", e.user_message()),
                }
            }
            Command::Invalid(input) => {
                println!("Unrecognized input '{}'. Type 'help' for commands.", input)
            }
        }
    }

    Ok(())
}

fn prompt(context: &AppContext) -> String {
    match context.screen() {
        Screen::MainMenu => "menu".to_string(),
        Screen::Converter(domain) => domain.to_string(),
    }
}

fn print_screen(context: &AppContext) {
    match context.screen() {
        Screen::MainMenu => println!("Main menu: length, weight, temperature or quit"),
        Screen::Converter(domain) => {
            let symbols: Vec<_> = units_of(domain).iter().map(|u| u.symbol).collect();
            println!("{} converter, units: {}", domain, symbols.join(", "));
            print_selection(context);
        }
    }
}

fn print_selection(context: &AppContext) {
    if let Some(session) = context.session() {
        println!("Converting {} -> {}", session.from_unit(), session.to_unit());
    }
}

fn report(result: Result<(), SessionError>) {
    if let Err(e) = result {
        println!("{}", e.user_message());
    }
}
