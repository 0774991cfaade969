use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use langdict::config::{Options, normalize, parse_options_file};
use langdict::dictionary::parse_message_file;
use langdict::{Config, LoaderContext};

#[derive(Parser)]
#[command(name = "langdict")]
#[command(
	author,
	version,
	about = "Load and merge localized JSON message dictionaries"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	/// Print discovery and merge events on stderr (-vv for more)
	#[arg(short, long, global = true, action = ArgAction::Count)]
	verbose: u8,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print the merged dictionary as JSON
	Load(LoadArgs),
	/// Report files, keys, untranslated and orphan messages
	Inspect(LoadArgs),
	/// Check that every matched message file parses, without merging
	Check(LoadArgs),
}

#[derive(Args)]
struct LoadArgs {
	/// Directories to search for message files
	directories: Vec<PathBuf>,

	/// Language code of the overlay to load (xx_XX)
	#[arg(short, long, value_name = "CODE")]
	lang: Option<String>,

	/// Name of the default message file
	#[arg(long, value_name = "NAME")]
	default_file: Option<String>,

	/// TOML file with load options
	#[arg(long, value_name = "FILE")]
	options: Option<PathBuf>,

	/// Report overwritten messages on stderr while loading
	#[arg(long)]
	safe: bool,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	match cli.command {
		Commands::Load(args) => handle_load(&args),
		Commands::Inspect(args) => handle_inspect(&args),
		Commands::Check(args) => handle_check(&args),
	}
}

fn init_tracing(verbose: u8) {
	let level = match verbose {
		0 => return,
		1 => tracing::Level::DEBUG,
		_ => tracing::Level::TRACE,
	};

	tracing_subscriber::fmt()
		.with_max_level(level)
		.with_ansi(false)
		.with_writer(std::io::stderr)
		.init();
}

fn build_config(args: &LoadArgs) -> Result<Config> {
	let file_options = match args.options {
		Some(ref path) => parse_options_file(path).context("Failed to load options file")?,
		None => Options::default(),
	};

	let options = file_options.overlay(Options {
		directories: None,
		lang_code: args.lang.clone(),
		default_file: args.default_file.clone(),
		safe: args.safe.then_some(true),
	});

	let config = if args.directories.is_empty() {
		normalize(options, None, None)
	} else {
		normalize(args.directories.clone(), None, Some(options))
	};
	config.context("Invalid load options")
}

fn handle_load(args: &LoadArgs) -> Result<ExitCode> {
	let config = build_config(args)?;
	let mut ctx = LoaderContext::new().with_logger(|line| eprintln!("{line}"));

	let messages = ctx.load(&config).context("Failed to load messages")?;
	let json = serde_json::to_string_pretty(&messages).context("Failed to serialize messages")?;
	println!("{}", json);

	Ok(ExitCode::SUCCESS)
}

fn handle_inspect(args: &LoadArgs) -> Result<ExitCode> {
	let config = build_config(args)?;
	LoaderContext::new()
		.inspect(&config)
		.context("Failed to inspect messages")?;

	Ok(ExitCode::SUCCESS)
}

fn handle_check(args: &LoadArgs) -> Result<ExitCode> {
	let config = build_config(args)?;
	let discovered = LoaderContext::new()
		.discover(&config)
		.context("Failed to discover message files")?;

	let files = discovered
		.default_files
		.iter()
		.chain(discovered.language_files.iter());

	let mut failed = false;
	let mut checked = 0;
	for file in files {
		match parse_message_file(&file.path) {
			Ok(parsed) => {
				println!("  {} ({} messages)", file.path.display(), parsed.entries.len());
				checked += 1;
			}
			Err(e) => {
				eprintln!("Message file error: {:?}", anyhow::Error::from(e));
				failed = true;
			}
		}
	}

	if failed {
		return Ok(ExitCode::FAILURE);
	}

	if checked == 0 {
		println!("No message files found.");
	} else {
		println!("All {} message files are valid.", checked);
	}
	Ok(ExitCode::SUCCESS)
}
