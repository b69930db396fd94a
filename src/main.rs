mod input;
mod logger;

use std::{path::PathBuf, process};

use anyhow::{Context, Result};
use clap::Parser;
use svgpath::{Config, CurveHandling, Matrix, PathAction, PathParser, Tracer};

/// Parses SVG path data and prints the drawing actions of every path.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// svg documents, or text files with one path per line
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// also print each action's placed points
    #[arg(long, default_value_t = false)]
    resolve: bool,

    /// svg transform list to place points with, e.g. "translate(10) scale(2)"
    #[arg(long)]
    transform: Option<Matrix>,

    /// emit smooth and quadratic curves instead of dropping them
    #[arg(long, default_value_t = false)]
    emit_extended_curves: bool,

    /// log at debug level
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn print_actions(actions: &[PathAction], transform: Option<&Matrix>) {
    let transform = match transform {
	Some(transform) => transform,
	None => {
	    actions.iter().for_each(|action| println!("{}", action));
	    return;
	},
    };

    for traced in Tracer::new(actions, transform) {
	let points: Vec<String> = traced.points.iter().map(|p| p.to_string()).collect();
	println!("{:<40} -> {}", traced.action.to_string(), points.join(" "));
    }
}

/// Returns whether every path parsed.
fn run(args: &CliArgs) -> Result<bool> {
    let curves = if args.emit_extended_curves { CurveHandling::Emit } else { CurveHandling::Discard };
    let parser = PathParser::with_config(Config { curves });
    let transform = args.transform.unwrap_or_default();
    let mut all_parsed = true;

    for file in &args.files {
	let paths = input::load_paths(file)
	    .with_context(|| format!("loading paths from {}", file.display()))?;
	log::info!("{}: {} path(s)", file.display(), paths.len());

	for path in &paths {
	    println!("Parsing:{}", path);
	    match parser.parse(path) {
		Ok(actions) => print_actions(&actions, args.resolve.then(|| &transform)),
		Err(err) => {
		    log::error!("{}: {}", file.display(), err);
		    all_parsed = false;
		},
	    }
	}
    }

    println!("Parse complete");
    Ok(all_parsed)
}

fn main() {
    let args = CliArgs::parse();
    logger::init_logger(args.verbose);

    match run(&args) {
	Ok(true) => (),
	Ok(false) => process::exit(1),
	Err(err) => {
	    log::error!("{:#}", err);
	    process::exit(2);
	},
    }
}
