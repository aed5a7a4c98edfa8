use std::{fs::read_to_string, path::PathBuf, process::exit, time::Instant};

use clap::Parser;
use glotta::{check_source, display_error, source::SourceContext};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "glotta")]
#[command(about = "Checks a glotta source file", long_about = None)]
#[command(version)]
struct Cli {
    /// Source file to check
    path: PathBuf,

    /// Print the signature of every checked function
    #[arg(long)]
    signatures: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let file_name = cli
        .path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.path.to_string_lossy().into_owned());

    let file_contents = match read_to_string(&cli.path) {
        Ok(contents) => contents,
        Err(err) => {
            error!(path = %cli.path.display(), "failed to read file: {}", err);
            exit(1);
        }
    };

    let start = Instant::now();
    let source = SourceContext::new(&file_name, &file_contents);

    let checked = match check_source(&source) {
        Ok(checked) => checked,
        Err(err) => {
            display_error(&err, &source);
            exit(1);
        }
    };

    info!(
        functions = checked.program.functions.len(),
        symbols = checked.symbol_count.0,
        "checked in {:?}",
        start.elapsed()
    );

    if cli.signatures {
        for function in checked.program.functions.iter() {
            let parameters: Vec<String> = function
                .parameters
                .iter()
                .map(|parameter| format!("{}: {}", parameter.name, parameter.type_annotation.ty))
                .collect();

            println!(
                "fun {}({}): {}",
                function.name,
                parameters.join(", "),
                function.declared_return_type()
            );
        }
    }
}
