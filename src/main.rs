//! docdown - export rendered Markdown HTML as a print document definition

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use docdown::dom::parse_html_bytes;
use docdown::{
    ExportOptions, Exporter, JsonTypesetter, Language, Metadata, OutputAction, SourceList,
};

#[derive(Parser)]
#[command(name = "docdown")]
#[command(version, about = "Export rendered Markdown HTML for PDF typesetting", long_about = None)]
#[command(after_help = "EXAMPLES:
    docdown notes.html -o notes.json          Export with default settings
    docdown notes.html --lang de --title Notizen
    docdown page.html --root display --sources refs.json")]
struct Cli {
    /// Input HTML file (`-` for stdin)
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output JSON file (stdout when omitted or `-`)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<String>,

    /// Document title
    #[arg(long, default_value = "")]
    title: String,

    /// Document author
    #[arg(long)]
    author: Option<String>,

    /// Label language (en, de)
    #[arg(long, value_name = "LANG")]
    lang: Option<Language>,

    /// JSON array of bibliography sources
    #[arg(long, value_name = "FILE")]
    sources: Option<PathBuf>,

    /// Id of the element whose children are exported
    #[arg(long, value_name = "ID")]
    root: Option<String>,

    /// Page origin for same-document link detection
    #[arg(long, value_name = "URL")]
    origin: Option<String>,

    /// JSON file with export options; flags override its values
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Suppress the summary line
    #[arg(short, long)]
    quiet: bool,

    /// Log pass details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> docdown::Result<()> {
    let options = load_options(cli)?;

    let html = if cli.input == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        fs::read(&cli.input)?
    };

    let sources = match &cli.sources {
        Some(path) => SourceList::from_json(&fs::read_to_string(path)?)?,
        None => SourceList::new(),
    };

    let mut metadata = Metadata::new(cli.title.as_str());
    if let Some(author) = &cli.author {
        metadata = metadata.with_author(author.as_str());
    }

    let dom = parse_html_bytes(&html);
    let mut exporter = Exporter::new(options);

    let writer: Box<dyn Write> = match cli.output.as_deref() {
        None | Some("-") => Box::new(io::stdout().lock()),
        Some(path) => Box::new(io::BufWriter::new(fs::File::create(path)?)),
    };
    let mut typesetter = JsonTypesetter::new(writer).pretty(cli.pretty);
    exporter.export_to(
        &mut typesetter,
        OutputAction::Render,
        &dom,
        &metadata,
        &sources,
    )?;

    if !cli.quiet {
        let language = exporter.options().language;
        eprintln!(
            "Exported {:?}: {} figures, {} citations",
            metadata.display_title(language),
            exporter.figure_count(),
            exporter.citations().total_occurrences()
        );
    }

    Ok(())
}

/// Options from `--config`, then individual flags on top.
fn load_options(cli: &Cli) -> docdown::Result<ExportOptions> {
    let mut options = match &cli.config {
        Some(path) => ExportOptions::from_json(&fs::read_to_string(path)?)?,
        None => ExportOptions::default(),
    };

    if let Some(language) = cli.lang {
        options.language = language;
    }
    if let Some(root) = &cli.root {
        options.root_id = Some(root.clone());
    }
    if let Some(origin) = &cli.origin {
        options.page_origin = Some(origin.clone());
    }
    Ok(options)
}
