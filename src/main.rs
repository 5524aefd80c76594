use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use soupwalk::config::Config;
use soupwalk::document::node::Queryable;
use soupwalk::document::tree::HtmlDocument;
use soupwalk::extract::{extract_attributes, replace_tag_with_text};
use soupwalk::file::loader::{load_html_file, load_html_from_stdin};
use soupwalk::file::preview::open_tag_in_browser;
use soupwalk::file::saver::save_html_file;
use soupwalk::tagpath::{compile, get_element, get_elements, parse_path, AbsentPolicy, TagPath};

/// soupwalk - follow declarative tag paths through HTML documents
#[derive(Parser)]
#[command(name = "soupwalk")]
#[command(version)]
#[command(about = "Follow declarative tag paths through HTML documents", long_about = None)]
struct Cli {
    /// HTML file to read (omit or use `-` to read from stdin)
    file: Option<String>,

    /// Tag path: a JSON/YAML segment list, or whitespace-separated selectors like `div.item span`
    #[arg(short, long)]
    path: String,

    /// Follow the path with find-first at every segment and print one element
    #[arg(long)]
    first: bool,

    /// With --first, fail when a segment matches nothing
    #[arg(long, requires = "first")]
    strict: bool,

    /// Print the text of each match instead of its markup
    #[arg(long, conflicts_with = "attrs")]
    text: bool,

    /// Print these attributes of each match as JSON (repeatable)
    #[arg(long = "attr", value_name = "NAME")]
    attrs: Vec<String>,

    /// Replace every element matched by a single-segment path with TEXT and write the document
    #[arg(long, value_name = "TEXT", conflicts_with_all = ["first", "preview"])]
    replace: Option<String>,

    /// Where to write the document after --replace (default: stdout)
    #[arg(short, long, requires = "replace")]
    output: Option<PathBuf>,

    /// Open the first match in a browser
    #[arg(long)]
    preview: bool,

    /// Log filter used when SOUPWALK_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_tracing(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("SOUPWALK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn load_document(file: Option<&str>) -> Result<HtmlDocument> {
    match file {
        Some(path) if path != "-" => load_html_file(path),
        _ => {
            if io::stdin().is_terminal() {
                bail!("No input file given and stdin is not piped");
            }
            load_html_from_stdin()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let config = Config::load();
    let path = parse_path(&cli.path).context("Failed to parse tag path")?;
    let mut doc = load_document(cli.file.as_deref())?;

    if let Some(replacement) = &cli.replace {
        return run_replace(&mut doc, &path, replacement, cli.output.as_deref(), &config);
    }

    let matches = if cli.first {
        let policy = if cli.strict {
            AbsentPolicy::FailFast
        } else {
            config.absent_policy
        };
        get_element(doc.root(), path.segments(), policy)?
            .into_iter()
            .collect::<Vec<_>>()
    } else {
        get_elements([doc.root()], path.segments())?
    };
    tracing::info!(count = matches.len(), "path matched");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for element in &matches {
        if cli.text {
            writeln!(out, "{}", config.text_transform.apply(&element.text_content()))?;
        } else if !cli.attrs.is_empty() {
            let attrs = extract_attributes(element, &cli.attrs);
            writeln!(out, "{}", serde_json::to_string(&attrs)?)?;
        } else {
            writeln!(out, "{}", element.outer_html())?;
        }
    }

    if cli.preview {
        match matches.first() {
            Some(first) => {
                let preview = open_tag_in_browser(*first, &config.preview_options())?;
                eprintln!("Preview written to {}", preview.display());
            }
            None => eprintln!("Nothing matched; no preview opened"),
        }
    }

    Ok(())
}

fn run_replace(
    doc: &mut HtmlDocument,
    path: &TagPath,
    replacement: &str,
    output: Option<&std::path::Path>,
    config: &Config,
) -> Result<()> {
    let criteria = compile(path.segments())?;
    let [criteria] = criteria.as_slice() else {
        bail!(
            "--replace takes a path with exactly one segment, got {}",
            path.len()
        );
    };

    let count = replace_tag_with_text(doc, criteria, replacement);
    tracing::info!(count, %criteria, "replaced elements");

    match output {
        Some(target) => save_html_file(target, doc, config)?,
        None => {
            let mut out = io::stdout().lock();
            writeln!(out, "{}", doc.to_html())?;
        }
    }
    eprintln!("Replaced {} element(s)", count);

    Ok(())
}
