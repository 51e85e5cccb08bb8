//! Generate the renderer test document
//!
//! Builds the five-page validation document and writes its page model as
//! JSON, optionally with one encoded content stream per page.
//!
//! Usage:
//!   cargo run --bin generate_fixture
//!   cargo run --bin generate_fixture -- --output fixture.json --content-streams streams/
//!   cargo run --bin generate_fixture -- --verbose

use pagecraft::fixture::renderer_test_document;
use pagecraft::writer::ContentStreamBuilder;
use pagecraft::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

struct FixtureConfig {
    output: PathBuf,
    content_streams: Option<PathBuf>,
    verbose: bool,
}

impl FixtureConfig {
    fn from_args() -> Self {
        let args: Vec<String> = std::env::args().collect();
        let mut output = PathBuf::from("renderer_test_document.json");
        let mut content_streams = None;
        let mut verbose = false;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--output" | "-o" => {
                    i += 1;
                    if i < args.len() {
                        output = PathBuf::from(&args[i]);
                    }
                },
                "--content-streams" => {
                    i += 1;
                    if i < args.len() {
                        content_streams = Some(PathBuf::from(&args[i]));
                    }
                },
                "--verbose" | "-v" => {
                    verbose = true;
                },
                other => {
                    eprintln!("Ignoring unknown argument: {}", other);
                },
            }
            i += 1;
        }

        Self {
            output,
            content_streams,
            verbose,
        }
    }
}

fn write_content_streams(doc: &pagecraft::writer::Document, dir: &Path) -> Result<usize> {
    fs::create_dir_all(dir)?;
    let mut total = 0;
    for (i, page) in doc.pages().iter().enumerate() {
        let stream = ContentStreamBuilder::for_page(page)?;
        let path = dir.join(format!("page-{}.content", i + 1));
        fs::write(&path, &stream.bytes)?;
        log::debug!(
            "Wrote {} ({} bytes, {} alpha state(s))",
            path.display(),
            stream.bytes.len(),
            stream.alpha_states.len()
        );
        total += stream.bytes.len();
    }
    Ok(total)
}

fn run(config: &FixtureConfig) -> Result<()> {
    let doc = renderer_test_document()?;
    let json = doc.to_json_pretty()?;
    fs::write(&config.output, &json)?;

    println!("Renderer test document written to: {}", config.output.display());
    println!("   Size: {:.1} KB", json.len() as f64 / 1024.0);
    println!("   Pages: {}", doc.page_count());
    println!("   Content: transparency, forms, annotations, vectors, stress");

    if let Some(dir) = &config.content_streams {
        let bytes = write_content_streams(&doc, dir)?;
        println!("   Content streams: {} ({} bytes)", dir.display(), bytes);
    }
    Ok(())
}

fn main() -> ExitCode {
    let config = FixtureConfig::from_args();

    let default_filter = if config.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}
