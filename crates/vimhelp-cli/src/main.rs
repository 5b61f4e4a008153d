use anyhow::{Context, Result};
use std::{env, path::Path, process};
use vimhelp_config::Config;
use vimhelp_engine::parsing::html::{escape_html, wrap_html};
use vimhelp_engine::{Corpus, PageLink, RenderedDocument, io};

/// Page body: the title, the converted text, then links to the neighbouring chapters.
fn page_fragment(page: &RenderedDocument) -> String {
    let mut html = format!("{}{}", page.header, page.html);

    let link = |neighbour: &Option<PageLink>, rel: &str, arrow: &str| {
        neighbour.as_ref().map(|to| {
            let href = format!("/{}", to.slug);
            let title = escape_html(&to.title);
            wrap_html(
                arrow,
                "a",
                &[("class", "navlink"), ("rel", rel), ("title", &title), ("href", &href)],
            )
        })
    };
    let links: Vec<_> = [
        link(&page.previous, "prev", "←"),
        link(&page.next, "next", "→"),
    ]
    .into_iter()
    .flatten()
    .collect();

    if !links.is_empty() {
        html.push_str(&wrap_html(&links.join(""), "nav", &[]));
    }
    html
}

/// Write every page of the corpus, returning how many were written.
fn write_pages(corpus: &Corpus, output: &Path) -> Result<usize> {
    let pages = corpus.render_all()?;

    for page in &pages {
        let path = output.join(format!("{}.html", page.slug));
        io::write_file(&path, &page_fragment(page))?;
        log::debug!("{}: written to {}", page.id, path.display());

        if let Some(sidebar) = &page.sidebar {
            io::write_file(&output.join(format!("{}.sidebar.html", page.slug)), sidebar)?;
        }
    }

    Ok(pages.len())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // Determine paths from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let config;
    let from_config;

    if args.len() == 3 {
        config = Config::new(&args[1], &args[2]);
        from_config = false;
    } else if args.len() == 1 {
        match Config::load() {
            Ok(Some(loaded)) => {
                config = loaded;
                from_config = true;
            }
            Ok(None) => {
                eprintln!("Error: No source and output paths provided and no config file found");
                eprintln!("Usage: {} <help-dir> <output-dir>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <help-dir> <output-dir>", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [<help-dir> <output-dir>]", args[0]);
        process::exit(1);
    };

    if let Err(e) = io::validate_help_dir(&config.source_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Help path '{}'{} is invalid: {e}",
            config.source_path.display(),
            source
        );
        process::exit(1);
    }

    log::info!("Reading help files from {}", config.source_path.display());
    let corpus = Corpus::load(
        &config.source_path,
        &config.tags_path(),
        &config.corrections(),
    )
    .with_context(|| format!("loading {}", config.source_path.display()))?;

    let written = write_pages(&corpus, &config.output_path)?;
    log::info!("{written} pages written to {}", config.output_path.display());

    Ok(())
}
