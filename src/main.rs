use clap::{Parser, Subcommand};
use microsite::build::{self, BuildPaths};
use microsite::{content, output};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "microsite")]
#[command(about = "Static site generator for single-file content sites")]
#[command(long_about = "\
Static site generator for single-file content sites

One YAML file is the data source. Its sections map to a fixed set of
pages rendered through a template directory; static assets are copied
verbatim.

Project structure:

  content/
  └── site.yaml                    # All site content (required fields only)
  templates/
  ├── base.html                    # Shared chrome ({% extends \"base.html\" %})
  ├── index.html                   # One template per page
  ├── about.html
  ├── services.html
  ├── process.html
  └── contact.html
  assets/                          # Copied verbatim → dist/assets/
  dist/                            # Regenerated from scratch every build
  ├── *.html                       # The five rendered pages
  ├── assets/
  └── site.json                    # Debug dump of the rendered data

Validation is fail-fast: the first missing or empty required field aborts
the build with its dotted path (e.g. `contact.email`) before anything is
written.

Run 'microsite gen-content' to print a documented starter site.yaml.")]
#[command(version = version_string())]
struct Cli {
    /// Content file
    #[arg(long, default_value = "content/site.yaml", global = true)]
    content: PathBuf,

    /// Template directory
    #[arg(long, default_value = "templates", global = true)]
    templates: PathBuf,

    /// Static assets directory
    #[arg(long, default_value = "assets", global = true)]
    assets: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full pipeline: load → validate → render
    Build,
    /// Validate the content file without building
    Check,
    /// Print a starter site.yaml with all required fields documented
    GenContent,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let paths = BuildPaths {
                content: cli.content,
                templates: cli.templates,
                assets: cli.assets,
                output: cli.output.clone(),
            };
            let summary = build::build(&paths)?;
            output::print_build_output(&summary);
            println!("==> Site built: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.content.display());
            let doc = build::load_and_check(&cli.content)?;
            output::print_check_output(&doc);
            println!("==> Content is valid");
        }
        Command::GenContent => {
            print!("{}", content::stock_content_yaml());
        }
    }

    Ok(())
}
