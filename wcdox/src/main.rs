//! Command-line interface for the wcdox binary.
//!
//! The CLI loads a custom elements manifest and optional configuration files,
//! then renders documentation HTML for a tag or prints the effective
//! configuration.

use std::{
    fs, io,
    path::{Path, PathBuf},
    process,
};

use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use wcdox::{
    DocRenderer, DoxStore, Error, FeatureKey, Manifest, load_manifest, load_user_configs,
    output_io_error,
};

/// Command line interface for rendering custom element documentation.
#[derive(Debug, Parser,)]
#[command(name = "wcdox", version, about = "Render custom element documentation")]
struct Cli
{
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand,)]
/// Supported commands exposed by the CLI.
enum Command
{
    /// Render documentation HTML for a custom element.
    Render(RenderArgs,),
    /// Print the effective configuration as JSON.
    Config(ConfigArgs,),
    /// List the custom elements declared in a manifest.
    Elements(ElementsArgs,),
}

#[derive(Debug, Args,)]
struct RenderArgs
{
    /// Path to the custom elements manifest.
    #[arg(long = "manifest", value_name = "PATH", env = "WCDOX_MANIFEST")]
    manifest: PathBuf,

    /// Tag name of the element to document.
    #[arg(long = "tag", value_name = "TAG")]
    tag: String,

    /// Configuration files merged onto the defaults, in order.
    #[arg(long = "config", value_name = "PATH", action = ArgAction::Append)]
    config: Vec<PathBuf,>,

    /// Class name used in import snippets instead of the declared one.
    #[arg(long = "class", value_name = "NAME")]
    class_name: Option<String,>,

    /// Render only this section, e.g. `css-props`.
    #[arg(long = "section", value_name = "SECTION")]
    section: Option<FeatureKey,>,

    /// Write the HTML to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    output: Option<PathBuf,>,
}

#[derive(Debug, Args,)]
struct ConfigArgs
{
    /// Configuration files merged onto the defaults, in order.
    #[arg(long = "config", value_name = "PATH", action = ArgAction::Append)]
    config: Vec<PathBuf,>,

    /// Output formatted JSON for easier inspection.
    #[arg(long = "pretty", action = ArgAction::SetTrue)]
    pretty: bool,
}

#[derive(Debug, Args,)]
struct ElementsArgs
{
    /// Path to the custom elements manifest.
    #[arg(long = "manifest", value_name = "PATH", env = "WCDOX_MANIFEST")]
    manifest: PathBuf,
}

/// Entry point that reports errors and sets the appropriate exit status.
fn main()
{
    init_tracing();

    if let Err(error,) = run() {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

fn init_tracing()
{
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn",),);
    tracing_subscriber::fmt().with_env_filter(filter,).with_writer(io::stderr,).init();
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates errors from loading documents, setup, and rendering.
fn run() -> Result<(), Error,>
{
    let cli = Cli::parse();

    match cli.command {
        Command::Render(args,) => run_render(&args,),
        Command::Config(args,) => run_config(&args,),
        Command::Elements(args,) => run_elements(&args,),
    }
}

/// Builds a store from a manifest and configuration files.
fn build_store(manifest: Manifest, config: &[PathBuf],) -> Result<DoxStore, Error,>
{
    let mut store = DoxStore::new();
    let partial = if config.is_empty() { None } else { Some(load_user_configs(config,)?,) };
    store.setup(manifest, partial.as_ref(),)?;
    Ok(store,)
}

fn run_render(args: &RenderArgs,) -> Result<(), Error,>
{
    let manifest = load_manifest(&args.manifest,)?;
    let store = build_store(manifest, &args.config,)?;
    let html = render_html(&store, args,)?;

    match args.output.as_deref() {
        Some(path,) => write_file(path, &html,),
        None => {
            println!("{html}");
            Ok((),)
        }
    }
}

fn render_html(store: &DoxStore, args: &RenderArgs,) -> Result<String, Error,>
{
    let renderer = DocRenderer::new(store,);
    match args.section {
        Some(key,) => Ok(renderer
            .render_section_as(&args.tag, key, args.class_name.as_deref(),)?
            .unwrap_or_default(),),
        None => renderer.render_element(&args.tag, args.class_name.as_deref(),),
    }
}

fn write_file(path: &Path, html: &str,) -> Result<(), Error,>
{
    if let Some(parent,) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent,).map_err(|source| output_io_error(path, source,),)?;
    }
    fs::write(path, html,).map_err(|source| output_io_error(path, source,),)?;
    info!("Wrote documentation to {}", path.display());
    Ok((),)
}

fn run_config(args: &ConfigArgs,) -> Result<(), Error,>
{
    let store = build_store(Manifest::default(), &args.config,)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_config(&mut handle, &store, args.pretty,)
}

fn write_config<W: io::Write,>(writer: &mut W, store: &DoxStore, pretty: bool,) -> Result<(), Error,>
{
    let value = store.config_value();
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &value,)?;
    } else {
        serde_json::to_writer(&mut *writer, &value,)?;
    }
    writeln!(writer).map_err(|source| output_io_error(Path::new("<stdout>",), source,),)?;

    Ok((),)
}

fn run_elements(args: &ElementsArgs,) -> Result<(), Error,>
{
    let manifest = load_manifest(&args.manifest,)?;
    for tag in manifest.tag_names() {
        println!("{tag}");
    }
    Ok((),)
}
