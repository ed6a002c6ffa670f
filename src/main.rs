use anyhow::{bail, Context, Result};
use clap::Parser;
use clip_action::clipboard::backend_from_name;
use clip_action::config::Config;
use clip_action::dom::{Document, ElementId};
use clip_action::{ClipboardAction, ClipboardEmitter, ClipboardOptions, DocumentSurface, EventKind};
use std::cell::Cell;
use std::io::Read;
use std::path::PathBuf;
use std::rc::Rc;

#[derive(Parser, Debug)]
#[command(name = "clip-action", version, about = "Copy or cut text through the clipboard")]
struct Cli {
    /// "copy" or "cut" (defaults to the configured action)
    #[arg(short, long)]
    action: Option<String>,

    /// Text to copy; read from stdin into a textarea when omitted
    #[arg(short, long)]
    text: Option<String>,

    /// Clipboard backend: system, memory or unsupported
    #[arg(short, long)]
    backend: Option<String>,

    /// Config file to use instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    log::debug!("Config loaded: {:?}", config);

    let backend_name = cli.backend.as_deref().unwrap_or(&config.clipboard.backend);
    let backend = backend_from_name(backend_name)?;
    log::info!("Using {} clipboard", backend.name());

    let mut doc = Document::new(backend);
    let action = cli
        .action
        .clone()
        .unwrap_or_else(|| config.action.default.to_string());

    let emitter = Rc::new(ClipboardEmitter::<ElementId>::new());
    let outcome = Rc::new(Cell::new(None));
    for kind in [EventKind::Success, EventKind::Error] {
        let outcome = Rc::clone(&outcome);
        emitter.on(kind.as_str(), move |event| {
            match kind {
                EventKind::Success => log::info!(
                    "{} succeeded ({} characters)",
                    event.action,
                    event.text.as_deref().map(|t| t.chars().count()).unwrap_or(0)
                ),
                EventKind::Error => log::error!("{} failed", event.action),
            }
            outcome.set(Some(kind));
        });
    }

    let mut options = ClipboardOptions::new()
        .action(action)
        .emitter(Rc::clone(&emitter))
        .host_style(config.host.clone());

    let target = match cli.text {
        Some(text) => {
            options = options.text(text);
            None
        }
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read text from stdin")?;
            let textarea = doc.create_element("textarea");
            doc.set_value(&textarea, &input);
            let body = doc.body();
            doc.append_child(&body, &textarea);
            options = options.target(textarea);
            Some(textarea)
        }
    };

    let clip = ClipboardAction::new(options, &mut doc)?;
    let selected = clip.selected_text().chars().count();
    drop(clip);

    if let Some(textarea) = target {
        log::debug!("Target holds {} characters afterwards", doc.value(&textarea).chars().count());
    }

    match outcome.get() {
        Some(EventKind::Success) => Ok(()),
        Some(EventKind::Error) => bail!("Clipboard command failed"),
        None => {
            log::warn!("Nothing selected ({} characters), nothing copied", selected);
            Ok(())
        }
    }
}
