use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use diascreen::{
    handle_predict, render_home, render_result, FeatureVector, Language, ModelRegistry, Page,
    SessionState, FEATURE_COUNT,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing serialized model artifacts (.json / .onnx)
    #[arg(short, long)]
    models_dir: Option<PathBuf>,

    /// Interface language (en or ar)
    #[arg(short, long, default_value = "en")]
    lang: String,

    /// Start with the dark theme
    #[arg(long)]
    dark: bool,

    /// List discovered models and exit
    #[arg(long)]
    list: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let models_dir = args
        .models_dir
        .unwrap_or_else(ModelRegistry::default_models_dir);
    info!("Scanning {} for models", models_dir.display());
    let registry = ModelRegistry::discover_and_load(&models_dir);

    if args.list {
        for name in registry.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let language: Language = args
        .lang
        .parse()
        .with_context(|| format!("unknown language '{}'", args.lang))?;

    let mut state = SessionState::new();
    state.set_language(language);
    if args.dark {
        state.toggle_theme();
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    // One full render per interaction, re-derived from the session state
    // each time around.
    loop {
        match state.page() {
            Page::Home => {
                let view = render_home(&state, &registry);
                println!("\n=== {} [{}] ===", view.title, view.theme.as_str());
                println!("{}\n", view.description);

                if view.model_names.is_empty() {
                    println!("({})", diascreen::t(state.language(), "no_models_found"));
                } else {
                    println!("{}:", view.select_model_label);
                    for (i, name) in view.model_names.iter().enumerate() {
                        println!("  {}. {}", i + 1, name);
                    }
                }

                let command = match prompt(&mut lines, "model # (t=theme, l=language, q=quit)")? {
                    Some(command) => command,
                    None => break,
                };
                match command.as_str() {
                    "q" => break,
                    "t" => {
                        state.toggle_theme();
                        continue;
                    }
                    "l" => {
                        state.set_language(next_language(state.language()));
                        continue;
                    }
                    _ => {}
                }

                // An unparseable or out-of-range choice is simply "nothing
                // selected"; the transition guard reports it.
                let selection = command
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| view.model_names.get(i))
                    .cloned();

                println!("\n{}:", view.input_header);
                let mut values = [0.0f32; FEATURE_COUNT];
                let mut aborted = false;
                for (value, label) in values.iter_mut().zip(&view.field_labels) {
                    match prompt_number(&mut lines, label)? {
                        Some(parsed) => *value = parsed,
                        None => {
                            aborted = true;
                            break;
                        }
                    }
                }
                if aborted {
                    break;
                }

                let input = FeatureVector::new(values);
                if let Err(e) = handle_predict(&mut state, &registry, input, selection.as_deref())
                {
                    println!("\n! {}", diascreen::t(state.language(), e.translation_key()));
                }
            }
            Page::Result => {
                let view = render_result(&state, &registry);
                println!("\n=== {} ===", view.title);
                match (&view.verdict, view.score) {
                    (Some(verdict), Some(score)) => {
                        println!("\n    >>> {} <<<", verdict);
                        println!("    ({}: {:.4})", diascreen::t(state.language(), "score"), score);
                    }
                    _ => {
                        if let Some(error) = &view.error {
                            println!("\n! {}", error);
                        }
                    }
                }

                match prompt(&mut lines, &format!("[b] {} / [q] quit", view.back_label))? {
                    Some(command) if command == "q" => break,
                    Some(_) => state.return_home(),
                    None => break,
                }
            }
        }
    }

    Ok(())
}

fn next_language(current: Language) -> Language {
    match current {
        Language::En => Language::Ar,
        Language::Ar => Language::En,
    }
}

/// Reads one trimmed line; `None` means end of input (treated as quit).
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> anyhow::Result<Option<String>> {
    print!("{}: ", label);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

/// Re-prompts until the line parses as a number.
fn prompt_number(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> anyhow::Result<Option<f32>> {
    loop {
        match prompt(lines, label)? {
            Some(line) => match line.parse::<f32>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => println!("  not a number: {}", line),
            },
            None => return Ok(None),
        }
    }
}
