//! Emit flicker CSS to stdout or a file.
//!
//! Generates the randomized custom properties and the matching `@keyframes`
//! rule against an in-memory document, then prints them as plain CSS that can
//! be pasted into a stylesheet:
//!
//! ```text
//! flickergen --count 8 --name flicker --seed 7
//! ```

use clap::Parser;
use clap::ValueEnum;
use flickergen::{
  Flicker, KeyframesConfig, MemoryDocument, PointsConfig, PointsInput, Profile, StyleDocument,
};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

/// Generate randomized flicker CSS custom properties and keyframes
#[derive(Parser, Debug)]
#[command(name = "flickergen", version, about)]
struct Args {
  /// Explicit percentage stops, comma-separated (each 0-100)
  #[arg(long, value_delimiter = ',', conflicts_with = "count")]
  points: Option<Vec<f64>>,

  /// Generate this many evenly spaced stops instead of explicit points
  #[arg(long)]
  count: Option<f64>,

  /// Minimum generated value
  #[arg(long)]
  min: Option<f64>,

  /// Maximum generated value (exclusive)
  #[arg(long)]
  max: Option<f64>,

  /// Custom-property namespace
  #[arg(long)]
  namespace: Option<String>,

  /// Target selector; also printed as the enclosing block (simple
  /// tag/#id/.class selectors)
  #[arg(long)]
  selector: Option<String>,

  /// Animation name for the @keyframes rule
  #[arg(long, default_value = "n")]
  name: String,

  /// Emit only the custom properties, no @keyframes rule
  #[arg(long)]
  points_only: bool,

  /// Naming profile override (default: per entry point)
  #[arg(long, value_enum)]
  profile: Option<ProfileArg>,

  /// Read a JSON points configuration (fields: points, min, max, selector,
  /// namespace); command-line flags override it
  #[arg(long)]
  config: Option<PathBuf>,

  /// Seed for reproducible output
  #[arg(long)]
  seed: Option<u64>,

  /// Write output to this file instead of stdout
  #[arg(long)]
  out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ProfileArg {
  /// Basis-point property names (50% -> --n5000)
  Points,
  /// Permille property names (50% -> --n0500)
  Keyframes,
}

fn main() -> ExitCode {
  let args = Args::parse();
  match run(args) {
    Ok(()) => ExitCode::SUCCESS,
    Err(message) => {
      eprintln!("error: {message}");
      ExitCode::FAILURE
    }
  }
}

fn run(args: Args) -> Result<(), String> {
  let mut config = match &args.config {
    Some(path) => {
      let raw =
        fs::read_to_string(path).map_err(|err| format!("{}: {err}", path.display()))?;
      serde_json::from_str::<PointsConfig>(&raw)
        .map_err(|err| format!("{}: {err}", path.display()))?
    }
    None => PointsConfig::new(),
  };

  if let Some(points) = &args.points {
    config.points = Some(PointsInput::list(points.iter().copied()));
  }
  if let Some(count) = args.count {
    config.points = Some(PointsInput::count(count));
  }
  if let Some(min) = args.min {
    config.min = Some(min);
  }
  if let Some(max) = args.max {
    config.max = Some(max);
  }
  if let Some(namespace) = &args.namespace {
    config.namespace = Some(namespace.clone());
  }
  if let Some(selector) = &args.selector {
    config.selector = Some(selector.clone());
  }

  let mut flicker = Flicker::new();
  if let Some(seed) = args.seed {
    flicker = flicker.with_seed(seed);
  }
  if let Some(profile) = args.profile {
    flicker = flicker.with_profile(match profile {
      ProfileArg::Points => Profile::POINTS,
      ProfileArg::Keyframes => Profile::KEYFRAMES,
    });
  }

  let selector = config.selector.clone().unwrap_or_else(|| "html".to_string());
  let mut doc = document_for(&selector);

  let rule = if args.points_only {
    flicker
      .generate_points(&mut doc, &config)
      .map_err(|err| err.to_string())?;
    None
  } else {
    let keyframes = KeyframesConfig::new().animation_name(args.name.clone());
    Some(
      flicker
        .generate_keyframes(&mut doc, &keyframes, &config)
        .map_err(|err| err.to_string())?,
    )
  };

  let element = doc
    .query_selector(&selector)
    .ok_or_else(|| format!("no element matches selector {selector:?}"))?;

  let mut output = String::new();
  output.push_str(&format!("{selector} {{\n"));
  for (name, value) in doc.custom_properties(element) {
    output.push_str(&format!("  {name}: {value};\n"));
  }
  output.push_str("}\n");
  if let Some(rule) = rule {
    output.push('\n');
    output.push_str(&rule);
  }

  match &args.out {
    Some(path) => {
      fs::write(path, output).map_err(|err| format!("{}: {err}", path.display()))?
    }
    None => print!("{output}"),
  }
  Ok(())
}

/// Builds a document whose tree satisfies the configured selector: an `html`
/// root, plus one child element shaped after the selector's last compound
/// when that compound is not the root itself.
fn document_for(selector: &str) -> MemoryDocument {
  let mut doc = MemoryDocument::new();
  let Some(last) = selector.split_whitespace().last() else {
    return doc;
  };
  if last.eq_ignore_ascii_case("html") || last == "*" {
    return doc;
  }

  let mut tag = String::from("div");
  let mut id: Option<String> = None;
  let mut classes: Vec<String> = Vec::new();
  let mut kind = ' ';
  let mut name = String::new();
  for ch in last.chars().chain(['\0']) {
    if ch == '#' || ch == '.' || ch == '\0' {
      match kind {
        ' ' if !name.is_empty() => tag = name.clone(),
        '#' if !name.is_empty() => id = Some(name.clone()),
        '.' if !name.is_empty() => classes.push(name.clone()),
        _ => {}
      }
      name.clear();
      kind = ch;
    } else {
      name.push(ch);
    }
  }

  let class_refs: Vec<&str> = classes.iter().map(String::as_str).collect();
  let root = doc.root();
  doc.append_element_with(root, &tag, id.as_deref(), &class_refs);
  doc
}
