//! motif CLI
//!
//! Build selectors, combine them, and exercise the shape, JSON and
//! polynomial helpers from the terminal.

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use motif_common::warning::warn_once;
use motif_css::builder::{CombinedSelector, Render, SelectorBuilder};
use motif_objects::json::{from_json, from_json_onto, to_json};
use motif_objects::polynomial::Polynomial;
use motif_objects::shape::{Circle, Rectangle, Shape};
use owo_colors::OwoColorize;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// motif: selector builder, shapes, JSON and polynomials
#[derive(Parser, Debug)]
#[command(name = "motif")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Build a compound selector
    motif selector --element a --attr 'href$=".png"' --pseudo-class focus

    # Join two selectors with a combinator
    motif combine 'div#main' '>' 'ul.nav'

    # Decode a shape and print its area
    motif json circle '{"radius":10}'

    # Evaluate 2x^2 + 3x + 5 at a few points
    motif poly 2 3 5 --at 0 2 3
"#)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a compound selector from its fragments
    Selector {
        /// Type selector (emitted bare)
        #[arg(short, long)]
        element: Option<String>,

        /// ID selector (emitted as #ID)
        #[arg(short, long)]
        id: Option<String>,

        /// Class selector, repeatable (emitted as .CLASS)
        #[arg(short, long = "class", value_name = "CLASS")]
        classes: Vec<String>,

        /// Attribute selector body (emitted as [ATTR])
        #[arg(short, long = "attr", value_name = "ATTR")]
        attribute: Option<String>,

        /// Pseudo-class, repeatable (emitted as :NAME)
        #[arg(short, long = "pseudo-class", value_name = "NAME")]
        pseudo_classes: Vec<String>,

        /// Pseudo-element (emitted as ::NAME)
        #[arg(long, value_name = "NAME")]
        pseudo_element: Option<String>,

        /// Also print the selector's specificity
        #[arg(short, long)]
        specificity: bool,

        /// Print the selector fragments as JSON instead of selector text
        #[arg(long)]
        json: bool,
    },

    /// Join two selector texts with a combinator (' ', '>', '+', '~')
    Combine {
        /// Left-hand selector text
        left: String,
        /// Combinator token
        combinator: String,
        /// Right-hand selector text
        right: String,
    },

    /// Area of a WIDTH x HEIGHT rectangle
    Area {
        /// Rectangle width
        #[arg(allow_negative_numbers = true)]
        width: f64,
        /// Rectangle height
        #[arg(allow_negative_numbers = true)]
        height: f64,
    },

    /// Decode a shape from JSON, print it back and its area
    Json {
        /// Which shape the JSON describes
        #[arg(value_enum)]
        shape: ShapeKind,

        /// JSON text (omit when using --file)
        #[arg(required_unless_present = "file")]
        text: Option<String>,

        /// Read the JSON text from a file
        #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
        file: Option<PathBuf>,

        /// JSON for a prototype shape supplying fields the text leaves out
        #[arg(short, long, value_name = "JSON")]
        defaults: Option<String>,
    },

    /// Evaluate a polynomial given its coefficients, highest power first
    Poly {
        /// Coefficients, highest power first
        #[arg(required = true, allow_negative_numbers = true)]
        coefficients: Vec<f64>,

        /// Points to evaluate at
        #[arg(long = "at", value_name = "X", num_args = 1.., allow_negative_numbers = true)]
        points: Vec<f64>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ShapeKind {
    Rectangle,
    Circle,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match execute(cli.command) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

/// Run one subcommand and return what it prints.
fn execute(command: Command) -> Result<String> {
    match command {
        Command::Selector {
            element,
            id,
            classes,
            attribute,
            pseudo_classes,
            pseudo_element,
            specificity,
            json,
        } => {
            let mut builder = SelectorBuilder::new();
            if let Some(element) = element {
                builder = builder.with_element(element);
            }
            if let Some(id) = id {
                builder = builder.with_id(id);
            }
            for class in classes {
                builder = builder.with_class(class);
            }
            if let Some(attribute) = attribute {
                builder = builder.with_attribute(attribute);
            }
            for pseudo_class in pseudo_classes {
                builder = builder.with_pseudo_class(pseudo_class);
            }
            if let Some(pseudo_element) = pseudo_element {
                builder = builder.with_pseudo_element(pseudo_element);
            }

            let specificity = specificity.then(|| builder.selector().specificity());
            let mut output = if json {
                serde_json::to_string_pretty(builder.selector())
                    .context("failed to serialize selector")?
            } else {
                builder.render()
            };
            if let Some(specificity) = specificity {
                write!(output, "\nspecificity {specificity}")?;
            }
            Ok(output)
        }

        Command::Combine {
            left,
            combinator,
            right,
        } => {
            if left.is_empty() || right.is_empty() {
                let _ = warn_once("CLI", "combining with an empty selector");
            }
            let combined = CombinedSelector::new(left)
                .combine_token(&mut CombinedSelector::new(right), &combinator)?;
            Ok(combined.into())
        }

        Command::Area { width, height } => Ok(Rectangle::new(width, height).area().to_string()),

        Command::Json {
            shape,
            text,
            file,
            defaults,
        } => {
            let text = match (text, file) {
                (Some(text), _) => text,
                (None, Some(path)) => fs::read_to_string(&path)
                    .with_context(|| format!("failed to read '{}'", path.display()))?,
                (None, None) => anyhow::bail!("no JSON given: pass TEXT or --file"),
            };
            match shape {
                ShapeKind::Rectangle => describe_shape::<Rectangle>(&text, defaults.as_deref()),
                ShapeKind::Circle => describe_shape::<Circle>(&text, defaults.as_deref()),
            }
        }

        Command::Poly {
            coefficients,
            points,
        } => {
            let polynomial = Polynomial::new(coefficients)?;
            let mut output = format!("p(x) = {polynomial}");
            for x in points {
                write!(output, "\np({x}) = {}", polynomial.evaluate(x))?;
            }
            Ok(output)
        }
    }
}

/// Decode `text` as a `T` (optionally over a prototype decoded from
/// `defaults`) and report its canonical JSON and area.
fn describe_shape<T>(text: &str, defaults: Option<&str>) -> Result<String>
where
    T: Shape + Serialize + DeserializeOwned,
{
    let shape: T = match defaults {
        Some(defaults) => {
            let proto: T = from_json(defaults).context("invalid --defaults")?;
            from_json_onto(&proto, text)?
        }
        None => from_json(text)?,
    };
    Ok(format!("{}\narea {}", to_json(&shape)?, shape.area()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("motif").chain(args.iter().copied()))?;
        execute(cli.command)
    }

    #[test]
    fn test_selector_command() {
        let output = run(&[
            "selector",
            "--element",
            "a",
            "--attr",
            r#"href$=".png""#,
            "--pseudo-class",
            "focus",
        ])
        .unwrap();
        assert_eq!(output, r#"a[href$=".png"]:focus"#);
    }

    #[test]
    fn test_selector_command_with_specificity() {
        let output = run(&[
            "selector", "--id", "main", "-c", "container", "-c", "editable", "-s",
        ])
        .unwrap();
        assert_eq!(output, "#main.container.editable\nspecificity (1, 2, 0)");
    }

    #[test]
    fn test_selector_command_json() {
        let output = run(&["selector", "-e", "li", "--json"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["element"], "li");
        assert_eq!(value["classes"], serde_json::json!([]));
    }

    #[test]
    fn test_combine_command() {
        let output = run(&["combine", "div#main", "+", "table#data"]).unwrap();
        assert_eq!(output, "div#main + table#data");
    }

    #[test]
    fn test_combine_command_unknown_combinator() {
        let err = run(&["combine", "a", "|", "b"]).unwrap_err();
        assert!(err.to_string().contains("unknown combinator"));
    }

    #[test]
    fn test_area_command() {
        assert_eq!(run(&["area", "10", "20"]).unwrap(), "200");
        assert_eq!(run(&["area", "-2", "3"]).unwrap(), "-6");
    }

    #[test]
    fn test_json_command() {
        let output = run(&["json", "rectangle", r#"{"width":2,"height":4}"#]).unwrap();
        assert_eq!(output, "{\"width\":2.0,\"height\":4.0}\narea 8");
    }

    #[test]
    fn test_json_command_with_defaults() {
        let output = run(&[
            "json",
            "rectangle",
            r#"{"height":5}"#,
            "--defaults",
            r#"{"width":3,"height":1}"#,
        ])
        .unwrap();
        assert_eq!(output, "{\"width\":3.0,\"height\":5.0}\narea 15");
    }

    #[test]
    fn test_json_command_malformed() {
        let err = run(&["json", "circle", "{"]).unwrap_err();
        assert!(err.to_string().starts_with("failed to decode JSON"));
    }

    #[test]
    fn test_poly_command() {
        let output = run(&["poly", "1", "-3", "--at", "0", "2", "5"]).unwrap();
        assert_eq!(output, "p(x) = x - 3\np(0) = -3\np(2) = -1\np(5) = 2");
    }

    #[test]
    fn test_about_text_is_plain() {
        use clap::CommandFactory;

        let about = Cli::command().get_about().map(ToString::to_string);
        assert_eq!(
            about.as_deref(),
            Some("motif: selector builder, shapes, JSON and polynomials")
        );
    }

    #[test]
    fn test_poly_command_requires_coefficients() {
        assert!(run(&["poly"]).is_err());
    }
}
