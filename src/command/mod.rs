// src/command/mod.rs

//! The command surface: parsing one-line verbs and dispatching them against
//! the registry.
//!
//! Every command is a single verb with positional arguments; the filter
//! verbs that support interactive preview accept an optional trailing
//! `split <p>`. Parsing and execution are separate so scripts can be
//! validated line by line, and a failed command never binds (or rebinds)
//! its destination name.

use std::fs;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use log::{info, warn};

use crate::image::Image;
use crate::io;
use crate::ops::{Filter, LevelsSpec, histogram_chart, split_preview};
use crate::registry::Registry;
use crate::utils::error::{RasterError, Result};

/// One parsed command, ready to execute.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Load {
        path: PathBuf,
        name: String,
    },
    Save {
        path: PathBuf,
        name: String,
    },
    /// Any single-source filter verb, optionally with a split preview.
    Apply {
        verb: String,
        filter: Filter,
        src: String,
        dst: String,
        split: Option<f64>,
    },
    RgbSplit {
        src: String,
        red: String,
        green: String,
        blue: String,
    },
    RgbCombine {
        dst: String,
        red: String,
        green: String,
        blue: String,
    },
    Histogram {
        src: String,
        dst: String,
    },
    Run {
        path: PathBuf,
    },
}

fn bad_args(msg: impl Into<String>) -> RasterError {
    RasterError::InvalidArgument(msg.into())
}

fn parse_i32(token: &str, what: &str) -> Result<i32> {
    token
        .parse::<i32>()
        .map_err(|_| bad_args(format!("expected an integer {what}, got '{token}'")))
}

fn parse_f64(token: &str, what: &str) -> Result<f64> {
    token
        .parse::<f64>()
        .map_err(|_| bad_args(format!("expected a number {what}, got '{token}'")))
}

/// Parses an optional trailing `split <p>` clause.
fn parse_split(rest: &[&str], verb: &str) -> Result<Option<f64>> {
    match rest {
        [] => Ok(None),
        ["split", p] => Ok(Some(parse_f64(p, "split percentage")?)),
        _ => Err(bad_args(format!(
            "usage: {verb} <src> <dst> [split <p>]"
        ))),
    }
}

fn exactly<'a>(tokens: &'a [&'a str], n: usize, usage: &str) -> Result<&'a [&'a str]> {
    if tokens.len() == n {
        Ok(tokens)
    } else {
        Err(bad_args(format!("usage: {usage}")))
    }
}

impl Command {
    /// Parses one command line. Blank input is invalid; callers skip blank
    /// and comment lines before getting here.
    pub fn parse(line: &str) -> Result<Command> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&verb, args)) = tokens.split_first() else {
            return Err(bad_args("empty command"));
        };

        let plain_filter = |filter: Filter| -> Result<Command> {
            let args = exactly(args, 2, &format!("{verb} <src> <dst>"))?;
            Ok(Command::Apply {
                verb: verb.to_string(),
                filter,
                src: args[0].to_string(),
                dst: args[1].to_string(),
                split: None,
            })
        };

        let split_filter = |filter: Filter| -> Result<Command> {
            if args.len() < 2 {
                return Err(bad_args(format!("usage: {verb} <src> <dst> [split <p>]")));
            }
            Ok(Command::Apply {
                verb: verb.to_string(),
                filter,
                src: args[0].to_string(),
                dst: args[1].to_string(),
                split: parse_split(&args[2..], verb)?,
            })
        };

        match verb {
            "load" => {
                let args = exactly(args, 2, "load <path> <name>")?;
                Ok(Command::Load {
                    path: PathBuf::from(args[0]),
                    name: args[1].to_string(),
                })
            }
            "save" => {
                let args = exactly(args, 2, "save <path> <name>")?;
                Ok(Command::Save {
                    path: PathBuf::from(args[0]),
                    name: args[1].to_string(),
                })
            }
            "red-component" => plain_filter(Filter::Red),
            "green-component" => plain_filter(Filter::Green),
            "blue-component" => plain_filter(Filter::Blue),
            "value-component" => split_filter(Filter::Value),
            "intensity-component" => split_filter(Filter::Intensity),
            "luma-component" => split_filter(Filter::Luma),
            "blur" => split_filter(Filter::Blur),
            "sharpen" => split_filter(Filter::Sharpen),
            "sepia" => split_filter(Filter::Sepia),
            "color-correct" => split_filter(Filter::ColorCorrect),
            "horizontal-flip" => plain_filter(Filter::HorizontalFlip),
            "vertical-flip" => plain_filter(Filter::VerticalFlip),
            "brighten" => {
                let args = exactly(args, 3, "brighten <delta> <src> <dst>")?;
                let delta = parse_i32(args[0], "increment")?;
                Ok(Command::Apply {
                    verb: verb.to_string(),
                    filter: Filter::Brighten(delta),
                    src: args[1].to_string(),
                    dst: args[2].to_string(),
                    split: None,
                })
            }
            "rgb-split" => {
                let args = exactly(args, 4, "rgb-split <src> <r> <g> <b>")?;
                Ok(Command::RgbSplit {
                    src: args[0].to_string(),
                    red: args[1].to_string(),
                    green: args[2].to_string(),
                    blue: args[3].to_string(),
                })
            }
            "rgb-combine" => {
                let args = exactly(args, 4, "rgb-combine <dst> <r> <g> <b>")?;
                Ok(Command::RgbCombine {
                    dst: args[0].to_string(),
                    red: args[1].to_string(),
                    green: args[2].to_string(),
                    blue: args[3].to_string(),
                })
            }
            "levels-adjust" => {
                if args.len() < 5 {
                    return Err(bad_args(
                        "usage: levels-adjust <b> <m> <w> <src> <dst> [split <p>]",
                    ));
                }
                let b = parse_i32(args[0], "black point")?;
                let m = parse_i32(args[1], "mid point")?;
                let w = parse_i32(args[2], "white point")?;
                let spec = LevelsSpec::new(b, m, w)?;
                Ok(Command::Apply {
                    verb: verb.to_string(),
                    filter: Filter::Levels(spec),
                    src: args[3].to_string(),
                    dst: args[4].to_string(),
                    split: parse_split(&args[5..], verb)?,
                })
            }
            "compress" => {
                let args = exactly(args, 3, "compress <p> <src> <dst>")?;
                let percentage = parse_f64(args[0], "percentage")?;
                Ok(Command::Apply {
                    verb: verb.to_string(),
                    filter: Filter::Compress(percentage),
                    src: args[1].to_string(),
                    dst: args[2].to_string(),
                    split: None,
                })
            }
            "histogram" => {
                let args = exactly(args, 2, "histogram <src> <dst>")?;
                Ok(Command::Histogram {
                    src: args[0].to_string(),
                    dst: args[1].to_string(),
                })
            }
            "run" => {
                let args = exactly(args, 1, "run <script>")?;
                Ok(Command::Run {
                    path: PathBuf::from(args[0]),
                })
            }
            other => Err(bad_args(format!("unknown command '{other}'"))),
        }
    }

    /// The verb this command was parsed from, for reporting.
    pub fn verb(&self) -> &str {
        match self {
            Command::Load { .. } => "load",
            Command::Save { .. } => "save",
            Command::Apply { verb, .. } => verb,
            Command::RgbSplit { .. } => "rgb-split",
            Command::RgbCombine { .. } => "rgb-combine",
            Command::Histogram { .. } => "histogram",
            Command::Run { .. } => "run",
        }
    }

    /// Executes the command against the registry.
    ///
    /// Destination names are bound only after the transform has fully
    /// succeeded, so errors leave the registry untouched.
    pub fn execute(&self, registry: &mut Registry) -> Result<()> {
        match self {
            Command::Load { path, name } => {
                let image = io::decode(path)?;
                registry.put(name, image);
            }
            Command::Save { path, name } => {
                let image = registry.get(name)?;
                io::encode(path, image)?;
            }
            Command::Apply {
                filter,
                src,
                dst,
                split,
                ..
            } => {
                let image = registry.get(src)?;
                let result = match split {
                    Some(p) => split_preview(filter, image, *p)?,
                    None => filter.apply(image)?,
                };
                registry.put(dst, result);
            }
            Command::RgbSplit {
                src,
                red,
                green,
                blue,
            } => {
                let (r, g, b) = registry.get(src)?.rgb_split();
                registry.put(red, r);
                registry.put(green, g);
                registry.put(blue, b);
            }
            Command::RgbCombine {
                dst,
                red,
                green,
                blue,
            } => {
                let combined = Image::rgb_combine(
                    registry.get(red)?,
                    registry.get(green)?,
                    registry.get(blue)?,
                )?;
                registry.put(dst, combined);
            }
            Command::Histogram { src, dst } => {
                let chart = histogram_chart(&registry.get(src)?.histogram());
                registry.put(dst, chart);
            }
            Command::Run { path } => {
                run_script(path, registry)?;
            }
        }
        info!("{} ok", self.verb());
        Ok(())
    }
}

/// True for lines the command loop skips entirely.
fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Executes a script file line by line. Blank lines and `#` comments are
/// skipped; a failing line is reported and the script continues.
pub fn run_script(path: &std::path::Path, registry: &mut Registry) -> Result<()> {
    let text = fs::read_to_string(path)?;
    for (number, line) in text.lines().enumerate() {
        if is_skippable(line) {
            continue;
        }
        if let Err(err) = Command::parse(line).and_then(|cmd| cmd.execute(registry)) {
            warn!("{}:{}: {}", path.display(), number + 1, err);
        }
    }
    Ok(())
}

/// The interactive loop: reads commands until end of input or `q`/`quit`,
/// reporting each command's outcome on `output`. Failures never end the
/// loop.
pub fn process<R, W>(input: R, output: &mut W, registry: &mut Registry) -> std::io::Result<()>
where
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        if is_skippable(&line) {
            continue;
        }
        let trimmed = line.trim();
        if trimmed == "q" || trimmed == "quit" {
            break;
        }

        match Command::parse(trimmed).and_then(|cmd| cmd.execute(registry)) {
            Ok(()) => {
                let verb = trimmed.split_whitespace().next().unwrap_or_default();
                writeln!(output, "{verb} executed successfully")?;
            }
            Err(err) => {
                let verb = trimmed.split_whitespace().next().unwrap_or_default();
                writeln!(output, "error executing {verb}: {err}")?;
            }
        }
    }
    Ok(())
}
