//! Argument parsing and command execution.

use anyhow::{anyhow, bail, Context, Result};
use pigment_blend::{BlendMode, BlendRegistry, HsxKind};
use pigment_core::{Channel, Rgb};
use pigment_curves::Curve;

pub const USAGE: &str = "\
usage:
  pigment list
  pigment blend <mode> <src> <dst> [--depth 8|16|float]
  pigment rgb <mode> <r,g,b> <r,g,b> [--model hsy|hsi|hsl|hsv]
  pigment curve <x,y;x,y;...> <x>";

/// Channel representation for `blend`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Depth {
    #[default]
    U8,
    U16,
    Float,
}

impl Depth {
    fn parse(s: &str) -> Result<Self> {
        match s {
            "8" => Ok(Self::U8),
            "16" => Ok(Self::U16),
            "float" | "f32" => Ok(Self::Float),
            other => bail!("unsupported depth {other:?}, expected 8, 16 or float"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List,
    Blend {
        mode: BlendMode,
        src: String,
        dst: String,
        depth: Depth,
    },
    Rgb {
        mode: BlendMode,
        src: Rgb<f64>,
        dst: Rgb<f64>,
        model: HsxKind,
    },
    Curve {
        curve: Curve,
        x: f64,
    },
}

/// Pull `--name value` out of `args`, returning the value if present.
fn take_option(args: &mut Vec<String>, name: &str) -> Result<Option<String>> {
    let Some(i) = args.iter().position(|a| a == name) else {
        return Ok(None);
    };
    if i + 1 >= args.len() {
        bail!("{name} needs a value");
    }
    let value = args.remove(i + 1);
    args.remove(i);
    Ok(Some(value))
}

fn parse_triple(s: &str) -> Result<Rgb<f64>> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<std::result::Result<_, _>>()
        .with_context(|| format!("bad colour {s:?}"))?;
    match parts.as_slice() {
        &[r, g, b] => Ok(Rgb::new(r, g, b)),
        _ => bail!("colour {s:?} needs three components"),
    }
}

/// Parse everything after the program name.
pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Command> {
    let mut args: Vec<String> = args.into_iter().collect();
    let depth = take_option(&mut args, "--depth")?;
    let model = take_option(&mut args, "--model")?;

    let registry = BlendRegistry::global();
    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["list"] => Ok(Command::List),
        ["blend", mode, src, dst] => Ok(Command::Blend {
            mode: registry.resolve(mode)?,
            src: src.to_string(),
            dst: dst.to_string(),
            depth: depth.as_deref().map(Depth::parse).transpose()?.unwrap_or_default(),
        }),
        ["rgb", mode, src, dst] => Ok(Command::Rgb {
            mode: registry.resolve(mode)?,
            src: parse_triple(src)?,
            dst: parse_triple(dst)?,
            model: model.as_deref().map(str::parse::<HsxKind>).transpose()?.unwrap_or_default(),
        }),
        ["curve", points, x] => {
            let curve = points.parse::<Curve>()?;
            let x = x.parse::<f64>().with_context(|| format!("bad x {x:?}"))?;
            if !x.is_finite() {
                bail!("x must be a finite number, got {x}");
            }
            Ok(Command::Curve { curve, x })
        }
        _ => Err(anyhow!("{USAGE}")),
    }
}

fn blend_scalar<T>(mode: BlendMode, src: &str, dst: &str) -> Result<String>
where
    T: Channel + std::str::FromStr + std::fmt::Display,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let f = mode.operator::<T>().separable().ok_or_else(|| {
        anyhow!("{} works on whole pixels, use `pigment rgb`", mode.id())
    })?;
    let s: T = src.parse().with_context(|| format!("bad source value {src:?}"))?;
    let d: T = dst.parse().with_context(|| format!("bad destination value {dst:?}"))?;
    Ok(f(s, d).to_string())
}

/// Execute a command and return what should be printed.
pub fn run(command: &Command) -> Result<String> {
    match command {
        Command::List => {
            let mut out = String::new();
            for (category, modes) in BlendRegistry::global().by_category() {
                out.push_str(category);
                out.push('\n');
                for mode in modes {
                    out.push_str(&format!("  {:<30} {}\n", mode.id(), mode.name()));
                }
            }
            Ok(out)
        }
        Command::Blend {
            mode,
            src,
            dst,
            depth,
        } => match depth {
            Depth::U8 => blend_scalar::<u8>(*mode, src, dst),
            Depth::U16 => blend_scalar::<u16>(*mode, src, dst),
            Depth::Float => blend_scalar::<f32>(*mode, src, dst),
        },
        Command::Rgb {
            mode,
            src,
            dst,
            model,
        } => {
            let out = mode.operator::<f64>().apply_rgb(*model, *src, *dst);
            Ok(format!("{},{},{}", out.r, out.g, out.b))
        }
        Command::Curve { curve, x } => Ok(curve.value(*x).to_string()),
    }
}
