// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#![allow(clippy::field_reassign_with_default)]
#![allow(clippy::uninlined_format_args)]

use std::path;

use svg2png::{ConversionRequest, Converter, Options};

fn main() {
    if let Err(e) = process() {
        eprintln!("Error: {}.", e);
        std::process::exit(1);
    }
}

fn timed<F, T>(perf: bool, name: &str, mut f: F) -> T
where
    F: FnMut() -> T,
{
    let now = std::time::Instant::now();
    let result = f();
    if perf {
        let elapsed = now.elapsed().as_micros() as f64 / 1000.0;
        println!("{}: {:.2}ms", name, elapsed);
    }

    result
}

fn process() -> Result<(), String> {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            println!("{}", HELP);
            return Err(e);
        }
    };

    if let Ok(()) = log::set_logger(&LOGGER) {
        if args.quiet {
            log::set_max_level(log::LevelFilter::Error);
        } else {
            log::set_max_level(log::LevelFilter::Info);
        }
    }

    let converter = Converter::with_options(args.options);
    let res = timed(args.perf, "Converting", || converter.convert(&args.request));
    svg2png::report(&args.request, &res);

    Ok(())
}

const HELP: &str = "\
svg2png converts an SVG file into a PNG of a fixed size.

USAGE:
  svg2png [OPTIONS] <in-svg> <out-png>
  svg2png [OPTIONS]                     # converts studio-shell/resources/clang-logo.svg

  svg2png in.svg out.png
  svg2png -w 1024 -h 768 in.svg out.png

OPTIONS:
      --help                    Prints this help
  -V, --version                 Prints version

  -w, --width LENGTH            Sets the width in pixels
                                [default: 512]
  -h, --height LENGTH           Sets the height in pixels
                                [default: 512]
  --background COLOR            Sets the background color
                                Examples: red, #fff, #fff000
  --resources-dir DIR           Sets a directory that will be used during
                                relative paths resolving.
                                [default: input file directory]

  --font-family FAMILY          Sets the default font family that will be
                                used when no 'font-family' is present
                                [default: Times New Roman]
  --font-size SIZE              Sets the default font size that will be
                                used when no 'font-size' is present
                                [default: 12] [possible values: 1..192 (inclusive)]
  --use-font-file PATH          Load a specified font file into the fonts database.
                                This option can be set multiple times
  --use-fonts-dir PATH          Loads all fonts from the specified directory
                                into the fonts database.
                                This option can be set multiple times
  --skip-system-fonts           Disables system fonts loading.

  --perf                        Prints performance stats
  --quiet                       Prints only errors

ARGS:
  <in-svg>                      Input file
  <out-png>                     Output file
";

#[derive(Debug)]
struct CliArgs {
    width: u32,
    height: u32,
    background: Option<svgtypes::Color>,
    resources_dir: Option<path::PathBuf>,

    font_family: Option<String>,
    font_size: u32,
    font_files: Vec<path::PathBuf>,
    font_dirs: Vec<path::PathBuf>,
    skip_system_fonts: bool,

    perf: bool,
    quiet: bool,

    input: Option<path::PathBuf>,
    output: Option<path::PathBuf>,
}

fn collect_args() -> Result<CliArgs, pico_args::Error> {
    let mut input = pico_args::Arguments::from_env();

    if input.contains("--help") {
        print!("{}", HELP);
        std::process::exit(0);
    }

    if input.contains(["-V", "--version"]) {
        println!("{}", env!("CARGO_PKG_VERSION"));
        std::process::exit(0);
    }

    Ok(CliArgs {
        width: input
            .opt_value_from_fn(["-w", "--width"], parse_length)?
            .unwrap_or(svg2png::DEFAULT_WIDTH),
        height: input
            .opt_value_from_fn(["-h", "--height"], parse_length)?
            .unwrap_or(svg2png::DEFAULT_HEIGHT),
        background: input.opt_value_from_str("--background")?,
        resources_dir: input.opt_value_from_str("--resources-dir")?,

        font_family: input.opt_value_from_str("--font-family")?,
        font_size: input
            .opt_value_from_fn("--font-size", parse_font_size)?
            .unwrap_or(12),
        font_files: input.values_from_str("--use-font-file")?,
        font_dirs: input.values_from_str("--use-fonts-dir")?,
        skip_system_fonts: input.contains("--skip-system-fonts"),

        perf: input.contains("--perf"),
        quiet: input.contains("--quiet"),

        input: input.opt_free_from_str()?,
        output: input.opt_free_from_str()?,
    })
}

fn parse_length(s: &str) -> Result<u32, String> {
    let n: u32 = s.parse().map_err(|_| "invalid length")?;

    if n > 0 {
        Ok(n)
    } else {
        Err("LENGTH cannot be zero".to_string())
    }
}

fn parse_font_size(s: &str) -> Result<u32, String> {
    let n: u32 = s.parse().map_err(|_| "invalid number")?;

    if n > 0 && n <= 192 {
        Ok(n)
    } else {
        Err("font size out of bounds".to_string())
    }
}

struct Args {
    request: ConversionRequest,
    options: Options,
    perf: bool,
    quiet: bool,
}

fn parse_args() -> Result<Args, String> {
    let args = collect_args().map_err(|e| e.to_string())?;

    let request = match (args.input, args.output) {
        (Some(input), Some(output)) => ConversionRequest::new(input, output),
        (Some(_), None) => return Err("<out-png> must be set".to_string()),
        (None, _) => ConversionRequest::default(),
    };
    let request = request.with_size(args.width, args.height);

    let mut options = Options::default();
    options.resources_dir = args.resources_dir;
    options.background = args.background.map(svg_to_skia_color);
    if let Some(family) = args.font_family {
        options.font_family = family;
    }
    options.font_size = args.font_size as f32;
    options.font_files = args.font_files;
    options.font_dirs = args.font_dirs;
    options.skip_system_fonts = args.skip_system_fonts;

    Ok(Args {
        request,
        options,
        perf: args.perf,
        quiet: args.quiet,
    })
}

fn svg_to_skia_color(color: svgtypes::Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.red, color.green, color.blue, color.alpha)
}

/// A simple stdout/stderr logger.
///
/// Messages from this crate are printed as is, everything else is prefixed
/// with its origin.
static LOGGER: SimpleLogger = SimpleLogger;
struct SimpleLogger;
impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let target = if !record.target().is_empty() {
            record.target()
        } else {
            record.module_path().unwrap_or_default()
        };

        let args = record.args();
        if target.starts_with("svg2png") {
            match record.level() {
                log::Level::Info => println!("{}", args),
                log::Level::Warn => eprintln!("Warning: {}", args),
                log::Level::Error => eprintln!("{}", args),
                _ => {}
            }
            return;
        }

        if record.level() > log::Level::Warn {
            return;
        }

        let line = record.line().unwrap_or(0);
        match record.level() {
            log::Level::Error => eprintln!("Error (in {}:{}): {}", target, line, args),
            log::Level::Warn => eprintln!("Warning (in {}:{}): {}", target, line, args),
            _ => {}
        }
    }

    fn flush(&self) {}
}
