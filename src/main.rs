use clap::{Parser, ValueEnum};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use tincture::naming::{display_name, NearestColorNamer};
use tincture::prelude::*;

#[derive(Parser)]
#[command(name = "tincture")]
#[command(about = "Show a color as hex, RGB, HSL and CMYK, with luminance and rough estimates")]
struct Cli {
    /// The color: a hex code like "#FF8000", or channels like "255, 128, 0" or "rgb(255, 128, 0)"
    color: String,

    /// Print only this field, exactly as it would be copied
    #[arg(short, long, value_enum)]
    field: Option<Field>,

    /// Decimal places shown for luminance
    #[arg(short, long, default_value_t = 2)]
    decimals: usize,

    /// Label shown when the color has no name
    #[arg(long, default_value = tincture::config::UNKNOWN_COLOR_LABEL)]
    unknown_label: String,

    /// Don't look up a name for the color
    #[arg(long)]
    no_name: bool,
}

#[derive(Copy, Clone, ValueEnum)]
enum Field {
    Hex,
    Rgb,
    Hsl,
    Cmyk,
    Luminance,
    Temperature,
    Wavelength,
}

impl From<Field> for ReportField {
    fn from(field: Field) -> ReportField {
        match field {
            Field::Hex => ReportField::Hex,
            Field::Rgb => ReportField::Rgb,
            Field::Hsl => ReportField::Hsl,
            Field::Cmyk => ReportField::Cmyk,
            Field::Luminance => ReportField::Luminance,
            Field::Temperature => ReportField::Temperature,
            Field::Wavelength => ReportField::Wavelength,
        }
    }
}

fn parse_color(input: &str) -> Result<RGBColor, InvalidColorInput> {
    let input = input.trim();
    if input.starts_with('#') {
        RGBColor::from_hex_code(input)
    } else {
        input.parse()
    }
}

// Everything the command prints for a color, line by line.
fn output_lines(cli: &Cli, rgb: RGBColor) -> Vec<String> {
    let options = DisplayOptions {
        luminance_decimals: cli.decimals,
        unknown_color_label: cli.unknown_label.clone(),
    };
    let report = ColorReport::from_rgb(rgb);
    debug!(?report, "computed report");

    if let Some(field) = cli.field {
        return vec![report.field_text(field.into(), &options)];
    }

    let mut lines = vec![];
    if !cli.no_name {
        let name = display_name(
            NearestColorNamer::html(),
            &report.hex,
            &options.unknown_color_label,
        );
        lines.push(format!("Selected Color: {}", name));
    }
    lines.extend(report.render(&options));
    lines
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let rgb = match parse_color(&cli.color) {
        Ok(rgb) => rgb,
        Err(e) => {
            error!(input = %cli.color, "rejected color: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    debug!(r = rgb.r, g = rgb.g, b = rgb.b, "parsed color");

    for line in output_lines(&cli, rgb) {
        println!("{}", line);
    }
}
