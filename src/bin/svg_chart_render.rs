use std::fs;
use std::path::{Path, PathBuf};

use svg_chart::render::SvgDocument;
use svg_chart::telemetry::init_default_tracing;
use svg_chart::{ChartConfig, ChartData, SvgChart};

const USAGE: &str =
    "usage: svg-chart-render --config <path> --data <path> [--id <chart-id>] [--output <path>]";

#[derive(Debug)]
struct CliArgs {
    config: PathBuf,
    data: PathBuf,
    id: String,
    output: Option<PathBuf>,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let config = ChartConfig::from_json_str(&read(&args.config)?).map_err(|e| e.to_string())?;
    let data = ChartData::from_json_str(&read(&args.data)?).map_err(|e| e.to_string())?;

    let mut chart =
        SvgChart::new(SvgDocument::new(), &args.id, config, data).map_err(|e| e.to_string())?;
    chart.init(true).map_err(|e| e.to_string())?;
    chart.update_data(true, None, true).map_err(|e| e.to_string())?;

    let svg = chart
        .surface()
        .to_svg_string(&args.id)
        .map_err(|e| e.to_string())?;

    match &args.output {
        Some(path) => fs::write(path, svg)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            print!("{svg}");
            Ok(())
        }
    }
}

fn read(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("failed to read `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut config = None::<PathBuf>;
    let mut data = None::<PathBuf>;
    let mut id = None::<String>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {name}"))
        };
        match flag.as_str() {
            "--config" => config = Some(PathBuf::from(value("--config")?)),
            "--data" => data = Some(PathBuf::from(value("--data")?)),
            "--id" => id = Some(value("--id")?),
            "--output" => output = Some(PathBuf::from(value("--output")?)),
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        config: config.ok_or_else(|| format!("missing --config\n{USAGE}"))?,
        data: data.ok_or_else(|| format!("missing --data\n{USAGE}"))?,
        id: id.unwrap_or_else(|| "chart".to_owned()),
        output,
    })
}
