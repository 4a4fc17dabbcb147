use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use jwr_rs::chart::{ChartCanvas, HoverOutcome};
use jwr_rs::widget::{Widget, parse_widget};
use jwr_rs::{progress::ProgressSummary, render};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "jwr",
    version,
    about = "Lay out JSON timeline widgets and hit-test JSON chart widgets"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sort, group and lay out a timeline widget.
    Timeline(TimelineArgs),
    /// Plot a chart widget and look up hover targets.
    Chart(ChartArgs),
}

#[derive(Args, Debug)]
struct TimelineArgs {
    /// Widget JSON file ({"type": "timeline", "data": ...}).
    file: PathBuf,
    /// Override the track orientation.
    #[arg(long, value_parser = ["vertical", "horizontal"])]
    orientation: Option<String>,
    /// Override content placement.
    #[arg(long, value_parser = ["left", "right", "alternating", "center"])]
    layout: Option<String>,
    /// Override grouping.
    #[arg(long, value_parser = ["none", "year", "month", "category"])]
    group_by: Option<String>,
    /// Override sort order.
    #[arg(long, value_parser = ["asc", "desc"])]
    sort: Option<String>,
    /// Use compact spacing.
    #[arg(long, default_value_t = false)]
    compact: bool,
    /// Print the progress summary even if the widget does not enable it.
    #[arg(long, default_value_t = false)]
    progress: bool,
    /// Write an SVG preview to this path.
    #[arg(long)]
    svg: Option<PathBuf>,
    /// Print the full layout as JSON instead of a summary.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct ChartArgs {
    /// Widget JSON file ({"type": "chart", "data": ...}).
    file: PathBuf,
    /// Canvas width (default 640).
    #[arg(long, default_value_t = 640)]
    width: u32,
    /// Canvas height (default 400).
    #[arg(long, default_value_t = 400)]
    height: u32,
    /// Pointer position to test, as X,Y. Repeatable.
    #[arg(long = "hover", value_parser = parse_point)]
    hover: Vec<(f64, f64)>,
    /// Write an SVG preview to this path.
    #[arg(long)]
    svg: Option<PathBuf>,
    /// Print results as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (a, b) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got {s:?}"))?;
    let x = a.trim().parse::<f64>().map_err(|e| e.to_string())?;
    let y = b.trim().parse::<f64>().map_err(|e| e.to_string())?;
    Ok((x, y))
}

fn read_widget(path: &Path) -> Result<Widget> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(parse_widget(&text)?)
}

fn fmt_progress(p: &ProgressSummary) -> String {
    format!(
        "progress: {}/{} completed ({:.1}%)  current={} upcoming={} cancelled={} unset={}",
        p.completed, p.total, p.percent, p.current, p.upcoming, p.cancelled, p.unset
    )
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Timeline(args) => cmd_timeline(args),
        Command::Chart(args) => cmd_chart(args),
    }
}

fn cmd_timeline(args: TimelineArgs) -> Result<()> {
    let Widget::Timeline(mut widget) = read_widget(&args.file)? else {
        bail!("{} is not a timeline widget", args.file.display());
    };

    let cfg = &mut widget.config;
    if args.orientation.is_some() {
        cfg.orientation = args.orientation;
    }
    if args.layout.is_some() {
        cfg.layout = args.layout;
    }
    if args.group_by.is_some() {
        cfg.group_by = args.group_by;
    }
    if args.sort.is_some() {
        cfg.sort_order = args.sort;
    }
    if args.compact {
        cfg.compact_mode = Some(true);
    }
    if args.progress {
        cfg.show_progress = Some(true);
    }

    let view = widget.build();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        let titles: Vec<&str> = view
            .groups
            .iter()
            .flat_map(|g| g.events.iter().map(|e| e.title.as_str()))
            .collect();
        for (group_index, group) in view.groups.iter().enumerate() {
            if !group.label.is_empty() {
                println!("== {} ({})", group.label, group.events.len());
            }
            for placed in view
                .layout
                .events
                .iter()
                .filter(|e| e.group_index == group_index)
            {
                println!(
                    "{:>3}  {:<14} {:<24} {:?}/{:?}  @({:.0},{:.0})",
                    placed.index,
                    placed.date_label.as_deref().unwrap_or(""),
                    titles.get(placed.index).copied().unwrap_or(""),
                    placed.side,
                    placed.alignment,
                    placed.marker.x,
                    placed.marker.y
                );
            }
        }
        eprintln!(
            "{} event(s), extent {:.0}x{:.0}",
            view.layout.events.len(),
            view.layout.width,
            view.layout.height
        );
        if let Some(p) = &view.progress {
            println!("{}", fmt_progress(p));
        }
    }

    if let Some(path) = args.svg.as_ref() {
        let svg = render::timeline_svg(&view, &widget.theme)?;
        render::save_svg(&svg, path)?;
        eprintln!("Wrote timeline preview to {}", path.display());
    }

    Ok(())
}

fn cmd_chart(args: ChartArgs) -> Result<()> {
    let Widget::Chart(widget) = read_widget(&args.file)? else {
        bail!("{} is not a chart widget", args.file.display());
    };

    let mut canvas = ChartCanvas::new(args.width, args.height);
    let svg = canvas.render_svg(&widget.data, &widget.theme)?;
    eprintln!(
        "{} shape(s) plotted on {}x{} ({:?} hit rules)",
        canvas.index().len(),
        canvas.width(),
        canvas.height(),
        canvas.index().mode()
    );

    let results: Vec<((f64, f64), HoverOutcome)> = args
        .hover
        .iter()
        .map(|&(x, y)| ((x, y), canvas.hover(x, y)))
        .collect();

    if args.json {
        let out: Vec<serde_json::Value> = results
            .iter()
            .map(|((x, y), outcome)| serde_json::json!({ "x": x, "y": y, "outcome": outcome }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for ((x, y), outcome) in &results {
            match outcome {
                HoverOutcome::Hit(m) => println!("({x}, {y}) -> {} = {}", m.label, m.value),
                HoverOutcome::Miss => println!("({x}, {y}) -> no match"),
                HoverOutcome::Outside => println!("({x}, {y}) -> outside canvas"),
            }
        }
    }

    if let Some(path) = args.svg.as_ref() {
        render::save_svg(&svg, path)?;
        eprintln!("Wrote chart preview to {}", path.display());
    }

    Ok(())
}
