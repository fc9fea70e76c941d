use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use monkey_hunter::chart::render_svg;
use monkey_hunter::core::ballistics::LaunchSolution;
use monkey_hunter::core::clock::{ClockConfig, ClockPhase, SimulationClock, SimulationState};
use monkey_hunter::core::scenario::{
    DEFAULT_MONKEY_HEIGHT_M, DEFAULT_SHOOTER_DISTANCE_M, EARTH_GRAVITY_MPS2, Scenario,
};
use monkey_hunter::core::window::{SceneExtent, ViewportMapping, ViewportScaler, ViewportSize};
use serde::Serialize;

/// Fire at a monkey that lets go of its branch the instant the gun goes off.
#[derive(Parser, Debug)]
#[command(name = "monkey_hunter", version, about)]
struct Cli {
    /// Height of the monkey's branch (m)
    #[arg(long, env = "MONKEY_HEIGHT", allow_negative_numbers = true)]
    height: Option<f64>,

    /// Horizontal distance from the gun to the tree (m)
    #[arg(long, env = "MONKEY_DISTANCE", allow_negative_numbers = true)]
    distance: Option<f64>,

    /// Gravitational acceleration (m/s^2)
    #[arg(long, env = "MONKEY_GRAVITY", allow_negative_numbers = true)]
    gravity: Option<f64>,

    /// Prompt on stdin for any value not passed as a flag
    #[arg(long, short = 'i')]
    interactive: bool,

    /// Give up after this much simulated time (s); runs until the hit when omitted
    #[arg(long, value_name = "SECONDS")]
    time_limit: Option<f64>,

    /// Print the state after every tick
    #[arg(long)]
    trace: bool,

    /// Emit the run report as JSON
    #[arg(long)]
    json: bool,

    /// Write an SVG chart of both paths
    #[arg(long, value_name = "FILE")]
    plot: Option<PathBuf>,

    /// Also report how the scene maps onto a WIDTHxHEIGHT pixel viewport
    #[arg(long, value_name = "WxH", value_parser = parse_viewport)]
    viewport: Option<ViewportSize>,
}

#[derive(Serialize)]
struct RunReport<'a> {
    scenario: Scenario,
    launch: LaunchSolution,
    predicted_intercept_s: f64,
    ticks: usize,
    outcome: SimulationState,
    #[serde(skip_serializing_if = "Option::is_none")]
    viewport: Option<ViewportMapping>,
    #[serde(skip_serializing_if = "<[SimulationState]>::is_empty")]
    trace: &'a [SimulationState],
}

fn parse_f64(value: &str, label: &str) -> Result<f64, String> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid {label}: '{value}'. Expected a number."))
}

fn parse_viewport(value: &str) -> Result<ViewportSize, String> {
    let (w, h) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("Invalid viewport '{value}'. Expected WIDTHxHEIGHT, e.g. 800x600."))?;
    let size = ViewportSize::new(
        parse_f64(w, "viewport width")?,
        parse_f64(h, "viewport height")?,
    );
    if !(size.width_px.is_finite() && size.height_px.is_finite()) {
        return Err(format!("Invalid viewport '{value}'. Width and height must be finite."));
    }
    Ok(size)
}

fn read_f64<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<f64, String> {
    loop {
        write!(output, "{prompt}").map_err(|e| format!("Failed to write prompt: {e}"))?;
        output
            .flush()
            .map_err(|e| format!("Failed to flush stdout: {e}"))?;

        let mut line = String::new();
        let bytes = input
            .read_line(&mut line)
            .map_err(|e| format!("Could not read input: {e}"))?;

        if bytes == 0 {
            return Err("Input ended unexpectedly (EOF).".to_string());
        }

        match line.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => eprintln!("Please enter a valid number (e.g., 5 or 9.81)."),
        }
    }
}

fn resolve_value<R: BufRead, W: Write>(
    given: Option<f64>,
    interactive: bool,
    prompt: &str,
    default: f64,
    input: &mut R,
    output: &mut W,
) -> Result<f64, String> {
    match given {
        Some(value) => Ok(value),
        None if interactive => read_f64(input, output, prompt),
        None => Ok(default),
    }
}

fn resolve_scenario<R: BufRead, W: Write>(
    cli: &Cli,
    input: &mut R,
    output: &mut W,
) -> Result<Scenario, String> {
    let height = resolve_value(
        cli.height,
        cli.interactive,
        "Monkey height (m): ",
        DEFAULT_MONKEY_HEIGHT_M,
        input,
        output,
    )?;
    let distance = resolve_value(
        cli.distance,
        cli.interactive,
        "Shooter distance (m): ",
        DEFAULT_SHOOTER_DISTANCE_M,
        input,
        output,
    )?;
    let gravity = resolve_value(
        cli.gravity,
        cli.interactive,
        "Gravity (m/s^2): ",
        EARTH_GRAVITY_MPS2,
        input,
        output,
    )?;

    Scenario::new(height, distance, gravity).map_err(|e| e.to_string())
}

fn print_report(report: &RunReport<'_>) {
    for state in report.trace {
        println!(
            "t={:>7.3} s  stone=({:>8.3}, {:>8.3}) m  monkey y={:>8.3} m",
            state.elapsed_s, state.projectile.x, state.projectile.y, state.target.y
        );
    }
    if !report.trace.is_empty() {
        println!();
    }

    println!(
        "Launch velocity: {:.4} m/s horizontal ({:.4} m/s along the barrel)",
        report.launch.initial_velocity_mps,
        report.launch.launch_speed_mps()
    );
    println!("Aim angle: {:.2} deg", report.launch.aim_angle_deg());
    println!("Predicted interception: {:.4} s", report.predicted_intercept_s);

    match report.outcome.phase {
        ClockPhase::Hit => {
            let contact_s = report
                .outcome
                .intercept_time_s
                .unwrap_or(report.outcome.elapsed_s);
            println!(
                "Hit after {} ticks at t={:.4} s, x={:.4} m, y={:.4} m",
                report.ticks, contact_s, report.outcome.projectile.x, report.outcome.projectile.y
            );
        }
        ClockPhase::Missed => println!(
            "No hit within {:.2} s ({} ticks)",
            report.outcome.elapsed_s, report.ticks
        ),
        ClockPhase::Idle | ClockPhase::Running => {
            println!("Simulation stopped at t={:.4} s", report.outcome.elapsed_s);
        }
    }

    if let Some(mapping) = report.viewport {
        println!(
            "Viewport: {:.0}x{:.0} px/m scale, visible to {:.2} m x {:.2} m, ticks every {} m / {} m",
            mapping.scale_x,
            mapping.scale_y,
            mapping.visible_max_x,
            mapping.visible_max_y,
            mapping.x_tick_interval(),
            mapping.y_tick_interval()
        );
    }
}

struct RunOutcome {
    clock: SimulationClock,
    ticks: usize,
    trace: Vec<SimulationState>,
}

/// Ticks a fresh clock until the shot hits or the time limit runs out.
fn simulate(scenario: Scenario, time_limit_s: Option<f64>, keep_trace: bool) -> RunOutcome {
    let mut clock = SimulationClock::with_config(ClockConfig { time_limit_s });
    clock.start(scenario);

    let mut trace = Vec::new();
    if keep_trace {
        trace.push(*clock.state());
    }
    let mut ticks = 0usize;
    while !clock.state().is_terminated() {
        clock.tick();
        ticks += 1;
        if keep_trace {
            trace.push(*clock.state());
        }
    }

    RunOutcome {
        clock,
        ticks,
        trace,
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    if let Some(limit) = cli.time_limit.filter(|limit| !(*limit > 0.0)) {
        return Err(format!(
            "Invalid time limit: {limit}. Expected a positive number of seconds."
        ));
    }

    let scenario = resolve_scenario(&cli, &mut io::stdin().lock(), &mut io::stdout())?;
    let RunOutcome {
        clock,
        ticks,
        trace,
    } = simulate(scenario, cli.time_limit, cli.trace);

    let trajectory = *clock
        .trajectory()
        .ok_or_else(|| "Simulation was reset before it finished.".to_string())?;

    let viewport = match cli.viewport {
        Some(size) => Some(
            ViewportScaler::new()
                .rescale(size, SceneExtent::from(&scenario))
                .mapping()
                .ok_or_else(|| {
                    format!(
                        "Viewport {}x{} px has no drawable area.",
                        size.width_px, size.height_px
                    )
                })?,
        ),
        None => None,
    };

    let report = RunReport {
        scenario,
        launch: *trajectory.solution(),
        predicted_intercept_s: trajectory.intercept_time_s(),
        ticks,
        outcome: *clock.state(),
        viewport,
        trace: &trace,
    };

    if cli.json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Could not encode report: {e}"))?;
        println!("{json}");
    } else {
        print_report(&report);
    }

    if let Some(path) = &cli.plot {
        render_svg(path, &trajectory, clock.state()).map_err(|e| e.to_string())?;
        log::info!("Chart written to {}", path.display());
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
