//! # Beam Analysis CLI
//!
//! Thin front end over `beam_core`: reads a beam either from a JSON input
//! document or from interactive prompts, runs the analysis, and prints
//! reactions, peaks and the serviceability verdict.
//!
//! ```text
//! beam_cli [input.json] [--out result.json]
//! ```
//!
//! Set `RUST_LOG=debug` to see the engine's progress messages.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use beam_core::calculations::{analyze, AnalysisResult};
use beam_core::equations::reference_peak_deflection;
use beam_core::input::{BeamInput, LoadInput};
use beam_core::settings::AnalysisSettings;
use beam_core::units::{
    ForceUnit, InertiaUnit, LengthUnit, LineLoadUnit, ModulusUnit, Quantity, Unit,
};
use beam_core::{load_input, save_result, Beam, CalcError};

const USAGE: &str = "usage: beam_cli [input.json] [--out result.json]";

struct Args {
    input: Option<PathBuf>,
    out: Option<PathBuf>,
    help: bool,
}

fn parse_args(argv: impl IntoIterator<Item = String>) -> Result<Args, String> {
    let mut args = Args {
        input: None,
        out: None,
        help: false,
    };
    let mut iter = argv.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--out" | "-o" => {
                let path = iter.next().ok_or("--out needs a file path")?;
                args.out = Some(PathBuf::from(path));
            }
            "--help" | "-h" => args.help = true,
            _ if args.input.is_none() => args.input = Some(PathBuf::from(arg)),
            _ => return Err(format!("unexpected argument '{}'", arg)),
        }
    }
    Ok(args)
}

// ============================================================================
// Prompts
// ============================================================================

/// Read one trimmed line; `None` on EOF or I/O failure.
fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn prompt_f64(prompt: &str) -> Option<f64> {
    loop {
        match read_line(prompt)?.parse::<f64>() {
            Ok(value) if value.is_finite() => return Some(value),
            _ => println!("Enter a valid number."),
        }
    }
}

fn prompt_positive(prompt: &str) -> Option<f64> {
    loop {
        let value = prompt_f64(prompt)?;
        if value > 0.0 {
            return Some(value);
        }
        println!("Value must be greater than zero.");
    }
}

/// Numbered menu over `choices`, returns the selected entry.
fn prompt_unit<U: Unit>(what: &str, choices: &[U]) -> Option<U> {
    let menu: Vec<String> = choices
        .iter()
        .enumerate()
        .map(|(i, u)| format!("{}.{}", i + 1, u.label()))
        .collect();
    let prompt = format!("Select {} units [{}] = ", what, menu.join(", "));
    loop {
        match read_line(&prompt)?.parse::<usize>() {
            Ok(n) if (1..=choices.len()).contains(&n) => return Some(choices[n - 1]),
            _ => println!("Invalid choice. Try again."),
        }
    }
}

fn prompt_beam() -> Option<BeamInput> {
    println!();
    println!("---Beam Properties---");
    let span = prompt_positive("Enter the length of the beam = ")?;
    let span_unit = prompt_unit("length", &LengthUnit::ALL)?;

    let modulus = prompt_positive("Enter the Young's Modulus of Elasticity = ")?;
    let modulus_unit = prompt_unit("modulus", &ModulusUnit::ALL)?;

    let inertia = prompt_positive("Enter the Moment of Inertia = ")?;
    let inertia_unit = prompt_unit("inertia", &InertiaUnit::ALL)?;

    println!();
    println!("---Loading Properties---");
    println!("1.Point Load acting on a Simply Supported Beam");
    println!("2.Uniformly Distributed Load on a Simply Supported Beam");
    let load = loop {
        match read_line("Select the type of Load = ")?.as_str() {
            "1" => {
                let magnitude =
                    prompt_f64("Enter your Load Magnitude (Use -ve values for upward loading) = ")?;
                let force_unit = prompt_unit("force", &ForceUnit::ALL)?;
                let position = prompt_f64("Enter your Load Position from Left Hand Support = ")?;
                let position_unit = prompt_unit("length", &LengthUnit::ALL)?;
                break LoadInput::Point {
                    magnitude: Quantity::new(magnitude, force_unit),
                    position: Quantity::new(position, position_unit),
                };
            }
            "2" => {
                let intensity = prompt_positive("Enter the Load Intensity = ")?;
                let unit = prompt_unit("load", &LineLoadUnit::ALL)?;
                break LoadInput::Uniform {
                    intensity: Quantity::new(intensity, unit),
                };
            }
            _ => println!("Invalid choice. Try again."),
        }
    };

    Some(BeamInput {
        label: "CLI".to_string(),
        span: Quantity::new(span, span_unit),
        modulus: Quantity::new(modulus, modulus_unit),
        inertia: Quantity::new(inertia, inertia_unit),
        loads: vec![load],
        settings: AnalysisSettings::default(),
    })
}

// ============================================================================
// Output
// ============================================================================

fn status_icon(pass: bool) -> &'static str {
    if pass {
        "[OK]"
    } else {
        "[FAIL]"
    }
}

fn print_result(input: &BeamInput, beam: &Beam, result: &AnalysisResult) {
    let service = &result.serviceability;

    println!();
    println!("═══════════════════════════════════════");
    println!("  BEAM ANALYSIS RESULTS {}", input.label);
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Span:  {} ({:.3} m)", input.span, beam.span_m());
    println!("  EI:    {:.4e} N·m²", beam.ei_nm2());
    for (i, load) in beam.loads().iter().enumerate() {
        println!("  Load {}: {}", i + 1, load);
    }
    println!();
    println!("---Reaction Forces---");
    println!("  Left Reaction  = {:.3} N", result.reactions.left_n);
    println!("  Right Reaction = {:.3} N", result.reactions.right_n);
    println!();
    println!("Demand:");
    println!(
        "  V_max = {:.3} N @ {:.3} m",
        result.max_shear.value, result.max_shear.position_m
    );
    println!(
        "  M_max = {:.3} N·m @ {:.3} m",
        result.max_moment.value, result.max_moment.position_m
    );
    if result.min_moment.value < 0.0 {
        println!(
            "  M_min = {:.3} N·m @ {:.3} m",
            result.min_moment.value, result.min_moment.position_m
        );
    }
    println!(
        "  δ_max = {:.6} m ({:.3} mm) @ {:.3} m",
        service.max_deflection_m,
        service.max_deflection_m * 1e3,
        service.position_m
    );
    if let Some(reference) = reference_peak_deflection(beam) {
        println!("  δ_max (closed form) = {:.3} mm", reference * 1e3);
    }
    println!();

    if service.negligible {
        println!("Maximum Deflection is negligible under the given loading conditions.");
    } else if !service.passes {
        println!(
            "WARNING : Deflection exceeds typical serviceability limits (L/{:.0}).",
            service.limit_divisor
        );
        println!("Beam may not be suitable for structural use.");
    }

    let ratio = service
        .deflection_ratio
        .map_or_else(|| "inf".to_string(), |r| format!("{:.0}", r));
    println!();
    println!("═══════════════════════════════════════");
    println!(
        "  Deflection: {:.2} (L/{} vs L/{:.0}) {}",
        service.utilization,
        ratio,
        service.limit_divisor,
        status_icon(service.passes)
    );
    println!("═══════════════════════════════════════");
}

fn report_error(e: &CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };
    if args.help {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    println!("Beam Analysis Tool");
    println!("NOTE : All calculations are performed in SI units.");

    let input = match &args.input {
        Some(path) => match load_input(path) {
            Ok(input) => input,
            Err(e) => {
                report_error(&e);
                return ExitCode::FAILURE;
            }
        },
        None => match prompt_beam() {
            Some(input) => input,
            None => {
                eprintln!("Input ended before the beam was fully described.");
                return ExitCode::FAILURE;
            }
        },
    };

    let outcome = input.to_beam().and_then(|beam| {
        let result = analyze(&beam, &input.settings)?;
        Ok((beam, result))
    });

    match outcome {
        Ok((beam, result)) => {
            print_result(&input, &beam, &result);
            if let Some(out) = &args.out {
                if let Err(e) = save_result(&input.label, &result, out) {
                    report_error(&e);
                    return ExitCode::FAILURE;
                }
                println!("Result written to {}", out.display());
            }
            println!();
            println!("Analysis Complete.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}
