use std::process::ExitCode;

use clap::Parser;
use meshlit::{Model, MODELS};

mod cli;

use cli::{Cli, Command};

#[derive(Debug, thiserror::Error)]
enum InspectError {
    #[error("no model named {0:?}; try `inspect list`")]
    UnknownModel(String),
    #[error("{failed} of {checked} models are invalid")]
    Invalid { failed: usize, checked: usize },
    #[error(transparent)]
    Model(#[from] meshlit::Error),
}

fn lookup(name: &str) -> Result<&'static Model<'static>, InspectError> {
    meshlit::by_name(name).ok_or_else(|| InspectError::UnknownModel(name.to_owned()))
}

fn list() {
    for m in MODELS {
        println!(
            "{:<8} {:>3} triangles{}",
            m.name,
            m.triangle_count(),
            if m.has_tex_indices() { ", textured" } else { "" }
        );
    }
}

fn show(m: &Model) {
    println!("{}", m.name);
    println!("  vertices_amount   {}", m.vertices_amount);
    println!("  indices_amount    {}", m.indices_amount);
    println!("  tex_coords_amount {}", m.tex_coords_amount);
    match m.tex_indices {
        Some(tex) => println!("  tex_indices       {}", tex.amount),
        None => println!("  tex_indices       none"),
    }
    println!(
        "  {:<12} {:<6} {:<4} {:>5} {:>6} {:>6}  aligned",
        "array", "type", "comp", "len", "values", "bytes"
    );
    for l in m.layout() {
        println!(
            "  {:<12} {:<6} {:<4} {:>5} {:>6} {:>6}  {}",
            l.kind.to_string(),
            l.ty.to_string(),
            l.component.to_string(),
            l.len,
            l.count(),
            l.byte_len(),
            l.aligned
        );
    }
}

fn check(names: &[String]) -> Result<(), InspectError> {
    let models = if names.is_empty() {
        MODELS.to_vec()
    } else {
        names
            .iter()
            .map(|n| lookup(n))
            .collect::<Result<Vec<_>, _>>()?
    };

    let mut failed = 0;
    for m in &models {
        let errs = m.errors();
        let status = if errs.is_empty() { "ok" } else { "INVALID" };
        println!("{}: {status}", m.name);
        for e in &errs {
            println!("  error: {e}");
        }
        for l in m.lints() {
            println!("  lint: {l}");
        }
        if !errs.is_empty() {
            tracing::warn!(model = m.name, errors = errs.len(), "model failed validation");
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(InspectError::Invalid {
            failed,
            checked: models.len(),
        });
    }
    Ok(())
}

fn triangles(m: &Model) -> Result<(), InspectError> {
    for tri in m.triangles() {
        let tri = tri?;
        let [a, b, c] = tri.positions;
        print!(
            "{:>3} {:?}  ({}, {}, {}) ({}, {}, {}) ({}, {}, {})",
            tri.index, tri.corners, a.x, a.y, a.z, b.x, b.y, b.z, c.x, c.y, c.z
        );
        if let Some([p, q, r]) = m.tex_triangle(tri.index)? {
            print!("  uv ({}, {}) ({}, {}) ({}, {})", p.x, p.y, q.x, q.y, r.x, r.y);
        }
        println!();
    }
    Ok(())
}

fn run(command: Command) -> Result<(), InspectError> {
    match command {
        Command::List => list(),
        Command::Show { name } => show(lookup(&name)?),
        Command::Check { names } => check(&names)?,
        Command::Triangles { name } => triangles(lookup(&name)?)?,
    }
    Ok(())
}

pub fn main() -> ExitCode {
    let cli = Cli::parse();
    cli::initialize_tracing(&cli.log_filter, cli.log_format);
    tracing::debug!(command = ?cli.command, "starting");

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
