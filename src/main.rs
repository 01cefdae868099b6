use clap::Parser;
use stock_cutter::render;
use stock_cutter::solver::Solver;
use stock_cutter::types::{Solution, Status};

#[derive(Parser)]
#[command(name = "stock_cutter", about = "1D cutting stock optimizer")]
struct Cli {
    /// Available stock lengths (e.g. 11 11)
    #[arg(long, num_args = 1.., required = true)]
    stock: Vec<f64>,

    /// Required pieces as length:qty (e.g. 5:3 2:3)
    #[arg(long = "cuts", num_args = 1.., required = true)]
    cuts: Vec<String>,

    /// Show ASCII layout of each pattern
    #[arg(long)]
    layout: bool,
}

fn parse_cut(s: &str) -> Result<(f64, f64), String> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 2 {
        return Err(format!("invalid cut '{}', expected length:qty", s));
    }
    let length = parts[0]
        .parse::<f64>()
        .map_err(|_| format!("invalid length in '{}'", s))?;
    let qty = parts[1]
        .parse::<f64>()
        .map_err(|_| format!("invalid quantity in '{}'", s))?;
    Ok((length, qty))
}

fn main() {
    let cli = Cli::parse();

    let cuts: Vec<(f64, f64)> = cli
        .cuts
        .iter()
        .map(|c| parse_cut(c))
        .collect::<Result<Vec<_>, _>>()
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });

    let (required, quantities): (Vec<f64>, Vec<f64>) = cuts.into_iter().unzip();

    let solver = Solver::new(cli.stock, required.clone(), quantities);
    let solution = solver.solve().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    match solution.status {
        Status::Optimal => print_patterns(&solution, cli.layout),
        Status::Infeasible => {
            println!(
                "Infeasible: {}",
                solution.message.as_deref().unwrap_or_default()
            );
            for (&size, &left) in required.iter().zip(&solution.remaining_pieces) {
                if left > 0 {
                    println!("  - {} more pieces of size {} needed", left, size);
                }
            }
            std::process::exit(2);
        }
        Status::Error => {
            eprintln!(
                "Error: {}",
                solution.message.as_deref().unwrap_or_default()
            );
            std::process::exit(1);
        }
    }
}

fn print_patterns(solution: &Solution, layout: bool) {
    for (i, pattern) in solution.patterns.iter().enumerate() {
        let cuts = pattern
            .cuts
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        print!("Pattern {} ({}): {}", i + 1, pattern.stock, cuts);
        if pattern.waste() > 0.0 {
            print!("  [waste {}]", pattern.waste());
        }
        println!();
        if layout {
            print!("{}", render::render_pattern(pattern));
        }
    }

    println!(
        "Summary: {} pattern{}, {} of {} used, {}% efficiency",
        solution.pattern_count(),
        if solution.pattern_count() == 1 { "" } else { "s" },
        solution.total_used,
        solution.total_stock,
        solution.efficiency,
    );
}
