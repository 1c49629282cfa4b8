use clap::Parser;
use trigrid::tabulate;

/// trigrid tabulates an arithmetic expression in x, y and z over an
/// inclusive three-dimensional grid of integer points.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, allow_negative_numbers = true)]
struct Args {
    /// Numeric domain to evaluate in: i, u, l, s, d or bi.
    mode: String,

    /// The expression to tabulate.
    expression: String,

    /// First x coordinate, inclusive.
    x1: i32,
    /// Last x coordinate, inclusive.
    x2: i32,

    /// First y coordinate, inclusive.
    y1: i32,
    /// Last y coordinate, inclusive.
    y2: i32,

    /// First z coordinate, inclusive.
    z1: i32,
    /// Last z coordinate, inclusive.
    z2: i32,
}

fn main() {
    let args = Args::parse();

    match tabulate(&args.mode,
                   &args.expression,
                   args.x1..=args.x2,
                   args.y1..=args.y2,
                   args.z1..=args.z2)
    {
        Ok(grid) => print!("{grid}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
