use std::env;
use std::process;

use fib_utils::fibonacci::{fibonacci_generator, fibonacci_iterative};
use fib_utils::FibonacciError;

const DEFAULT_COUNT: i64 = 15;

fn run(count: i64) -> Result<(), FibonacciError> {
    println!("Fibonacci numbers (iterative approach):");
    for i in 0..count {
        println!("F({i}) = {}", fibonacci_iterative(i)?);
    }

    let values: Vec<String> = fibonacci_generator(count - 1)?
        .map(|value| value.to_string())
        .collect();
    println!("\nUsing generator:");
    println!("First {count} Fibonacci numbers: [{}]", values.join(", "));
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let count = match env::args().nth(1) {
        Some(arg) => match arg.parse::<i64>() {
            Ok(count) if count > 0 => count,
            _ => {
                eprintln!("count must be a positive integer, got {arg:?}");
                process::exit(2);
            }
        },
        None => DEFAULT_COUNT,
    };
    log::debug!("printing {count} Fibonacci numbers");

    if let Err(err) = run(count) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
