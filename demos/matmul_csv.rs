//! Multiply two CSV matrices and print the product as CSV on stdout.
//!
//! Usage: cargo run --example matmul_csv -- left.csv right.csv

use anyhow::{bail, Context, Result};
use csv::ReaderBuilder;

use densemat::Matrix;

fn read_matrix_csv(path: &str) -> Result<Matrix<f64>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("failed to open {}", path))?;

    let mut rows: Vec<Vec<f64>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Vec<f64> = record
            .iter()
            .map(|field| field.trim().parse::<f64>())
            .collect::<Result<_, _>>()
            .with_context(|| format!("non-numeric field in {}", path))?;
        rows.push(row);
    }

    let matrix = Matrix::from_rows(&rows)
        .with_context(|| format!("rows of {} do not form a matrix", path))?;
    Ok(matrix)
}

fn write_matrix_csv(matrix: &Matrix<f64>) -> Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    for row in 0..matrix.rows() {
        let fields: Vec<String> = matrix
            .row_slice(row)
            .iter()
            .map(|value| value.to_string())
            .collect();
        writer.write_record(&fields)?;
    }
    writer.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        bail!("usage: matmul_csv <left.csv> <right.csv>");
    }

    let left = read_matrix_csv(&args[1])?;
    let right = read_matrix_csv(&args[2])?;
    log::info!(
        "loaded {}x{} and {}x{} matrices",
        left.rows(),
        left.cols(),
        right.rows(),
        right.cols()
    );

    let product = left.multiply(&right)?;
    write_matrix_csv(&product)?;
    Ok(())
}
