//! Walk the element kinds and show how each one stores the same values.
//!
//! Usage: cargo run --example kinds_tour [kind]
//!
//! With a kind name such as `uint8-clamped` only that row is printed.

use anyhow::Result;

use densemat::{DynMatrix, ElementKind, Scalar};

fn main() -> Result<()> {
    env_logger::init();

    let only: Option<ElementKind> = std::env::args()
        .nth(1)
        .map(|name| name.parse())
        .transpose()?;

    let samples = [
        Scalar::I32(300),
        Scalar::I32(-20),
        Scalar::F64(1.5),
        Scalar::F64(2.5),
        Scalar::F64(-1.5),
        Scalar::F64(f64::NAN),
    ];

    println!("stored values for 300, -20, 1.5, 2.5, -1.5, NaN:");
    for kind in ElementKind::ALL {
        if only.is_some() && only != Some(kind) {
            continue;
        }
        let mut matrix = DynMatrix::new(1, samples.len(), kind)?;
        for (col, &value) in samples.iter().enumerate() {
            matrix.set(0, col, value)?;
        }
        let stored: Vec<String> = (0..matrix.cols())
            .map(|col| matrix.get(0, col).map(|v| v.to_string()))
            .collect::<Result<_, _>>()?;
        println!("{:>13}: {}", kind.name(), stored.join(", "));
    }

    // The same overflowing product wraps in one byte kind and saturates in
    // the other.
    let lhs = [Scalar::I32(200)];
    let rhs = [Scalar::I32(2)];
    for kind in [ElementKind::Uint8, ElementKind::Uint8Clamped] {
        let a = DynMatrix::with_data(1, 1, kind, &lhs)?;
        let b = DynMatrix::with_data(1, 1, kind, &rhs)?;
        let product = a.multiply(&b)?;
        println!("200 * 2 in {} -> {}", kind, product.get(0, 0)?);
    }

    Ok(())
}
