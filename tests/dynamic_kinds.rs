//! Integration tests for the dynamically typed matrix API.

use densemat::{DynMatrix, ElementKind, Matrix, MatrixError, Scalar};

// ---------------------------------------------------------------------------
// Construction per kind
// ---------------------------------------------------------------------------

#[test]
fn new_builds_every_kind_zero_filled() {
    for kind in ElementKind::ALL {
        let m = DynMatrix::new(2, 3, kind).unwrap();
        assert_eq!(m.kind(), kind);
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.size(), 6);
        assert_eq!(m.get(1, 2).unwrap().to_string(), "0");
    }
}

#[test]
fn new_rejects_zero_dimensions_for_every_kind() {
    for kind in ElementKind::ALL {
        assert!(DynMatrix::new(0, 2, kind).is_err());
        assert!(DynMatrix::new(2, 0, kind).is_err());
    }
}

#[test]
fn with_data_fills_row_major() {
    let data: Vec<Scalar> = (1..=6).map(Scalar::I32).collect();
    let m = DynMatrix::with_data(2, 3, ElementKind::Int32, &data).unwrap();
    assert_eq!(m.get(0, 0).unwrap(), Scalar::I32(1));
    assert_eq!(m.get(1, 0).unwrap(), Scalar::I32(4));
    assert_eq!(m.index_of(1, 2).unwrap(), 5);
}

#[test]
fn with_data_rejects_wrong_length() {
    let data = [Scalar::I32(1), Scalar::I32(2), Scalar::I32(3)];
    let err = DynMatrix::with_data(2, 2, ElementKind::Int32, &data).unwrap_err();
    assert_eq!(
        err,
        MatrixError::InvalidDataLength {
            expected: 4,
            actual: 3
        }
    );
}

#[test]
fn kind_names_round_trip_through_the_string_boundary() {
    for kind in ElementKind::ALL {
        let parsed: ElementKind = kind.name().parse().unwrap();
        let m = DynMatrix::new(1, 1, parsed).unwrap();
        assert_eq!(m.kind().name(), kind.name());
    }
    let err = "complex128".parse::<ElementKind>().unwrap_err();
    assert_eq!(
        err,
        MatrixError::UnknownElementKind {
            name: "complex128".to_string()
        }
    );
}

// ---------------------------------------------------------------------------
// Store coercion
// ---------------------------------------------------------------------------

#[test]
fn uint8_wraps_while_the_clamped_kind_saturates() {
    let data = [Scalar::I32(300)];
    let wrapped = DynMatrix::with_data(1, 1, ElementKind::Uint8, &data).unwrap();
    assert_eq!(wrapped.get(0, 0).unwrap(), Scalar::U8(44));

    let clamped = DynMatrix::with_data(1, 1, ElementKind::Uint8Clamped, &data).unwrap();
    assert_eq!(clamped.get(0, 0).unwrap(), Scalar::U8(255));

    let negative = [Scalar::I32(-20)];
    let clamped = DynMatrix::with_data(1, 1, ElementKind::Uint8Clamped, &negative).unwrap();
    assert_eq!(clamped.get(0, 0).unwrap(), Scalar::U8(0));
}

#[test]
fn set_coerces_floats_into_integer_kinds() {
    let mut m = DynMatrix::new(1, 1, ElementKind::Uint8).unwrap();
    m.set(0, 0, Scalar::F64(-1.5)).unwrap();
    assert_eq!(m.get(0, 0).unwrap(), Scalar::U8(255));

    m.set(0, 0, Scalar::F64(f64::NAN)).unwrap();
    assert_eq!(m.get(0, 0).unwrap(), Scalar::U8(0));

    let mut m = DynMatrix::new(1, 1, ElementKind::Int16).unwrap();
    m.set(0, 0, Scalar::F32(40_000.75)).unwrap();
    assert_eq!(m.get(0, 0).unwrap(), Scalar::I16(40_000i32 as i16));
}

#[test]
fn set_wraps_negative_floats_into_the_64_bit_kinds() {
    let mut m = DynMatrix::new(1, 1, ElementKind::Int64).unwrap();
    m.set(0, 0, Scalar::F64(-5.0)).unwrap();
    assert_eq!(m.get(0, 0).unwrap(), Scalar::I64(-5));
    m.set(0, 0, Scalar::F64(-3000.0)).unwrap();
    assert_eq!(m.get(0, 0).unwrap(), Scalar::I64(-3000));

    let mut m = DynMatrix::new(1, 1, ElementKind::Uint64).unwrap();
    m.set(0, 0, Scalar::F64(-2.0)).unwrap();
    assert_eq!(m.get(0, 0).unwrap(), Scalar::U64(u64::MAX - 1));
}

#[test]
fn set_rounds_into_float32_storage() {
    let mut m = DynMatrix::new(1, 1, ElementKind::Float32).unwrap();
    m.set(0, 0, Scalar::F64(1.1)).unwrap();
    assert_eq!(m.get(0, 0).unwrap(), Scalar::F32(1.1f64 as f32));
}

#[test]
fn clamped_reads_come_back_as_plain_bytes() {
    let m = DynMatrix::with_data(1, 1, ElementKind::Uint8Clamped, &[Scalar::F64(254.6)]).unwrap();
    assert_eq!(m.get(0, 0).unwrap(), Scalar::U8(255));
    assert_eq!(m.get(0, 0).unwrap().kind(), ElementKind::Uint8);
}

#[test]
fn replace_data_coerces_and_stays_atomic() {
    let mut m = DynMatrix::new(1, 2, ElementKind::Uint8).unwrap();
    m.replace_data(&[Scalar::I32(300), Scalar::I32(-1)]).unwrap();
    assert_eq!(m.get(0, 0).unwrap(), Scalar::U8(44));
    assert_eq!(m.get(0, 1).unwrap(), Scalar::U8(255));

    let err = m.replace_data(&[Scalar::I32(1)]).unwrap_err();
    assert_eq!(
        err,
        MatrixError::InvalidDataLength {
            expected: 2,
            actual: 1
        }
    );
    assert_eq!(m.get(0, 0).unwrap(), Scalar::U8(44));
}

#[test]
fn out_of_bounds_reports_the_full_context() {
    let m = DynMatrix::new(2, 3, ElementKind::Float64).unwrap();
    let err = m.get(0, 3).unwrap_err();
    assert_eq!(
        err,
        MatrixError::IndexOutOfBounds {
            row: 0,
            col: 3,
            rows: 2,
            cols: 3
        }
    );
    assert!(err.to_string().contains("out of bounds"));
}

// ---------------------------------------------------------------------------
// Algebra dispatch
// ---------------------------------------------------------------------------

#[test]
fn multiply_dispatches_on_matching_kinds() {
    let data_a: Vec<Scalar> = [1, 2, 3, 4].iter().map(|&v| Scalar::I32(v)).collect();
    let data_b: Vec<Scalar> = [5, 6, 7, 8].iter().map(|&v| Scalar::I32(v)).collect();
    let a = DynMatrix::with_data(2, 2, ElementKind::Int32, &data_a).unwrap();
    let b = DynMatrix::with_data(2, 2, ElementKind::Int32, &data_b).unwrap();
    let product = a.multiply(&b).unwrap();
    assert_eq!(product.kind(), ElementKind::Int32);
    assert_eq!(product.get(0, 0).unwrap(), Scalar::I32(19));
    assert_eq!(product.get(1, 1).unwrap(), Scalar::I32(50));
}

#[test]
fn mixed_kinds_are_rejected() {
    let a = DynMatrix::new(2, 2, ElementKind::Int32).unwrap();
    let b = DynMatrix::new(2, 2, ElementKind::Float64).unwrap();
    let err = a.multiply(&b).unwrap_err();
    assert_eq!(
        err,
        MatrixError::ElementKindMismatch {
            left: ElementKind::Int32,
            right: ElementKind::Float64
        }
    );
    assert!(a.add(&b).is_err());
    assert!(a.subtract(&b).is_err());
}

#[test]
fn uint8_and_clamped_do_not_mix() {
    let a = DynMatrix::new(1, 3, ElementKind::Uint8).unwrap();
    let b = DynMatrix::new(1, 3, ElementKind::Uint8Clamped).unwrap();
    let err = a.cross(&b).unwrap_err();
    assert_eq!(
        err,
        MatrixError::ElementKindMismatch {
            left: ElementKind::Uint8,
            right: ElementKind::Uint8Clamped
        }
    );
}

#[test]
fn cross_dispatches_and_returns_a_column() {
    let x = [Scalar::F64(1.0), Scalar::F64(0.0), Scalar::F64(0.0)];
    let y = [Scalar::F64(0.0), Scalar::F64(1.0), Scalar::F64(0.0)];
    let a = DynMatrix::with_data(1, 3, ElementKind::Float64, &x).unwrap();
    let b = DynMatrix::with_data(1, 3, ElementKind::Float64, &y).unwrap();
    let z = a.cross(&b).unwrap();
    assert_eq!(z.shape(), (3, 1));
    assert_eq!(z.get(2, 0).unwrap(), Scalar::F64(1.0));
}

#[test]
fn subtract_keeps_the_operand_kind() {
    let ones = [Scalar::U8(1), Scalar::U8(1)];
    let twos = [Scalar::U8(2), Scalar::U8(2)];
    let a = DynMatrix::with_data(1, 2, ElementKind::Uint8Clamped, &ones).unwrap();
    let b = DynMatrix::with_data(1, 2, ElementKind::Uint8Clamped, &twos).unwrap();
    let diff = a.subtract(&b).unwrap();
    assert_eq!(diff.kind(), ElementKind::Uint8Clamped);
    assert_eq!(diff.get(0, 0).unwrap(), Scalar::U8(0));
}

// ---------------------------------------------------------------------------
// Typed interop and serialization
// ---------------------------------------------------------------------------

#[test]
fn typed_matrices_lift_into_the_dynamic_layer() {
    let typed = Matrix::from_rows(&[[1i16, 2], [3, 4]]).unwrap();
    let dynamic = DynMatrix::from(typed);
    assert_eq!(dynamic.kind(), ElementKind::Int16);
    assert_eq!(dynamic.get(1, 0).unwrap(), Scalar::I16(3));
}

#[test]
fn dyn_matrix_round_trips_json_with_kind_tag() {
    let data = [Scalar::I32(300), Scalar::I32(-1)];
    let m = DynMatrix::with_data(1, 2, ElementKind::Uint8Clamped, &data).unwrap();
    let json = serde_json::to_string(&m).unwrap();
    assert!(json.contains("uint8-clamped"));
    let back: DynMatrix = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);
}

#[test]
fn dyn_matrix_deserialization_revalidates_the_shape() {
    let bad = "{\"int32\":{\"rows\":2,\"cols\":2,\"data\":[1,2,3]}}";
    assert!(serde_json::from_str::<DynMatrix>(bad).is_err());
}
