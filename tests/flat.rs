//! Decoding flat arrays into points and flattening them again is an identity.

use meshlit::attribute::{flatten, try_cast, CastError, Position, Texcoord};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

fn bits(s: &[f32]) -> Vec<u32> {
    s.iter().map(|f| f.to_bits()).collect()
}

#[quickcheck]
fn positions_round_trip(mut flat: Vec<f32>) -> bool {
    flat.truncate(flat.len() - flat.len() % 3);
    let points = try_cast::<f32, Position>(&flat).unwrap();
    points.len() * 3 == flat.len() && bits(flatten::<f32, Position>(points)) == bits(&flat)
}

#[quickcheck]
fn owned_positions_round_trip(mut flat: Vec<f32>) -> bool {
    flat.truncate(flat.len() - flat.len() % 3);
    let points: Vec<Position> = flat
        .chunks_exact(3)
        .map(|c| Position::new(c[0], c[1], c[2]))
        .collect();
    bits(flatten::<f32, Position>(&points)) == bits(&flat)
}

#[quickcheck]
fn partial_rows_are_rejected(flat: Vec<f32>) -> TestResult {
    if flat.len() % 2 == 0 {
        return TestResult::discard();
    }
    TestResult::from_bool(matches!(
        try_cast::<f32, Texcoord>(&flat),
        Err(CastError::Size { len, .. }) if len == flat.len()
    ))
}

#[test]
fn static_vertices_round_trip() {
    for m in meshlit::MODELS {
        let points = m.positions().unwrap();
        assert_eq!(bits(flatten::<f32, Position>(points)), bits(m.vertices));
        assert_eq!(flatten::<f32, Position>(points).as_ptr(), m.vertices.as_ptr());
    }
}
