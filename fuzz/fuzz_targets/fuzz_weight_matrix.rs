#![no_main]

use libfuzzer_sys::fuzz_target;
use tsplib_norm::matrix::{FormatKind, WeightMatrix};

fuzz_target!(|data: &[u8]| {
    // First byte picks the layout, second the dimension, the rest are values
    if data.len() < 2 {
        return;
    }
    let kind = FormatKind::ALL[data[0] as usize % FormatKind::ALL.len()];
    let dimension = (data[1] % 32) as usize;
    let values: Vec<f64> = data[2..].iter().map(|&b| f64::from(b)).collect();

    if let Ok(matrix) = WeightMatrix::new(values, dimension, kind) {
        let dense = matrix.to_dense();
        assert_eq!(dense.len(), dimension);
        let _ = matrix.value_at(dimension, 0);
    }
});
