// Property tests for the transform engine invariants.
use pixfft::dft::dft2d;
use pixfft::fft::{bit_reversed_index, next_power_of_two};
use pixfft::ndfft::{fft2d, ifft2d, transpose};
use pixfft::spectral::dominant_frequencies;
use pixfft::{Complex64, Grid};
use proptest::prelude::*;

fn int_grid(max_rows: usize, max_cols: usize) -> impl Strategy<Value = Grid<i32>> {
    (1..=max_rows, 1..=max_cols).prop_flat_map(|(rows, cols)| {
        proptest::collection::vec(-4i32..=4, rows * cols)
            .prop_map(move |data| Grid::from_vec(rows, cols, data).unwrap())
    })
}

fn power_of_two_square() -> impl Strategy<Value = Grid<i32>> {
    (0u32..=3).prop_flat_map(|exp| {
        let n = 1usize << exp;
        proptest::collection::vec(-4i32..=4, n * n)
            .prop_map(move |data| Grid::from_vec(n, n, data).unwrap())
    })
}

fn complex_grid(max_rows: usize, max_cols: usize) -> impl Strategy<Value = Grid<Complex64>> {
    (1..=max_rows, 1..=max_cols).prop_flat_map(|(rows, cols)| {
        proptest::collection::vec((-50.0f64..50.0, -50.0f64..50.0), rows * cols).prop_map(
            move |data| {
                let data = data.into_iter().map(|(re, im)| Complex64::new(re, im)).collect();
                Grid::from_vec(rows, cols, data).unwrap()
            },
        )
    })
}

proptest! {
    #[test]
    fn padding_is_idempotent(n in 1usize..=(1 << 20)) {
        let p = next_power_of_two(n);
        prop_assert!(p.is_power_of_two());
        prop_assert!(p >= n);
        prop_assert!(p < 2 * n);
        prop_assert_eq!(next_power_of_two(p), p);
    }

    #[test]
    fn bit_reversal_is_an_involution(bits in 0u32..=20, seed in any::<usize>()) {
        let len = 1usize << bits;
        let i = seed % len;
        let j = bit_reversed_index(i, len);
        prop_assert!(j < len);
        prop_assert_eq!(bit_reversed_index(j, len), i);
    }

    #[test]
    fn fast_matches_naive_on_power_of_two_squares(g in power_of_two_square()) {
        let fast: Grid<Complex64> = fft2d(&g).unwrap();
        let naive: Grid<Complex64> = dft2d(&g).unwrap();
        prop_assert_eq!(fast.dims(), naive.dims());
        for (a, b) in fast.as_slice().iter().zip(naive.as_slice()) {
            prop_assert!(a.approx_eq(*b, 1e-9), "{:?} vs {:?}", a, b);
        }
    }

    #[test]
    fn fast_output_pads_each_axis(g in int_grid(9, 9)) {
        let s: Grid<Complex64> = fft2d(&g).unwrap();
        prop_assert_eq!(s.dims(), (next_power_of_two(g.rows()), next_power_of_two(g.cols())));
    }

    #[test]
    fn inverse_undoes_naive_forward(s in complex_grid(6, 6)) {
        let spectrum: Grid<Complex64> = dft2d(&s).unwrap();
        let back = ifft2d(&spectrum).unwrap();
        prop_assert_eq!(back.dims(), s.dims());
        for (a, b) in back.as_slice().iter().zip(s.as_slice()) {
            prop_assert!(a.approx_eq(*b, 1e-9), "{:?} vs {:?}", a, b);
        }
    }

    #[test]
    fn inverse_undoes_fast_forward(g in int_grid(8, 8)) {
        let back = ifft2d(&fft2d::<f64, _>(&g).unwrap()).unwrap();
        for r in 0..back.rows() {
            for c in 0..back.cols() {
                let expected = g.get(r, c).copied().unwrap_or(0) as f64;
                prop_assert!(back[(r, c)].approx_eq(Complex64::new(expected, 0.0), 1e-9));
            }
        }
    }

    #[test]
    fn transpose_is_an_involution(m in complex_grid(7, 7)) {
        let t = transpose(&m);
        prop_assert_eq!(t.dims(), (m.cols(), m.rows()));
        prop_assert_eq!(transpose(&t), m);
    }

    #[test]
    fn extraction_respects_threshold(field in complex_grid(5, 5), threshold in 0.0f64..60.0) {
        let found: Vec<_> = dominant_frequencies(&field, threshold).unwrap().collect();
        let expected: Vec<_> = (0..field.rows())
            .flat_map(|r| (0..field.cols()).map(move |c| (r, c)))
            .filter(|&(r, c)| field[(r, c)].norm() > threshold)
            .collect();
        let got: Vec<_> = found.iter().map(|c| (c.row, c.col)).collect();
        prop_assert_eq!(got, expected);
        for c in &found {
            prop_assert!(c.amplitude > threshold);
            prop_assert!(c.phase > -std::f64::consts::PI && c.phase <= std::f64::consts::PI);
        }
    }
}
