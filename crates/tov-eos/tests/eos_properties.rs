//! Property tests for tabulated equations of state.

use proptest::prelude::*;
use tov_core::{PhysicalConstants, Tolerances, nearly_equal};
use tov_eos::{Eos, EosError, EosUnits, EquationOfState, parse_eos_table};

fn cumulative(start: f64, steps: &[f64]) -> Vec<f64> {
    let mut acc = start;
    let mut out = Vec::with_capacity(steps.len());
    for s in steps {
        acc += s;
        out.push(acc);
    }
    out
}

fn table_strategy() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (4usize..40).prop_flat_map(|n| {
        (
            prop::collection::vec(0.1_f64..10.0, n),
            prop::collection::vec(0.1_f64..10.0, n),
        )
            .prop_map(|(ds, ps)| (cumulative(1.0, &ds), cumulative(0.5, &ps)))
    })
}

proptest! {
    #[test]
    fn round_trip_through_both_interpolants((rho, p) in table_strategy()) {
        let eos = EquationOfState::new(&rho, &p, EosUnits::Cgs, &PhysicalConstants::cgs()).unwrap();
        let tol = Tolerances { abs: 1e-9, rel: 1e-9 };
        for &pi in &p {
            let back = eos.pressure_at(eos.density_at(pi));
            prop_assert!(nearly_equal(back, pi, tol), "p={} back={}", pi, back);
        }
    }

    #[test]
    fn density_check_matches_closed_interval((rho, p) in table_strategy(), q in 0.0_f64..500.0) {
        let eos = EquationOfState::new(&rho, &p, EosUnits::Cgs, &PhysicalConstants::cgs()).unwrap();
        let b = eos.bounds();
        let inside = q >= b.min_density && q <= b.max_density;
        prop_assert_eq!(eos.check_density_in_range(q).is_ok(), inside);
    }
}

#[test]
fn boundaries_are_inclusive() {
    let eos = EquationOfState::new(
        &[1.0, 2.0, 3.0, 4.0, 5.0],
        &[1.0, 4.0, 9.0, 16.0, 25.0],
        EosUnits::Cgs,
        &PhysicalConstants::cgs(),
    )
    .unwrap();

    assert!(eos.check_density_in_range(1.0).is_ok());
    assert!(eos.check_density_in_range(5.0).is_ok());
    assert!(eos.check_density_in_range(1.0 - 1e-12).is_err());

    match eos.check_density_in_range(5.0 + 1e-9) {
        Err(EosError::OutOfRange { value, min, max, .. }) => {
            assert_eq!(value, 5.0 + 1e-9);
            assert_eq!(min, 1.0);
            assert_eq!(max, 5.0);
        }
        other => panic!("expected OutOfRange, got {other:?}"),
    }
}

#[test]
fn nuclear_table_builds_from_text() {
    // Stiff toy table in MeV/fm³, descending order as some generators write it
    let text = "\
# energy_density pressure number_density
1200.0 500.0 0.90
800.0  250.0 0.70
500.0  100.0 0.50
300.0  30.0  0.32
150.0  5.0   0.16
100.0  1.0   0.10
";
    let table = parse_eos_table(text).unwrap();
    let k = PhysicalConstants::cgs();
    let eos = EquationOfState::from_table(&table, &k).unwrap();

    assert_eq!(eos.len(), 6);
    let b = eos.bounds();
    assert!(nearly_equal(
        b.min_density,
        k.density_from_mev_fm3(100.0),
        Tolerances::default()
    ));
    assert!(nearly_equal(
        b.max_pressure,
        k.pressure_from_mev_fm3(500.0),
        Tolerances::default()
    ));

    let (dp, drho) = eos.interpolation_residuals();
    assert!(dp <= 1e-6 * b.max_pressure);
    assert!(drho <= 1e-6 * b.max_density);
}
