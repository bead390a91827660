//! Algebraic properties of the vector operators, checked with proptest.

use fulgor_numerics::prelude::*;
use proptest::prelude::*;

const PROPTEST_CASES: u32 = 100;

fn small_i64x3() -> impl Strategy<Value = Vector3<i64>> {
    prop::array::uniform3(-10_000i64..10_000).prop_map(Vector::from_array)
}

fn small_i32x4() -> impl Strategy<Value = Vector4<i32>> {
    prop::array::uniform4(-1_000i32..1_000).prop_map(Vector::from_array)
}

// Integer-valued floats keep every product and sum exact.
fn integral_f64x2() -> impl Strategy<Value = Vector2<f64>> {
    prop::array::uniform2(-1_000i32..1_000).prop_map(|a| Vector::from_array(a.map(f64::from)))
}

fn any_i32x4() -> impl Strategy<Value = Vector4<i32>> {
    prop::array::uniform4(any::<i32>()).prop_map(Vector::from_array)
}

fn any_u32x2() -> impl Strategy<Value = Vector2<u32>> {
    prop::array::uniform2(any::<u32>()).prop_map(Vector::from_array)
}

fn f32x3() -> impl Strategy<Value = Vector3<f32>> {
    prop::array::uniform3(-1_000.0f32..1_000.0).prop_map(Vector::from_array)
}

fn f64x4() -> impl Strategy<Value = Vector4<f64>> {
    prop::array::uniform4(-1.0e6f64..1.0e6).prop_map(Vector::from_array)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

    #[test]
    fn prop_unary_plus_is_identity(v in f32x3()) {
        prop_assert_eq!(v.identity(), v);
    }

    #[test]
    fn prop_double_negation(v in f64x4(), w in small_i32x4()) {
        prop_assert_eq!(-(-v), v);
        prop_assert_eq!(-(-w), w);
    }

    #[test]
    fn prop_scaling_matches_repeated_addition(v in f32x3(), w in small_i64x3()) {
        prop_assert_eq!(v + v, 2.0_f32 * v);
        prop_assert_eq!(v + v + v, 3.0_f32 * v);
        prop_assert_eq!(w + w, w * 2);
        prop_assert_eq!(w + w + w, 3_i64 * w);
    }

    #[test]
    fn prop_full_range_integers_wrap(v in any_i32x4(), w in any_u32x2(), k in any::<i32>()) {
        prop_assert_eq!(-(-v), v);
        prop_assert_eq!(v + v, 2 * v);
        prop_assert_eq!(v + v, v * 2);
        prop_assert_eq!(v + v + v, 3 * v);
        prop_assert_eq!(v * k, k * v);
        prop_assert_eq!((v + k) - k, v);
        prop_assert_eq!(w + w, w * 2);
        prop_assert_eq!(w - w, Vector2::zero());
    }

    #[test]
    fn prop_mul_commutative(a in f64x4(), b in f64x4(), c in small_i32x4(), d in small_i32x4()) {
        prop_assert_eq!(a * b, b * a);
        prop_assert_eq!(c * d, d * c);
    }

    #[test]
    fn prop_mul_distributes(a in small_i64x3(), b in small_i64x3(), c in small_i64x3()) {
        prop_assert_eq!(a * (b + c), a * b + a * c);
        prop_assert_eq!(a * (b - c), a * b - a * c);
    }

    #[test]
    fn prop_mul_distributes_for_integral_floats(
        a in integral_f64x2(),
        b in integral_f64x2(),
        c in integral_f64x2()
    ) {
        prop_assert_eq!(a * (b + c), a * b + a * c);
        prop_assert_eq!(a * (b - c), a * b - a * c);
    }

    #[test]
    fn prop_norm_max_bounded_by_norm(v in f64x4(), w in small_i32x4(), x in f32x3()) {
        prop_assert!(v.norm_max() <= v.norm());
        prop_assert!(f64::from(w.norm_max()) <= w.norm());
        prop_assert!(f64::from(x.norm_max()) <= x.norm());
    }

    #[test]
    fn prop_norm_max_triangle_inequality(a in f32x3(), b in f32x3(), c in small_i32x4(), d in small_i32x4()) {
        prop_assert!(a.norm_max() + b.norm_max() >= (a + b).norm_max());
        prop_assert!(c.norm_max() + d.norm_max() >= (c + d).norm_max());
    }

    #[test]
    fn prop_cross_is_orthogonal(a in f32x3(), b in f32x3()) {
        let a = a / 100.0;
        let b = b / 100.0;
        prop_assert!(a.dot(&a.cross(&b)).abs() < 0.1);
        prop_assert!(b.dot(&a.cross(&b)).abs() < 0.1);
    }

    #[test]
    fn prop_integer_cross_is_exactly_orthogonal(a in small_i64x3(), b in small_i64x3()) {
        prop_assert_eq!(a.dot(&a.cross(&b)), 0);
    }

    #[test]
    fn prop_set_then_get(v in small_i32x4(), index in 0usize..4, value in any::<i32>()) {
        let mut v = v;
        v.set(index, value).unwrap();
        prop_assert_eq!(v.get(index), Ok(value));
    }

    #[test]
    fn prop_out_of_range_index_fails(index in 3usize..=usize::MAX, value in any::<f32>()) {
        let mut v = Vector3::<f32>::zero();
        prop_assert_eq!(v.get(index), Err(VectorError::IndexOutOfRange { index, arity: 3 }));
        prop_assert!(v.set(index, value).is_err());
        prop_assert_eq!(v, Vector3::zero());
    }
}

#[test]
fn test_extreme_indices_fail() {
    let mut v = Vector2::new(1_u32, 2);
    for index in [2, usize::MAX / 2, usize::MAX] {
        assert!(v.get(index).unwrap_err().is_index_error());
        assert!(v.set(index, 9).unwrap_err().is_index_error());
    }
}
