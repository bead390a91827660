//! String formatting and parsing through the public API.

use std::sync::Arc;

use fulgor_numerics::prelude::*;
use proptest::prelude::*;

use crate::init_tracing;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_f64_text_round_trip(a in prop::array::uniform3(any::<f64>())) {
        prop_assume!(a.iter().all(|c| c.is_finite()));
        let v = Vector3::from_array(a);
        prop_assert_eq!(Vector3::<f64>::parse(v.to_string().as_str()), Ok(v));
    }

    #[test]
    fn prop_f32_text_round_trip_with_separator(a in prop::array::uniform4(-1.0e9f32..1.0e9)) {
        let v = Vector4::from_array(a);
        let text = v.to_string_sep(" ; ");
        prop_assert_eq!(Vector4::<f32>::parse_sep(text.as_str(), " ; "), Ok(v));
    }

    #[test]
    fn prop_integer_text_round_trip(a in prop::array::uniform2(any::<i64>()), b in prop::array::uniform3(any::<u32>())) {
        let v = Vector2::from_array(a);
        prop_assert_eq!(Vector2::<i64>::parse(v.to_string().as_str()), Ok(v));
        let w = Vector3::from_array(b);
        prop_assert_eq!(Vector3::<u32>::parse(w.to_string().as_str()), Ok(w));
    }

    #[test]
    fn prop_culture_round_trip(a in prop::array::uniform2(-1.0e6f64..1.0e6)) {
        let culture = Culture::new("x-tilde", ",", " ", "~");
        let v = Vector2::from_array(a);
        let text = v.to_string_culture("; ", NumberFormat::General, &culture);
        prop_assert!(!text.contains('.'));
        prop_assert_eq!(
            Vector2::<f64>::parse_culture(text.as_str(), "; ", NumberStyle::Float, &culture),
            Ok(v)
        );
    }
}

#[test]
fn test_parse_failure_modes() {
    init_tracing();

    let well_formed = Vector3::new(1.5_f64, 2.0, -3.25).to_string();
    let extra = format!("{}, 4", well_formed);

    assert_eq!(Vector3::<f64>::parse(None), Err(VectorError::NullInput));
    assert!(Vector3::<f64>::parse("").unwrap_err().is_format_error());
    assert!(Vector3::<f64>::parse(extra.as_str()).unwrap_err().is_format_error());

    assert!(Vector3::<f64>::try_parse(None).is_none());
    assert!(Vector3::<f64>::try_parse("").is_none());
    assert!(Vector3::<f64>::try_parse(extra.as_str()).is_none());
    assert!(Vector3::<f64>::try_parse(well_formed.as_str()).is_some());
}

#[test]
fn test_failure_modes_across_entry_points() {
    init_tracing();

    let de = Culture::de();
    assert_eq!(Vector2::<i32>::parse_sep(None, ";"), Err(VectorError::NullInput));
    assert_eq!(
        Vector2::<i32>::parse_style(None, ";", NumberStyle::Integer),
        Err(VectorError::NullInput)
    );
    assert_eq!(
        Vector2::<i32>::parse_culture(None, ";", NumberStyle::Integer, &de),
        Err(VectorError::NullInput)
    );
    assert_eq!(
        Vector2::<i32>::parse_sep("", ";"),
        Err(VectorError::Format(FormatError::Empty))
    );
    assert_eq!(
        Vector2::<i32>::parse_sep("1;2;3", ";"),
        Err(VectorError::Format(FormatError::FieldCount { expected: 2, actual: 3 }))
    );

    assert!(Vector2::<i32>::try_parse_sep(None, ";").is_none());
    assert!(Vector2::<i32>::try_parse_style("", ";", NumberStyle::Integer).is_none());
    assert!(Vector2::<i32>::try_parse_culture("1;2;3", ";", NumberStyle::Integer, &de).is_none());
}

#[test]
fn test_options_configure_format_and_parse() {
    init_tracing();

    let culture: Arc<dyn FormatProvider> = Arc::new(Culture::de());
    let format = FormatOptions::new(" / ")
        .with_number_format("F3".parse().unwrap())
        .with_culture(culture.clone());
    let parse = ParseOptions::new(" / ").with_culture(culture);

    let v = Vector3::new(1.0_f64, -0.5, 1234.5678);
    let text = v.format_with(&format);
    assert_eq!(text, "1,000 / -0,500 / 1234,568");

    let back = Vector3::<f64>::parse_with(text.as_str(), &parse).unwrap();
    assert_eq!(back, Vector3::new(1.0, -0.5, 1234.568));
}

#[test]
fn test_grouped_input_requires_any_style() {
    let text = "1.234,5; 6";
    let de = Culture::de();
    assert!(Vector2::<f64>::try_parse_culture(text, "; ", NumberStyle::Float, &de).is_none());
    assert_eq!(
        Vector2::<f64>::parse_culture(text, "; ", NumberStyle::Any, &de),
        Ok(Vector2::new(1234.5, 6.0))
    );
}

#[test]
fn test_invalid_number_format_specifier() {
    assert!(matches!(
        "Q2".parse::<NumberFormat>(),
        Err(VectorError::InvalidNumberFormat(_))
    ));
}
