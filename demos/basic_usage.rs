//! Basic usage example for fulgor_numerics vectors
//!
//! Walks through construction, arithmetic, text and JSON interop, and
//! seeded random generation.

use fulgor_numerics::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::result::Result;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("fulgor_numerics Vector Example");
    println!("==============================");

    arithmetic_example();
    text_example()?;
    json_example()?;
    random_example()?;

    println!("All examples completed successfully!");
    Ok(())
}

fn arithmetic_example() {
    println!("\n--- Arithmetic ---");

    let a = Vector3::new(1.0_f64, 2.0, 3.0);
    let b = Vector3::new(-2.0_f64, 0.5, 4.0);
    println!("a = {}, b = {}", a, b);
    println!("a + b = {}", a + b);
    println!("2 * a = {}", 2.0_f64 * a);
    println!("a x b = {}", a.cross(&b));
    println!("|a| = {:.4}, max-norm = {}", a.norm(), a.norm_max());

    let widened: Vector4<f64> = a.into();
    println!("widened to 4 components: {}", widened);
}

fn text_example() -> Result<(), VectorError> {
    println!("\n--- Text interop ---");

    let v = Vector2::new(0.5_f64, -7.5);
    let de = Culture::de();
    let text = v.to_string_culture("; ", NumberFormat::Fixed(2), &de);
    println!("de-DE text: {}", text);

    let back = Vector2::<f64>::parse_culture(text.as_str(), "; ", NumberStyle::Float, &de)?;
    println!("parsed back: {}", back);

    match Vector2::<f64>::parse("1.0, 2.0, 3.0") {
        Ok(v) => println!("unexpected success: {}", v),
        Err(e) => println!("rejected as expected: {}", e),
    }
    Ok(())
}

fn json_example() -> Result<(), serde_json::Error> {
    println!("\n--- JSON interop ---");

    let v = Vector4::new(1_i32, -2, 3, 4);
    let json = serde_json::to_string(&v)?;
    println!("json: {}", json);
    let back: Vector4<i32> = serde_json::from_str(&json)?;
    println!("round trip equal: {}", back == v);
    Ok(())
}

fn random_example() -> Result<(), VectorError> {
    println!("\n--- Random generation ---");

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    println!("uniform [2, 3): {}", Vector3::<f64>::random_uniform(&mut rng, 2.0, 3.0)?);
    println!("normal(0, 1):   {}", Vector3::<f32>::random_normal(&mut rng, 0.0, 1.0)?);
    println!("poisson(4):     {}", Vector4::<u32>::random_poisson(&mut rng, 4.0)?);
    println!("dice [1, 6]:    {}", Vector2::<i32>::random_uniform(&mut rng, 1, 6)?);
    Ok(())
}
