// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_vector::prelude::*;

fn main() -> Result<(), VectorError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt::init();

    println!("=== Decimal Vector Example ===\n");

    let config = VectorConfig::default();
    println!("Using {}\n", config.precision);

    // Elementwise and scalar operations
    let v = Vector::new([8.218, -9.341])?;
    let w = Vector::new([-1.129, 2.111])?;
    println!("{} + {} = {}", v, w, v.plus(&w)?);

    let v = Vector::new([7.119, 8.215])?;
    let w = Vector::new([-8.223, 0.878])?;
    println!("{} - {} = {}", v, w, v.minus(&w)?);

    let v = Vector::new([1.671, -1.012, -0.318])?;
    println!("7.41 * {} = {}", v, v.times_scalar(7.41)?);
    println!("normalized: {}", v.normalized()?);

    // Magnitude and normalization
    for coords in [vec![-0.221, 7.437], vec![8.813, -1.331, -6.247]] {
        let v = Vector::new(coords)?;
        println!("|{}| = {}", v, v.magnitude()?);
    }
    for coords in [vec![5.581, -2.136], vec![1.996, 3.108, -4.554]] {
        let v = Vector::new(coords)?;
        println!("{} normalized = {}", v, v.normalized()?);
    }

    // Dot product and angles
    let v = Vector::new([7.887, 4.138])?;
    let w = Vector::new([-8.802, 6.776])?;
    println!("{} . {} = {}", v, w, v.dot(&w)?);

    let v = Vector::new([-5.955, -4.904, -1.874])?;
    let w = Vector::new([-4.496, -8.755, 7.103])?;
    println!("{} . {} = {}", v, w, v.dot(&w)?);

    let v = Vector::new([3.183, -7.627])?;
    let w = Vector::new([-2.668, 5.319])?;
    println!("angle = {} rad", v.angle_with(&w, AngleUnit::Radians)?);

    let v = Vector::new([7.35, 0.221, 5.188])?;
    let w = Vector::new([2.751, 8.259, 3.985])?;
    println!("angle = {} deg", v.angle_with(&w, AngleUnit::Degrees)?);

    // Projections
    println!("\nComponent parallel to");
    let v = Vector::new([3.039, 1.879])?;
    let w = Vector::new([0.825, 2.036])?;
    println!("{}", v.component_parallel_to(&w)?);

    println!("\nComponent orthogonal to");
    let v = Vector::new([-9.88, -3.264, -8.159])?;
    let w = Vector::new([-2.155, -9.353, -9.473])?;
    println!("{}", v.component_orthogonal_to(&w)?);

    let v = Vector::new([3.009, -6.172, 3.692, -2.51])?;
    let w = Vector::new([6.404, -9.144, 2.759, 8.718])?;
    println!("Parallel component: {}", v.component_parallel_to(&w)?);
    println!("Orthogonal component: {}", v.component_orthogonal_to(&w)?);

    // Cross product and areas
    println!();
    let v = Vector::new([8.462, 7.893, -8.187])?;
    let w = Vector::new([6.984, -5.975, 4.778])?;
    println!("Cross product: {}", v.cross(&w)?);

    let v = Vector::new([-8.987, -9.838, 5.031])?;
    let w = Vector::new([-4.268, -1.861, -8.866])?;
    println!("3D parallelogram area: {}", v.parallelogram_area_with(&w)?);

    let v = Vector::new([2, 2])?;
    let w = Vector::new([0, 2])?;
    println!("2D parallelogram area: {}", v.parallelogram_area_with(&w)?);

    let v = Vector::new([1.5, 9.547, 3.691])?;
    let w = Vector::new([-6.007, 0.124, 5.772])?;
    println!("3D triangle area: {}", v.triangle_area(&w)?);

    // Failures are typed
    println!();
    let zero = Vector::new([0, 0])?;
    match zero.normalized() {
        Err(e @ VectorError::ZeroVector) => println!("normalizing {}: {}", zero, e),
        other => println!("unexpected: {:?}", other),
    }

    Ok(())
}
