use nielsen_rs::{generates_same_subgroup, FreeGroup, NielsenError, NielsenReducer, Word};
use tracing_subscriber::EnvFilter;

/// Reduces the generating set {abc, ab^-1cb^-1, cca^-1} over the free group
/// on a, b, c.
///
/// Usage: RUST_LOG=nielsen_rs=debug cargo run --example reduce
fn main() -> Result<(), NielsenError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let [a, b, c, e] = ['a', 'b', 'c', 'e'].map(Word::generator);
    let group = FreeGroup::new([a.clone(), b.clone(), c.clone()], e)?;
    let a_inv = group.inverse(&a)?;
    let b_inv = group.inverse(&b)?;

    let input = vec![
        &(&a + &b) + &c,
        &(&(&a + &b_inv) + &c) + &b_inv,
        &(&c + &c) + &a_inv,
    ];

    println!("Input:");
    for word in &input {
        println!("  {word}");
    }

    let mut reducer = NielsenReducer::new(&group);
    let reduced = reducer.reduce(input.clone())?;

    println!("\nNielsen-reduced set:");
    for word in &reduced {
        println!("  {word}");
    }

    let stats = reducer.stats();
    println!("\n=== Statistics ===");
    println!("Input words: {}", stats.input_words);
    println!("After normalisation: {}", stats.normalized_words);
    println!("Pairwise rewrites: {}", stats.pairwise_rewrites);
    println!("Half-overlap rewrites: {}", stats.half_overlap_rewrites);
    println!("Passes: {}", stats.passes);
    println!(
        "Same subgroup: {}",
        generates_same_subgroup(&group, &input, &reduced)?
    );

    Ok(())
}
