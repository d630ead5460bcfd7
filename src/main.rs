use gemmalign::{
    hybrid_multiply, multiply, needleman_wunsch, strassen_multiply, DenseMatrix, MultiplyConfig,
};

fn main() {
    println!("gemmalign: dense matrix multiplication and global sequence alignment");

    // The worked 2×2 example
    let a = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
    let b = DenseMatrix::from_rows(&[vec![5.0, 6.0], vec![7.0, 8.0]]);

    println!("\nMatrix A:");
    println!("{:?}", a);

    println!("\nMatrix B:");
    println!("{:?}", b);

    let config = MultiplyConfig::default();
    println!("\nDefault configuration:");
    println!("  Hybrid cutoff: {}", config.hybrid_cutoff);
    println!("  Parallel cutoff: {}", config.parallel_cutoff);
    println!("  Threads: {}", config.n_threads);

    match (
        multiply(&a, &b),
        strassen_multiply(&a, &b),
        hybrid_multiply(&a, &b, config.hybrid_cutoff),
    ) {
        (Ok(cubic), Ok(strassen), Ok(hybrid)) => {
            println!("\nA × B (cubic):");
            println!("{:?}", cubic);
            println!("\nStrassen and hybrid agree: {}", cubic == strassen && cubic == hybrid);
        }
        (cubic, strassen, hybrid) => {
            eprintln!("multiplication failed: {:?} {:?} {:?}", cubic, strassen, hybrid);
        }
    }

    // The classic alignment example
    let result = needleman_wunsch("GATTACA", "GCATGCU");
    println!("\nAlignment of GATTACA vs GCATGCU:");
    println!("  Score: {}", result.score);
    println!("  {}", result.aligned_a);
    println!("  {}", result.aligned_b);
}
