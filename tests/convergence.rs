//! End-to-end runs of the generational loop.

use rand::rngs::StdRng;
use rand::SeedableRng;
use string_evo::prelude::*;

/// Drive generations by hand the way a caller without `Evolver` would.
fn evolve_until_converged(
    target: &Target,
    size: usize,
    max_generations: usize,
    rng: &mut StdRng,
) -> Option<(usize, Generation)> {
    let mut population = Generation::seed_random(size, target, rng);
    for generation in 1..=max_generations {
        population = Generation::breed_from(&population, size, target, rng).unwrap();
        if population.has_converged(DEFAULT_CONVERGENCE_THRESHOLD) {
            return Some((generation, population));
        }
    }
    None
}

#[test]
fn test_cat_converges_within_cap() {
    let target = Target::new("cat").unwrap();

    for seed in 0..5 {
        let mut rng = StdRng::seed_from_u64(seed);
        let (generation, population) = evolve_until_converged(&target, 10, 500, &mut rng)
            .unwrap_or_else(|| panic!("seed {} did not converge in 500 generations", seed));

        assert!(generation >= 1);
        assert!(population.iter().any(|c| c.genome().to_string() == "cat"));
        assert!(population.iter().any(Candidate::matches_target));
    }
}

#[test]
fn test_evolver_cat_converges() {
    let mut rng = StdRng::seed_from_u64(2024);
    let result = Evolver::builder()
        .population_size(10)
        .max_generations(500)
        .build(Target::new("cat").unwrap())
        .unwrap()
        .run(&mut rng)
        .unwrap();

    assert!(result.converged);
    assert_eq!(result.best_genome.to_string(), "cat");
    assert_eq!(result.best_fitness_history().last(), Some(&1.0));
}

#[test]
fn test_seeded_generation_is_reproducible() {
    let target = Target::new("ab").unwrap();

    let first = Generation::seed_random(5, &target, &mut StdRng::seed_from_u64(17));
    let second = Generation::seed_random(5, &target, &mut StdRng::seed_from_u64(17));

    let genomes = |g: &Generation| -> Vec<StringGenome> {
        g.iter().map(|c| c.genome().clone()).collect()
    };
    assert_eq!(genomes(&first), genomes(&second));
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn test_random_single_candidate_rarely_converges() {
    let target = Target::new("The quick brown fox jumps over the lazy dog").unwrap();

    let converged = (0..1_000u64)
        .filter(|&seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            Generation::seed_random(1, &target, &mut rng)
                .has_converged(DEFAULT_CONVERGENCE_THRESHOLD)
        })
        .count();
    assert_eq!(converged, 0);
}

#[test]
fn test_generation_rendering_one_line_per_candidate() {
    let mut rng = StdRng::seed_from_u64(3);
    let target = Target::new("logos").unwrap();
    let population = Generation::seed_random(15, &target, &mut rng);

    let rendering = population.to_string();
    let lines: Vec<&str> = rendering.lines().collect();
    assert_eq!(lines.len(), 15);
    assert!(lines.iter().all(|line| line.chars().count() == 5));
}
