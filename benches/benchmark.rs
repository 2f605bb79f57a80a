use criterion::{criterion_group, criterion_main, Criterion};

use sudoku_game::game::{Difficulty, Puzzle};
use sudoku_game::generator::{Carver, Generator};

// Explanation of benchmark classes:
//
// generate: Filling an empty grid with the randomized backtracking search.
//           The runtime varies between iterations, since some candidate
//           orderings require deeper backtracking than others.
// carve: Deriving an initial grid from a fixed solution, i.e. shuffling the
//        81 coordinates and clearing the surplus cells.
// new puzzle: The full path a UI takes when the player picks a difficulty.

fn benchmark_generate(c: &mut Criterion) {
    let mut generator = Generator::new_default();

    c.bench_function("generate", |b| b.iter(|| generator.generate()));
}

fn benchmark_carve(c: &mut Criterion) {
    let solution = Generator::new_default().generate();
    let mut carver = Carver::new_default();

    c.bench_function("carve",
        |b| b.iter(|| carver.carve(&solution, Difficulty::Hard.clue_count())));
}

fn benchmark_new_puzzle(c: &mut Criterion) {
    let mut group = c.benchmark_group("new puzzle");

    for &difficulty in
            &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        group.bench_function(format!("{:?}", difficulty),
            |b| b.iter(|| Puzzle::generate(difficulty.clue_count())));
    }
}

criterion_group!(all,
    benchmark_generate,
    benchmark_carve,
    benchmark_new_puzzle
);

criterion_main!(all);
