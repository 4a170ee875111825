use criterion::{criterion_group, criterion_main, Criterion};
use gridfill::{default_words, Grid, Solver};

pub fn criterion_benchmark(c: &mut Criterion) {
    let structure = include_str!("../data/structure0.txt");
    let words = default_words();

    c.bench_function("solve_structure0", |b| {
        b.iter(|| {
            let grid = Grid::square(String::from(structure)).unwrap();
            let mut solver = Solver::new(&grid, &words);
            solver.solve()
        })
    });

    c.bench_function("build_solver_structure0", |b| {
        b.iter(|| {
            let grid = Grid::square(String::from(structure)).unwrap();
            Solver::new(&grid, &words).slots().len()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
