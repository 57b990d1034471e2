use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, SamplingMode};
use std::hint::black_box;
use SokobanEngine::core::{Board, Direction, RulesConfig};
use SokobanEngine::level::parse_text_map;
use SokobanEngine::state_graph::{explore, populate_step, PopulateResult, StateGraph};

const PUZZLES: &[(&str, &str, usize, SamplingMode)] = &[
    ("puzzle_0", r#"
####
#@$#
####
"#, 100, SamplingMode::Auto),
    ("puzzle_1", r#"
######
#@$.x#
######
"#, 100, SamplingMode::Auto),
    ("puzzle_2", r#"
######
#@$..#
#.$x.#
#.x..#
######
"#, 100, SamplingMode::Auto),
    ("puzzle_3", r#"
########
#.@$..x#
#.$..$.#
#.x#.$.#
#xx#...#
########
"#, 10, SamplingMode::Flat),
];

fn board_for(puzzle: &str) -> Board {
    let level = parse_text_map(puzzle).unwrap();
    Board::new(&level, RulesConfig::default()).unwrap()
}

pub fn bench_move_and_undo(c: &mut Criterion) {
    let mut group = c.benchmark_group("board_move_and_undo");

    for &(puzzle_name, puzzle, _, _) in PUZZLES {
        group.bench_with_input(
            BenchmarkId::new("all_directions", puzzle_name),
            &puzzle,
            |b, &puzzle| {
                b.iter_batched(
                    || board_for(puzzle),
                    |mut board| {
                        for direction in Direction::ALL {
                            board.attempt_move(black_box(direction));
                            board.undo();
                        }
                        black_box(board)
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

pub fn bench_full_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("board_full_graph");

    for &(puzzle_name, puzzle, sample_size, sample_mode) in PUZZLES {
        group.sample_size(sample_size);
        group.sampling_mode(sample_mode);
        group.bench_with_input(
            BenchmarkId::new("complete_graph", puzzle_name),
            &puzzle,
            |b, &puzzle| {
                b.iter_batched(
                    || StateGraph::new(&board_for(puzzle)),
                    |mut state_graph| {
                        while populate_step(black_box(&mut state_graph)) != PopulateResult::AllVisited {}
                        black_box(state_graph)
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

pub fn bench_explore_limited(c: &mut Criterion) {
    let board = board_for(PUZZLES[3].1);
    c.bench_function("explore_first_1000_states", |b| {
        b.iter(|| black_box(explore(black_box(&board), Some(1000))))
    });
}

criterion_group!(
    board_benches,
    bench_move_and_undo, bench_full_graph, bench_explore_limited
);

criterion_main!(board_benches);
