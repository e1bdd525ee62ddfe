use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use tictactoe_engine::SessionRng;
use tictactoe_engine::tictactoe::{Board, SearchAlgorithm, random_position, search};

const ALGORITHMS: [SearchAlgorithm; 2] = [SearchAlgorithm::Minimax, SearchAlgorithm::AlphaBeta];

fn bench_self_play_game(algorithm: SearchAlgorithm) {
    let mut board = Board::initial();
    while !board.is_terminal() {
        let player = board.player_to_move();
        let Ok(result) = search(&board, player, algorithm) else {
            break;
        };
        let Ok(next) = board.apply_move(result.position, player) else {
            break;
        };
        board = next;
    }
    black_box(board);
}

fn bench_single_move_empty_board(algorithm: SearchAlgorithm) {
    let board = Board::initial();
    let _ = black_box(search(&board, board.player_to_move(), algorithm));
}

fn bench_single_move_mid_game(algorithm: SearchAlgorithm) {
    let board: Board = "X.. .O. ..X".parse().unwrap_or_default();
    let _ = black_box(search(&board, board.player_to_move(), algorithm));
}

fn mid_game_boards() -> Vec<Board> {
    let mut rng = SessionRng::new(2024);
    (0..32)
        .map(|_| random_position(&mut rng, 3))
        .filter(|board| !board.is_terminal())
        .collect()
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(10)
        .measurement_time(Duration::from_secs(20));

    let boards = mid_game_boards();

    for algorithm in ALGORITHMS {
        let name = format!("{:?}", algorithm);

        group.bench_function(format!("{}/self_play_game", name), |b| {
            b.iter(|| bench_self_play_game(algorithm))
        });

        group.bench_function(format!("{}/single_move_empty", name), |b| {
            b.iter(|| bench_single_move_empty_board(algorithm))
        });

        group.bench_function(format!("{}/single_move_mid_game", name), |b| {
            b.iter(|| bench_single_move_mid_game(algorithm))
        });

        group.bench_function(format!("{}/random_positions", name), |b| {
            b.iter(|| {
                for board in &boards {
                    let _ = black_box(search(board, board.player_to_move(), algorithm));
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
