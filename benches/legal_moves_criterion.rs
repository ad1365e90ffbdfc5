use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use cell_chess::game_state::board::Board;
use cell_chess::game_state::cell::Cell;
use cell_chess::game_state::chess_rules::pawn_rank;
use cell_chess::game_state::chess_types::{Color, PieceKind};
use cell_chess::move_generation::perft::perft;
use cell_chess::utils::board_codec::{compress_board, decompress_board};
use cell_chess::utils::board_diagram::parse_diagram;

const SUITE_ENV: &str = "CELL_CHESS_BENCH_SUITE";

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    diagram: &'static str,
    side_to_move: Color,
    expected_nodes: &'static [u64],
}

const STARTPOS: &str = "
    r n b q k b n r
    p p p p p p p p
    . . . . . . . .
    . . . . . . . .
    . . . . . . . .
    . . . . . . . .
    P P P P P P P P
    R N B Q K B N R
";

const KIWIPETE: &str = "
    r . . . k . . r
    p . p p q p b .
    b n . . p n p .
    . . . P N . . .
    . p . . P . . .
    . . N . . Q . p
    P P P B B P P P
    R . . . K . . R
";

const ROOK_ENDGAME: &str = "
    . . . . . . . .
    . . p . . . . .
    . . . p . . . .
    K P . . . . . r
    . R . . . p . k
    . . . . . . . .
    . . . . P . P .
    . . . . . . . .
";

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        diagram: STARTPOS,
        side_to_move: Color::White,
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "kiwipete",
        diagram: KIWIPETE,
        side_to_move: Color::White,
        expected_nodes: &[48, 2039],
    },
    BenchCase {
        name: "rook_endgame",
        diagram: ROOK_ENDGAME,
        side_to_move: Color::White,
        expected_nodes: &[14, 191],
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        diagram: STARTPOS,
        side_to_move: Color::White,
        expected_nodes: &[20, 400, 8902, 197_281],
    },
    BenchCase {
        name: "kiwipete",
        diagram: KIWIPETE,
        side_to_move: Color::White,
        expected_nodes: &[48, 2039],
    },
    BenchCase {
        name: "rook_endgame",
        diagram: ROOK_ENDGAME,
        side_to_move: Color::White,
        expected_nodes: &[14, 191, 2812],
    },
];

fn suite_name() -> &'static str {
    match std::env::var(SUITE_ENV) {
        Ok(value) if value.eq_ignore_ascii_case("standard") => "standard",
        _ => "quick",
    }
}

fn selected_cases() -> &'static [BenchCase] {
    match suite_name() {
        "standard" => CASES_STANDARD,
        _ => CASES_QUICK,
    }
}

/// Diagram pieces start unmoved; pawns away from their home rank have moved.
fn load_case(case: &BenchCase) -> Board {
    let board = parse_diagram(case.diagram).expect("benchmark diagram should parse");
    let moved_pawns: Vec<Cell> = board
        .cells()
        .filter_map(|cell| {
            let piece = cell.occupant()?;
            let away = piece.kind == PieceKind::Pawn && cell.coordinate().rank != pawn_rank(piece.color);
            away.then(|| Cell::occupied(cell.coordinate(), piece.with_move_count(1)))
        })
        .collect();
    board.with_replaced_cells(moved_pawns)
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("perft_{}", suite_name()));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in selected_cases() {
        let board = load_case(case);

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let warmup = perft(&board, case.side_to_move, None, depth);
            assert_eq!(
                warmup.nodes as u64, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{}_d{}", case.name, depth)),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft(
                            black_box(&board),
                            case.side_to_move,
                            None,
                            black_box(depth),
                        );
                        assert_eq!(count.nodes as u64, *expected);
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("board_codec");
    for case in CASES_QUICK {
        let board = load_case(case);
        let text = compress_board(&board);

        group.bench_function(format!("compress_{}", case.name), |b| {
            b.iter(|| black_box(compress_board(black_box(&board))));
        });
        group.bench_function(format!("decompress_{}", case.name), |b| {
            b.iter(|| {
                black_box(decompress_board(black_box(&text)).expect("benchmark board should decode"))
            });
        });
    }
    group.finish();
}

criterion_group!(legal_move_benches, bench_perft, bench_codec);
criterion_main!(legal_move_benches);
