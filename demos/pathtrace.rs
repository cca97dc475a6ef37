//! Runs each search algorithm over the same obstacle board at the paced
//! animation speed, then prints the explored cells and the found path.

use rand::SeedableRng;
use rand::rngs::StdRng;

use gridtrace_anim::{CellMarks, Context, Mark, ThreadPace, VizSession};
use gridtrace_core::{Board, Point};
use gridtrace_search::Algorithm;

fn render(board: &Board, marks: &CellMarks) -> String {
    let mut out = String::new();
    for y in 0..board.height() {
        for x in 0..board.width() {
            let p = Point::new(x, y);
            let ch = if board.is_start(p) {
                'S'
            } else if board.is_end(p) {
                'E'
            } else if board.is_obstacle(p) {
                '#'
            } else {
                match marks.mark_at(p) {
                    Mark::Path => '*',
                    Mark::Explored => '.',
                    Mark::None => ' ',
                }
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

fn main() {
    let mut board = Board::new(24, 12);
    board.set_start(Point::new(1, 6));
    board.set_end(Point::new(22, 3));
    let mut rng = StdRng::seed_from_u64(7);
    board.scatter_obstacles(&mut rng, 20);

    let mut session = VizSession::new(board.width(), board.height());
    println!("{}", session.pace_info(&board));

    for algorithm in Algorithm::ALL {
        session.select(algorithm);
        let mut pace = ThreadPace;
        match session.find_path(&board, &mut pace, &Context::new()) {
            Ok(Some(result)) => {
                println!("{}", render(&board, session.marks()));
                if result.success {
                    println!(
                        "{algorithm}: path of {} cells, {} nodes explored\n",
                        result.path.len(),
                        result.nodes_explored
                    );
                } else {
                    println!(
                        "{algorithm}: no path found, {} nodes explored\n",
                        result.nodes_explored
                    );
                }
            }
            Ok(None) => println!("{algorithm}: cancelled"),
            Err(err) => println!("{algorithm}: {err}"),
        }
    }
}
