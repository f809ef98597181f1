//! Console driver: pick a player type for each side, then run the game until it ends.
use std::io;
use std::io::Write as _;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use connect_four::ai::minimax::MiniMaxBot;
use connect_four::ai::simple::RandomBot;
use connect_four::ai::Bot;
use connect_four::board::{Board, Outcome, Player};
use connect_four::heuristic::LineHeuristic;
use connect_four::state::GameOver;

fn main() {
    let (rows, cols) = parse_dimensions();

    let board = match Board::empty(rows, cols) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let mut players = [choose_player(Player::A), choose_player(Player::B)];
    run_game(board, &mut players);
}

fn parse_dimensions() -> (usize, usize) {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.len() {
        0 => (6, 7),
        2 => {
            let parse = |s: &String| {
                s.parse::<usize>().unwrap_or_else(|_| {
                    eprintln!("expected a number, got {:?}", s);
                    std::process::exit(1);
                })
            };
            (parse(&args[0]), parse(&args[1]))
        }
        _ => {
            eprintln!("usage: play [ROWS COLS]");
            std::process::exit(1);
        }
    }
}

fn run_game(mut board: Board, players: &mut [ConsolePlayer; 2]) {
    let mut player = Player::A;

    while board.outcome().is_none() {
        println!();
        println!("{}", board);

        // SAFETY: unwrap is safe because the loop only runs while the board is not terminal.
        let col = players[player.index() as usize].select_move(&board, player).unwrap();
        println!("Player {} plays column {}", player.to_char(), col);

        board = board.drop_marker(player, col).unwrap();
        player = player.other();
    }

    println!();
    println!("{}", board);
    match board.outcome().unwrap() {
        Outcome::WonBy(winner) => println!("{} wins!", winner.to_char()),
        Outcome::Draw => println!("The game was a draw."),
    }

    let total_nodes: u64 = players.iter().map(ConsolePlayer::nodes_visited).sum();
    if total_nodes > 0 {
        println!("Total search nodes visited: {}", total_nodes);
    }
}

fn choose_player(player: Player) -> ConsolePlayer {
    loop {
        println!("Choose the type of player for {}:", player.to_char());
        println!(" 1. Human");
        println!(" 2. Random AI");
        println!(" 3. MiniMax AI");

        match read_line().trim() {
            "1" => return ConsolePlayer::Human(HumanPlayer),
            "2" => return ConsolePlayer::Random(RandomBot::new(SmallRng::from_entropy())),
            "3" => {
                prompt("Choose a search depth in plies: ");
                match read_line().trim().parse::<u32>() {
                    Ok(depth) if depth > 0 => {
                        return ConsolePlayer::MiniMax(MiniMaxBot::new(depth, LineHeuristic))
                    }
                    _ => println!("Invalid search depth. Choose the player type again."),
                }
            }
            _ => println!("Invalid choice. Try again."),
        }
    }
}

/// The player types offered by the menu.
#[derive(Debug)]
enum ConsolePlayer {
    Human(HumanPlayer),
    Random(RandomBot<SmallRng>),
    MiniMax(MiniMaxBot<LineHeuristic>),
}

impl ConsolePlayer {
    fn nodes_visited(&self) -> u64 {
        match self {
            ConsolePlayer::MiniMax(bot) => bot.nodes_visited(),
            _ => 0,
        }
    }
}

impl Bot for ConsolePlayer {
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize, GameOver> {
        match self {
            ConsolePlayer::Human(bot) => bot.select_move(board, player),
            ConsolePlayer::Random(bot) => bot.select_move(board, player),
            ConsolePlayer::MiniMax(bot) => bot.select_move(board, player),
        }
    }
}

/// Human-controlled player entering column choices on the console.
/// Re-prompts until the input is a legal column.
#[derive(Debug)]
struct HumanPlayer;

impl Bot for HumanPlayer {
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize, GameOver> {
        if board.is_terminal() {
            return Err(GameOver);
        }

        let legal: Vec<usize> = board.legal_columns().collect();
        loop {
            prompt(&format!(
                "Human player {}'s turn, choose a column (0-{}): ",
                player.to_char(),
                board.cols() - 1
            ));

            match read_line().trim().parse::<usize>() {
                Ok(col) if legal.contains(&col) => return Ok(col),
                _ => println!("Invalid column. Try again."),
            }
        }
    }
}

fn prompt(text: &str) {
    print!("{}", text);
    io::stdout().flush().expect("failed to flush stdout");
}

fn read_line() -> String {
    let mut line = String::new();
    io::stdin().read_line(&mut line).expect("failed to read stdin");
    line
}
