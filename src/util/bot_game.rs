//! Utilities to run bots against each other and report the results.
use std::fmt::Write as _;
use std::fmt::{Debug, Formatter};
use std::time::Instant;

use itertools::Itertools;

use crate::ai::Bot;
use crate::board::{Board, Outcome, Player};
use crate::util::rating::elo_from_wdl;
use crate::wdl::WDL;

/// Run `bot_l` against `bot_r` on boards produced by `start`.
///
/// `games_per_side` games are run, except if `both_sides` is true, in which case a match
/// consists of two games per start position where the bots switch sides.
#[must_use]
pub fn run<L: Bot, R: Bot>(
    start: impl Fn() -> Board,
    bot_l: impl Fn() -> L,
    bot_r: impl Fn() -> R,
    games_per_side: u32,
    both_sides: bool,
) -> BotGameResult {
    // this instantiates both at least once so we catch errors before playing a bunch of games
    let debug_l = debug_to_string(&bot_l());
    let debug_r = debug_to_string(&bot_r());

    let game_count = if both_sides { 2 * games_per_side } else { games_per_side };
    let starts = (0..games_per_side).map(|_| start()).collect_vec();

    let replays: Vec<Replay> = (0..game_count)
        .map(|game_i| {
            let flip = if both_sides { game_i % 2 == 1 } else { false };
            let pair_i = if both_sides { game_i / 2 } else { game_i };
            let start = &starts[pair_i as usize];

            play_single_game(start, flip, &mut bot_l(), &mut bot_r())
        })
        .collect();

    let total_time_l = replays.iter().map(|r| r.total_time_l).sum::<f32>();
    let total_time_r = replays.iter().map(|r| r.total_time_r).sum::<f32>();
    let move_count_l = replays.iter().map(|r| r.move_count_l).sum::<u32>();
    let move_count_r = replays.iter().map(|r| r.move_count_r).sum::<u32>();

    BotGameResult {
        game_count,
        average_game_length: replays.iter().map(|r| r.moves.len() as f32).sum::<f32>() / game_count as f32,
        wdl_l: replays.iter().map(|r| r.outcome.pov(r.player_l).to_wdl()).sum(),
        time_l: total_time_l / move_count_l as f32,
        time_r: total_time_r / move_count_r as f32,
        debug_l,
        debug_r,
        replays,
    }
}

fn play_single_game(start: &Board, flip: bool, bot_l: &mut impl Bot, bot_r: &mut impl Bot) -> Replay {
    let mut board = start.clone();
    let mut player = Player::A;
    let player_l = if flip { Player::B } else { Player::A };

    let mut total_time_l = 0.0;
    let mut total_time_r = 0.0;
    let mut move_count_l: u32 = 0;
    let mut move_count_r: u32 = 0;
    let mut moves = vec![];

    loop {
        match board.outcome() {
            None => {
                let start_time = Instant::now();
                let mv = if player == player_l {
                    let mv = bot_l.select_move(&board, player).unwrap();
                    total_time_l += start_time.elapsed().as_secs_f32();
                    move_count_l += 1;
                    mv
                } else {
                    let mv = bot_r.select_move(&board, player).unwrap();
                    total_time_r += start_time.elapsed().as_secs_f32();
                    move_count_r += 1;
                    mv
                };

                moves.push(mv);
                board = board.drop_marker(player, mv).unwrap();
                player = player.other();
            }
            Some(outcome) => {
                return Replay {
                    start: start.clone(),
                    player_l,
                    moves,
                    outcome,
                    total_time_l,
                    total_time_r,
                    move_count_l,
                    move_count_r,
                };
            }
        }
    }
}

/// A single finished game between the two bots.
#[derive(Debug, Clone)]
pub struct Replay {
    pub start: Board,
    pub player_l: Player,

    pub moves: Vec<usize>,
    pub outcome: Outcome,

    pub total_time_l: f32,
    pub total_time_r: f32,
    pub move_count_l: u32,
    pub move_count_r: u32,
}

/// Structure returned by the function [`run`].
pub struct BotGameResult {
    pub game_count: u32,
    pub replays: Vec<Replay>,

    pub average_game_length: f32,
    pub wdl_l: WDL<u32>,

    //time per move in seconds
    pub time_l: f32,
    pub time_r: f32,

    pub debug_l: String,
    pub debug_r: String,
}

impl Debug for BotGameResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "BotGameResult {{")?;
        writeln!(
            f,
            "  {} games, average length {}",
            self.game_count, self.average_game_length
        )?;
        writeln!(f, "  left      {:?}", self.wdl_l)?;
        writeln!(
            f,
            "  left      {:.3?}",
            self.wdl_l.cast::<f32>() / self.game_count as f32
        )?;
        writeln!(f, "  left elo: {:.1}", elo_from_wdl(self.wdl_l.cast::<f32>()))?;
        writeln!(f, "  time_l:   {:.4}, time_r: {:.4}", self.time_l, self.time_r)?;
        writeln!(f, "  left:     {}", self.debug_l)?;
        writeln!(f, "  right:    {}", self.debug_r)?;
        writeln!(f, "}}")?;

        Ok(())
    }
}

fn debug_to_string(d: &impl Debug) -> String {
    let mut s = String::new();
    write!(&mut s, "{:?}", d).unwrap();
    s
}
