//! Interactive session loop
//!
//! Brings the pieces together: collects the settings (or restores a
//! saved session), alternates turns between the players or between the
//! human and the engine, saves after every applied move, and announces
//! the result. The core stays oblivious to all of this; the session only
//! talks to it through the public board/rules/engine API.

use crate::board::{Board, Disc};
use crate::config::{self, GameConfig};
use crate::engine::Engine;
use crate::error::SessionError;
use crate::rules::is_won;
use crate::save::SaveFile;

use super::board_view;
use super::input::{prompt_char, prompt_number, prompt_word};

/// A validated player input for one turn.
enum PlayerMove {
    Column(usize),
    Concede,
}

/// How a game ended.
enum Outcome {
    /// The given side completed a run
    Win(Disc),
    /// Board full, no run anywhere
    Draw,
    /// The given side gave up
    Conceded(Disc),
}

/// Player number (1 or 2) for a side, as shown in prompts.
fn player_number(side: Disc) -> u8 {
    match side {
        Disc::Yellow => 2,
        _ => 1,
    }
}

/// The interactive terminal application.
pub struct App {
    save: SaveFile,
}

impl App {
    #[must_use]
    pub fn new(save: SaveFile) -> Self {
        Self { save }
    }

    /// Run sessions until the user declines another game.
    pub fn run(&mut self, resume_allowed: bool) -> Result<(), SessionError> {
        println!("\n---------------------- HELLO! ----------------------\n");

        let mut offer_resume = resume_allowed;
        loop {
            self.play_one_game(offer_resume)?;
            // A finished game's save is gone; never offer it again.
            offer_resume = false;

            loop {
                let answer =
                    prompt_word("Would you like to start a new game? Please input \"yes\" or \"no\": ")?;
                match answer.as_str() {
                    "no" => {
                        println!("Thanks for playing!\nSee you later!\n");
                        return Ok(());
                    }
                    "yes" => break,
                    _ => continue,
                }
            }
        }
    }

    fn play_one_game(&mut self, offer_resume: bool) -> Result<(), SessionError> {
        let (mut board, config) = self.start_game(offer_resume)?;

        show_instructions(&board);
        print!("{}", board_view::render(&board));

        let outcome = self.play_turns(&mut board, &config)?;
        announce_outcome(&outcome, config.players);

        println!("-------------------- GAME OVER! --------------------\n");
        self.save.delete()?;
        Ok(())
    }

    /// Restore the saved session if offered and accepted, otherwise
    /// prompt for fresh settings.
    fn start_game(&self, offer_resume: bool) -> Result<(Board, GameConfig), SessionError> {
        if offer_resume && self.save.exists() {
            loop {
                let choice = prompt_char(
                    "Please input \"R\" to resume your last game or \"N\" to start a new one: ",
                )?;
                match choice {
                    'R' => match self.save.load() {
                        Ok(restored) => {
                            println!("\n----------------- LAST GAME LOADED -----------------\n");
                            return Ok(restored);
                        }
                        Err(err) => {
                            println!("Could not load the last game ({err}); starting a new one.");
                            break;
                        }
                    },
                    'N' => break,
                    _ => continue,
                }
            }
        }
        self.new_game()
    }

    fn new_game(&self) -> Result<(Board, GameConfig), SessionError> {
        println!("\n----------------- NEW GAME STARTED -----------------\n");
        println!("Please input the desired number of rows and columns.");

        let mut config = GameConfig::default();

        config.rows = loop {
            let rows = prompt_number(&format!(
                "Rows (min - {}, max - {}): ",
                config::MIN_ROWS,
                config::MAX_ROWS
            ))?;
            if rows >= 0 && GameConfig::rows_valid(rows as usize) {
                break rows as usize;
            }
        };

        config.cols = loop {
            let cols = prompt_number(&format!(
                "Columns (min - {}, max - {}): ",
                config::MIN_COLS,
                config::MAX_COLS
            ))?;
            if cols >= 0 && GameConfig::cols_valid(cols as usize) {
                break cols as usize;
            }
        };

        config.win_length = loop {
            let x = prompt_number(&format!(
                "\nPlease input how many pieces in a row are needed to win (min - {}, max - {}): ",
                config::MIN_WIN_LENGTH,
                config.rows.max(config.cols)
            ))?;
            if x >= 0 && config.win_length_valid(x as usize) {
                break x as usize;
            }
        };

        config.players = loop {
            let players = prompt_number("\nPlease input the number of players (1 or 2): ")?;
            if (0..=u8::MAX as i64).contains(&players) && GameConfig::players_valid(players as u8) {
                break players as u8;
            }
        };

        if config.players == 1 {
            config.difficulty = loop {
                println!("\nPlease select the level of difficulty (from 1 to 3).");
                println!("1: Easy.\n2: Medium.\n3: Hard");
                let level = prompt_number("Difficulty: ")?;
                if (0..=u8::MAX as i64).contains(&level) && GameConfig::difficulty_valid(level as u8)
                {
                    break level as u8;
                }
            };
        }

        Ok((Board::from_config(&config), config))
    }

    /// Alternate turns until the game is decided.
    fn play_turns(&self, board: &mut Board, config: &GameConfig) -> Result<Outcome, SessionError> {
        let engine = Engine::new(Disc::Yellow);

        loop {
            if is_won(board) {
                // The side that just moved won; the turn has already
                // passed to the loser.
                return Ok(Outcome::Win(board.turn().opponent()));
            }
            if board.is_full() {
                return Ok(Outcome::Draw);
            }

            if config.players == 1 && board.turn() == engine.side() {
                let result = engine.choose_move(board, config.difficulty);
                let Some(col) = result.column else {
                    return Ok(Outcome::Conceded(engine.side()));
                };
                println!("AI has made its move: {}", col + 1);
                let _ = board.drop_disc(col);
                board.toggle_turn();
            } else {
                match self.ask_move(board)? {
                    PlayerMove::Concede => return Ok(Outcome::Conceded(board.turn())),
                    PlayerMove::Column(col) => {
                        let _ = board.drop_disc(col);
                        board.toggle_turn();
                    }
                }
            }

            print!("{}", board_view::render(board));
            self.save.save(board, config)?;
        }
    }

    /// Ask the side to move for a column (1-based at the prompt, 0 to
    /// concede); re-show the instructions on anything unplayable.
    fn ask_move(&self, board: &Board) -> Result<PlayerMove, SessionError> {
        loop {
            let input = prompt_number(&format!(
                "Player {}, please select a free column: ",
                player_number(board.turn())
            ))?;
            if input == 0 {
                return Ok(PlayerMove::Concede);
            }
            let col = input - 1;
            if col >= 0 && board.is_legal(col as usize) {
                return Ok(PlayerMove::Column(col as usize));
            }
            show_instructions(board);
        }
    }
}

fn show_instructions(board: &Board) {
    println!("\nTo make your move, please input a value from 1 to {}.", board.cols());
    println!("To concede, please input 0 (zero).\n");
}

fn announce_outcome(outcome: &Outcome, players: u8) {
    match outcome {
        Outcome::Draw => println!("\nThe board is full: it's a draw.\n"),
        Outcome::Win(winner) => announce_winner(*winner, players),
        Outcome::Conceded(loser) => announce_winner(loser.opponent(), players),
    }
}

fn announce_winner(winner: Disc, players: u8) {
    if players == 2 {
        println!("\nPlayer {} wins. Congratulations!\n", player_number(winner));
    } else if winner == Disc::Red {
        println!("\nYou won! Congratulations!\n");
    } else {
        println!("\nYou lost. Better luck next time!\n");
    }
}
