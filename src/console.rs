use std::io::{self, BufRead, Write};

use anyhow::Result;
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::game::GameState;
use crate::movegen::Move;

#[derive(Debug, Clone, Default)]
pub struct ConsoleOptions {
    pub seed: Option<u64>,
    pub quiet: bool,
    pub unicode: bool,
}

/// Line-oriented front end: one command or move per line, one reply per command.
pub struct ConsoleHandler {
    game: GameState,
    rng: StdRng,
    options: ConsoleOptions,
}

impl ConsoleHandler {
    pub fn new(options: ConsoleOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        ConsoleHandler {
            game: GameState::new(),
            rng,
            options,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut reader = stdin.lock();
        let mut line = String::new();

        write!(stdout, "{}", self.render())?;
        stdout.flush()?;

        while reader.read_line(&mut line)? > 0 {
            let command = line.trim();
            if command == "quit" {
                break;
            }
            let response = self.handle_command(command)?;
            write!(stdout, "{}", response)?;
            stdout.flush()?;
            line.clear();
        }
        Ok(())
    }

    pub fn handle_command(&mut self, command: &str) -> Result<String> {
        let command = command.trim();
        debug!("command: {:?}", command);

        match command {
            "" | "quit" => Ok(String::new()),
            "board" => Ok(self.render()),
            "status" => Ok(self.handle_status()),
            "moves" => Ok(self.handle_moves()),
            "random" => Ok(self.handle_random()),
            "new" => {
                self.game = GameState::new();
                Ok(self.render())
            }
            cmd if cmd.contains('-') => Ok(self.handle_move(cmd)),
            cmd => {
                warn!("unknown command {:?}", cmd);
                Ok(format!(
                    "unknown command '{}' (try e2-e4, board, status, moves, random, new, quit)\n",
                    cmd
                ))
            }
        }
    }

    fn handle_move(&mut self, text: &str) -> String {
        match self.game.apply_text(text) {
            Ok(_) => self.after_move(),
            Err(err) => format!("rejected: {}\n", err),
        }
    }

    fn handle_random(&mut self) -> String {
        let moves = self.game.legal_moves();
        let Some(&mv) = moves.choose(&mut self.rng) else {
            return format!("no legal move ({})\n", self.game.status());
        };
        match self.game.apply_move(mv) {
            Ok(_) => format!("played {}\n{}", mv, self.after_move()),
            Err(err) => format!("rejected: {}\n", err),
        }
    }

    fn handle_moves(&self) -> String {
        let moves: Vec<String> = self.game.legal_moves().iter().map(Move::to_string).collect();
        format!("{}\n", moves.join(" "))
    }

    fn handle_status(&self) -> String {
        let mut result = format!(
            "move {}, {} to move, {}",
            self.game.fullmove_number(),
            self.game.side_to_move(),
            self.game.status()
        );
        if let Some(winner) = self.game.winner() {
            result.push_str(&format!(", {} wins", winner));
        }
        result.push('\n');
        result
    }

    fn after_move(&self) -> String {
        if self.options.quiet {
            self.handle_status()
        } else {
            format!("{}{}", self.render(), self.handle_status())
        }
    }

    fn render(&self) -> String {
        self.game.board().render(self.options.unicode)
    }
}
