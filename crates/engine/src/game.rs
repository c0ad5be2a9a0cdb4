//! Game loop: poll input, run the turn machine, redraw, pace.

use anyhow::{bail, Result};
use tracing::{debug, info, trace};

use crate::animation::Animator;
use crate::core::{Board, GameConfig, Layout, RevealState, SimpleRng, TurnOutcome, TurnPhase, TurnState};
use crate::platform::{Canvas, Platform};
use crate::types::{CellPos, InputEvent, Point};

/// Whether the loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Input folded over one poll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct FrameInput {
    clicked: bool,
    quit: bool,
}

pub struct Game<P: Platform> {
    config: GameConfig,
    layout: Layout,
    animator: Animator,
    platform: P,
    rng: SimpleRng,
    board: Board,
    revealed: RevealState,
    turn: TurnState,
    pointer: Point,
    rounds_won: u32,
    quit: bool,
}

impl<P: Platform> Game<P> {
    /// Validate `config` and deal the first board.
    pub fn new(config: GameConfig, platform: P, seed: u32) -> Result<Self> {
        let mut rng = SimpleRng::new(seed);
        let board = Board::generate(&config, &mut rng)?;
        info!(seed, width = config.board_width, height = config.board_height, "board generated");
        Ok(Self::assemble(config, platform, rng, board))
    }

    /// Start from a known deal. Boards after the first win are random.
    pub fn with_board(config: GameConfig, platform: P, board: Board, seed: u32) -> Result<Self> {
        config.validate()?;
        if board.width() != config.board_width || board.height() != config.board_height {
            bail!(
                "board is {}x{}, configuration expects {}x{}",
                board.width(),
                board.height(),
                config.board_width,
                config.board_height
            );
        }
        Ok(Self::assemble(config, platform, SimpleRng::new(seed), board))
    }

    fn assemble(config: GameConfig, platform: P, rng: SimpleRng, board: Board) -> Self {
        Self {
            layout: Layout::new(&config),
            animator: Animator::new(&config),
            revealed: RevealState::new(config.board_width, config.board_height, false),
            config,
            platform,
            rng,
            board,
            turn: TurnState::new(),
            pointer: Point::default(),
            rounds_won: 0,
            quit: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn revealed(&self) -> &RevealState {
        &self.revealed
    }

    pub fn phase(&self) -> TurnPhase {
        self.turn.phase()
    }

    pub fn rounds_won(&self) -> u32 {
        self.rounds_won
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    fn quitting(&self) -> bool {
        self.quit || self.platform.quit_requested()
    }

    fn flow(&self) -> Flow {
        if self.quitting() {
            Flow::Quit
        } else {
            Flow::Continue
        }
    }

    /// Clear the surface and play the opening preview.
    pub fn start(&mut self) -> Result<Flow> {
        self.platform.canvas().fill(self.config.theme.background);
        self.animator
            .start_game(&mut self.platform, &self.board, &mut self.rng)?;
        self.platform.discard_clicks();
        Ok(self.flow())
    }

    /// One frame.
    pub fn step(&mut self) -> Result<Flow> {
        if self.quitting() {
            return Ok(Flow::Quit);
        }

        let painter = *self.animator.painter();
        self.platform.canvas().fill(self.config.theme.background);
        painter.draw_board(self.platform.canvas(), &self.board, &self.revealed);

        let input = self.read_input()?;
        if input.quit {
            self.quit = true;
            return Ok(Flow::Quit);
        }

        if let Some(cell) = self.layout.pixel_to_cell(self.pointer) {
            if !self.revealed.is_revealed(cell) {
                painter.draw_highlight(self.platform.canvas(), cell);
                if input.clicked {
                    self.click(cell)?;
                    self.platform.discard_clicks();
                    if self.quitting() {
                        return Ok(Flow::Quit);
                    }
                }
            }
        }

        self.platform.present()?;
        self.platform.tick(self.config.fps)?;
        trace!(pointer = ?self.pointer, "frame");
        Ok(self.flow())
    }

    /// Start, then step until quit.
    pub fn run(&mut self) -> Result<()> {
        if self.start()? == Flow::Quit {
            return Ok(());
        }
        while self.step()? == Flow::Continue {}
        info!(rounds_won = self.rounds_won, "quit");
        Ok(())
    }

    fn read_input(&mut self) -> Result<FrameInput> {
        let mut input = FrameInput::default();
        for event in self.platform.poll_events()? {
            if event.is_quit() {
                input.quit = true;
                continue;
            }
            match event {
                InputEvent::PointerMove(p) => self.pointer = p,
                InputEvent::PointerUp(p) => {
                    self.pointer = p;
                    input.clicked = true;
                }
                InputEvent::Quit | InputEvent::KeyUp(_) => {}
            }
        }
        Ok(input)
    }

    fn click(&mut self, cell: CellPos) -> Result<()> {
        let outcome = self.turn.select(&self.board, &mut self.revealed, cell);
        match outcome {
            TurnOutcome::Ignored => {}
            TurnOutcome::FirstRevealed(cell) => {
                let shape = self.board.icon(cell).map(|icon| icon.shape.as_str());
                debug!(?cell, ?shape, "first pick");
                self.animator.reveal(&mut self.platform, &self.board, &[cell])?;
            }
            TurnOutcome::Mismatched { first, second } => {
                debug!(?first, ?second, "mismatch");
                self.animator
                    .reveal(&mut self.platform, &self.board, &[second])?;
                if self.quitting() {
                    return Ok(());
                }
                self.platform.wait_ms(self.config.mismatch_delay_ms)?;
                if self.quitting() {
                    return Ok(());
                }
                self.animator
                    .cover(&mut self.platform, &self.board, &[first, second])?;
            }
            TurnOutcome::Matched { first, second, won } => {
                debug!(?first, ?second, won, "match");
                self.animator
                    .reveal(&mut self.platform, &self.board, &[second])?;
                if won && !self.quitting() {
                    self.win()?;
                }
            }
        }
        Ok(())
    }

    fn win(&mut self) -> Result<()> {
        self.rounds_won += 1;
        info!(rounds_won = self.rounds_won, "board cleared");

        self.animator.win_flash(&mut self.platform, &self.board)?;
        if self.quitting() {
            return Ok(());
        }
        self.platform.wait_ms(self.config.win_pause_ms)?;
        if self.quitting() {
            return Ok(());
        }

        self.board = Board::generate(&self.config, &mut self.rng)?;
        self.revealed.reset(false);
        self.turn.reset();
        info!("new board generated");

        // Show the fresh, fully covered board before the preview.
        let painter = *self.animator.painter();
        self.platform.canvas().fill(self.config.theme.background);
        painter.draw_board(self.platform.canvas(), &self.board, &self.revealed);
        self.platform.present()?;
        self.platform.wait_ms(self.config.win_pause_ms)?;
        if self.quitting() {
            return Ok(());
        }

        self.animator
            .start_game(&mut self.platform, &self.board, &mut self.rng)
    }
}
