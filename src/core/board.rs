use std::fmt;

use tracing::{debug, info, trace};

use crate::console_interface::render_board_to_string;
use crate::core::bounded_grid::BoundedGrid;
use crate::core::entity::{Entity, LegalMoves};
use crate::core::grid::Grid;
use crate::core::history::History;
use crate::core::{
    BoardStatus, BoxId, Direction, HistoryEntry, LegalMove, LevelError, Occupant, Positions, RulesConfig,
    TileKind, UserAction, Vec2,
};
use crate::level::{LevelDescription, LevelLayout};

/// A level in play: sole owner of the grid, the entities and the move history.
#[derive(Clone, Debug)]
pub struct Board {
    grid: Grid,
    player: Entity,
    boxes: Vec<Entity>,
    occupancy: BoundedGrid<Option<Occupant>>,
    history: History,
    status: BoardStatus,
    rules: RulesConfig,
    start_player: Vec2,
    start_boxes: Vec<Vec2>,
}

impl Board {
    pub fn new(level: &LevelDescription, rules: RulesConfig) -> Result<Board, LevelError> {
        let layout = level.to_layout()?;
        Ok(Board::from_layout(layout, rules))
    }

    pub(crate) fn from_layout(layout: LevelLayout, rules: RulesConfig) -> Board {
        let LevelLayout { grid, player, boxes } = layout;
        let occupancy = BoundedGrid::new_with_size(Vec2::new(grid.width(), grid.height()), None);
        let mut board = Board {
            player: Entity::player(player),
            boxes: boxes.iter().map(|&b| Entity::boxed(b)).collect(),
            occupancy,
            history: History::new(),
            status: BoardStatus::Ready,
            rules,
            start_player: player,
            start_boxes: boxes,
            grid,
        };
        board.refresh_legal_moves();
        info!(
            width = board.width(),
            height = board.height(),
            boxes = board.boxes.len(),
            goals = board.grid.goals().len(),
            "board loaded"
        );
        board
    }

    pub fn apply(&mut self, action: UserAction) -> BoardStatus {
        match action {
            UserAction::Move(direction) => self.attempt_move(direction),
            UserAction::Undo => self.undo(),
            UserAction::Restart => self.restart(),
        }
    }

    /// Moves the player if `direction` is currently legal, pushing a box when one is
    /// in the way. Illegal requests leave the board untouched.
    pub fn attempt_move(&mut self, direction: Direction) -> BoardStatus {
        if self.status == BoardStatus::Won && !self.rules.moves_after_win {
            trace!(?direction, "move ignored, board is won");
            return self.status;
        }
        let Some(legal) = self.player.legal_moves().get(direction) else {
            trace!(?direction, "move not legal");
            return self.status;
        };

        let pushed = match legal {
            LegalMove::Step => None,
            LegalMove::Push(id) => {
                self.boxes[id.0].apply_move(direction);
                Some(id)
            }
        };
        self.player.apply_move(direction);
        self.history.record(HistoryEntry {
            direction,
            pushed,
            status_before: self.status,
        });
        self.refresh_legal_moves();

        self.status = if self.goals_covered() {
            BoardStatus::Won
        } else {
            BoardStatus::InPlay
        };
        debug!(?direction, ?pushed, status = ?self.status, "move applied");
        self.status
    }

    /// Rewinds the newest move that has not been undone yet. Win is not re-evaluated:
    /// the status from before that move is restored.
    pub fn undo(&mut self) -> BoardStatus {
        if self.status == BoardStatus::Won && !self.rules.undo_after_win {
            trace!("undo ignored, board is won");
            return self.status;
        }
        let Some(entry) = self.history.undo_one() else {
            trace!("nothing to undo");
            return self.status;
        };

        self.player.apply_undo(entry.direction);
        if let Some(id) = entry.pushed {
            self.boxes[id.0].apply_undo(entry.direction);
        }
        self.refresh_legal_moves();
        self.status = entry.status_before;
        debug!(direction = ?entry.direction, pushed = ?entry.pushed, depth = self.history.undo_depth(), "move undone");
        self.status
    }

    pub fn restart(&mut self) -> BoardStatus {
        self.player = Entity::player(self.start_player);
        self.boxes = self.start_boxes.iter().map(|&b| Entity::boxed(b)).collect();
        self.history.clear();
        self.status = BoardStatus::Ready;
        self.refresh_legal_moves();
        info!("board restarted");
        self.status
    }

    /// Rebuilds occupancy, then every box's legality, then the player's. The player
    /// reads the boxes' fresh caches to decide pushes.
    fn refresh_legal_moves(&mut self) {
        self.occupancy.fill(None);
        self.occupancy[&self.player.position()] = Some(Occupant::Player);
        for (i, entity) in self.boxes.iter().enumerate() {
            self.occupancy[&entity.position()] = Some(Occupant::Box(BoxId(i)));
        }

        for i in 0..self.boxes.len() {
            let moves = self.boxes[i].compute_legal_moves(&self.grid, &self.occupancy, &self.boxes);
            self.boxes[i].set_legal_moves(moves);
        }
        self.player.recompute_legal_moves(&self.grid, &self.occupancy, &self.boxes);
        trace!(player_moves = ?self.player.legal_moves(), "legal moves refreshed");
    }

    fn goals_covered(&self) -> bool {
        self.grid
            .goals()
            .iter()
            .all(|goal| matches!(self.occupancy.get(goal), Some(Some(Occupant::Box(_)))))
    }

    pub fn status(&self) -> BoardStatus {
        self.status
    }

    pub fn is_won(&self) -> bool {
        self.status == BoardStatus::Won
    }

    pub fn current_positions(&self) -> Positions {
        Positions {
            player: self.player.position(),
            boxes: self.boxes.iter().enumerate().map(|(i, b)| (BoxId(i), b.position())).collect(),
        }
    }

    pub fn player_position(&self) -> Vec2 {
        self.player.position()
    }

    pub fn box_positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.boxes.iter().map(Entity::position)
    }

    pub fn box_count(&self) -> usize {
        self.boxes.len()
    }

    /// The player's legal moves in the current state.
    pub fn legal_moves(&self) -> &LegalMoves {
        self.player.legal_moves()
    }

    pub fn box_legal_moves(&self, id: BoxId) -> Option<&LegalMoves> {
        self.boxes.get(id.0).map(Entity::legal_moves)
    }

    pub fn occupant_at(&self, pos: &Vec2) -> Option<Occupant> {
        self.occupancy.get(pos).copied().flatten()
    }

    pub fn kind_at(&self, pos: &Vec2) -> Option<TileKind> {
        self.grid.kind_at(pos)
    }

    pub fn tiles(&self) -> impl Iterator<Item = (Vec2, TileKind)> + '_ {
        self.grid.tiles()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn rules(&self) -> RulesConfig {
        self.rules
    }

    pub fn count_boxes_on_goals(&self) -> usize {
        self.grid
            .goals()
            .iter()
            .filter(|goal| matches!(self.occupant_at(goal), Some(Occupant::Box(_))))
            .count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board_to_string(self))
    }
}
