use crate::core::bounded_grid::BoundedGrid;
use crate::core::grid::Grid;
use crate::core::{Direction, LegalMove, Occupant, TileKind, Vec2};

/// How an entity treats whatever occupies the cell it wants to enter.
///
/// This is the only behavioral difference between the player and a box.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CollisionPolicy {
    /// May displace a box, provided the box can itself move the same way.
    PlayerLike,
    /// Never displaces anything.
    BoxLike,
}

impl CollisionPolicy {
    fn resolve(&self, occupant: Option<Occupant>, direction: Direction, boxes: &[Entity]) -> Option<LegalMove> {
        match (self, occupant) {
            (_, None) => Some(LegalMove::Step),
            (CollisionPolicy::BoxLike, Some(_)) => None,
            (CollisionPolicy::PlayerLike, Some(Occupant::Player)) => None,
            (CollisionPolicy::PlayerLike, Some(Occupant::Box(id))) => {
                let pushed = boxes.get(id.0)?;
                if pushed.legal_moves().contains(direction) {
                    Some(LegalMove::Push(id))
                } else {
                    None
                }
            }
        }
    }
}

/// Per-direction legality, rebuilt by the board after every position change.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct LegalMoves {
    moves: [Option<LegalMove>; 4],
}

impl LegalMoves {
    pub fn get(&self, direction: Direction) -> Option<LegalMove> {
        self.moves[direction.index()]
    }

    pub fn contains(&self, direction: Direction) -> bool {
        self.get(direction).is_some()
    }

    pub fn directions(&self) -> impl Iterator<Item = Direction> + use<> {
        let moves = self.moves;
        Direction::ALL.into_iter().filter(move |d| moves[d.index()].is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.moves.iter().all(Option::is_none)
    }
}

#[derive(Clone, Debug)]
pub struct Entity {
    position: Vec2,
    policy: CollisionPolicy,
    legal_moves: LegalMoves,
}

impl Entity {
    pub fn player(position: Vec2) -> Entity {
        Entity::new(position, CollisionPolicy::PlayerLike)
    }

    pub fn boxed(position: Vec2) -> Entity {
        Entity::new(position, CollisionPolicy::BoxLike)
    }

    fn new(position: Vec2, policy: CollisionPolicy) -> Entity {
        Entity {
            position,
            policy,
            legal_moves: LegalMoves::default(),
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn policy(&self) -> CollisionPolicy {
        self.policy
    }

    pub fn legal_moves(&self) -> &LegalMoves {
        &self.legal_moves
    }

    /// Computes legality without touching the cache, so a box can be evaluated
    /// while the arena holding it is borrowed.
    pub fn compute_legal_moves(
        &self,
        grid: &Grid,
        occupancy: &BoundedGrid<Option<Occupant>>,
        boxes: &[Entity],
    ) -> LegalMoves {
        let mut moves = [None; 4];
        for direction in Direction::ALL {
            let target = self.position + direction.to_vec();
            moves[direction.index()] = match grid.kind_at(&target) {
                None | Some(TileKind::Wall) => None,
                Some(_) => {
                    let occupant = occupancy.get(&target).copied().flatten();
                    self.policy.resolve(occupant, direction, boxes)
                }
            };
        }
        LegalMoves { moves }
    }

    pub fn recompute_legal_moves(
        &mut self,
        grid: &Grid,
        occupancy: &BoundedGrid<Option<Occupant>>,
        boxes: &[Entity],
    ) {
        self.legal_moves = self.compute_legal_moves(grid, occupancy, boxes);
    }

    pub(crate) fn set_legal_moves(&mut self, moves: LegalMoves) {
        self.legal_moves = moves;
    }

    /// Callers must have checked legality first.
    pub fn apply_move(&mut self, direction: Direction) {
        self.position = self.position + direction.to_vec();
    }

    /// Reverts a move previously made in `direction`.
    pub fn apply_undo(&mut self, direction: Direction) {
        self.position = self.position + direction.inverse().to_vec();
    }
}
