use serde::{Deserialize, Serialize};

use crate::content::cell_info;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn step(self, direction: Direction) -> Self {
        let (dy, dx) = direction.delta();
        Self { y: self.y + dy, x: self.x + dx }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Unit `(dy, dx)` offset. North points at the row above.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (-1, 0),
            Self::South => (1, 0),
            Self::East => (0, 1),
            Self::West => (0, -1),
        }
    }
}

/// What occupies one grid position. The player is tracked on `PlayerState`, never here.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Cell {
    #[default]
    Air,
    // Nature
    Wood,
    Log,
    Stick,
    // Food
    Apple,
    Cracker,
    Bread,
    Potato,
    JacketPotato,
    Carrot,
    Mango,
    // Rock and minerals, in tier order
    Stone,
    Coal,
    Iron,
    Gold,
    Diamond,
    Ruby,
    Emerald,
    Lapis,
    Topaz,
    Amethyst,
    Uranium,
    Thorium,
    // Tools
    StonePickaxe,
    IronPickaxe,
    DiamondPickaxe,
    RubyPickaxe,
    EmeraldPickaxe,
    // Weapons
    StoneSword,
    IronSword,
    DiamondSword,
    GemstoneSlicer,
    NuclearBlaster,
    // Features and entities
    Chest,
    Serpent,
}

impl Cell {
    pub const ALL: [Cell; 35] = [
        Cell::Air,
        Cell::Wood,
        Cell::Log,
        Cell::Stick,
        Cell::Apple,
        Cell::Cracker,
        Cell::Bread,
        Cell::Potato,
        Cell::JacketPotato,
        Cell::Carrot,
        Cell::Mango,
        Cell::Stone,
        Cell::Coal,
        Cell::Iron,
        Cell::Gold,
        Cell::Diamond,
        Cell::Ruby,
        Cell::Emerald,
        Cell::Lapis,
        Cell::Topaz,
        Cell::Amethyst,
        Cell::Uranium,
        Cell::Thorium,
        Cell::StonePickaxe,
        Cell::IronPickaxe,
        Cell::DiamondPickaxe,
        Cell::RubyPickaxe,
        Cell::EmeraldPickaxe,
        Cell::StoneSword,
        Cell::IronSword,
        Cell::DiamondSword,
        Cell::GemstoneSlicer,
        Cell::NuclearBlaster,
        Cell::Chest,
        Cell::Serpent,
    ];

    pub fn is_air(self) -> bool {
        self == Self::Air
    }

    /// Only air can be walked through.
    pub fn is_passable(self) -> bool {
        self.is_air()
    }

    /// Base rock: the only tag mineral seeding may replace.
    pub fn is_rock(self) -> bool {
        self == Self::Stone
    }

    pub fn is_mineral(self) -> bool {
        matches!(
            cell_info(self).category,
            CellCategory::Mineral | CellCategory::Radioactive
        ) && !self.is_rock()
    }

    pub fn is_collectible(self) -> bool {
        cell_info(self).category.is_collectible()
    }

    /// Mining takes collectible cells only; air, chests and entities stay put.
    pub fn is_mineable(self) -> bool {
        self.is_collectible()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellCategory {
    Air,
    Nature,
    Food,
    Mineral,
    Radioactive,
    Tool,
    Weapon,
    Feature,
    Entity,
}

impl CellCategory {
    pub fn is_collectible(self) -> bool {
        matches!(
            self,
            Self::Nature
                | Self::Food
                | Self::Mineral
                | Self::Radioactive
                | Self::Tool
                | Self::Weapon
        )
    }
}

/// A discrete player intent handed over by the input collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    Move(Direction),
    Mine,
    Attack,
    OpenChest,
    Help,
}

impl Intent {
    pub const MOVE_NORTH: Intent = Intent::Move(Direction::North);
    pub const MOVE_SOUTH: Intent = Intent::Move(Direction::South);
    pub const MOVE_EAST: Intent = Intent::Move(Direction::East);
    pub const MOVE_WEST: Intent = Intent::Move(Direction::West);

    /// Whether applying this intent costs a turn.
    pub fn consumes_turn(self) -> bool {
        !matches!(self, Self::Help)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeathCause {
    Starvation,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunOutcome {
    Defeat(DeathCause),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogEvent {
    Moved { to: Pos },
    Blocked { target: Pos },
    Mined { cell: Cell, count: u32 },
    ChestOpened { reward: Cell },
    HungerDropped { hunger: u32 },
    HealthDropped { health: u32 },
    Descended { depth: u32 },
    RunEnded { outcome: RunOutcome },
}

/// Events produced by one applied intent or level transition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnReport {
    pub events: Vec<LogEvent>,
    /// Set once the run has ended, including on the turn that ended it.
    pub outcome: Option<RunOutcome>,
}
