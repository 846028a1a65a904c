//! Per-tag metadata: display name, glyph, category and mineral tier.

use crate::types::{Cell, CellCategory};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellInfo {
    pub name: &'static str,
    pub glyph: char,
    pub category: CellCategory,
    /// Rank in the rock/mineral ordering; `None` for everything that is not rock.
    pub tier: Option<u8>,
}

/// Minerals in ascending tier order, excluding base stone.
pub static MINERAL_TIERS: [Cell; 11] = [
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
];

/// Rewards a chest can hold.
pub const CHEST_LOOT: [Cell; 10] = [
    Cell::Apple,
    Cell::Cracker,
    Cell::Bread,
    Cell::Potato,
    Cell::JacketPotato,
    Cell::Carrot,
    Cell::Mango,
    Cell::StonePickaxe,
    Cell::IronPickaxe,
    Cell::StoneSword,
];

pub fn cell_info(cell: Cell) -> CellInfo {
    use CellCategory::*;

    let (name, glyph, category, tier) = match cell {
        Cell::Air => ("Air", '-', Air, None),
        Cell::Wood => ("Wood", 'W', Nature, None),
        Cell::Log => ("Log", 'L', Nature, None),
        Cell::Stick => ("Stick", '/', Nature, None),
        Cell::Apple => ("Apple", 'a', Food, None),
        Cell::Cracker => ("Cracker", 'c', Food, None),
        Cell::Bread => ("Bread", 'b', Food, None),
        Cell::Potato => ("Potato", 'p', Food, None),
        Cell::JacketPotato => ("Jacket potato", 'j', Food, None),
        Cell::Carrot => ("Carrot", 'r', Food, None),
        Cell::Mango => ("Mango", 'm', Food, None),
        Cell::Stone => ("Stone", '#', Mineral, Some(0)),
        Cell::Coal => ("Coal", 'C', Mineral, Some(1)),
        Cell::Iron => ("Iron", 'I', Mineral, Some(2)),
        Cell::Gold => ("Gold", 'G', Mineral, Some(3)),
        Cell::Diamond => ("Diamond", 'D', Mineral, Some(4)),
        Cell::Ruby => ("Ruby", 'R', Mineral, Some(5)),
        Cell::Emerald => ("Emerald", 'E', Mineral, Some(6)),
        Cell::Lapis => ("Lapis", 'P', Mineral, Some(7)),
        Cell::Topaz => ("Topaz", 'T', Mineral, Some(8)),
        Cell::Amethyst => ("Amethyst", 'A', Mineral, Some(9)),
        Cell::Uranium => ("Uranium", 'U', Radioactive, Some(10)),
        Cell::Thorium => ("Thorium", 'H', Radioactive, Some(11)),
        Cell::StonePickaxe => ("Stone pickaxe", 'k', Tool, None),
        Cell::IronPickaxe => ("Iron pickaxe", 'k', Tool, None),
        Cell::DiamondPickaxe => ("Diamond pickaxe", 'k', Tool, None),
        Cell::RubyPickaxe => ("Ruby pickaxe", 'k', Tool, None),
        Cell::EmeraldPickaxe => ("Emerald pickaxe", 'k', Tool, None),
        Cell::StoneSword => ("Stone sword", 't', Weapon, None),
        Cell::IronSword => ("Iron sword", 't', Weapon, None),
        Cell::DiamondSword => ("Diamond sword", 't', Weapon, None),
        Cell::GemstoneSlicer => ("Gemstone slicer", 't', Weapon, None),
        Cell::NuclearBlaster => ("Nuclear blaster", 'N', Weapon, None),
        Cell::Chest => ("Chest", '$', Feature, None),
        Cell::Serpent => ("Serpent", '§', Entity, None),
    };
    CellInfo { name, glyph, category, tier }
}
