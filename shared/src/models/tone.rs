//! Badge tones
//!
//! Status and category enums map onto a fixed palette through exhaustive
//! `match` tables, so an unmapped variant is a compile error rather than a
//! gray fallback at runtime.

use serde::{Deserialize, Serialize};

/// Color family a rendering shell uses for a badge or icon tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Amber,
    Blue,
    Gray,
    Green,
    Indigo,
    Orange,
    Pink,
    Purple,
    Red,
    Yellow,
}

impl Tone {
    /// Badge class string (`bg-*-100 text-*-700 border-*-200`)
    pub fn badge_class(&self) -> &'static str {
        match self {
            Tone::Amber => "bg-amber-100 text-amber-700 border-amber-200",
            Tone::Blue => "bg-blue-100 text-blue-700 border-blue-200",
            Tone::Gray => "bg-gray-100 text-gray-700 border-gray-200",
            Tone::Green => "bg-green-100 text-green-700 border-green-200",
            Tone::Indigo => "bg-indigo-100 text-indigo-700 border-indigo-200",
            Tone::Orange => "bg-orange-100 text-orange-700 border-orange-200",
            Tone::Pink => "bg-pink-100 text-pink-700 border-pink-200",
            Tone::Purple => "bg-purple-100 text-purple-700 border-purple-200",
            Tone::Red => "bg-red-100 text-red-700 border-red-200",
            Tone::Yellow => "bg-yellow-100 text-yellow-700 border-yellow-200",
        }
    }
}
