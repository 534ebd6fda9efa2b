use std::fmt;

use serde::{Deserialize, Serialize};

/// Метка позиции за столом.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PositionLabel {
    /// BTN
    Button,
    /// SB
    SmallBlind,
    /// BB
    BigBlind,
    /// SB/BTN – хедз-ап.
    SmallBlindButton,
    /// BTN/SB/BB – единственный игрок в раздаче.
    Solo,
    /// UTG
    UnderTheGun,
    /// UTG+1
    UnderTheGunPlusOne,
    /// MP1, MP2, ...
    Middle(u8),
    /// MP без номера (таблицы запасного порядка).
    MiddleUnnumbered,
    /// CO
    Cutoff,
    /// P1, P2, ... – запасная метка, когда позицию не угадать.
    Ordinal(u8),
}

impl fmt::Display for PositionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionLabel::Button => f.write_str("BTN"),
            PositionLabel::SmallBlind => f.write_str("SB"),
            PositionLabel::BigBlind => f.write_str("BB"),
            PositionLabel::SmallBlindButton => f.write_str("SB/BTN"),
            PositionLabel::Solo => f.write_str("BTN/SB/BB"),
            PositionLabel::UnderTheGun => f.write_str("UTG"),
            PositionLabel::UnderTheGunPlusOne => f.write_str("UTG+1"),
            PositionLabel::Middle(n) => write!(f, "MP{}", n),
            PositionLabel::MiddleUnnumbered => f.write_str("MP"),
            PositionLabel::Cutoff => f.write_str("CO"),
            PositionLabel::Ordinal(n) => write!(f, "P{}", n),
        }
    }
}
