use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::errors::EngineError;

/// Улица раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

/// Класс улицы для таблиц порядка.
///
/// Флоп, тёрн и ривер делят одну ротацию (и один курсор), поэтому
/// различаются только префлоп и постфлоп.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StreetClass {
    Preflop,
    Postflop,
}

impl Street {
    pub const ALL: [Street; 4] = [Street::Preflop, Street::Flop, Street::Turn, Street::River];

    pub fn class(self) -> StreetClass {
        match self {
            Street::Preflop => StreetClass::Preflop,
            Street::Flop | Street::Turn | Street::River => StreetClass::Postflop,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Street::Preflop => "preflop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        }
    }

    /// Нестрогий разбор имени улицы.
    ///
    /// Всё, что не "preflop", относится к постфлоп-классу; незнакомое имя
    /// превращается во флоп (представитель класса) с предупреждением в лог.
    pub fn parse_lenient(name: &str) -> Street {
        match name.parse::<Street>() {
            Ok(street) => street,
            Err(_) => {
                tracing::warn!(street = name, "незнакомая улица, используем постфлоп-порядок");
                Street::Flop
            }
        }
    }
}

impl FromStr for Street {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preflop" => Ok(Street::Preflop),
            "flop" => Ok(Street::Flop),
            "turn" => Ok(Street::Turn),
            "river" => Ok(Street::River),
            _ => Err(EngineError::UnknownStreet(s.to_string())),
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StreetClass {
    pub fn as_str(self) -> &'static str {
        match self {
            StreetClass::Preflop => "preflop",
            StreetClass::Postflop => "postflop",
        }
    }
}

impl fmt::Display for StreetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
