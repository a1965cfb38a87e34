//! PokeAPI response models
//!
//! Only the fields the REPL commands read are modelled; serde ignores the rest.

pub mod responses;

// Re-export commonly used types
pub use responses::{
    Encounter, LocationArea, LocationAreaPage, NamedResource, Pokemon, PokemonStat, PokemonType,
};
