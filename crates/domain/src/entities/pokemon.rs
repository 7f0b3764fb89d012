//! Pokemon entity - the single resource managed by the service

use serde::{Deserialize, Serialize};

use crate::{PokedexNo, PokemonId, PokemonName};

/// A stored Pokemon record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: PokemonId,
    pub no: PokedexNo,
    pub name: PokemonName,
}

impl Pokemon {
    pub fn new(id: PokemonId, no: PokedexNo, name: PokemonName) -> Self {
        Self { id, no, name }
    }

    /// Shallow merge: this record's fields overlaid with whatever the patch sets.
    ///
    /// The identity key is never part of a patch.
    pub fn merged(&self, patch: &PokemonPatch) -> Self {
        Self {
            id: self.id.clone(),
            no: patch.no.unwrap_or(self.no),
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
        }
    }
}

/// A record that has not been stored yet (no identity key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPokemon {
    pub no: PokedexNo,
    pub name: PokemonName,
}

impl NewPokemon {
    pub fn new(no: PokedexNo, name: PokemonName) -> Self {
        Self { no, name }
    }

    /// Attach the identity key the store assigned.
    pub fn with_id(self, id: PokemonId) -> Pokemon {
        Pokemon::new(id, self.no, self.name)
    }
}

/// Partial update of a record. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonPatch {
    pub no: Option<PokedexNo>,
    pub name: Option<PokemonName>,
}

impl PokemonPatch {
    pub fn with_no(mut self, no: PokedexNo) -> Self {
        self.no = Some(no);
        self
    }

    pub fn with_name(mut self, name: PokemonName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.no.is_none() && self.name.is_none()
    }
}
