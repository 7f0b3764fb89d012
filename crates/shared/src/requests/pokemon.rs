use serde::{Deserialize, Serialize};
use validator::Validate;

use pokedex_domain::{DomainError, NewPokemon, PokedexNo, PokemonName, PokemonPatch};

/// Body of `POST /api/v2/pokemon`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreatePokemonRequest {
    #[validate(range(min = 1, message = "no must be a positive integer"))]
    pub no: u32,
    #[validate(length(min = 1, message = "name must be longer than or equal to 1 characters"))]
    pub name: String,
}

impl TryFrom<CreatePokemonRequest> for NewPokemon {
    type Error = DomainError;

    fn try_from(request: CreatePokemonRequest) -> Result<Self, Self::Error> {
        Ok(NewPokemon::new(
            PokedexNo::new(request.no)?,
            PokemonName::new(request.name)?,
        ))
    }
}

/// Body of `PATCH /api/v2/pokemon/{term}`. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdatePokemonRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "no must be a positive integer"))]
    pub no: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "name must be longer than or equal to 1 characters"))]
    pub name: Option<String>,
}

impl TryFrom<UpdatePokemonRequest> for PokemonPatch {
    type Error = DomainError;

    fn try_from(request: UpdatePokemonRequest) -> Result<Self, Self::Error> {
        let mut patch = PokemonPatch::default();
        if let Some(no) = request.no {
            patch = patch.with_no(PokedexNo::new(no)?);
        }
        if let Some(name) = request.name {
            patch = patch.with_name(PokemonName::new(name)?);
        }
        Ok(patch)
    }
}
