//! Resolution of a free-form lookup term to a stored record.
//!
//! A term is tried against each strategy in [`LOOKUP_ORDER`]; every strategy
//! that recognises the term yields a [`LookupKey`], and the first key that
//! finds a record wins. Supporting another kind of key means adding one
//! strategy and one `LookupKey` variant.

use pokedex_domain::{PokedexNo, Pokemon, PokemonId};

use crate::infrastructure::ports::{PokemonRepo, RepoError};

/// A typed key a lookup term was recognised as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    No(PokedexNo),
    Id(PokemonId),
}

impl LookupKey {
    pub async fn fetch(&self, repo: &dyn PokemonRepo) -> Result<Option<Pokemon>, RepoError> {
        match self {
            Self::No(no) => repo.get_by_no(*no).await,
            Self::Id(id) => repo.get(id).await,
        }
    }
}

/// Recognises a term as one kind of key.
pub type Strategy = fn(&str) -> Option<LookupKey>;

/// Strategies in the order they are tried.
pub const LOOKUP_ORDER: &[Strategy] = &[by_pokedex_no, by_object_id];

/// A term whose numeric value is a whole, positive number.
fn by_pokedex_no(term: &str) -> Option<LookupKey> {
    PokedexNo::from_term(term).map(LookupKey::No)
}

/// A term that is a syntactically valid identity key.
fn by_object_id(term: &str) -> Option<LookupKey> {
    PokemonId::parse(term).ok().map(LookupKey::Id)
}

/// Keys to try for `term`, in lookup order.
pub fn candidate_keys(term: &str) -> Vec<LookupKey> {
    LOOKUP_ORDER
        .iter()
        .filter_map(|strategy| strategy(term))
        .collect()
}
