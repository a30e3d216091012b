//! Wire types for the PokeAPI REST endpoints rosterdex consumes.
//!
//! Only the fields we read are declared; serde ignores the rest of the
//! (large) PokeAPI payloads.

use serde::Deserialize;

/// One page of `GET /api/v2/pokemon?limit=N`.
#[derive(Debug, Deserialize)]
pub struct PokemonPage {
    pub results: Vec<PokemonSummary>,
}

/// A single entry in the paginated listing. Carries no id or type; those
/// come from the per-creature detail endpoint.
#[derive(Debug, Deserialize)]
pub struct PokemonSummary {
    pub name: String,
}

/// The subset of `GET /api/v2/pokemon/{name}` we care about.
#[derive(Debug, Deserialize)]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    pub types: Vec<PokemonTypeSlot>,
}

/// One entry of the `types` array; `slot` 1 is the primary type.
#[derive(Debug, Deserialize)]
pub struct PokemonTypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

/// PokeAPI's ubiquitous `{ name, url }` reference shape.
#[derive(Debug, Deserialize)]
pub struct NamedResource {
    pub name: String,
}
