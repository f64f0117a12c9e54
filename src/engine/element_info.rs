//! Boundary to the external periodic-table lookup.
//!
//! The core consumes element names purely for human-readable labeling;
//! the arithmetic never depends on what a catalog returns, and a missing
//! catalog (or a missing entry) falls back to a `Z<n>` label.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIdentity {
    pub symbol: String,
    pub name: String,
}

pub trait ElementCatalog {
    fn element_info(&self, atomic_number: u32) -> Option<ElementIdentity>;
}

pub fn element_label(catalog: Option<&dyn ElementCatalog>, atomic_number: u32) -> String {
    catalog
        .and_then(|c| c.element_info(atomic_number))
        .map(|identity| identity.name)
        .unwrap_or_else(|| format!("Z{atomic_number}"))
}
