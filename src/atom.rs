use std::sync::Arc;

use crate::element::Element;
use crate::mol::AtomId;

/// One instantiated particle of an [`Element`].
///
/// The element is fixed at creation. The bond list is ordered and may hold
/// the same partner more than once; a double bond is two entries. Atoms are
/// only created and linked through a [`Mol`](crate::Mol), which keeps the
/// bond list within the element's valence and symmetric with its partners.
#[derive(Debug, Clone)]
pub struct Atom {
    element: Arc<Element>,
    bonds: Vec<AtomId>,
}

impl Atom {
    pub(crate) fn new(element: Arc<Element>) -> Self {
        let bonds = Vec::with_capacity(element.valence as usize);
        Self { element, bonds }
    }

    pub fn element(&self) -> &Arc<Element> {
        &self.element
    }

    pub fn symbol(&self) -> &str {
        &self.element.symbol
    }

    pub fn bonds(&self) -> &[AtomId] {
        &self.bonds
    }

    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    /// Remaining bonding capacity.
    pub fn free_valence(&self) -> usize {
        (self.element.valence as usize).saturating_sub(self.bonds.len())
    }

    pub fn is_saturated(&self) -> bool {
        self.bonds.len() >= self.element.valence as usize
    }

    pub(crate) fn push_bond(&mut self, other: AtomId) {
        self.bonds.push(other);
    }

    /// Drops the first entry for `other`, if any.
    pub(crate) fn remove_bond(&mut self, other: AtomId) -> bool {
        match self.bonds.iter().position(|&b| b == other) {
            Some(pos) => {
                self.bonds.remove(pos);
                true
            }
            None => false,
        }
    }
}
