use std::sync::Arc;

use crate::element::Element;
use crate::error::MolResult;
use crate::moiety::Moiety;
use crate::mol::{AtomId, Mol};

/// Anything that can contribute an ordered run of atoms to a new
/// [`Moiety`].
///
/// Elements and symbols materialise a brand-new atom on every call, an
/// existing atom yields itself, and a moiety yields its stored sequence.
pub trait Source {
    fn atoms(&self, mol: &mut Mol) -> MolResult<Vec<AtomId>>;
}

impl Source for Arc<Element> {
    fn atoms(&self, mol: &mut Mol) -> MolResult<Vec<AtomId>> {
        Ok(mol.atoms_of(self))
    }
}

/// Looks the symbol up in the molecule's element table.
impl Source for &str {
    fn atoms(&self, mol: &mut Mol) -> MolResult<Vec<AtomId>> {
        let element = mol.elements().get(self)?;
        Ok(mol.atoms_of(&element))
    }
}

impl Source for String {
    fn atoms(&self, mol: &mut Mol) -> MolResult<Vec<AtomId>> {
        self.as_str().atoms(mol)
    }
}

impl Source for AtomId {
    fn atoms(&self, _mol: &mut Mol) -> MolResult<Vec<AtomId>> {
        Ok(vec![*self])
    }
}

impl Source for Moiety {
    fn atoms(&self, _mol: &mut Mol) -> MolResult<Vec<AtomId>> {
        Ok(self.atoms().to_vec())
    }
}
