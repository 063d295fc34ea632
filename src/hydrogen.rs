//! Hydration: fill every atom's remaining valence with explicit hydrogens.

use std::sync::Arc;

use tracing::debug;

use crate::element::Element;
use crate::error::{MolError, MolResult};
use crate::moiety::Moiety;
use crate::mol::Mol;

impl Mol {
    /// Bond new hydrogen atoms to every unsaturated atom of `moiety`,
    /// appending each hydrogen to the moiety. Returns how many were added.
    ///
    /// Atoms appended during the pass are scanned too; with hydrogen at
    /// valence 1 they are saturated on arrival, so the pass terminates.
    /// A fully saturated moiety is left untouched, so calling this twice
    /// adds nothing the second time.
    pub fn hydrate(&mut self, moiety: &mut Moiety) -> MolResult<usize> {
        let mut hydrogen: Option<Arc<Element>> = None;
        let mut added = 0;
        let mut i = 0;

        while i < moiety.len() {
            let atom = moiety.atoms()[i];
            while !self.is_saturated(atom) {
                let h = match hydrogen.clone() {
                    Some(h) => h,
                    None => {
                        let h = self.hydrogen()?;
                        hydrogen = Some(Arc::clone(&h));
                        h
                    }
                };
                let h = self.add_atom(h);
                self.bond(h, atom)?;
                moiety.push(h);
                added += 1;
            }
            i += 1;
        }

        debug!(added, atoms = moiety.len(), "hydrated moiety");
        Ok(added)
    }

    /// By-value [`hydrate`](Self::hydrate), for building in one expression.
    pub fn hydrated(&mut self, mut moiety: Moiety) -> MolResult<Moiety> {
        self.hydrate(&mut moiety)?;
        Ok(moiety)
    }

    fn hydrogen(&self) -> MolResult<Arc<Element>> {
        let h = self.elements().get("H")?;
        if h.valence != 1 {
            return Err(MolError::InvalidElement {
                symbol: h.symbol.clone(),
                what: "hydration needs hydrogen at valence 1",
            });
        }
        Ok(h)
    }
}
