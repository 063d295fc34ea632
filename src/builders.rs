//! Linear and cyclic backbones.
//!
//! Both builders link the first atom of each source to the first atom of
//! the source before it. [`Mol::ring`] additionally closes the last source
//! back onto the first. The `_with` variants take an extra callback that
//! runs after the backbone bond for every source but the first, with the
//! current and previous source's atoms, which is where auxiliary bonds
//! such as alternating double bonds go.
//!
//! Sources that contribute no atoms are skipped: they are neither linked
//! nor passed to the callback, and the next source links to the last
//! non-empty one. A ring closes from its last non-empty source.

use tracing::debug;

use crate::error::MolResult;
use crate::moiety::Moiety;
use crate::mol::{AtomId, Mol};
use crate::traits::Source;

impl Mol {
    pub fn chain(&mut self, sources: &[&dyn Source]) -> MolResult<Moiety> {
        self.chain_with(sources, |_, _, _, _, _| Ok(()))
    }

    pub fn chain_with<F>(&mut self, sources: &[&dyn Source], extra: F) -> MolResult<Moiety>
    where
        F: FnMut(&mut Mol, &Moiety, usize, &[AtomId], &[AtomId]) -> MolResult<()>,
    {
        self.link(sources, false, extra)
    }

    /// ```
    /// use moiety::{Mol, Source, formula};
    ///
    /// let mut mol = Mol::default();
    /// let c: &dyn Source = &"C";
    /// let cyclohexane = mol.ring(&[c; 6]).unwrap();
    /// let cyclohexane = mol.hydrated(cyclohexane).unwrap();
    /// assert_eq!(formula::empirical_formula(&mol, &cyclohexane).unwrap(), "C6H12");
    /// ```
    pub fn ring(&mut self, sources: &[&dyn Source]) -> MolResult<Moiety> {
        self.ring_with(sources, |_, _, _, _, _| Ok(()))
    }

    /// A single non-empty source fails with
    /// [`MolError::SelfBond`](crate::MolError::SelfBond), since closing the
    /// ring would bond its atom to itself.
    pub fn ring_with<F>(&mut self, sources: &[&dyn Source], extra: F) -> MolResult<Moiety>
    where
        F: FnMut(&mut Mol, &Moiety, usize, &[AtomId], &[AtomId]) -> MolResult<()>,
    {
        self.link(sources, true, extra)
    }

    fn link<F>(&mut self, sources: &[&dyn Source], close: bool, mut extra: F) -> MolResult<Moiety>
    where
        F: FnMut(&mut Mol, &Moiety, usize, &[AtomId], &[AtomId]) -> MolResult<()>,
    {
        let mut prev: Option<Vec<AtomId>> = None;
        let mut seen = 0;

        let moiety = self.compose(sources, |mol, m, i, part| {
            let Some(&head) = part.first() else {
                return Ok(());
            };
            if let Some(p) = &prev {
                mol.bond(head, p[0])?;
            }
            seen += part.len();
            // Last non-empty source: nothing follows it in the moiety.
            if close && seen == m.len() {
                if let Some(first) = m.first() {
                    mol.bond(head, first)?;
                }
            }
            if let Some(p) = &prev {
                extra(mol, m, i, part, p)?;
            }
            prev = Some(part.to_vec());
            Ok(())
        })?;

        debug!(close, atoms = moiety.len(), "linked backbone");
        Ok(moiety)
    }
}
