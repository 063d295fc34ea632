use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::atom::Atom;
use crate::element::{Element, ElementTable};
use crate::error::{MolError, MolResult};
use crate::moiety::Moiety;
use crate::traits::Source;

/// Handle to an atom inside one [`Mol`].
///
/// Handles are plain indices: using a handle from one `Mol` with another
/// is a logic error and panics on lookup when out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AtomId(usize);

impl AtomId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for AtomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a{}", self.0)
    }
}

/// The atom universe: every atom ever materialised, plus the element table
/// used to materialise them.
///
/// Bonds may join atoms that belong to different [`Moiety`] views; all of
/// them live here. Atoms are never removed.
#[derive(Debug, Clone)]
pub struct Mol {
    elements: ElementTable,
    atoms: Vec<Atom>,
}

impl Mol {
    pub fn new(elements: ElementTable) -> Self {
        Self {
            elements,
            atoms: Vec::new(),
        }
    }

    pub fn elements(&self) -> &ElementTable {
        &self.elements
    }

    /// Shorthand for `self.elements().get(symbol)`.
    pub fn element(&self, symbol: &str) -> MolResult<Arc<Element>> {
        self.elements.get(symbol)
    }

    pub fn atom(&self, id: AtomId) -> &Atom {
        &self.atoms[id.index()]
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn atom_ids(&self) -> impl Iterator<Item = AtomId> + '_ {
        (0..self.atoms.len()).map(AtomId::new)
    }

    pub fn add_atom(&mut self, element: Arc<Element>) -> AtomId {
        let id = AtomId::new(self.atoms.len());
        self.atoms.push(Atom::new(element));
        id
    }

    /// A fresh single-atom sequence. Never reuses an existing atom.
    pub fn atoms_of(&mut self, element: &Arc<Element>) -> Vec<AtomId> {
        vec![self.add_atom(Arc::clone(element))]
    }

    pub fn bonds_of(&self, id: AtomId) -> &[AtomId] {
        self.atom(id).bonds()
    }

    pub fn bond_count(&self, id: AtomId) -> usize {
        self.atom(id).bond_count()
    }

    pub fn free_valence(&self, id: AtomId) -> usize {
        self.atom(id).free_valence()
    }

    pub fn is_saturated(&self, id: AtomId) -> bool {
        self.atom(id).is_saturated()
    }

    /// Link `a` and `b` with one more bond, returning `a`.
    ///
    /// Both bond lists grow by one entry or neither changes.
    pub fn bond(&mut self, a: AtomId, b: AtomId) -> MolResult<AtomId> {
        if a == b {
            return Err(MolError::SelfBond { atom: a });
        }
        for id in [a, b] {
            let atom = self.atom(id);
            if atom.is_saturated() {
                return Err(MolError::Saturated {
                    atom: id,
                    symbol: atom.symbol().to_owned(),
                    valence: atom.element().valence,
                });
            }
        }

        self.atoms[a.index()].push_bond(b);
        self.atoms[b.index()].push_bond(a);
        trace!(%a, %b, "bond");
        Ok(a)
    }

    /// Remove one bond between `a` and `b` from both sides and return the
    /// updated bond lists. Missing entries are ignored.
    pub fn unbond(&mut self, a: AtomId, b: AtomId) -> (Vec<AtomId>, Vec<AtomId>) {
        let removed_a = self.atoms[a.index()].remove_bond(b);
        let removed_b = self.atoms[b.index()].remove_bond(a);
        trace!(%a, %b, removed = removed_a && removed_b, "unbond");
        (self.bonds_of(a).to_vec(), self.bonds_of(b).to_vec())
    }

    /// Build a [`Moiety`] from `sources`, then run `join` once per source.
    ///
    /// Every source is materialised and concatenated before the first
    /// `join` call, so the rule always sees the complete moiety. It
    /// receives the source index and that source's own atoms. The first
    /// error from `join` aborts construction; bonds already made stay.
    pub fn compose<F>(&mut self, sources: &[&dyn Source], mut join: F) -> MolResult<Moiety>
    where
        F: FnMut(&mut Mol, &Moiety, usize, &[AtomId]) -> MolResult<()>,
    {
        let mut parts = Vec::with_capacity(sources.len());
        for source in sources {
            parts.push(source.atoms(self)?);
        }
        let moiety = Moiety::from_atoms(parts.concat());

        for (i, part) in parts.iter().enumerate() {
            join(self, &moiety, i, part)?;
        }
        debug!(sources = sources.len(), atoms = moiety.len(), "composed moiety");
        Ok(moiety)
    }

    /// A central source with substituents bonded directly to it: the first
    /// atom of every neighbour is bonded to the first atom of `center`.
    ///
    /// ```
    /// use moiety::{ElementTable, Mol, formula};
    ///
    /// let mut mol = Mol::new(ElementTable::standard());
    /// let water = mol.substituted(&"O", &[&"H", &"H"]).unwrap();
    /// assert_eq!(formula::empirical_formula(&mol, &water).unwrap(), "H2O");
    /// ```
    pub fn substituted(
        &mut self,
        center: &dyn Source,
        neighbors: &[&dyn Source],
    ) -> MolResult<Moiety> {
        let mut sources = Vec::with_capacity(neighbors.len() + 1);
        sources.push(center);
        sources.extend_from_slice(neighbors);

        self.compose(&sources, |mol, m, i, part| {
            if i == 0 {
                return Ok(());
            }
            if let (Some(hub), Some(&head)) = (m.first(), part.first()) {
                mol.bond(hub, head)?;
            }
            Ok(())
        })
    }
}

impl Default for Mol {
    /// An empty molecule over [`ElementTable::standard`].
    fn default() -> Self {
        Self::new(ElementTable::standard())
    }
}
