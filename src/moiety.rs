use crate::mol::AtomId;

/// An ordered view over atoms in a [`Mol`](crate::Mol).
///
/// A moiety is the concatenation of whatever sources it was composed from,
/// with no deduplication and no connectivity guarantee beyond the bonds its
/// join rule made. It references atoms; the `Mol` owns them. The name is
/// carried into DOT output and is empty unless set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Moiety {
    name: String,
    atoms: Vec<AtomId>,
}

impl Moiety {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_atoms(atoms: Vec<AtomId>) -> Self {
        Self {
            name: String::new(),
            atoms,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn atoms(&self) -> &[AtomId] {
        &self.atoms
    }

    pub fn first(&self) -> Option<AtomId> {
        self.atoms.first().copied()
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = AtomId> + '_ {
        self.atoms.iter().copied()
    }

    pub(crate) fn push(&mut self, atom: AtomId) {
        self.atoms.push(atom);
    }
}

impl From<Vec<AtomId>> for Moiety {
    fn from(atoms: Vec<AtomId>) -> Self {
        Self::from_atoms(atoms)
    }
}

impl<'a> IntoIterator for &'a Moiety {
    type Item = AtomId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, AtomId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.atoms.iter().copied()
    }
}
