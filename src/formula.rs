//! Mass and empirical formula of a moiety.
//!
//! [`empirical_formula`] renders one `symbol[count]` token per element and
//! sorts the tokens as plain strings. That is not Hill order: `"C2"` sorts
//! before `"Cl"` and `"H2"` before `"O"` purely by text.

use std::collections::BTreeMap;

use crate::error::{MolError, MolResult};
use crate::moiety::Moiety;
use crate::mol::Mol;

/// Sum of element masses over every atom in the moiety, duplicates included.
pub fn mass(mol: &Mol, moiety: &Moiety) -> MolResult<f64> {
    if moiety.is_empty() {
        return Err(MolError::EmptyStructure { what: "mass" });
    }
    Ok(moiety
        .iter()
        .map(|a| mol.atom(a).element().mass)
        .sum())
}

/// Atom count per element symbol.
pub fn element_counts(mol: &Mol, moiety: &Moiety) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for a in moiety {
        *counts.entry(mol.atom(a).symbol().to_owned()).or_default() += 1;
    }
    counts
}

pub fn empirical_formula(mol: &Mol, moiety: &Moiety) -> MolResult<String> {
    if moiety.is_empty() {
        return Err(MolError::EmptyStructure {
            what: "empirical formula",
        });
    }
    let mut tokens: Vec<String> = element_counts(mol, moiety)
        .into_iter()
        .map(|(symbol, n)| render(&symbol, n))
        .collect();
    tokens.sort();
    Ok(tokens.concat())
}

fn render(symbol: &str, count: usize) -> String {
    if count > 1 {
        format!("{symbol}{count}")
    } else {
        symbol.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Source;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn water() {
        let mut mol = Mol::default();
        let water = mol.substituted(&"O", &[&"H", &"H"]).unwrap();
        assert_approx(mass(&mol, &water).unwrap(), 18.0);
        assert_eq!(empirical_formula(&mol, &water).unwrap(), "H2O");
    }

    #[test]
    fn ethane_groups_through_nesting() {
        let mut mol = Mol::default();
        let methyl = mol.substituted(&"C", &[&"H", &"H", &"H"]).unwrap();
        let ethane = mol
            .substituted(&"C", &[&"H", &"H", &"H", &methyl])
            .unwrap();
        assert_approx(mass(&mol, &ethane).unwrap(), 30.0);
        assert_eq!(empirical_formula(&mol, &ethane).unwrap(), "C2H6");
    }

    #[test]
    fn single_count_omits_suffix() {
        let mut mol = Mol::default();
        let m = mol.chain(&[&"C", &"N"]).unwrap();
        assert_eq!(empirical_formula(&mol, &m).unwrap(), "CN");
    }

    #[test]
    fn tokens_sort_as_text() {
        let mut mol = Mol::default();
        let cl: &dyn Source = &"Cl";
        // C2Cl4: "C2" < "Cl4" because '2' < 'l'.
        let m = mol
            .compose(&[&"C", &"C", cl, cl, cl, cl], |_, _, _, _| Ok(()))
            .unwrap();
        assert_eq!(empirical_formula(&mol, &m).unwrap(), "C2Cl4");

        // A lone C renders as "C", which sorts before "Cl2" as a prefix.
        let m = mol.compose(&[&"Cl", &"C", &"Cl"], |_, _, _, _| Ok(())).unwrap();
        assert_eq!(empirical_formula(&mol, &m).unwrap(), "CCl2");
    }

    #[test]
    fn text_order_differs_from_hill() {
        let mut mol = Mol::default();
        // Hill would give CH3Cl.
        let chloromethane = mol
            .substituted(&"C", &[&"H", &"H", &"H", &"Cl"])
            .unwrap();
        assert_eq!(empirical_formula(&mol, &chloromethane).unwrap(), "CClH3");
        assert_approx(mass(&mol, &chloromethane).unwrap(), 50.5);
    }

    #[test]
    fn counts_by_symbol() {
        let mut mol = Mol::default();
        let water = mol.substituted(&"O", &[&"H", &"H"]).unwrap();
        let counts = element_counts(&mol, &water);
        assert_eq!(counts.get("H"), Some(&2));
        assert_eq!(counts.get("O"), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn empty_structure_fails() {
        let mol = Mol::default();
        let empty = Moiety::new();
        assert!(matches!(
            mass(&mol, &empty),
            Err(MolError::EmptyStructure { .. })
        ));
        assert!(matches!(
            empirical_formula(&mol, &empty),
            Err(MolError::EmptyStructure { .. })
        ));
        assert!(element_counts(&mol, &empty).is_empty());
    }
}
