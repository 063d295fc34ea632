use serde::Deserialize;

use moiety::{graph, AtomId, Mol, MolResult, Moiety, Source};

fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum Kind {
    Chain,
    Ring,
}

#[derive(Deserialize)]
struct MoleculeEntry {
    name: String,
    kind: Kind,
    backbone: String,
    length: usize,
    alternate_double: bool,
    hydrate: bool,
    formula: String,
    mass: f64,
    atoms: usize,
    rings: usize,
}

fn build(mol: &mut Mol, entry: &MoleculeEntry) -> MolResult<Moiety> {
    let sources: Vec<&dyn Source> = vec![&entry.backbone as &dyn Source; entry.length];
    let alternate = entry.alternate_double;
    let extra = move |mol: &mut Mol,
                      _: &Moiety,
                      i: usize,
                      cur: &[AtomId],
                      prev: &[AtomId]|
          -> MolResult<()> {
        if alternate && i % 2 == 1 {
            mol.bond(prev[0], cur[0])?;
        }
        Ok(())
    };
    let built = match entry.kind {
        Kind::Chain => mol.chain_with(&sources, extra)?,
        Kind::Ring => mol.ring_with(&sources, extra)?,
    };
    let built = built.with_name(entry.name.as_str());
    if entry.hydrate {
        mol.hydrated(built)
    } else {
        Ok(built)
    }
}

#[test]
fn approval_formula_mass() {
    let data: Vec<MoleculeEntry> =
        serde_json::from_str(include_str!("approval_data/molecules.json")).unwrap();

    let mut failures = Vec::new();
    for entry in &data {
        let mut mol = Mol::default();
        let m = match build(&mut mol, entry) {
            Ok(m) => m,
            Err(e) => {
                failures.push(format!("[build] {}: {e}", entry.name));
                continue;
            }
        };

        let formula = moiety::empirical_formula(&mol, &m).unwrap();
        if formula != entry.formula {
            failures.push(format!(
                "[formula] {}: expected {:?}, got {:?}",
                entry.name, entry.formula, formula
            ));
        }

        let mass = moiety::mass(&mol, &m).unwrap();
        if !approx_eq(mass, entry.mass, 1e-6) {
            failures.push(format!(
                "[mass] {}: expected {}, got {}",
                entry.name, entry.mass, mass
            ));
        }

        if m.len() != entry.atoms {
            failures.push(format!(
                "[atoms] {}: expected {}, got {}",
                entry.name, entry.atoms, m.len()
            ));
        }

        let rings = graph::ring_count(&mol, &m);
        if rings != entry.rings {
            failures.push(format!(
                "[rings] {}: expected {}, got {}",
                entry.name, entry.rings, rings
            ));
        }

        if entry.hydrate && !m.iter().all(|a| mol.is_saturated(a)) {
            failures.push(format!("[saturation] {}: unsaturated atom left", entry.name));
        }
    }

    if !failures.is_empty() {
        panic!(
            "{} approval failures:\n{}",
            failures.len(),
            failures.join("\n")
        );
    }
}

#[test]
fn approval_dot_ethene() {
    let mut mol = Mol::default();
    let c: &dyn Source = &"C";
    let ethene = mol.ring(&[c, c]).unwrap().with_name("ethene");
    let ethene = mol.hydrated(ethene).unwrap();
    assert_eq!(
        moiety::to_dot(&mol, &ethene),
        include_str!("approval_data/ethene.dot")
    );
}
