//! Valence-checked molecule graphs.
//!
//! Elements live in an [`ElementTable`]; atoms are materialised into a
//! [`Mol`] and linked with [`Mol::bond`], which refuses self-bonds and
//! bonds beyond an element's valence. Structures are assembled as
//! [`Moiety`] views with [`Mol::substituted`], [`Mol::chain`] and
//! [`Mol::ring`], filled out with [`Mol::hydrate`], then queried with
//! [`formula`] or exported with [`dot`].
//!
//! ```
//! use moiety::{Mol, Source, formula};
//!
//! let mut mol = Mol::default();
//! let c: &dyn Source = &"C";
//! let benzene = mol
//!     .ring_with(&[c; 6], |mol, _, i, cur, prev| {
//!         if i % 2 == 1 {
//!             mol.bond(prev[0], cur[0])?;
//!         }
//!         Ok(())
//!     })
//!     .unwrap();
//! let benzene = mol.hydrated(benzene).unwrap();
//! assert_eq!(formula::empirical_formula(&mol, &benzene).unwrap(), "C6H6");
//! assert_eq!(formula::mass(&mol, &benzene).unwrap(), 78.0);
//! ```

pub mod atom;
mod builders;
pub mod dot;
pub mod element;
pub mod error;
pub mod formula;
pub mod graph;
mod hydrogen;
pub mod moiety;
pub mod mol;
pub mod traits;

pub use atom::Atom;
pub use dot::{save_dot, to_dot, write_dot};
pub use element::{Element, ElementTable};
pub use error::{MolError, MolResult};
pub use formula::{element_counts, empirical_formula, mass};
pub use graph::MolGraph;
pub use moiety::Moiety;
pub use mol::{AtomId, Mol};
pub use traits::Source;
