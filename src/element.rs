//! Element definitions and the symbol-keyed registry.
//!
//! An [`Element`] is the immutable template every [`Atom`](crate::Atom)
//! points at. Elements are registered once in an [`ElementTable`] and
//! looked up by symbol afterwards; the table is owned by a
//! [`Mol`](crate::Mol) so construction code never touches global state.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MolError, MolResult};

/// A chemical species: display symbol, atomic mass and bonding capacity.
///
/// # Examples
///
/// ```
/// use moiety::ElementTable;
///
/// let table = ElementTable::standard();
/// let carbon = table.get("C").unwrap();
/// assert_eq!(carbon.valence, 4);
/// assert!(carbon.skeletal);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub name: String,
    /// Unique within a table; also the display form.
    pub symbol: String,
    pub mass: f64,
    /// Maximum number of bond-list entries any atom of this element may hold.
    pub valence: u8,
    /// Informational: conventionally used for backbones (C, N, Si).
    #[serde(default)]
    pub skeletal: bool,
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

/// Symbol-keyed element registry.
///
/// Elements are append-only: there is no removal or mutation. Iteration
/// follows definition order.
#[derive(Debug, Clone, Default)]
pub struct ElementTable {
    elements: Vec<Arc<Element>>,
    by_symbol: HashMap<String, usize>,
}

impl ElementTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The six elements needed for simple organic skeletons.
    pub fn standard() -> Self {
        let mut table = Self::new();
        for &(name, symbol, mass, valence, skeletal) in STANDARD {
            table.push(Element {
                name: name.to_owned(),
                symbol: symbol.to_owned(),
                mass,
                valence,
                skeletal,
            });
        }
        table
    }

    /// Load a table from a JSON array of element objects.
    ///
    /// ```
    /// use moiety::ElementTable;
    ///
    /// let table = ElementTable::from_json(
    ///     r#"[{"name": "Boron", "symbol": "B", "mass": 10.81, "valence": 3}]"#,
    /// ).unwrap();
    /// assert_eq!(table.get("B").unwrap().valence, 3);
    /// ```
    pub fn from_json(json: &str) -> MolResult<Self> {
        let defs: Vec<Element> = serde_json::from_str(json)?;
        let mut table = Self::new();
        for def in defs {
            table.insert(def)?;
        }
        Ok(table)
    }

    pub fn define(
        &mut self,
        name: impl Into<String>,
        symbol: impl Into<String>,
        mass: f64,
        valence: u8,
        skeletal: bool,
    ) -> MolResult<Arc<Element>> {
        self.insert(Element {
            name: name.into(),
            symbol: symbol.into(),
            mass,
            valence,
            skeletal,
        })
    }

    fn insert(&mut self, element: Element) -> MolResult<Arc<Element>> {
        if self.by_symbol.contains_key(&element.symbol) {
            return Err(MolError::DuplicateSymbol {
                symbol: element.symbol,
            });
        }
        if !(element.mass.is_finite() && element.mass > 0.0) {
            return Err(MolError::InvalidElement {
                symbol: element.symbol,
                what: "mass must be positive and finite",
            });
        }
        if element.valence == 0 {
            return Err(MolError::InvalidElement {
                symbol: element.symbol,
                what: "valence must be at least 1",
            });
        }

        debug!(symbol = %element.symbol, valence = element.valence, "defined element");
        Ok(self.push(element))
    }

    fn push(&mut self, element: Element) -> Arc<Element> {
        let element = Arc::new(element);
        self.by_symbol
            .insert(element.symbol.clone(), self.elements.len());
        self.elements.push(Arc::clone(&element));
        element
    }

    pub fn get(&self, symbol: &str) -> MolResult<Arc<Element>> {
        self.by_symbol
            .get(symbol)
            .map(|&i| Arc::clone(&self.elements[i]))
            .ok_or_else(|| MolError::UnknownSymbol {
                symbol: symbol.to_owned(),
            })
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.by_symbol.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Element>> + '_ {
        self.elements.iter()
    }
}

static STANDARD: &[(&str, &str, f64, u8, bool)] = &[
    ("Hydrogen", "H", 1.0, 1, false),
    ("Carbon", "C", 12.0, 4, true),
    ("Nitrogen", "N", 14.0, 3, true),
    ("Oxygen", "O", 16.0, 2, false),
    ("Chlorine", "Cl", 35.5, 1, false),
    ("Silicon", "Si", 28.08, 4, true),
];
