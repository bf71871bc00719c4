//! Marker tokens that tag special cell semantics.
//!
//! Each `DecisionTable` owns four tokens: the output-column marker, the
//! `any` wildcard, the `otherwise` deferred wildcard, and an internal
//! no-match sentinel. Tokens compare by identity (owning table plus role),
//! never by structural content, so a marker is never equal to ordinary data
//! or to a marker allocated by another table.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The semantic role a marker plays inside its table.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum MarkerRole {
    /// Designates the output column in the header row.
    Output,
    /// Wildcard: matches any signal value unconditionally.
    Any,
    /// Wildcard whose row is only consulted when no ordinary row matches.
    Otherwise,
    /// Internal "no result" sentinel, never handed out to callers.
    Undefined,
}

/// Identity-only token scoped to one table instance.
///
/// Two markers are equal iff they were allocated by the same table and play
/// the same role. A marker never equals a scalar or container value, however
/// similar that value looks.
///
/// Markers cannot be constructed directly; they are obtained from a table's
/// accessors and stay valid for that table only.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Marker {
    table: Uuid,
    role: MarkerRole,
}

impl Marker {
    pub(crate) fn new(table: Uuid, role: MarkerRole) -> Self {
        Marker { table, role }
    }

    /// The role this marker plays.
    pub fn role(&self) -> MarkerRole {
        self.role
    }
}

/// The wildcard markers a table exposes for use in condition cells.
#[derive(Clone, Copy, Debug)]
pub struct CellMarkers {
    any: Marker,
    otherwise: Marker,
}

impl CellMarkers {
    /// Wildcard cell: matches any signal value without comparison.
    pub fn any(&self) -> Marker {
        self.any
    }

    /// Deferred wildcard cell: the containing row is only consulted when no
    /// ordinary row matched.
    pub fn otherwise(&self) -> Marker {
        self.otherwise
    }
}

/// The full token set owned by one table instance.
#[derive(Clone, Copy, Debug)]
pub(crate) struct MarkerSet {
    pub(crate) out: Marker,
    pub(crate) cell: CellMarkers,
    pub(crate) undefined: Marker,
}

impl MarkerSet {
    /// Allocate a fresh, instance-scoped token set.
    pub(crate) fn new() -> Self {
        let table = Uuid::new_v4();
        MarkerSet {
            out: Marker::new(table, MarkerRole::Output),
            cell: CellMarkers {
                any: Marker::new(table, MarkerRole::Any),
                otherwise: Marker::new(table, MarkerRole::Otherwise),
            },
            undefined: Marker::new(table, MarkerRole::Undefined),
        }
    }
}
