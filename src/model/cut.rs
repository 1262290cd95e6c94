/// A demanded cut piece. Cuts are identified by their index in load order;
/// that index is the column index used by every constraint and pattern in
/// the engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct RequiredCut {
    /// Length in inches.
    pub length: f64,
    /// Number of pieces of this length required.
    pub quantity: u32,
    /// Opaque label carried through to the result for display; has no
    /// meaning to the optimizer itself.
    pub description: String,
}
