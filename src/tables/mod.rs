// Generated from the Unicode Character Database 14.0.0 by the offline
// table generator. Do not edit by hand.

pub(crate) mod bidi;
pub(crate) mod boolsets;
pub(crate) mod casing;
pub(crate) mod category;
pub(crate) mod decomposition;
pub(crate) mod enumerated;
pub(crate) mod names;
pub(crate) mod script;
pub(crate) mod segmentation;
