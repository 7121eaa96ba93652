//! Brazilian UF (federative unit) code validation.
//!
//! The 26 states plus the Distrito Federal, used for the `Uf` field of a
//! service taker address.

/// Check whether `code` is a known two-letter UF code.
pub fn is_known_uf(code: &str) -> bool {
    UF_CODES.binary_search(&code).is_ok()
}

/// All 27 UF codes. Sorted for binary search.
static UF_CODES: &[&str] = &[
    "AC", "AL", "AM", "AP", "BA", "CE", "DF", "ES", "GO", "MA", "MG", "MS", "MT", "PA", "PB", "PE",
    "PI", "PR", "RJ", "RN", "RO", "RR", "RS", "SC", "SE", "SP", "TO",
];
