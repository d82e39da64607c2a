//! Local Parrot-to-JavaScript token substitution.
//!
//! The local compile path does not parse Parrot at all: it replaces every
//! case-sensitive occurrence of the `pront` token with a `console.log` call
//! and leaves the rest of the source untouched. No word-boundary logic --
//! `pronto` becomes `console.logo`.

/// Maximum accepted source length in characters for the local transformer.
pub const MAX_SOURCE_LEN: usize = 2000;

/// The Parrot print token recognized by the local transformer.
pub const PRONT_TOKEN: &str = "pront";

/// The JavaScript logging call substituted for [`PRONT_TOKEN`].
pub const LOG_CALL: &str = "console.log";

/// Replaces every occurrence of [`PRONT_TOKEN`] with [`LOG_CALL`].
///
/// Plain substring substitution over all non-overlapping occurrences.
/// The replacement cannot recombine with surrounding text into a new
/// occurrence of the token, so applying this twice equals applying it once.
pub fn compile_local(source: &str) -> String {
    source.replace(PRONT_TOKEN, LOG_CALL)
}
