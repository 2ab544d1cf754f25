use super::utils::lookup_key;

static CANONICAL_BY_SALUTATION: phf::Map<&'static str, &'static str> =
    include!(concat!(env!("OUT_DIR"), "/canonical_by_salutation.rs"));

/// The punctuated form of a recognized salutation ("mister" -> "Mr."), if any.
pub fn canonical_salutation(word: &str) -> Option<&'static str> {
    CANONICAL_BY_SALUTATION.get(&*lookup_key(word)).cloned()
}
