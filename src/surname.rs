use super::utils::lookup_key;

static COMPOUND_SURNAME_PARTICLES: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/compound_surname_particles.rs"));

/// Does this word begin a multi-word surname, as in "Von Fange" or "bin Omar"?
pub fn is_compound_particle(word: &str) -> bool {
    COMPOUND_SURNAME_PARTICLES.contains(&*lookup_key(word))
}
