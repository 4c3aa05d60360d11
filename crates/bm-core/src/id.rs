// crates/bm-core/src/id.rs - Book identifier generation
//
// A book ID is the first few characters of its title followed by random
// digits, e.g. "The Hobbit" -> "thehobb042". Readable enough to type from
// memory, random enough that two books rarely share one.
//
// IDs are NOT checked against the existing collection. Two books with the
// same prefix can draw the same suffix, and the later `new` then replaces the
// earlier record when the collection is saved.

use rand::Rng;

/// Number of title characters at the start of an ID
pub const PREFIX_CHARS: usize = 7;

/// Number of random digits at the end of an ID (for titles of full length)
pub const SUFFIX_DIGITS: usize = 3;

/// Total length of every generated ID, in characters
pub const ID_LEN: usize = PREFIX_CHARS + SUFFIX_DIGITS;

/// Generate a book ID from a title using the thread-local RNG
pub fn generate(title: &str) -> String {
    generate_with_rng(title, &mut rand::thread_rng())
}

/// Generate a book ID from a title, drawing digits from `rng`
///
/// The title is stripped of all whitespace (not only at the ends) and
/// lowercased; its first `PREFIX_CHARS` characters form the prefix. Digits
/// are then appended until the ID is `ID_LEN` characters long, so short
/// titles get a longer numeric suffix and an empty title yields digits only.
pub fn generate_with_rng<R: Rng + ?Sized>(title: &str, rng: &mut R) -> String {
    let mut id: String = normalize(title).chars().take(PREFIX_CHARS).collect();
    let mut len = id.chars().count();

    while len < ID_LEN {
        id.push(char::from(b'0' + rng.gen_range(0..10u8)));
        len += 1;
    }

    id
}

/// Remove all whitespace from a title and lowercase it
pub fn normalize(title: &str) -> String {
    title.split_whitespace().collect::<String>().to_lowercase()
}
