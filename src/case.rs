use smallvec::SmallVec;

#[derive(Debug)]
enum CaseMapping {
    Empty,
    Single(char),
    Double(char, char),
    Triple(char, char, char),
}

impl CaseMapping {
    #[inline]
    fn titlecase(c: char) -> CaseMapping {
        // Zero marks the end of the mapping
        let mut mapped = unicode_case_mapping::to_titlecase(c)
            .iter()
            .take_while(|&&c| c > 0)
            .filter_map(|&c| char::from_u32(c))
            .collect::<SmallVec<[char; 3]>>()
            .into_iter();

        match (mapped.next(), mapped.next(), mapped.next()) {
            (Some(x), Some(y), Some(z)) => CaseMapping::Triple(x, y, z),
            (Some(x), Some(y), None) => CaseMapping::Double(x, y),
            (Some(x), None, _) => CaseMapping::Single(x),
            _ => CaseMapping::Empty,
        }
    }
}

impl Iterator for CaseMapping {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<char> {
        match *self {
            CaseMapping::Triple(x, y, z) => {
                *self = CaseMapping::Double(y, z);
                Some(x)
            }
            CaseMapping::Double(x, y) => {
                *self = CaseMapping::Single(y);
                Some(x)
            }
            CaseMapping::Single(x) => {
                *self = CaseMapping::Empty;
                Some(x)
            }
            CaseMapping::Empty => None,
        }
    }
}

pub fn is_mixed_case(s: &str) -> bool {
    let mut has_lowercase = false;
    let mut has_uppercase = false;
    let mut iter = s.chars();

    loop {
        match iter.next() {
            Some(c) => {
                if c.is_uppercase() {
                    has_uppercase = true;
                    break;
                } else if c.is_lowercase() {
                    has_lowercase = true;
                    break;
                }
            }
            None => {
                return false;
            }
        }
    }

    if has_lowercase {
        iter.any(|c| c.is_uppercase())
    } else {
        debug_assert!(has_uppercase);
        iter.any(|c| c.is_lowercase())
    }
}

/// Capitalizes each hyphen-separated piece of a word, then each
/// period-separated piece of the result. Pieces that are already mixed-case
/// ("MacDonald") are trusted and left alone.
pub fn fix_case(word: &str) -> String {
    fix_pieces(&fix_pieces(word, '-'), '.')
}

/// Particles inside a surname stay lower-case ("bin Omar", "de la Cruz")
/// unless the input already capitalized them deliberately ("Von Fange").
pub fn fix_particle_case(word: &str) -> String {
    if is_mixed_case(word) {
        word.to_string()
    } else {
        word.to_lowercase()
    }
}

/// Upper-cases an initial one character at a time. A character whose
/// uppercase form is longer ("ß" -> "SS") is kept as is, so the result is
/// still a single-letter initial.
pub fn uppercase_initial(word: &str) -> String {
    word.chars()
        .map(|c| {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) => u,
                _ => c,
            }
        })
        .collect()
}

fn fix_pieces(word: &str, separator: char) -> String {
    let mut result = String::with_capacity(word.len());

    for (i, piece) in word.split(separator).enumerate() {
        if i > 0 {
            result.push(separator);
        }

        if is_mixed_case(piece) {
            result.push_str(piece);
        } else {
            capitalize_into(piece, &mut result);
        }
    }

    result
}

fn capitalize_into(piece: &str, result: &mut String) {
    let lowered = piece.to_lowercase();
    let mut chars = lowered.chars();

    if let Some(c) = chars.next() {
        let mapped = CaseMapping::titlecase(c);
        if matches!(mapped, CaseMapping::Empty) {
            // No titlecase mapping
            result.push(c);
        } else {
            result.extend(mapped);
        }
        result.push_str(chars.as_str());
    }
}
