use super::case::{fix_case, fix_particle_case, uppercase_initial};
use super::error::ParseError;
use super::initials::is_initial;
use super::suffix;
use super::surname::is_compound_particle;
use super::title;
use super::word;
use super::Name;
use compact_str::CompactString;
use smallvec::SmallVec;

#[derive(Debug, Default)]
struct ParseOp {
    given_names: SmallVec<[String; 3]>,
    middle_initials: SmallVec<[String; 3]>,
    surnames: SmallVec<[String; 3]>,
}

pub fn parse(name: &str) -> Result<Name, ParseError> {
    let words = word::tokenize(name);

    let (first, last) = match (words.first(), words.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => {
            tracing::debug!("no words left after tokenizing");
            return Err(ParseError::Empty);
        }
    };

    // Only the very first word can be a salutation and only the very last
    // can be a suffix
    let salutation = title::canonical_salutation(first);
    let suffix = suffix::canonical_suffix(last);

    let start = if salutation.is_some() { 1 } else { 0 };
    let end = if suffix.is_some() {
        words.len() - 1
    } else {
        words.len()
    };

    tracing::trace!(?salutation, ?suffix, start, end, "classified name boundaries");

    if end <= start {
        tracing::debug!(words = words.len(), "nothing left besides salutation and suffix");
        return Err(ParseError::Empty);
    }

    let mut op = ParseOp::default();
    op.run(&words[start..end]);

    Ok(Name {
        salutation: salutation.map(CompactString::from).unwrap_or_default(),
        first_name: CompactString::from(op.given_names.join(" ")),
        middle_name: CompactString::from(op.middle_initials.join(" ")),
        last_name: CompactString::from(op.surnames.join(" ")),
        suffix: suffix.map(CompactString::from).unwrap_or_default(),
    })
}

impl ParseOp {
    fn run(&mut self, words: &[&str]) {
        debug_assert!(!words.is_empty(), "Nothing to parse!");

        if words.len() == 1 {
            // Single names like "Adam" are given names
            self.given_names.push(fix_case(words[0]));
            return;
        }

        // The last word is always part of the surname, so it's never examined
        // as a possible given name or initial
        let last = words.len() - 1;
        let mut surname_index = last;
        let mut in_leading_initials = false;

        for (i, word) in words[..last].iter().enumerate() {
            if i > 0 && is_compound_particle(word) {
                surname_index = i;
                break;
            }

            if is_initial(word) {
                // Two or more initials up front ("J R Smith") are the given
                // name, rather than a given name and a middle initial
                if i == 0 && is_initial(words[1]) {
                    in_leading_initials = true;
                }

                if in_leading_initials {
                    self.given_names.push(uppercase_initial(word));
                } else {
                    self.middle_initials.push(uppercase_initial(word));
                }
            } else {
                in_leading_initials = false;
                self.given_names.push(fix_case(word));
            }
        }

        let last_surname_word = words.len() - surname_index - 1;
        self.surnames.extend(
            words[surname_index..]
                .iter()
                .enumerate()
                .map(|(i, word)| {
                    if i < last_surname_word && is_compound_particle(word) {
                        fix_particle_case(word)
                    } else {
                        fix_case(word)
                    }
                }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(name: &str) -> [String; 5] {
        let name = parse(name).unwrap();
        [
            name.salutation.to_string(),
            name.first_name.to_string(),
            name.middle_name.to_string(),
            name.last_name.to_string(),
            name.suffix.to_string(),
        ]
    }

    #[test]
    fn first_last() {
        assert_eq!(["", "John", "", "Doe", ""], parts("John Doe"));
    }

    #[test]
    fn everything() {
        assert_eq!(
            ["Mr.", "Anthony", "R", "Von Fange", "III"],
            parts("Mr Anthony R Von Fange III")
        );
    }

    #[test]
    fn two_given_names() {
        assert_eq!(["", "Sara Ann", "", "Fraser", ""], parts("Sara Ann Fraser"));
    }

    #[test]
    fn single_name() {
        assert_eq!(["", "Adam", "", "", ""], parts("Adam"));
        assert_eq!(["Dr.", "Adam", "", "", ""], parts("Dr. adam"));
        assert_eq!(["", "Adam", "", "", "Jr"], parts("ADAM JR."));
    }

    #[test]
    fn middle_initial() {
        assert_eq!(["", "Mark", "P", "Williams", ""], parts("Mark P Williams"));
        assert_eq!(["", "Mark", "P.", "Williams", ""], parts("mark p. williams"));
        assert_eq!(["", "Mark", "P Q", "Williams", ""], parts("Mark P Q Williams"));
    }

    #[test]
    fn leading_initials() {
        assert_eq!(["", "J R", "", "Smith", ""], parts("J R Smith"));
        assert_eq!(["", "J. R. K.", "", "Smith", ""], parts("j. r. k. Smith"));
        assert_eq!(["", "J R Bob", "Q", "Smith", ""], parts("J R Bob Q Smith"));
    }

    #[test]
    fn initial_without_single_char_uppercase() {
        assert_eq!(["", "Bob", "ß", "Smith", ""], parts("Bob ß Smith"));
        assert_eq!(["", "ß Q", "", "Smith", ""], parts("ß q Smith"));
    }

    #[test]
    fn lone_leading_initial() {
        assert_eq!(["", "Robert", "J", "Smith", ""], parts("J Robert Smith"));
        assert_eq!(["", "", "J", "Smith", ""], parts("J Smith"));
    }

    #[test]
    fn compound_surname() {
        assert_eq!(["", "Aaron", "", "bin Omar", ""], parts("Aaron bin Omar"));
        assert_eq!(["", "Aaron", "", "ibn Omar", ""], parts("Aaron ibn Omar"));
        assert_eq!(["", "Maria", "", "de la Cruz", ""], parts("MARIA DE LA CRUZ"));
        assert_eq!(["", "Anthony", "", "Von Fange", "III"], parts("Anthony Von Fange III"));
    }

    #[test]
    fn particle_first_is_given_name() {
        assert_eq!(["", "Van", "", "Morrison", ""], parts("Van Morrison"));
    }

    #[test]
    fn particle_last_is_capitalized() {
        assert_eq!(["", "John", "", "Van", ""], parts("john van"));
    }

    #[test]
    fn suffix_casing() {
        assert_eq!(["", "Justin", "", "White", "PhD"], parts("Justin White Phd"));
        assert_eq!(["", "Ken", "", "Griffey", "Jr"], parts("Ken Griffey JR"));
    }

    #[test]
    fn nickname() {
        assert_eq!(["", "Robert", "", "Smith", ""], parts("Robert (Bob) Smith"));
    }

    #[test]
    fn empty() {
        assert_eq!(Err(ParseError::Empty), parse(""));
        assert_eq!(Err(ParseError::Empty), parse("  \t"));
        assert_eq!(Err(ParseError::Empty), parse("(Bob)"));
    }

    #[test]
    fn only_salutation_or_suffix() {
        assert_eq!(Err(ParseError::Empty), parse("Jr"));
        assert_eq!(Err(ParseError::Empty), parse("Mr."));
        assert_eq!(Err(ParseError::Empty), parse("Dr. Jr."));
    }
}
