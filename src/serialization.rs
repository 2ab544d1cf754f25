use super::Name;
use compact_str::CompactString;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeStruct, Serializer};

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Name", 5)?;
        state.serialize_field("salutation", self.salutation())?;
        state.serialize_field("first_name", self.first_name())?;
        state.serialize_field("middle_name", self.middle_name())?;
        state.serialize_field("last_name", self.last_name())?;
        state.serialize_field("suffix", self.suffix())?;
        state.end()
    }
}

#[derive(serde::Deserialize)]
struct NameFields {
    #[serde(default)]
    salutation: CompactString,
    #[serde(default)]
    first_name: CompactString,
    #[serde(default)]
    middle_name: CompactString,
    #[serde(default)]
    last_name: CompactString,
    #[serde(default)]
    suffix: CompactString,
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Name, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = NameFields::deserialize(deserializer)?;

        if fields.first_name.is_empty() && fields.last_name.is_empty() {
            return Err(de::Error::custom("name needs a first_name or a last_name"));
        }

        let all_fields = [
            ("salutation", &fields.salutation),
            ("first_name", &fields.first_name),
            ("middle_name", &fields.middle_name),
            ("last_name", &fields.last_name),
            ("suffix", &fields.suffix),
        ];
        for (key, value) in all_fields.iter() {
            if !is_single_spaced(value) {
                return Err(de::Error::custom(format_args!(
                    "{} has stray whitespace: {:?}",
                    key, value
                )));
            }
        }

        Ok(Name {
            salutation: fields.salutation,
            first_name: fields.first_name,
            middle_name: fields.middle_name,
            last_name: fields.last_name,
            suffix: fields.suffix,
        })
    }
}

// Words separated by exactly one space, as the parser produces them
fn is_single_spaced(field: &str) -> bool {
    field.is_empty()
        || field
            .split(' ')
            .all(|word| !word.is_empty() && !word.contains(char::is_whitespace))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_every_field() {
        let name = Name::parse("Mr Anthony R Von Fange III").unwrap();
        assert_eq!(
            r#"{"salutation":"Mr.","first_name":"Anthony","middle_name":"R","last_name":"Von Fange","suffix":"III"}"#,
            serde_json::to_string(&name).unwrap()
        );
    }

    #[test]
    fn empty_fields_are_empty_strings() {
        let name = Name::parse("Adam").unwrap();
        let json = serde_json::to_value(&name).unwrap();
        assert_eq!("Adam", json["first_name"]);
        assert_eq!("", json["last_name"]);
        assert_eq!("", json["salutation"]);
    }

    #[test]
    fn rejects_name_without_first_or_last() {
        assert!(serde_json::from_str::<Name>("{}").is_err());
        assert!(serde_json::from_str::<Name>(r#"{"salutation":"Mr.","suffix":"Jr"}"#).is_err());
    }

    #[test]
    fn rejects_stray_whitespace() {
        assert!(serde_json::from_str::<Name>(r#"{"first_name":" x "}"#).is_err());
        assert!(serde_json::from_str::<Name>(r#"{"first_name":"Adam","last_name":"a  b"}"#).is_err());
        assert!(serde_json::from_str::<Name>(r#"{"first_name":"Adam\tJ"}"#).is_err());
        assert!(serde_json::from_str::<Name>(r#"{"first_name":"Adam","suffix":"Jr "}"#).is_err());
    }

    #[test]
    fn accepts_parser_output() {
        let name = Name::parse("Mr Anthony R Von Fange III").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(name, serde_json::from_str::<Name>(&json).unwrap());
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let name: Name = serde_json::from_str(r#"{"first_name":"Adam"}"#).unwrap();
        assert_eq!(Name::parse("Adam").unwrap(), name);
    }
}
