//! Generation profiles: the JSON-facing view of the table parameters.

use table::{TableSettings, Error, DEFAULT_SIZE, DEFAULT_FRACTION_BITS};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Profile {
	#[serde(rename="tableSize", default)]    pub table_size:    Option<u32>,
	#[serde(rename="fractionBits", default)] pub fraction_bits: Option<u32>
}

impl Profile {
	pub fn to_settings(&self) -> Result<TableSettings, Error> {
		let settings = TableSettings {
			size: self.table_size.unwrap_or(DEFAULT_SIZE),
			fraction_bits: self.fraction_bits.unwrap_or(DEFAULT_FRACTION_BITS)
		};

		settings.validate()?;

		Ok(settings)
	}
}

impl Default for Profile {
	fn default() -> Self {
		Profile {
			table_size: None,
			fraction_bits: None
		}
	}
}

#[cfg(test)]
mod test {
	use serde_json;
	use super::*;
	use table::{TableSettings, Error};

	#[test]
	fn test_full_profile() {
		let profile: Profile = serde_json::from_str(r#"{"tableSize": 720, "fractionBits": 4}"#).unwrap();

		assert_eq!(profile.to_settings().unwrap(), TableSettings { size: 720, fraction_bits: 4 });
	}

	#[test]
	fn test_empty_profile() {
		let profile: Profile = serde_json::from_str("{}").unwrap();

		assert_eq!(profile, Profile::default());
		assert_eq!(profile.to_settings().unwrap(), TableSettings::default());
	}

	#[test]
	fn test_invalid_profile() {
		let empty: Profile = serde_json::from_str(r#"{"tableSize": 0}"#).unwrap();
		let wide: Profile = serde_json::from_str(r#"{"fractionBits": 16}"#).unwrap();

		assert_eq!(empty.to_settings(), Err(Error::EmptyTable));
		assert_eq!(wide.to_settings(), Err(Error::FractionTooWide(16)));
	}
}
