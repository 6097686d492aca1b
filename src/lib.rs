#[macro_use]
extern crate nom;

extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate cgmath;

pub mod fixed;
pub mod table;
pub mod config;

#[cfg(test)]
mod test {
	use std::fs::File;
	use std::io::{BufRead, BufReader};

	pub fn read_entries(name: &str) -> Vec<String> {
		let file = File::open(format!("test_data/{}.txt", name)).unwrap();
		let mut entries = Vec::new();

		for line in BufReader::new(file).lines() {
			let line = line.unwrap();

			if !line.is_empty() {
				entries.push(line);
			}
		}

		entries
	}
}
