extern crate triggen;

use std::io::{self, Write, BufWriter};

use triggen::config::Profile;
use triggen::table::TrigTable;

fn main() {
	let profile = Profile::default();

	let tables = profile.to_settings().and_then(|settings| {
		let sine = TrigTable::generate(f64::sin, &settings)?;
		let cosine = TrigTable::generate(f64::cos, &settings)?;

		Ok((sine, cosine))
	});

	let (sine, cosine) = match tables {
		Ok(tables) => tables,
		Err(error) => {
			eprintln!("invalid generation profile: {:?}", error);
			return;
		}
	};

	let stdout = io::stdout();
	let mut out = BufWriter::new(stdout.lock());

	sine.write("sine table", &mut out).unwrap();
	writeln!(out).unwrap();
	cosine.write("cosine table", &mut out).unwrap();
}
