//! Generates the fixed point sine/cosine lookup tables consumed by the game's
//! rendering and physics code, and prints them as formatted literals.

use std::io::{self, Write};
use cgmath::{Deg, Rad};
use fixed::format_raw;

pub const DEFAULT_SIZE: u32 = 360;
pub const DEFAULT_FRACTION_BITS: u32 = 8;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
	EmptyTable,
	FractionTooWide(u32)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TableSettings {
	/// Table size: one entry per degree of the angle index.
	pub size: u32,
	/// Fractional bits of each entry. At most 15, leaving a sign bit in the 16-bit slot.
	pub fraction_bits: u32
}

impl TableSettings {
	pub fn validate(&self) -> Result<(), Error> {
		if self.size == 0 {
			return Err(Error::EmptyTable);
		}

		if self.fraction_bits > 15 {
			return Err(Error::FractionTooWide(self.fraction_bits));
		}

		Ok(())
	}
}

impl Default for TableSettings {
	fn default() -> Self {
		TableSettings {
			size: DEFAULT_SIZE,
			fraction_bits: DEFAULT_FRACTION_BITS
		}
	}
}

/// An ordered table of fixed point values, one per degree index. Entries are stored in
/// their 16-bit two's complement image and never change after generation.
#[derive(Debug, PartialEq, Eq)]
pub struct TrigTable {
	entries: Vec<u16>,
	fraction_bits: u32
}

impl TrigTable {
	/// Evaluates `f` at every whole degree in [0, size), scaling each result by
	/// 2^fraction_bits and rounding half away from zero. Scaled values outside the
	/// signed 16-bit range reduce modulo 2^16; for trig inputs this only comes into
	/// play at 15 fractional bits, where ±1.0 wraps to the same stored image.
	pub fn generate<F>(f: F, settings: &TableSettings) -> Result<Self, Error> where F: Fn(f64) -> f64 {
		settings.validate()?;

		let scale = (1i32 << settings.fraction_bits) as f64;
		let mut entries = Vec::with_capacity(settings.size as usize);

		for index in 0..settings.size {
			let angle = Rad::from(Deg(index as f64));
			let scaled = (f(angle.0) * scale).round();

			entries.push(((scaled as i64) & 0xFFFF) as u16);
		}

		Ok(TrigTable {
			entries,
			fraction_bits: settings.fraction_bits
		})
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Stored 16-bit image of the entry at this angle index.
	pub fn entry(&self, index: usize) -> u16 {
		self.entries[index]
	}

	pub fn entries(&self) -> &[u16] {
		&self.entries
	}

	pub fn format_entry(&self, index: usize) -> String {
		format_raw(self.entries[index], self.fraction_bits)
	}

	/// Writes the labeled table, one comma-terminated literal per line, in index order.
	pub fn write<W>(&self, label: &str, out: &mut W) -> io::Result<()> where W: Write {
		writeln!(out, "{}:", label)?;

		for &entry in &self.entries {
			writeln!(out, "{},", format_raw(entry, self.fraction_bits))?;
		}

		Ok(())
	}
}
