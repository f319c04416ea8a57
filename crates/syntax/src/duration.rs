use crate::{AsJson, InvalidPrimitive, JsonKind, PrimitiveKind, TryFromJson};
use std::{fmt, str::FromStr};

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

/// Months are counted as 30 days.
const MONTH: u64 = 30 * DAY;

/// Years are counted as 365 days.
const YEAR: u64 = 365 * DAY;

const DATE_UNITS: [(u8, u64); 3] = [(b'Y', YEAR), (b'M', MONTH), (b'D', DAY)];
const TIME_UNITS: [(u8, u64); 3] = [(b'H', HOUR), (b'M', MINUTE), (b'S', 1)];

/// Invalid `xsd:duration` lexical value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid duration `{0}`")]
pub struct InvalidDuration(pub String);

/// Signed `xsd:duration` value.
///
/// The ISO 8601 grammar is `-?PnYnMnDTnHnMnS`. Calendar units have no fixed
/// length, so years are fixed to 365 days and months to 30 days: the
/// value is stored as an exact signed amount of time, and serialized back
/// in canonical form with the largest units first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
pub struct Duration {
	negative: bool,
	magnitude: std::time::Duration,
}

impl Duration {
	pub fn new(negative: bool, magnitude: std::time::Duration) -> Self {
		Self {
			negative: negative && !magnitude.is_zero(),
			magnitude,
		}
	}

	pub fn is_negative(&self) -> bool {
		self.negative
	}

	/// Absolute length of this duration.
	pub fn magnitude(&self) -> std::time::Duration {
		self.magnitude
	}

	pub fn parse(s: &str) -> Result<Self, InvalidDuration> {
		parse(s).ok_or_else(|| InvalidDuration(s.to_owned()))
	}
}

fn parse(s: &str) -> Option<Duration> {
	let (negative, rest) = match s.strip_prefix('-') {
		Some(rest) => (true, rest),
		None => (false, s),
	};

	let rest = rest.strip_prefix('P')?;
	let (date, time) = match rest.split_once('T') {
		Some((date, time)) => {
			if time.is_empty() {
				return None;
			}

			(date, Some(time))
		}
		None => (rest, None),
	};

	let mut acc = Accumulator::default();
	acc.read(date, &DATE_UNITS)?;
	if let Some(time) = time {
		acc.read(time, &TIME_UNITS)?;
	}

	if acc.components == 0 {
		return None;
	}

	Some(Duration::new(
		negative,
		std::time::Duration::new(acc.seconds, acc.nanos),
	))
}

#[derive(Default)]
struct Accumulator {
	seconds: u64,
	nanos: u32,
	components: usize,
}

impl Accumulator {
	/// Reads a sequence of `<number><designator>` components.
	///
	/// Designators must appear in the order of `units`, each at most once.
	/// Only seconds may carry a fractional part.
	fn read(&mut self, mut s: &str, units: &[(u8, u64)]) -> Option<()> {
		let mut next = 0;

		while !s.is_empty() {
			let end = s.find(|c: char| !c.is_ascii_digit() && c != '.')?;
			let (number, tail) = s.split_at(end);
			let designator = tail.as_bytes()[0];
			let position = units[next..].iter().position(|(d, _)| *d == designator)? + next;
			next = position + 1;

			let (integer, fraction) = match number.split_once('.') {
				Some((integer, fraction)) => (integer, Some(fraction)),
				None => (number, None),
			};

			if integer.is_empty() {
				return None;
			}

			let n: u64 = integer.parse().ok()?;
			self.seconds = n
				.checked_mul(units[position].1)
				.and_then(|v| self.seconds.checked_add(v))?;

			if let Some(fraction) = fraction {
				if designator != b'S'
					|| fraction.is_empty()
					|| !fraction.bytes().all(|b| b.is_ascii_digit())
				{
					return None;
				}

				let digits: String = fraction.chars().chain(std::iter::repeat('0')).take(9).collect();
				self.nanos = digits.parse().ok()?;
			}

			self.components += 1;
			s = &tail[1..];
		}

		Some(())
	}
}

impl From<std::time::Duration> for Duration {
	fn from(value: std::time::Duration) -> Self {
		Self::new(false, value)
	}
}

impl FromStr for Duration {
	type Err = InvalidDuration;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl fmt::Display for Duration {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let mut seconds = self.magnitude.as_secs();
		let nanos = self.magnitude.subsec_nanos();

		if seconds == 0 && nanos == 0 {
			return f.write_str("PT0S");
		}

		if self.negative {
			f.write_str("-")?;
		}

		f.write_str("P")?;

		for (designator, unit) in DATE_UNITS {
			let n = seconds / unit;
			seconds %= unit;
			if n > 0 {
				write!(f, "{n}{}", designator as char)?;
			}
		}

		if seconds > 0 || nanos > 0 {
			f.write_str("T")?;

			for (designator, unit) in &TIME_UNITS[..2] {
				let n = seconds / unit;
				seconds %= unit;
				if n > 0 {
					write!(f, "{n}{}", *designator as char)?;
				}
			}

			if seconds > 0 || nanos > 0 {
				write!(f, "{seconds}")?;
				if nanos > 0 {
					let fraction = format!("{nanos:09}");
					write!(f, ".{}", fraction.trim_end_matches('0'))?;
				}
				f.write_str("S")?;
			}
		}

		Ok(())
	}
}

#[cfg(feature = "serde")]
impl serde::Serialize for Duration {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.collect_str(self)
	}
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Duration {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let s = <String as serde::Deserialize>::deserialize(deserializer)?;
		s.parse().map_err(serde::de::Error::custom)
	}
}

impl TryFromJson for Duration {
	type Error = InvalidPrimitive;

	fn try_from_json(value: &serde_json::Value) -> Result<Self, Self::Error> {
		match value {
			serde_json::Value::String(s) => Self::parse(s).map_err(|InvalidDuration(s)| {
				InvalidPrimitive::InvalidLexicalValue(PrimitiveKind::Duration, s)
			}),
			unexpected => Err(InvalidPrimitive::Unexpected(
				JsonKind::of(unexpected),
				PrimitiveKind::Duration,
			)),
		}
	}
}

impl AsJson for Duration {
	fn as_json(&self) -> serde_json::Value {
		serde_json::Value::String(self.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn canonical(s: &str) -> String {
		Duration::parse(s).unwrap().to_string()
	}

	#[test]
	fn canonical_forms_are_preserved() {
		for s in ["PT2H", "P1D", "PT5M", "P3Y6M4DT12H30M5S", "-PT30S", "PT1.5S"] {
			assert_eq!(canonical(s), s)
		}
	}

	#[test]
	fn normalization() {
		assert_eq!(canonical("PT90M"), "PT1H30M");
		assert_eq!(canonical("P13M"), "P1Y25D");
		assert_eq!(canonical("-P0D"), "PT0S");
		assert_eq!(canonical("PT0.250S"), "PT0.25S")
	}

	#[test]
	fn value() {
		let d = Duration::parse("-P1DT1S").unwrap();
		assert!(d.is_negative());
		assert_eq!(d.magnitude(), std::time::Duration::from_secs(86401))
	}

	#[test]
	fn malformed() {
		for s in ["", "P", "PT", "1D", "P1H", "PT1D", "P1D1Y", "P1.5D", "P1M1M", "PTS", "P-1D"] {
			assert!(Duration::parse(s).is_err(), "`{s}` should be rejected")
		}
	}
}
