use std::fmt;
use std::path::PathBuf;

use clap::Parser;
use json_ld_vocab::{
	syntax::AsJson, warning, Entity, FunctionalArrayPolicy, Options, Registry, Value,
	DEFAULT_MAX_DEPTH, TYPE_KEY,
};

#[derive(Parser)]
#[clap(name = "json-ld-vocab", author, version, about, long_about = None)]
struct Args {
	/// Sets the level of verbosity.
	#[clap(short, long = "verbose", parse(from_occurrences))]
	verbosity: usize,

	#[clap(subcommand)]
	command: Command,
}

#[derive(clap::Subcommand)]
pub enum Command {
	/// Decode the given ActivityStreams document and print it back.
	Normalize {
		/// File path of the document.
		///
		/// If none, the standard input is used.
		path: Option<PathBuf>,

		/// Print the output on a single line.
		#[clap(short, long)]
		compact: bool,

		#[clap(flatten)]
		decoding: Decoding,
	},

	/// Describe the decoded values of the given ActivityStreams document.
	Inspect {
		/// File path of the document.
		///
		/// If none, the standard input is used.
		path: Option<PathBuf>,

		#[clap(flatten)]
		decoding: Decoding,
	},
}

#[derive(clap::Args)]
pub struct Decoding {
	/// What to do with arrays given for functional properties.
	#[clap(long, arg_enum, default_value = "preserve")]
	functional_arrays: ArrayPolicy,

	/// Maximum nesting depth of typed objects.
	///
	/// Defaults to 128.
	#[clap(long)]
	max_depth: Option<usize>,

	/// Do not limit the nesting depth of typed objects.
	#[clap(long, conflicts_with = "max-depth")]
	no_max_depth: bool,

	/// Maximum number of values of a property.
	#[clap(long)]
	max_width: Option<usize>,

	/// Print decoding warnings.
	#[clap(short, long)]
	warnings: bool,
}

impl Decoding {
	fn options(&self) -> Options {
		Options::default()
			.with_functional_array(self.functional_arrays.into())
			.with_max_depth(if self.no_max_depth {
				None
			} else {
				Some(self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH))
			})
			.with_max_width(self.max_width)
	}
}

#[derive(Clone, Copy, clap::ArgEnum)]
pub enum ArrayPolicy {
	Preserve,
	TakeFirst,
	Reject,
}

impl From<ArrayPolicy> for FunctionalArrayPolicy {
	fn from(value: ArrayPolicy) -> Self {
		match value {
			ArrayPolicy::Preserve => Self::Preserve,
			ArrayPolicy::TakeFirst => Self::TakeFirst,
			ArrayPolicy::Reject => Self::Reject,
		}
	}
}

fn main() {
	// Parse options.
	let args = Args::parse();

	// Init logger.
	if let Err(e) = stderrlog::new().verbosity(args.verbosity).init() {
		fail(e)
	}

	let registry = json_ld_vocab::streams::registry().unwrap_or_else(|e| fail(e));

	match args.command {
		Command::Normalize {
			path,
			compact,
			decoding,
		} => {
			let entity = read_entity(registry, path, &decoding);
			let json = entity.to_json();

			let output = if compact {
				serde_json::to_string(&json)
			} else {
				serde_json::to_string_pretty(&json)
			};

			match output {
				Ok(output) => println!("{output}"),
				Err(e) => fail(e),
			}
		}
		Command::Inspect { path, decoding } => {
			let entity = read_entity(registry, path, &decoding);
			inspect(&entity, 0)
		}
	}
}

fn fail(e: impl fmt::Display) -> ! {
	eprintln!("error: {e}");
	std::process::exit(1);
}

fn read_entity(registry: &Registry, path: Option<PathBuf>, decoding: &Decoding) -> Entity {
	let content = match path {
		Some(path) => std::fs::read_to_string(path),
		None => std::io::read_to_string(std::io::stdin()),
	}
	.unwrap_or_else(|e| fail(e));

	let json: serde_json::Value = serde_json::from_str(&content).unwrap_or_else(|e| fail(e));

	let options = decoding.options();
	let result = if decoding.warnings {
		registry.deserialize_with(json, options, &mut warning::Print)
	} else {
		registry.deserialize_with(json, options, &mut ())
	};

	match result {
		Ok(entity) => {
			log::info!("decoded `{}` entity", entity.type_name());
			entity
		}
		Err(e) => fail(e),
	}
}

fn inspect(entity: &Entity, depth: usize) {
	let indent = "  ".repeat(depth);

	println!("{indent}type: {}", entity.types().join(", "));
	let capabilities: Vec<_> = entity
		.entity_type()
		.capabilities()
		.map(|c| c.as_str())
		.collect();
	println!("{indent}capabilities: {}", capabilities.join(", "));

	for (property, container) in entity.properties() {
		if property.name() == TYPE_KEY {
			continue;
		}

		if !container.is_empty() {
			println!("{indent}{}:", property.name());
			for value in container.iter() {
				match value {
					Value::Entity(capability, e) => {
						println!("{indent}  - {capability} entity");
						inspect(e, depth + 2)
					}
					Value::Iri(iri) => println!("{indent}  - IRI {iri}"),
					Value::Primitive(p) => println!("{indent}  - {} {}", p.kind(), p.as_json()),
					Value::Unknown(json) => println!("{indent}  - unknown {json}"),
				}
			}
		}

		if let (Some(key), Some(map)) = (property.map_key(), entity.language_map(property.name())) {
			if map.is_present() {
				let languages: Vec<_> = map.languages().collect();
				println!("{indent}{key}: [{}]", languages.join(", "));
			}
		}
	}

	if !entity.unknown().is_empty() {
		let keys: Vec<_> = entity.unknown().keys().collect();
		println!("{indent}unknown: {}", keys.join(", "));
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn decoding(args: &[&str]) -> Options {
		let args = Args::parse_from(["json-ld-vocab", "inspect"].iter().chain(args).copied());
		match args.command {
			Command::Inspect { decoding, .. } => decoding.options(),
			Command::Normalize { .. } => unreachable!(),
		}
	}

	#[test]
	fn max_depth_flags() {
		assert_eq!(decoding(&[]).max_depth, Some(DEFAULT_MAX_DEPTH));
		assert_eq!(decoding(&["--max-depth", "4"]).max_depth, Some(4));
		assert_eq!(decoding(&["--no-max-depth"]).max_depth, None);
		assert!(Args::try_parse_from([
			"json-ld-vocab",
			"inspect",
			"--max-depth",
			"4",
			"--no-max-depth"
		])
		.is_err())
	}
}
