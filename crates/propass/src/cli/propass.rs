use clap::{CommandFactory, Parser};
use propass_password::{
    seeded_rng, GenerationOptions, Generator, PhonemeLibrary,
};
use std::{io::Write, path::PathBuf};

use crate::{CommandTree, Result};

const EXAMPLES: &str = "\
Examples:
  propass                    Generates 3 password options with the defaults
  propass -l 18              Generates 3 password options that are 18 characters long
  propass -p 10 -s 2 -n 3 -c Generates 10 password options with 2 symbols, 3 numbers, and capitals
  propass -p 5 -mc           Generates 5 password options with capitals and the numbers and symbols mixed in";

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None, after_help = EXAMPLES)]
pub struct Propass {
    /// How many password options.
    #[clap(short, long, default_value_t = GenerationOptions::DEFAULT_PASSWORDS)]
    pub passwords: usize,

    /// Total characters in password.
    #[clap(short, long, default_value_t = GenerationOptions::DEFAULT_LENGTH)]
    pub length: usize,

    /// Number characters in password.
    #[clap(short, long, default_value_t = GenerationOptions::DEFAULT_NUMBERS)]
    pub numbers: usize,

    /// Symbol characters in password.
    #[clap(short, long, default_value_t = GenerationOptions::DEFAULT_SYMBOLS)]
    pub symbols: usize,

    /// Include capitals.
    #[clap(short, long)]
    pub caps: bool,

    /// Mix the symbols and numbers randomly into the password.
    #[clap(short, long)]
    pub mix: bool,

    /// Ignore the weighting for letter selection.
    #[clap(short = 'w', long)]
    pub unweighted: bool,

    /// Seed the random generator for reproducible output.
    #[clap(long, env = "PROPASS_SEED")]
    pub seed: Option<u64>,

    /// Phoneme library file used instead of the built-in library.
    #[clap(long, env = "PROPASS_PHONEMES", hide_env_values = true)]
    pub phonemes: Option<PathBuf>,
}

impl Propass {
    /// Validated generation options.
    pub fn options(&self) -> Result<GenerationOptions> {
        Ok(GenerationOptions::new(
            self.length,
            self.numbers,
            self.symbols,
            self.passwords,
        )?
        .caps(self.caps)
        .mix(self.mix)
        .unweighted(self.unweighted))
    }

    /// Phoneme library to generate from.
    pub fn library(&self) -> Result<PhonemeLibrary> {
        Ok(match &self.phonemes {
            Some(path) => PhonemeLibrary::from_path(path)?,
            None => PhonemeLibrary::builtin()?,
        })
    }
}

/// Generate passwords and write them to a writer.
pub fn execute(args: &Propass, writer: &mut impl Write) -> Result<()> {
    // Options are checked before the library is loaded
    let options = args.options()?;
    let library = args.library()?;
    tracing::debug!(
        seed = ?args.seed,
        phonemes = ?args.phonemes,
        "propass::execute",
    );

    let mut rng = seeded_rng(args.seed);
    let output = Generator::new(&library, options).generate(&mut rng);
    writer.write_all(output.as_bytes())?;
    writer.flush()?;
    Ok(())
}

pub fn run() -> Result<()> {
    // Support JSON output of command tree
    if std::env::var("PROPASS_CLI_JSON").ok().is_some() {
        let cmd = Propass::command();
        let tree: CommandTree = (&cmd).into();
        serde_json::to_writer_pretty(std::io::stdout(), &tree)?;
        println!();
        return Ok(());
    }

    let args = Propass::parse();
    execute(&args, &mut std::io::stdout().lock())
}
