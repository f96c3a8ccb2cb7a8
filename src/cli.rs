//! Wordseed CLI - interactive shell for the mnemonic codec

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use wordseed::{
    derive_seed, detect_language, is_mnemonic_valid, normalize_mnemonic, DetectOptions,
    GenerateOptions, Language, Mnemonic,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    println!("╔════════════════════════════════════════════╗");
    println!("║       Wordseed CLI v{:<23}║", wordseed::VERSION);
    println!("║   Multilingual mnemonic codec              ║");
    println!("╚════════════════════════════════════════════╝");
    println!();
    print_help();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("wordseed> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = parts.split_first() else {
            continue;
        };

        if matches!(command, "quit" | "exit" | "q") {
            println!("Goodbye!");
            break;
        }

        if let Err(e) = run(command, args, &line) {
            println!("Error: {e:#}");
        }
        println!();
    }
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  generate [bits] [lang]     - Generate a mnemonic (default 128 bits, english)");
    println!("  encode <hex> [lang]        - Encode 16-32 bytes of entropy (BIP39)");
    println!("  decode <lang> <words...>   - Decode a BIP39 mnemonic to entropy");
    println!("  encode-any <hex> [lang]    - Encode 1-1024 bytes (non-standard)");
    println!("  decode-any <lang> <words..>- Decode a non-standard mnemonic");
    println!("  detect <words...>          - Detect the mnemonic language");
    println!("  validate <words...>        - Check a BIP39 mnemonic");
    println!("  normalize <words...>       - Collapse irregular separators");
    println!("  seed <words...> [--passphrase p]");
    println!("                             - Derive a 64-byte seed (words are normalized first)");
    println!("  help                       - Show this help");
    println!("  quit                       - Exit");
    println!();
}

fn run(command: &str, args: &[&str], line: &str) -> Result<()> {
    match command {
        "generate" => {
            let bits = match args.first() {
                Some(bits) => bits.parse().context("bits must be a number")?,
                None => GenerateOptions::default().entropy_bits,
            };
            let codec = codec_for(args.get(1).copied())?;
            let phrase = codec.generate(&GenerateOptions::default().with_entropy_bits(bits))?;
            println!("  Language: {}", codec.language());
            print_words(&phrase);
            println!("  Copy-paste format:");
            println!("  {phrase}");
        }

        "encode" | "encode-any" => {
            let Some(hex_entropy) = args.first() else {
                bail!("usage: {command} <hex> [lang]");
            };
            let entropy = hex::decode(hex_entropy).context("entropy must be hex")?;
            let codec = codec_for(args.get(1).copied())?;
            let phrase = if command == "encode" {
                codec.encode(&entropy)?
            } else {
                codec.encode_arbitrary(&entropy)?
            };
            print_words(&phrase);
            println!("  {phrase}");
        }

        "decode" | "decode-any" => {
            let Some(lang) = args.first() else {
                bail!("usage: {command} <lang> <words...>");
            };
            let codec = Mnemonic::new(lang.parse()?);
            let phrase = rest_after(line, 2);
            let entropy = if command == "decode" {
                codec.decode(phrase)?
            } else {
                codec.decode_arbitrary(phrase)?
            };
            println!("  Entropy ({} bytes): {}", entropy.len(), hex::encode(&entropy));
        }

        "detect" => {
            let detection = detect_language(rest_after(line, 1), &DetectOptions::default());
            println!("{}", serde_json::to_string_pretty(&detection)?);
        }

        "validate" => {
            let valid = is_mnemonic_valid(rest_after(line, 1));
            println!("  {}", if valid { "valid" } else { "INVALID" });
        }

        "normalize" => {
            println!("  {}", normalize_mnemonic(rest_after(line, 1)));
        }

        "seed" => {
            let (phrase, passphrase) = seed_args(rest_after(line, 1));
            let seed = derive_seed(&normalize_mnemonic(phrase), passphrase);
            println!("  Seed: {}", seed.to_hex());
        }

        "help" => print_help(),

        _ => println!("Unknown command. Type 'help' for available commands."),
    }
    Ok(())
}

fn codec_for(lang: Option<&str>) -> Result<Mnemonic> {
    let language = match lang {
        Some(name) => name.parse()?,
        None => Language::default(),
    };
    Ok(Mnemonic::new(language))
}

/// Raw text after the first `skip` whitespace-separated tokens
fn rest_after(line: &str, skip: usize) -> &str {
    let mut rest = line.trim_start();
    for _ in 0..skip {
        rest = rest
            .find(char::is_whitespace)
            .map_or("", |end| rest[end..].trim_start());
    }
    rest
}

/// Split `<words...> [--passphrase p]` into phrase and passphrase
fn seed_args(rest: &str) -> (&str, &str) {
    match rest.split_once("--passphrase") {
        Some((phrase, passphrase)) => (
            phrase.trim_end(),
            passphrase.strip_prefix(' ').unwrap_or(passphrase),
        ),
        None => (rest, ""),
    }
}

fn print_words(phrase: &str) {
    let (words, _) = wordseed::split_mnemonic(phrase);
    let rows = words.len().div_ceil(4);
    for row in 0..rows {
        print!("    ");
        for col in 0..4 {
            let idx = col * rows + row;
            if let Some(word) = words.get(idx) {
                print!("{:3}. {:<12} ", idx + 1, word);
            }
        }
        println!();
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_args() {
        assert_eq!(seed_args("abandon about"), ("abandon about", ""));
        assert_eq!(
            seed_args("abandon about --passphrase TREZOR"),
            ("abandon about", "TREZOR")
        );
        assert_eq!(
            seed_args("abandon about --passphrase two words "),
            ("abandon about", "two words ")
        );
        assert_eq!(seed_args("abandon about --passphrase"), ("abandon about", ""));
    }

    #[test]
    fn test_rest_after() {
        assert_eq!(rest_after("decode english  abandon about", 2), "abandon about");
        assert_eq!(rest_after("detect", 1), "");
    }
}
