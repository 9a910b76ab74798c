// oovsub-substitute: Map out-of-vocabulary words to vocabulary words.
//
// Reads words from stdin (one per line) and prints each word with its
// substitute. Vocabulary words map to themselves.
//
// Usage:
//   oovsub-substitute [-v VOCAB] [OPTIONS] [WORD...]
//
// Options:
//   -v, --vocab PATH        Vocabulary file (word2vec text format)
//   -s, --script NAME       Combining-mark rules: none, thai, unicode
//   -m, --min-expand N      Shortest match widened to a whole word (default: 2)
//   -u, --unknown TOKEN     Token printed when nothing matches (default: <unk>)
//       --detail            Also print the match kind and length
//   -h, --help              Print help

use std::io::{self, BufRead, Write};

use oovsub_cli::ValueFlag;
use oovsub_lookup::{OovSubstitutor, SubstituteOptions};

const MIN_EXPAND_FLAG: ValueFlag = ValueFlag {
    long: "--min-expand",
    short: "-m",
};

const UNKNOWN_FLAG: ValueFlag = ValueFlag {
    long: "--unknown",
    short: "-u",
};

fn main() {
    oovsub_cli::init_logging();

    let raw: Vec<String> = std::env::args().skip(1).collect();
    let args = oovsub_cli::parse_args(&raw, &[MIN_EXPAND_FLAG, UNKNOWN_FLAG])
        .unwrap_or_else(|e| oovsub_cli::fatal(&e));

    if args.wants_help() {
        println!("oovsub-substitute: Map out-of-vocabulary words to vocabulary words.");
        println!();
        println!("Usage: oovsub-substitute [-v VOCAB] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, substitutes each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -v, --vocab PATH      Vocabulary file (word2vec text format)");
        println!("  -s, --script NAME     Combining-mark rules: none, thai, unicode");
        println!("  -m, --min-expand N    Shortest match widened to a whole word (default: 2)");
        println!("  -u, --unknown TOKEN   Token printed when nothing matches (default: <unk>)");
        println!("      --detail          Also print the match kind and length");
        println!("  -h, --help            Print this help");
        return;
    }

    let mut options = SubstituteOptions::default();
    if let Some(n) = args.value(MIN_EXPAND_FLAG.long) {
        options.min_expand_len = n
            .parse()
            .unwrap_or_else(|_| oovsub_cli::fatal("invalid number for --min-expand"));
    }
    if let Some(token) = args.value(UNKNOWN_FLAG.long) {
        options.unknown_token = token.to_string();
    }
    let detail = args.has_switch(&["--detail"]);

    let vocabulary = oovsub_cli::load_vocabulary(args.vocab_path())
        .unwrap_or_else(|e| oovsub_cli::fatal(&e));
    let substitutor = oovsub_cli::substitutor_for(&vocabulary, args.script())
        .unwrap_or_else(|e| oovsub_cli::fatal(&e))
        .with_options(options);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let substitute_word = |word: &str, sub: &OovSubstitutor<'_>, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        let result = sub.substitute_detailed(word);
        if detail {
            let _ = writeln!(
                out,
                "{word}\t{}\t{:?}\t{}",
                result.word,
                result.kind,
                result.span.len()
            );
        } else {
            let _ = writeln!(out, "{word}\t{}", result.word);
        }
    };

    if args.words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            substitute_word(word, &substitutor, &mut out);
        }
    } else {
        for word in &args.words {
            substitute_word(word.as_str(), &substitutor, &mut out);
        }
    }

    let _ = out.flush();
}
